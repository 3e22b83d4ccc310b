//! Library surface of `eventctl`, shared by the binary and its tests.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
