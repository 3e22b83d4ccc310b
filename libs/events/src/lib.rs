//! # eventing-events
//!
//! Event-type normalization for the eventing platform.
//!
//! ## Canonical Event Types
//!
//! Producers publish event types shaped like
//! `{prefix}.{application}.{segment}...{segment}.{version}`. The [`Cleaner`]
//! rewrites them to a bounded canonical form:
//!
//! - `{prefix}` must equal the configured prefix exactly (it may be empty)
//! - `{application}` becomes the registered application's clean type or name,
//!   or the cleaned raw segment when the application is unknown
//! - at least two middle segments are required; more than two are folded so
//!   that the last one stays separate
//!
//! Example with prefix `prefix` and `testapp` registered with type
//! `testapptype`:
//!
//! ```text
//! prefix.testapp.Segment1.Segment2.Segment3.Segment4.Segment5.v1
//! prefix.testapptype.Segment1Segment2Segment3Segment4.Segment5.v1
//! ```

mod cleaner;
mod error;
mod segments;

pub use cleaner::{Cleaner, ParsedEventType};
pub use error::CleanError;
pub use segments::{compress_segments, MIN_MIDDLE_SEGMENTS, SEPARATOR};
