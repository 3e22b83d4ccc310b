//! # eventing-application
//!
//! The application registry as seen by event-type normalization.
//!
//! ## Design Principles
//!
//! - The registry is a read-only lookup capability: "is there an application
//!   with exactly this name, and what are its labels?"
//! - The reserved `application-type` label is surfaced as an explicit option
//!   rather than a raw map lookup
//! - Storage, caching and watch mechanics stay behind the trait
//!
//! ## Clean Names
//!
//! Application names and types are reduced to ASCII letters and digits before
//! they appear in an event type:
//! - `te--s__t!!a@@p##p%%` becomes `testapp`
//! - `t..e--s__t!!a@@p##p%%t^^y&&p**e` becomes `testapptype`

mod error;
mod registry;
mod types;

pub use error::RegistryError;
pub use registry::{ApplicationRegistry, InMemoryRegistry};
pub use types::*;
