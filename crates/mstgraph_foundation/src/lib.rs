//! Entity kinds, regions, and error types for mstgraph.
//!
//! This crate provides:
//! - [`EntityKind`] / [`EntityRef`] - The closed set of record kinds and kind-scoped IDs
//! - [`Region`] - Game regions, one dataset snapshot each
//! - [`Error`] - Rich error types with a failure [`ErrorCategory`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod kind;
pub mod region;

pub use error::{DecodeFailure, Error, ErrorCategory, ErrorContext, ErrorKind, Result};
pub use kind::{EntityKind, EntityRef, RecordId};
pub use region::Region;
