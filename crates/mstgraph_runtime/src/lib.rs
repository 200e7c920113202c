//! Dataset loading, region catalog, REPL, and CLI for mstgraph.
//!
//! This crate provides:
//! - [`loader`] - Reading datasets from JSON or `MessagePack` files
//! - [`Catalog`] - One published snapshot per region
//! - [`Session`] - Catalog, current region, and engine for one run
//! - [`Command`] - The REPL and batch command language
//! - [`Repl`] - Interactive read-eval-print loop

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod command;
pub mod editor;
pub mod loader;
pub mod repl;
pub mod session;

pub use catalog::Catalog;
pub use command::{Command, Outcome};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use loader::{DatasetFormat, load_snapshot, read_dataset};
pub use repl::Repl;
pub use session::Session;
