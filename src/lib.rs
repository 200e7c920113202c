//! mstgraph - Relation index and expansion engine for game master data
//!
//! This crate re-exports all layers of the mstgraph system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: mstgraph_runtime    — Dataset loading, region catalog, REPL, CLI
//! Layer 3: mstgraph_engine     — Forward/reverse expansion, formatters
//! Layer 2: mstgraph_storage    — Entity store, relation index, snapshots
//! Layer 1: mstgraph_datavals   — DataVals tokenizer, schemas, decoder
//! Layer 0: mstgraph_foundation — Core types (EntityRef, Region, Error)
//! ```

pub use mstgraph_datavals as datavals;
pub use mstgraph_engine as engine;
pub use mstgraph_foundation as foundation;
pub use mstgraph_runtime as runtime;
pub use mstgraph_storage as storage;
