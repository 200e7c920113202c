//! Cross-layer integration tests for mstgraph
//!
//! Tests that verify correct interaction between the loader, snapshots,
//! the relation index, and the expansion engine.

mod consistency;
mod runtime;

use std::path::Path;

use mstgraph_foundation::Region;
use mstgraph_runtime::load_snapshot;
use mstgraph_storage::Snapshot;

/// Path of the sample dataset fixture.
pub(crate) const SAMPLE_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample_dataset.json");

/// The sample dataset, loaded from disk into a JP snapshot.
pub(crate) fn sample() -> Snapshot {
    load_snapshot(Path::new(SAMPLE_PATH), Region::JP).unwrap()
}
