//! Integration tests for Layer 2: Storage
//!
//! Tests for snapshot building, the relation index, consistency warnings,
//! and snapshot publication, against the sample dataset fixture.

mod relationships;
mod snapshots;
mod store;

use mstgraph_foundation::Region;
use mstgraph_storage::{RawDataset, Snapshot};

const SAMPLE: &str = include_str!("../fixtures/sample_dataset.json");

/// The sample dataset, parsed.
pub(crate) fn sample_dataset() -> RawDataset {
    serde_json::from_str(SAMPLE).unwrap()
}

/// The sample dataset, built into a JP snapshot.
pub(crate) fn sample() -> Snapshot {
    Snapshot::build(sample_dataset(), Region::JP, "sample")
}
