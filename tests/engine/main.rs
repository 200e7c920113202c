//! Integration tests for Layer 3: Engine
//!
//! Tests forward expansion (inlining, depth bounds, cycle references),
//! reverse expansion (ladder climbing, repeat references), and error
//! reporting, against the sample dataset fixture.

mod errors;
mod forward;

use mstgraph_engine::{Engine, FormattedEntity};
use mstgraph_foundation::{EntityKind, RecordId, Region};
use mstgraph_storage::{RawDataset, Snapshot};

const SAMPLE: &str = include_str!("../fixtures/sample_dataset.json");

/// The sample dataset, built into a JP snapshot.
pub(crate) fn sample() -> Snapshot {
    let dataset: RawDataset = serde_json::from_str(SAMPLE).unwrap();
    Snapshot::build(dataset, Region::JP, "sample")
}

/// Forward-expands one entity of the sample with the default engine.
pub(crate) fn show(kind: EntityKind, id: RecordId) -> FormattedEntity {
    Engine::default().expand_forward(&sample(), kind, id).unwrap()
}
