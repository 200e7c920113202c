//! Immutable dataset snapshots and their publication handle.
//!
//! A snapshot pairs one entity store with the relation index built from
//! it. Reloading builds a whole new snapshot off to the side and
//! publishes it in one swap; readers holding the old `Arc` keep a
//! consistent view until they drop it.

use std::sync::Arc;

use mstgraph_foundation::{EntityKind, Region};
use parking_lot::RwLock;
use serde::Serialize;

use crate::consistency::ConsistencyReport;
use crate::dataset::RawDataset;
use crate::entity::EntityStore;
use crate::relationship::{EdgeStats, RelationIndex};

/// One immutable (store, index) pair built from one dataset version.
#[derive(Debug)]
pub struct Snapshot {
    store: Arc<EntityStore>,
    index: Arc<RelationIndex>,
    report: ConsistencyReport,
    region: Region,
    label: String,
}

impl Snapshot {
    /// Builds the store and index from a dataset.
    #[must_use]
    pub fn build(dataset: RawDataset, region: Region, label: impl Into<String>) -> Self {
        let label = label.into();
        let rows = dataset.row_count();
        let mut report = ConsistencyReport::new();
        let store = EntityStore::from_dataset(dataset, &mut report);
        let index = RelationIndex::build(&store, &mut report);
        tracing::debug!(
            %region,
            label = %label,
            rows,
            entities = store.len(),
            warnings = report.len(),
            "snapshot.build.complete"
        );
        Self {
            store: Arc::new(store),
            index: Arc::new(index),
            report,
            region,
            label,
        }
    }

    /// An empty snapshot.
    #[must_use]
    pub fn empty(region: Region) -> Self {
        Self::build(RawDataset::new(), region, "empty")
    }

    /// The entity store.
    #[must_use]
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// The relation index.
    #[must_use]
    pub fn index(&self) -> &RelationIndex {
        &self.index
    }

    /// Warnings raised while building.
    #[must_use]
    pub fn report(&self) -> &ConsistencyReport {
        &self.report
    }

    /// The region this dataset belongs to.
    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    /// Human-readable version label (usually the source path).
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Summary counts.
    #[must_use]
    pub fn stats(&self) -> SnapshotStats {
        SnapshotStats {
            region: self.region,
            label: self.label.clone(),
            entities: EntityKind::ALL
                .into_iter()
                .map(|kind| (kind, self.store.count(kind)))
                .collect(),
            edges: self.index.stats(),
            warnings: self.report.len(),
        }
    }
}

/// Summary counts for one snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotStats {
    /// Region.
    pub region: Region,
    /// Version label.
    pub label: String,
    /// Record count per kind.
    pub entities: Vec<(EntityKind, usize)>,
    /// Entry counts per edge kind.
    pub edges: Vec<EdgeStats>,
    /// Number of consistency warnings.
    pub warnings: usize,
}

/// The current snapshot of one region: single writer, many readers.
///
/// Readers take an `Arc` and release the lock immediately, so a
/// long-running expansion never blocks a publish.
#[derive(Debug)]
pub struct SnapshotHandle {
    current: RwLock<Arc<Snapshot>>,
}

impl SnapshotHandle {
    /// Creates a handle publishing `snapshot`.
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// The snapshot currently published.
    #[must_use]
    pub fn current(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current.read())
    }

    /// Replaces the published snapshot, returning the previous one.
    pub fn publish(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        let next = Arc::new(snapshot);
        tracing::debug!(
            region = %next.region(),
            label = next.label(),
            "snapshot.publish"
        );
        std::mem::replace(&mut *self.current.write(), next)
    }
}
