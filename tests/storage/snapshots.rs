//! Integration tests for snapshots and publication

use std::sync::Arc;
use std::thread;

use mstgraph_foundation::{EntityKind, Region};
use mstgraph_storage::{RawDataset, Snapshot, SnapshotHandle};

use crate::{sample, sample_dataset};

// =============================================================================
// Building
// =============================================================================

#[test]
fn snapshot_carries_region_and_label() {
    let snapshot = Snapshot::build(sample_dataset(), Region::NA, "na-2024");
    assert_eq!(snapshot.region(), Region::NA);
    assert_eq!(snapshot.label(), "na-2024");
}

#[test]
fn empty_snapshot() {
    let snapshot = Snapshot::empty(Region::KR);
    assert!(snapshot.store().is_empty());
    assert!(snapshot.report().is_empty());
}

#[test]
fn stats_summarize_snapshot() {
    let stats = sample().stats();
    assert_eq!(stats.region, Region::JP);
    assert_eq!(stats.label, "sample");
    assert_eq!(stats.warnings, 5);
    assert!(stats.entities.contains(&(EntityKind::Servant, 1)));
    assert_eq!(stats.entities.len(), EntityKind::ALL.len());
}

#[test]
fn dataset_round_trips_through_json() {
    let dataset = sample_dataset();
    let json = serde_json::to_string(&dataset).unwrap();
    let back: RawDataset = serde_json::from_str(&json).unwrap();
    assert_eq!(back, dataset);
}

#[test]
fn missing_tables_default_to_empty() {
    let dataset: RawDataset = serde_json::from_str(r#"{"mstBuff": [{"id": 1}]}"#).unwrap();
    assert_eq!(dataset.row_count(), 1);
    let snapshot = Snapshot::build(dataset, Region::JP, "partial");
    assert!(snapshot.store().contains(EntityKind::Buff.at(1)));
}

// =============================================================================
// Publication
// =============================================================================

#[test]
fn publish_returns_previous() {
    let handle = SnapshotHandle::new(Snapshot::empty(Region::JP));
    let old = handle.publish(sample());
    assert_eq!(old.label(), "empty");
    assert_eq!(handle.current().label(), "sample");
}

#[test]
fn readers_keep_their_snapshot_across_publish() {
    let handle = SnapshotHandle::new(sample());
    let held = handle.current();
    handle.publish(Snapshot::empty(Region::JP));

    assert!(held.store().contains(EntityKind::Servant.at(100_100)));
    assert!(!handle.current().store().contains(EntityKind::Servant.at(100_100)));
}

#[test]
fn concurrent_readers_see_whole_snapshots() {
    let handle = Arc::new(SnapshotHandle::new(sample()));

    thread::scope(|scope| {
        for _ in 0..4 {
            let handle = Arc::clone(&handle);
            scope.spawn(move || {
                for _ in 0..50 {
                    let snapshot = handle.current();
                    // Either the full sample or the empty one, never a mix.
                    let servants = snapshot.store().count(EntityKind::Servant);
                    let edges = snapshot.index().lookup(
                        mstgraph_storage::EdgeKind::SkillServantActive,
                        1000,
                    );
                    assert_eq!(servants == 1, edges.len() == 1);
                }
            });
        }
        for i in 0..10 {
            if i % 2 == 0 {
                handle.publish(Snapshot::empty(Region::JP));
            } else {
                handle.publish(sample());
            }
        }
    });
}
