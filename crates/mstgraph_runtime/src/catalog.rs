//! Per-region snapshot handles.

use std::collections::BTreeMap;
use std::sync::Arc;

use mstgraph_foundation::Region;
use mstgraph_storage::{Snapshot, SnapshotHandle};

/// The published snapshot of every loaded region.
///
/// Regions are independent: publishing one never disturbs readers of
/// another.
#[derive(Debug, Default)]
pub struct Catalog {
    regions: BTreeMap<Region, SnapshotHandle>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes `snapshot` under its own region, returning the snapshot
    /// it replaced if the region was already loaded.
    pub fn publish(&mut self, snapshot: Snapshot) -> Option<Arc<Snapshot>> {
        let region = snapshot.region();
        match self.regions.get(&region) {
            Some(handle) => Some(handle.publish(snapshot)),
            None => {
                self.regions.insert(region, SnapshotHandle::new(snapshot));
                None
            }
        }
    }

    /// The handle for `region`, if loaded.
    #[must_use]
    pub fn handle(&self, region: Region) -> Option<&SnapshotHandle> {
        self.regions.get(&region)
    }

    /// The current snapshot for `region`, if loaded.
    #[must_use]
    pub fn current(&self, region: Region) -> Option<Arc<Snapshot>> {
        self.regions.get(&region).map(SnapshotHandle::current)
    }

    /// Loaded regions, in declaration order.
    pub fn regions(&self) -> impl Iterator<Item = Region> + '_ {
        self.regions.keys().copied()
    }

    /// Returns true if `region` is loaded.
    #[must_use]
    pub fn contains(&self, region: Region) -> bool {
        self.regions.contains_key(&region)
    }

    /// Number of loaded regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Returns true if nothing is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
