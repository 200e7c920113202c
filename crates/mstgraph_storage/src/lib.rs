//! Entity store, relation index, and snapshots for mstgraph.
//!
//! This crate provides:
//! - [`RawDataset`] - The flat master tables a loader hands over
//! - [`EntityStore`] - Records keyed by kind and ID, child rows grouped
//! - [`RelationIndex`] - Reverse foreign-key lookups for every [`EdgeKind`]
//! - [`ConsistencyReport`] - Load-time data problems, recorded not fatal
//! - [`Snapshot`] / [`SnapshotHandle`] - Immutable store+index pairs and
//!   their atomic publication

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod consistency;
pub mod dataset;
pub mod edge;
pub mod entity;
pub mod record;
pub mod relationship;
pub mod snapshot;

pub use consistency::{ConsistencyReport, ConsistencyWarning};
pub use dataset::RawDataset;
pub use edge::EdgeKind;
pub use entity::{
    AiRecord, CommandCodeRecord, EntityStore, FunctionRecord, MysticCodeRecord, ServantRecord,
    SkillRecord, TdRecord, WarRecord,
};
pub use relationship::{EdgeStats, RelationIndex};
pub use snapshot::{Snapshot, SnapshotHandle, SnapshotStats};
