//! Load-time data consistency warnings.
//!
//! The upstream dataset is third-party and occasionally inconsistent.
//! Nothing here aborts a load: each problem is recorded, logged, and the
//! affected row or edge is left out.

use std::fmt;

use mstgraph_foundation::EntityRef;
use serde::Serialize;

use crate::edge::EdgeKind;

/// One inconsistency found while building a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "warning", rename_all = "camelCase")]
pub enum ConsistencyWarning {
    /// A foreign key names a record that does not exist. The edge is
    /// omitted from the index.
    DanglingReference {
        /// The edge the reference would have produced.
        edge: EdgeKind,
        /// The record holding the foreign key.
        from: EntityRef,
        /// The missing target.
        missing: EntityRef,
    },
    /// Two records of one kind share an ID. The first one is kept.
    DuplicateId {
        /// The duplicated record.
        entity: EntityRef,
    },
    /// A child row names a parent that does not exist. The row is dropped.
    OrphanRow {
        /// Upstream table the row came from.
        table: &'static str,
        /// The missing parent.
        parent: EntityRef,
    },
}

impl fmt::Display for ConsistencyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingReference {
                edge,
                from,
                missing,
            } => write!(f, "dangling {edge} reference from {from} to missing {missing}"),
            Self::DuplicateId { entity } => write!(f, "duplicate id {entity}; kept first"),
            Self::OrphanRow { table, parent } => {
                write!(f, "{table} row for missing parent {parent}; dropped")
            }
        }
    }
}

/// Every warning raised while building one snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ConsistencyReport {
    warnings: Vec<ConsistencyWarning>,
}

impl ConsistencyReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records and logs a warning.
    pub fn record(&mut self, warning: ConsistencyWarning) {
        tracing::warn!(%warning, "consistency.warning");
        self.warnings.push(warning);
    }

    /// All warnings, in the order they were found.
    #[must_use]
    pub fn warnings(&self) -> &[ConsistencyWarning] {
        &self.warnings
    }

    /// Number of warnings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Returns true if the dataset was fully consistent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Counts warnings as (dangling, duplicate, orphan).
    #[must_use]
    pub fn counts(&self) -> (usize, usize, usize) {
        self.warnings
            .iter()
            .fold((0, 0, 0), |(d, u, o), w| match w {
                ConsistencyWarning::DanglingReference { .. } => (d + 1, u, o),
                ConsistencyWarning::DuplicateId { .. } => (d, u + 1, o),
                ConsistencyWarning::OrphanRow { .. } => (d, u, o + 1),
            })
    }
}
