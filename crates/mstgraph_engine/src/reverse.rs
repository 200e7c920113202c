//! Reverse expansion: finding every entity that transitively uses a root.
//!
//! The walk climbs ladder edges through the relation index, one rung per
//! hop. Ancestors are formatted shallowly (their own children become
//! references) so the result never repeats the root's downward subtree.
//! An ancestor reached a second time is reported as a reference.

use mstgraph_foundation::{EntityRef, Result};
use mstgraph_storage::{EdgeKind, Snapshot};
use serde::Serialize;

use crate::depth::ReverseDepth;
use crate::format::{self, FormattedEntity};
use crate::forward::{Expanded, Forward};
use crate::visited::VisitedSet;

/// The result of a reverse expansion.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseTree {
    /// The entity the walk started from.
    pub root: EntityRef,
    /// The requested depth.
    pub depth: ReverseDepth,
    /// The root, fully formatted, with its ancestors.
    pub node: ReverseNode,
}

impl ReverseTree {
    /// Every entity reached above the root, in walk order, including
    /// repeat references.
    #[must_use]
    pub fn ancestors(&self) -> Vec<EntityRef> {
        let mut out = Vec::new();
        self.node.collect_ancestors(&mut out);
        out
    }

    /// Returns true if `entity` appears anywhere above the root.
    #[must_use]
    pub fn contains(&self, entity: EntityRef) -> bool {
        self.ancestors().contains(&entity)
    }
}

/// One node of a reverse tree.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReverseNode {
    /// A formatted entity and the groups of entities that use it.
    Entity {
        /// The formatted record.
        entity: FormattedEntity,
        /// Users of this entity, one group per edge kind.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        ancestors: Vec<AncestorGroup>,
    },
    /// An entity already reported elsewhere in this tree.
    Reference(EntityRef),
}

impl ReverseNode {
    /// The entity at this node.
    #[must_use]
    pub fn entity(&self) -> EntityRef {
        match self {
            Self::Entity { entity, .. } => entity.entity(),
            Self::Reference(entity) => *entity,
        }
    }

    /// The groups above this node; empty for references.
    #[must_use]
    pub fn groups(&self) -> &[AncestorGroup] {
        match self {
            Self::Entity { ancestors, .. } => ancestors,
            Self::Reference(_) => &[],
        }
    }

    fn collect_ancestors(&self, out: &mut Vec<EntityRef>) {
        for group in self.groups() {
            for node in &group.nodes {
                out.push(node.entity());
                node.collect_ancestors(out);
            }
        }
    }
}

/// Entities that reference a node through one edge kind.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AncestorGroup {
    /// The edge climbed.
    pub edge: EdgeKind,
    /// The referencing entities, in index order.
    pub nodes: Vec<ReverseNode>,
}

/// State for one reverse expansion call.
pub(crate) struct Reverse<'a> {
    snapshot: &'a Snapshot,
    shallow: Forward<'a>,
    visited: VisitedSet,
}

impl<'a> Reverse<'a> {
    pub(crate) fn new(snapshot: &'a Snapshot, shallow: Forward<'a>) -> Self {
        Self {
            snapshot,
            shallow,
            visited: VisitedSet::new(),
        }
    }

    /// Climbs `hops` rungs above `root`.
    pub(crate) fn climb_from(
        &mut self,
        root: EntityRef,
        hops: usize,
    ) -> Result<Vec<AncestorGroup>> {
        self.visited.visit(root);
        self.climb(root, hops)
    }

    pub(crate) fn visited(&self) -> usize {
        self.visited.len()
    }

    fn climb(&mut self, entity: EntityRef, hops: usize) -> Result<Vec<AncestorGroup>> {
        if hops == 0 {
            return Ok(Vec::new());
        }
        let index = self.snapshot.index();
        let mut groups = Vec::new();
        for edge in EdgeKind::ancestors_of(entity.kind) {
            let mut nodes = Vec::new();
            for parent in index.referencing(edge, entity.id) {
                if !self.visited.visit(parent) {
                    nodes.push(ReverseNode::Reference(parent));
                    continue;
                }
                let formatted = match format::expand(&mut self.shallow, parent)? {
                    Some(Expanded::Full(formatted)) => formatted,
                    Some(Expanded::Reference(_)) | None => continue,
                };
                let ancestors = self.climb(parent, hops - 1)?;
                nodes.push(ReverseNode::Entity {
                    entity: formatted,
                    ancestors,
                });
            }
            if !nodes.is_empty() {
                groups.push(AncestorGroup { edge, nodes });
            }
        }
        Ok(groups)
    }
}
