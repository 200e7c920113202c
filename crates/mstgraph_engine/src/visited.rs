//! Request-scoped visit tracking.
//!
//! Each expansion call owns its tracker; nothing here is shared between
//! calls, so concurrent expansions never observe each other.

use std::collections::HashSet;

use mstgraph_foundation::EntityRef;

/// The chain of entities currently being expanded, root first.
///
/// Forward expansion is path-scoped: the same function may appear under
/// two different skills, but an entity reached again beneath itself is
/// a cycle.
#[derive(Debug, Default)]
pub struct PathGuard {
    stack: Vec<EntityRef>,
    members: HashSet<EntityRef>,
}

impl PathGuard {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `entity` is already on the path.
    #[must_use]
    pub fn contains(&self, entity: EntityRef) -> bool {
        self.members.contains(&entity)
    }

    /// Descends into `entity`. Returns false, leaving the path unchanged,
    /// if it is already on the path.
    pub fn enter(&mut self, entity: EntityRef) -> bool {
        if !self.members.insert(entity) {
            return false;
        }
        self.stack.push(entity);
        true
    }

    /// Leaves the most recently entered entity.
    pub fn leave(&mut self) {
        if let Some(entity) = self.stack.pop() {
            self.members.remove(&entity);
        }
    }

    /// Number of entities on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns true if nothing is being expanded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// The path, root first.
    #[must_use]
    pub fn entities(&self) -> &[EntityRef] {
        &self.stack
    }
}

/// Every entity reached during one traversal.
///
/// Reverse expansion is traversal-scoped: an ancestor reached along a
/// second route is reported as a reference, never walked twice.
#[derive(Debug, Default)]
pub struct VisitedSet {
    seen: HashSet<EntityRef>,
}

impl VisitedSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `entity` visited. Returns true on the first visit.
    pub fn visit(&mut self, entity: EntityRef) -> bool {
        self.seen.insert(entity)
    }

    /// Returns true if `entity` was visited.
    #[must_use]
    pub fn contains(&self, entity: EntityRef) -> bool {
        self.seen.contains(&entity)
    }

    /// Number of entities visited.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns true if nothing was visited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
