//! Forward expansion: inlining the records an entity references.
//!
//! Formatters receive a [`Forward`] context and call [`Forward::child`]
//! for every reference they inline. The context owns the depth bound and
//! the path guard, so formatters never reason about recursion themselves.

use mstgraph_datavals::{DataVals, Decoder, FuncType};
use mstgraph_foundation::{EntityRef, Error, ErrorContext, RecordId, Result};
use mstgraph_storage::{EntityStore, RelationIndex, Snapshot};
use serde::Serialize;

use crate::visited::PathGuard;

/// A child that is either inlined or left as a reference.
///
/// A reference is produced when the depth bound is reached or when the
/// child is already being expanded further up the path.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expanded<T> {
    /// The fully formatted record.
    Full(T),
    /// Kind and ID only.
    Reference(EntityRef),
}

impl<T> Expanded<T> {
    /// The formatted record, if this child was inlined.
    #[must_use]
    pub fn full(&self) -> Option<&T> {
        match self {
            Self::Full(value) => Some(value),
            Self::Reference(_) => None,
        }
    }

    /// The reference, if this child was not inlined.
    #[must_use]
    pub fn reference(&self) -> Option<EntityRef> {
        match self {
            Self::Full(_) => None,
            Self::Reference(entity) => Some(*entity),
        }
    }

    /// Returns true if this child is a reference stub.
    #[must_use]
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }
}

/// State for one forward expansion call.
pub(crate) struct Forward<'a> {
    snapshot: &'a Snapshot,
    decoder: &'a Decoder,
    max_depth: usize,
    include_ai_ids: bool,
    path: PathGuard,
}

impl<'a> Forward<'a> {
    pub(crate) fn new(
        snapshot: &'a Snapshot,
        decoder: &'a Decoder,
        max_depth: usize,
        include_ai_ids: bool,
    ) -> Self {
        Self {
            snapshot,
            decoder,
            max_depth,
            include_ai_ids,
            path: PathGuard::new(),
        }
    }

    pub(crate) fn store(&self) -> &'a EntityStore {
        self.snapshot.store()
    }

    pub(crate) fn index(&self) -> &'a RelationIndex {
        self.snapshot.index()
    }

    pub(crate) fn include_ai_ids(&self) -> bool {
        self.include_ai_ids
    }

    /// Formats `entity` one level below the current path.
    ///
    /// Returns `None` when the record does not exist; a dangling
    /// reference is dropped from the output rather than failing.
    pub(crate) fn child<T>(
        &mut self,
        entity: EntityRef,
        format: impl FnOnce(&mut Self, RecordId) -> Result<Option<T>>,
    ) -> Result<Option<Expanded<T>>> {
        if self.path.contains(entity) {
            tracing::debug!(%entity, depth = self.path.len(), "expand.cycle");
            return Ok(Some(Expanded::Reference(entity)));
        }
        if self.path.len() > self.max_depth {
            return Ok(self
                .store()
                .contains(entity)
                .then_some(Expanded::Reference(entity)));
        }

        self.within(entity, |ctx| format(ctx, entity.id))
            .map(|formatted| match formatted {
                Some(value) => Some(Expanded::Full(value)),
                None => {
                    tracing::debug!(%entity, "expand.missing");
                    None
                }
            })
    }

    /// Runs `f` with `entity` pushed on the path, so anything `f`
    /// expands counts as nested beneath `entity`.
    pub(crate) fn within<R>(
        &mut self,
        entity: EntityRef,
        f: impl FnOnce(&mut Self) -> Result<R>,
    ) -> Result<R> {
        let entered = self.path.enter(entity);
        let result = f(self).map_err(|err| self.annotate(err));
        if entered {
            self.path.leave();
        }
        result
    }

    /// Decodes a DataVals string with `func_type` as its context.
    pub(crate) fn decode(&self, raw: &str, func_type: i32) -> Result<DataVals> {
        self.decoder.decode(raw, FuncType::from_code(func_type))
    }

    /// Attaches the current path to an error that has none yet.
    fn annotate(&self, err: Error) -> Error {
        if err.context.is_some() {
            return err;
        }
        let context = self
            .path
            .entities()
            .iter()
            .fold(
                ErrorContext::new().with_source(self.snapshot.region().to_string()),
                |context, entity| context.with_entity(*entity),
            );
        err.with_context(context)
    }
}
