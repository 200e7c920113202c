//! The expansion engine entry point.

use mstgraph_datavals::{DataVals, FuncType};
use mstgraph_foundation::{EntityKind, EntityRef, Error, RecordId, Result};
use mstgraph_storage::Snapshot;

use crate::config::{EngineConfig, ForwardOptions};
use crate::depth::ReverseDepth;
use crate::format::{self, FormattedEntity};
use crate::forward::{Expanded, Forward};
use crate::reverse::{Reverse, ReverseNode, ReverseTree};

/// Expands entities against a snapshot.
///
/// The engine holds configuration only. Every call takes the snapshot it
/// reads from, so one engine serves any number of concurrent requests and
/// a request keeps reading the snapshot it started with even if a newer
/// one is published meanwhile.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Formats an entity and inlines everything it references, down to
    /// the configured depth limit.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if the entity does not exist, or a decode
    /// error annotated with the path to the failing function.
    pub fn expand_forward(
        &self,
        snapshot: &Snapshot,
        kind: EntityKind,
        id: RecordId,
    ) -> Result<FormattedEntity> {
        self.expand_forward_with(snapshot, kind.at(id), self.config.forward_options())
    }

    /// Like [`expand_forward`](Self::expand_forward) with per-call options.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if the entity does not exist, or a decode
    /// error annotated with the path to the failing function.
    pub fn expand_forward_with(
        &self,
        snapshot: &Snapshot,
        entity: EntityRef,
        options: ForwardOptions,
    ) -> Result<FormattedEntity> {
        let depth = options.effective_depth(self.config.forward_depth_limit);
        let mut ctx = Forward::new(snapshot, &self.config.decoder, depth, options.include_ai_ids);
        let formatted = match format::expand(&mut ctx, entity)? {
            Some(Expanded::Full(formatted)) => formatted,
            Some(Expanded::Reference(_)) | None => {
                return Err(Error::entity_not_found(entity));
            }
        };
        tracing::debug!(%entity, depth, region = %snapshot.region(), "expand.forward");
        Ok(formatted)
    }

    /// Finds every entity that transitively uses an entity, climbing the
    /// ladder up to `depth` or the configured default.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if the root does not exist,
    /// `UnsupportedDepth` if the depth cannot be reached from the root's
    /// kind, or a decode error from formatting.
    pub fn expand_reverse(
        &self,
        snapshot: &Snapshot,
        kind: EntityKind,
        id: RecordId,
        depth: Option<ReverseDepth>,
    ) -> Result<ReverseTree> {
        let root = kind.at(id);
        let depth = depth.unwrap_or(self.config.default_reverse_depth);
        if !snapshot.store().contains(root) {
            return Err(Error::entity_not_found(root));
        }
        let hops = depth.hops_from(kind)?;

        let entity = self.expand_forward(snapshot, kind, id)?;
        let include_ai_ids = self.config.include_ai_ids;
        let shallow = Forward::new(snapshot, &self.config.decoder, 0, include_ai_ids);
        let mut reverse = Reverse::new(snapshot, shallow);
        let ancestors = reverse.climb_from(root, hops)?;
        tracing::debug!(
            %root,
            %depth,
            hops,
            visited = reverse.visited(),
            region = %snapshot.region(),
            "expand.reverse"
        );

        Ok(ReverseTree {
            root,
            depth,
            node: ReverseNode::Entity { entity, ancestors },
        })
    }

    /// Decodes a DataVals string with the engine's schema table.
    ///
    /// # Errors
    ///
    /// Returns `DataValsDecode` if the string is malformed.
    pub fn decode(&self, raw: &str, context: Option<FuncType>) -> Result<DataVals> {
        self.config.decoder.decode(raw, context)
    }
}
