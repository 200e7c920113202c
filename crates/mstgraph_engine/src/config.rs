//! Configuration for the expansion engine.

use mstgraph_datavals::{Decoder, SchemaRegistry};

use crate::depth::ReverseDepth;

/// Configuration for the expansion engine.
///
/// Controls recursion guards, default reverse depth, and which
/// positional schemas formatters decode DataVals with.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Hard limit on forward recursion, in entity hops below the root.
    pub forward_depth_limit: usize,

    /// Reverse depth used when a request names none.
    pub default_reverse_depth: ReverseDepth,

    /// Whether skills list the AI scripts that cast them.
    pub include_ai_ids: bool,

    /// Decoder formatters use for DataVals strings.
    pub decoder: Decoder,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            forward_depth_limit: 8,
            default_reverse_depth: ReverseDepth::Servant,
            include_ai_ids: true,
            decoder: Decoder::standard(),
        }
    }
}

impl EngineConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the forward depth limit.
    #[must_use]
    pub fn with_forward_depth_limit(mut self, limit: usize) -> Self {
        self.forward_depth_limit = limit;
        self
    }

    /// Builder method to set the default reverse depth.
    #[must_use]
    pub fn with_default_reverse_depth(mut self, depth: ReverseDepth) -> Self {
        self.default_reverse_depth = depth;
        self
    }

    /// Builder method to toggle AI ID lookups on skills.
    #[must_use]
    pub fn with_ai_ids(mut self, include: bool) -> Self {
        self.include_ai_ids = include;
        self
    }

    /// Builder method to decode with a custom schema table.
    #[must_use]
    pub fn with_schemas(mut self, registry: SchemaRegistry) -> Self {
        self.decoder = Decoder::new(registry);
        self
    }

    /// Per-request options derived from this configuration.
    #[must_use]
    pub fn forward_options(&self) -> ForwardOptions {
        ForwardOptions {
            max_depth: None,
            include_ai_ids: self.include_ai_ids,
        }
    }
}

/// Options for one forward expansion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForwardOptions {
    /// Depth below the root past which children become references.
    /// `None` uses the engine's limit; larger values are clamped to it.
    pub max_depth: Option<usize>,

    /// Whether skills list the AI scripts that cast them.
    pub include_ai_ids: bool,
}

impl Default for ForwardOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            include_ai_ids: true,
        }
    }
}

impl ForwardOptions {
    /// Builder method to set the depth bound.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Builder method to toggle AI ID lookups on skills.
    #[must_use]
    pub fn with_ai_ids(mut self, include: bool) -> Self {
        self.include_ai_ids = include;
        self
    }

    /// The depth bound after clamping to `limit`.
    #[must_use]
    pub fn effective_depth(&self, limit: usize) -> usize {
        self.max_depth.map_or(limit, |depth| depth.min(limit))
    }
}
