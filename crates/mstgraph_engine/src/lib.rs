//! Forward and reverse expansion of master-data entities for mstgraph.
//!
//! This crate provides:
//! - [`Engine`] - Entry point for forward and reverse expansion
//! - [`EngineConfig`] / [`ForwardOptions`] - Depth limits and decoding setup
//! - [`ReverseDepth`] - The reverse expansion ladder
//! - [`FormattedEntity`] and the `Nice*` shapes in [`format`] - Public
//!   record formats with references inlined
//! - [`ReverseTree`] - Every entity that transitively uses a root
//! - [`PathGuard`] / [`VisitedSet`] - Recursion guards

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod depth;
pub mod engine;
pub mod format;
pub mod forward;
pub mod reverse;
pub mod visited;

pub use config::{EngineConfig, ForwardOptions};
pub use depth::{ReverseDepth, ladder_level};
pub use engine::Engine;
pub use format::{
    FormattedEntity, NiceAi, NiceAiAct, NiceAiCollection, NiceAiIds, NiceBaseFunction, NiceBuff,
    NiceCommandCode, NiceFuncGroup, NiceFunction, NiceItem, NiceMap, NiceMysticCode, NiceQuest,
    NiceServant, NiceSkill, NiceSkillSlot, NiceSpot, NiceTd, NiceTdSlot, NiceTrait, NiceWar,
    NpGain,
};
pub use forward::Expanded;
pub use reverse::{AncestorGroup, ReverseNode, ReverseTree};
pub use visited::{PathGuard, VisitedSet};
