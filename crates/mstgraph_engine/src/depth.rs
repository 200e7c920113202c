//! The reverse expansion depth ladder.
//!
//! Kinds sit on rungs: buffs at 0, functions at 1, skills and noble
//! phantasms at 2, servants, mystic codes and command codes at 3. A
//! requested depth names the highest rung to climb to; the hop count is
//! the distance from the root's rung.

use std::fmt;
use std::str::FromStr;

use mstgraph_foundation::{EntityKind, Error, Result};
use serde::Serialize;

/// How far up the ladder a reverse expansion climbs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ReverseDepth {
    /// The root alone.
    None,
    /// Up to functions.
    Function,
    /// Up to skills and noble phantasms.
    SkillNp,
    /// Up to servants, mystic codes and command codes.
    #[default]
    Servant,
}

impl ReverseDepth {
    /// Every depth, shallowest first.
    pub const ALL: [ReverseDepth; 4] = [Self::None, Self::Function, Self::SkillNp, Self::Servant];

    /// The rung this depth stops at; `None` has no rung.
    #[must_use]
    pub const fn level(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Function => Some(1),
            Self::SkillNp => Some(2),
            Self::Servant => Some(3),
        }
    }

    /// The camelCase name accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Function => "function",
            Self::SkillNp => "skillNp",
            Self::Servant => "servant",
        }
    }

    /// Number of hops to climb from a root of `kind`.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedDepth` when `kind` is off the ladder or already
    /// above the requested rung.
    pub fn hops_from(self, kind: EntityKind) -> Result<usize> {
        let Some(target) = self.level() else {
            return Ok(0);
        };
        match ladder_level(kind) {
            Some(root) if root <= target => Ok(target - root),
            _ => Err(Error::unsupported_depth(kind, self.name())),
        }
    }
}

/// The ladder rung of `kind`, if it has one.
#[must_use]
pub const fn ladder_level(kind: EntityKind) -> Option<usize> {
    match kind {
        EntityKind::Buff => Some(0),
        EntityKind::Function => Some(1),
        EntityKind::Skill | EntityKind::NoblePhantasm => Some(2),
        EntityKind::Servant | EntityKind::MysticCode | EntityKind::CommandCode => Some(3),
        _ => None,
    }
}

impl fmt::Display for ReverseDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReverseDepth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "none" => Ok(Self::None),
            "function" => Ok(Self::Function),
            "skillnp" => Ok(Self::SkillNp),
            "servant" => Ok(Self::Servant),
            _ => Err(Error::invalid_argument(format!("unknown reverse depth: {s}"))),
        }
    }
}
