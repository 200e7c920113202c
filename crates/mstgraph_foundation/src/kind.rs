//! Entity kinds and kind-scoped entity references.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, ErrorKind};

/// Numeric ID of a record, scoped to its kind.
pub type RecordId = i64;

/// The closed set of record kinds held by an entity store.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    /// A status effect applied by a function.
    Buff,
    /// A single effect invoked by skills and noble phantasms.
    Function,
    /// An active, passive, or equipment skill.
    Skill,
    /// A noble phantasm (treasure device).
    NoblePhantasm,
    /// A playable or enemy servant.
    Servant,
    /// A mystic code (master equipment).
    MysticCode,
    /// A command code.
    CommandCode,
    /// An inventory item.
    Item,
    /// A war (chapter or event map collection).
    War,
    /// A spot on a war map.
    Spot,
    /// A quest located at a spot.
    Quest,
    /// An AI action, optionally casting a skill.
    AiAct,
    /// A servant AI script.
    AiSvt,
    /// A field AI script.
    AiField,
}

impl EntityKind {
    /// Every kind, in declaration order.
    pub const ALL: [EntityKind; 14] = [
        Self::Buff,
        Self::Function,
        Self::Skill,
        Self::NoblePhantasm,
        Self::Servant,
        Self::MysticCode,
        Self::CommandCode,
        Self::Item,
        Self::War,
        Self::Spot,
        Self::Quest,
        Self::AiAct,
        Self::AiSvt,
        Self::AiField,
    ];

    /// Short lowercase name used for parsing and display.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Buff => "buff",
            Self::Function => "function",
            Self::Skill => "skill",
            Self::NoblePhantasm => "np",
            Self::Servant => "servant",
            Self::MysticCode => "mc",
            Self::CommandCode => "cc",
            Self::Item => "item",
            Self::War => "war",
            Self::Spot => "spot",
            Self::Quest => "quest",
            Self::AiAct => "aiact",
            Self::AiSvt => "aisvt",
            Self::AiField => "aifield",
        }
    }

    /// Creates a reference to the record of this kind with the given ID.
    #[must_use]
    pub const fn at(self, id: RecordId) -> EntityRef {
        EntityRef::new(self, id)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        let kind = match lower.as_str() {
            "buff" => Self::Buff,
            "function" | "func" => Self::Function,
            "skill" => Self::Skill,
            "np" | "td" | "noblephantasm" => Self::NoblePhantasm,
            "servant" | "svt" => Self::Servant,
            "mc" | "mysticcode" => Self::MysticCode,
            "cc" | "commandcode" => Self::CommandCode,
            "item" => Self::Item,
            "war" => Self::War,
            "spot" => Self::Spot,
            "quest" => Self::Quest,
            "aiact" => Self::AiAct,
            "aisvt" => Self::AiSvt,
            "aifield" => Self::AiField,
            _ => return Err(Error::new(ErrorKind::UnknownKind(s.to_string()))),
        };
        Ok(kind)
    }
}

/// A kind-scoped reference to one record.
///
/// The store owns all record data; everything else holds these.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct EntityRef {
    /// The record's kind.
    pub kind: EntityKind,
    /// The record's ID within its kind.
    pub id: RecordId,
}

impl EntityRef {
    /// Creates a new reference.
    #[must_use]
    pub const fn new(kind: EntityKind, id: RecordId) -> Self {
        Self { kind, id }
    }
}

impl fmt::Debug for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityRef({}:{})", self.kind, self.id)
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}
