//! The closed table of edge kinds.
//!
//! Each edge is derived from one foreign-key column. It is indexed from
//! the referenced (key) kind to the referencing kind, which is the
//! direction reverse expansion walks.

use std::fmt;

use mstgraph_foundation::EntityKind;
use serde::Serialize;

/// A named directed relation between two entity kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeKind {
    /// Buff applied by function (`mstFunc.vals`).
    BuffFunction,
    /// Function called by skill (`mstSkillLv.funcId`).
    FunctionSkill,
    /// Function called by noble phantasm (`mstTreasureDeviceLv.funcId`).
    FunctionNoblePhantasm,
    /// Active skill owned by servant (`mstSvtSkill.skillId`).
    SkillServantActive,
    /// Class passive owned by servant (`mstSvt.classPassive`).
    SkillServantPassive,
    /// Extra passive owned by servant (`mstSvtPassiveSkill.skillId`).
    SkillServantExtraPassive,
    /// Noble phantasm owned by servant (`mstSvtTreasureDevice.treasureDeviceId`).
    NoblePhantasmServant,
    /// Skill granted by mystic code (`mstEquipSkill.skillId`).
    SkillMysticCode,
    /// Skill granted by command code (`mstCommandCodeSkill.skillId`).
    SkillCommandCode,
    /// Skill cast by AI action (`mstAiAct.skillVals`).
    SkillAiAct,
    /// AI action used by servant AI (`mstAi.aiActId`).
    AiActAiSvt,
    /// AI action used by field AI (`mstAiField.aiActId`).
    AiActAiField,
    /// Spot on war map (`mstSpot.warId`).
    WarSpot,
    /// Quest at spot (`mstQuest.spotId`).
    SpotQuest,
}

impl EdgeKind {
    /// Number of edge kinds.
    pub const COUNT: usize = 14;

    /// Every edge kind, in ordinal order.
    pub const ALL: [EdgeKind; Self::COUNT] = [
        Self::BuffFunction,
        Self::FunctionSkill,
        Self::FunctionNoblePhantasm,
        Self::SkillServantActive,
        Self::SkillServantPassive,
        Self::SkillServantExtraPassive,
        Self::NoblePhantasmServant,
        Self::SkillMysticCode,
        Self::SkillCommandCode,
        Self::SkillAiAct,
        Self::AiActAiSvt,
        Self::AiActAiField,
        Self::WarSpot,
        Self::SpotQuest,
    ];

    /// Dense index into per-edge tables.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// The kind whose IDs are the index keys (the referenced kind).
    #[must_use]
    pub const fn key_kind(self) -> EntityKind {
        match self {
            Self::BuffFunction => EntityKind::Buff,
            Self::FunctionSkill | Self::FunctionNoblePhantasm => EntityKind::Function,
            Self::SkillServantActive
            | Self::SkillServantPassive
            | Self::SkillServantExtraPassive
            | Self::SkillMysticCode
            | Self::SkillCommandCode
            | Self::SkillAiAct => EntityKind::Skill,
            Self::NoblePhantasmServant => EntityKind::NoblePhantasm,
            Self::AiActAiSvt | Self::AiActAiField => EntityKind::AiAct,
            Self::WarSpot => EntityKind::War,
            Self::SpotQuest => EntityKind::Spot,
        }
    }

    /// The kind holding the foreign key (the index values).
    #[must_use]
    pub const fn referencing_kind(self) -> EntityKind {
        match self {
            Self::BuffFunction => EntityKind::Function,
            Self::FunctionSkill => EntityKind::Skill,
            Self::FunctionNoblePhantasm => EntityKind::NoblePhantasm,
            Self::SkillServantActive
            | Self::SkillServantPassive
            | Self::SkillServantExtraPassive
            | Self::NoblePhantasmServant => EntityKind::Servant,
            Self::SkillMysticCode => EntityKind::MysticCode,
            Self::SkillCommandCode => EntityKind::CommandCode,
            Self::SkillAiAct => EntityKind::AiAct,
            Self::AiActAiSvt => EntityKind::AiSvt,
            Self::AiActAiField => EntityKind::AiField,
            Self::WarSpot => EntityKind::Spot,
            Self::SpotQuest => EntityKind::Quest,
        }
    }

    /// Returns true if reverse expansion climbs this edge.
    ///
    /// The remaining edges feed forward formatting (AI IDs on skills,
    /// spots and quests under wars).
    #[must_use]
    pub const fn is_ladder(self) -> bool {
        !matches!(
            self,
            Self::SkillAiAct
                | Self::AiActAiSvt
                | Self::AiActAiField
                | Self::WarSpot
                | Self::SpotQuest
        )
    }

    /// Ladder edges that lead upward from `kind`, in ordinal order.
    pub fn ancestors_of(kind: EntityKind) -> impl Iterator<Item = EdgeKind> {
        Self::ALL
            .into_iter()
            .filter(move |edge| edge.is_ladder() && edge.key_kind() == kind)
    }

    /// camelCase name, matching the serialized form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BuffFunction => "buffFunction",
            Self::FunctionSkill => "functionSkill",
            Self::FunctionNoblePhantasm => "functionNoblePhantasm",
            Self::SkillServantActive => "skillServantActive",
            Self::SkillServantPassive => "skillServantPassive",
            Self::SkillServantExtraPassive => "skillServantExtraPassive",
            Self::NoblePhantasmServant => "noblePhantasmServant",
            Self::SkillMysticCode => "skillMysticCode",
            Self::SkillCommandCode => "skillCommandCode",
            Self::SkillAiAct => "skillAiAct",
            Self::AiActAiSvt => "aiActAiSvt",
            Self::AiActAiField => "aiActAiField",
            Self::WarSpot => "warSpot",
            Self::SpotQuest => "spotQuest",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
