//! Per-kind formatters.
//!
//! Each formatter turns one stored record into its public shape and
//! inlines the records it references through [`Forward::child`]. The
//! engine itself never looks inside a kind; it dispatches here.

pub mod ai;
pub mod buff;
pub mod command_code;
pub mod function;
pub mod item;
pub mod mystic_code;
pub mod servant;
pub mod skill;
pub mod td;
pub mod traits;
pub mod war;

use mstgraph_foundation::{EntityKind, EntityRef, RecordId, Result};
use serde::Serialize;

pub use ai::{NiceAi, NiceAiAct, NiceAiCollection};
pub use buff::NiceBuff;
pub use command_code::NiceCommandCode;
pub use function::{NiceBaseFunction, NiceFuncGroup, NiceFunction};
pub use item::NiceItem;
pub use mystic_code::NiceMysticCode;
pub use servant::{NiceServant, NiceSkillSlot, NiceTdSlot};
pub use skill::{NiceAiIds, NiceSkill};
pub use td::{NiceTd, NpGain};
pub use traits::NiceTrait;
pub use war::{NiceMap, NiceQuest, NiceSpot, NiceWar};

use crate::forward::{Expanded, Forward};

/// A formatted record of any kind.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FormattedEntity {
    /// A buff.
    Buff(NiceBuff),
    /// A function.
    Function(NiceBaseFunction),
    /// A skill.
    Skill(NiceSkill),
    /// A noble phantasm.
    NoblePhantasm(NiceTd),
    /// A servant.
    Servant(NiceServant),
    /// A mystic code.
    MysticCode(NiceMysticCode),
    /// A command code.
    CommandCode(NiceCommandCode),
    /// An item.
    Item(NiceItem),
    /// A war.
    War(NiceWar),
    /// A spot.
    Spot(NiceSpot),
    /// A quest.
    Quest(NiceQuest),
    /// An AI action.
    AiAct(NiceAiAct),
    /// A servant AI script.
    AiSvt(NiceAiCollection),
    /// A field AI script.
    AiField(NiceAiCollection),
}

impl FormattedEntity {
    /// The kind and ID of the formatted record.
    #[must_use]
    pub fn entity(&self) -> EntityRef {
        match self {
            Self::Buff(buff) => EntityKind::Buff.at(buff.id),
            Self::Function(function) => EntityKind::Function.at(function.func_id),
            Self::Skill(skill) => EntityKind::Skill.at(skill.id),
            Self::NoblePhantasm(td) => EntityKind::NoblePhantasm.at(td.id),
            Self::Servant(svt) => EntityKind::Servant.at(svt.id),
            Self::MysticCode(mc) => EntityKind::MysticCode.at(mc.id),
            Self::CommandCode(cc) => EntityKind::CommandCode.at(cc.id),
            Self::Item(item) => EntityKind::Item.at(item.id),
            Self::War(war) => EntityKind::War.at(war.id),
            Self::Spot(spot) => EntityKind::Spot.at(spot.id),
            Self::Quest(quest) => EntityKind::Quest.at(quest.id),
            Self::AiAct(act) => EntityKind::AiAct.at(act.id),
            Self::AiSvt(ai) => EntityKind::AiSvt.at(ai.id),
            Self::AiField(ai) => EntityKind::AiField.at(ai.id),
        }
    }
}

type Formatter<T> = fn(&mut Forward<'_>, RecordId) -> Result<Option<T>>;

fn via<T>(
    ctx: &mut Forward<'_>,
    entity: EntityRef,
    format: Formatter<T>,
    wrap: fn(T) -> FormattedEntity,
) -> Result<Option<Expanded<FormattedEntity>>> {
    ctx.child(entity, |ctx, id| Ok(format(ctx, id)?.map(wrap)))
}

/// Formats any entity one level below the current path.
pub(crate) fn expand(
    ctx: &mut Forward<'_>,
    entity: EntityRef,
) -> Result<Option<Expanded<FormattedEntity>>> {
    match entity.kind {
        EntityKind::Buff => via(ctx, entity, buff::format, FormattedEntity::Buff),
        EntityKind::Function => via(ctx, entity, function::format_base, FormattedEntity::Function),
        EntityKind::Skill => via(ctx, entity, skill::format, FormattedEntity::Skill),
        EntityKind::NoblePhantasm => via(ctx, entity, td::format, FormattedEntity::NoblePhantasm),
        EntityKind::Servant => via(ctx, entity, servant::format, FormattedEntity::Servant),
        EntityKind::MysticCode => {
            via(ctx, entity, mystic_code::format, FormattedEntity::MysticCode)
        }
        EntityKind::CommandCode => {
            via(ctx, entity, command_code::format, FormattedEntity::CommandCode)
        }
        EntityKind::Item => via(ctx, entity, item::format, FormattedEntity::Item),
        EntityKind::War => via(ctx, entity, war::format, FormattedEntity::War),
        EntityKind::Spot => via(ctx, entity, war::format_spot, FormattedEntity::Spot),
        EntityKind::Quest => via(ctx, entity, war::format_quest, FormattedEntity::Quest),
        EntityKind::AiAct => via(ctx, entity, ai::format_act, FormattedEntity::AiAct),
        EntityKind::AiSvt => via(ctx, entity, ai::format_svt, FormattedEntity::AiSvt),
        EntityKind::AiField => via(ctx, entity, ai::format_field, FormattedEntity::AiField),
    }
}
