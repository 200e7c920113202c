//! Servant formatting.

use mstgraph_foundation::{EntityKind, RecordId, Result};
use mstgraph_storage::record::{MstSvtSkill, MstSvtTreasureDevice};
use serde::Serialize;

use super::skill::{self, NiceSkill};
use super::td::{self, NiceTd};
use super::traits::{NiceTrait, traits};
use crate::forward::{Expanded, Forward};

/// A skill in one of a servant's active skill slots.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NiceSkillSlot {
    /// Slot number, from 1.
    pub num: i32,
    /// Which upgrade of the slot this is; higher replaces lower.
    pub priority: i32,
    /// Upgrade state shown in game.
    pub strength_status: i32,
    /// Quest that unlocks this skill.
    pub cond_quest_id: i64,
    /// Ascension level that unlocks this skill.
    pub cond_lv: i32,
    /// The skill.
    #[serde(flatten)]
    pub skill: Expanded<NiceSkill>,
}

/// A noble phantasm in one of a servant's slots.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NiceTdSlot {
    /// Slot number, from 1.
    pub num: i32,
    /// Which upgrade of the slot this is; higher replaces lower.
    pub priority: i32,
    /// Upgrade state shown in game.
    pub strength_status: i32,
    /// Command card the noble phantasm is cast from.
    pub card_id: i32,
    /// Damage distribution per hit, in percent.
    pub np_distribution: Vec<i32>,
    /// Quest that unlocks this noble phantasm.
    pub cond_quest_id: i64,
    /// The noble phantasm.
    #[serde(flatten)]
    pub td: Expanded<NiceTd>,
}

/// A playable or enemy servant.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NiceServant {
    /// Servant ID.
    pub id: RecordId,
    /// Collection number; zero for unplayable records.
    pub collection_no: i64,
    /// Display name.
    pub name: String,
    /// Reading of the name.
    pub ruby: String,
    /// Name shown in battle.
    pub battle_name: String,
    /// Class ID.
    pub class_id: i32,
    /// Upstream servant type code.
    #[serde(rename = "type")]
    pub svt_type: i32,
    /// Rarity in stars.
    pub rarity: i32,
    /// Party cost.
    pub cost: i32,
    /// Attribute code.
    pub attribute: i32,
    /// Gender code.
    pub gender_type: i32,
    /// Instant death chance.
    pub death_rate: i32,
    /// Maximum ascension.
    pub limit_max: i32,
    /// Traits the servant carries.
    pub traits: Vec<NiceTrait>,
    /// Command card IDs.
    pub cards: Vec<i32>,
    /// Interlude and strengthening quests.
    pub relate_quest_ids: Vec<i64>,
    /// Active skills, by slot then priority.
    pub skills: Vec<NiceSkillSlot>,
    /// Class passives.
    pub class_passive: Vec<Expanded<NiceSkill>>,
    /// Extra passives, by slot then priority.
    pub extra_passive: Vec<Expanded<NiceSkill>>,
    /// Noble phantasms, by slot then priority.
    pub noble_phantasms: Vec<NiceTdSlot>,
}

fn skill_slot(ctx: &mut Forward<'_>, row: &MstSvtSkill) -> Result<Option<NiceSkillSlot>> {
    let skill = ctx.child(EntityKind::Skill.at(row.skill_id), skill::format)?;
    Ok(skill.map(|skill| NiceSkillSlot {
        num: row.num,
        priority: row.priority,
        strength_status: row.strength_status,
        cond_quest_id: row.cond_quest_id,
        cond_lv: row.cond_lv,
        skill,
    }))
}

fn td_slot(ctx: &mut Forward<'_>, row: &MstSvtTreasureDevice) -> Result<Option<NiceTdSlot>> {
    let td = ctx.child(EntityKind::NoblePhantasm.at(row.treasure_device_id), td::format)?;
    Ok(td.map(|td| NiceTdSlot {
        num: row.num,
        priority: row.priority,
        strength_status: row.strength_status,
        card_id: row.card_id,
        np_distribution: row.damage.clone(),
        cond_quest_id: row.cond_quest_id,
        td,
    }))
}

/// Inlines each skill in `ids`, dropping the ones that do not exist.
pub(crate) fn skills(
    ctx: &mut Forward<'_>,
    ids: impl IntoIterator<Item = RecordId>,
) -> Result<Vec<Expanded<NiceSkill>>> {
    let mut skills = Vec::new();
    for id in ids {
        if let Some(skill) = ctx.child(EntityKind::Skill.at(id), skill::format)? {
            skills.push(skill);
        }
    }
    Ok(skills)
}

pub(crate) fn format(ctx: &mut Forward<'_>, id: RecordId) -> Result<Option<NiceServant>> {
    let Some(record) = ctx.store().servant(id) else {
        return Ok(None);
    };
    let svt = &record.svt;

    let mut skill_slots = Vec::with_capacity(record.skills.len());
    for row in &record.skills {
        skill_slots.extend(skill_slot(ctx, row)?);
    }
    let mut td_slots = Vec::with_capacity(record.tds.len());
    for row in &record.tds {
        td_slots.extend(td_slot(ctx, row)?);
    }
    let class_passive = skills(ctx, svt.class_passive.iter().copied())?;
    let extra_passive = skills(ctx, record.passives.iter().map(|p| p.skill_id))?;

    Ok(Some(NiceServant {
        id,
        collection_no: svt.collection_no,
        name: svt.name.clone(),
        ruby: svt.ruby.clone(),
        battle_name: svt.battle_name.clone(),
        class_id: svt.class_id,
        svt_type: svt.svt_type,
        rarity: svt.star_rate,
        cost: svt.cost,
        attribute: svt.attri,
        gender_type: svt.gender_type,
        death_rate: svt.death_rate,
        limit_max: svt.limit_max,
        traits: traits(&svt.individuality),
        cards: svt.card_ids.clone(),
        relate_quest_ids: svt.relate_quest_ids.clone(),
        skills: skill_slots,
        class_passive,
        extra_passive,
        noble_phantasms: td_slots,
    }))
}
