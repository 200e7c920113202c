//! Mystic code formatting.

use mstgraph_foundation::{RecordId, Result};
use serde::Serialize;

use super::servant::skills;
use super::skill::NiceSkill;
use crate::forward::{Expanded, Forward};

/// Master equipment.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NiceMysticCode {
    /// Equipment ID.
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// Description.
    pub detail: String,
    /// Maximum level.
    pub max_lv: i32,
    /// Master level required to equip.
    pub cond_user_lv: i32,
    /// Skills granted, by slot.
    pub skills: Vec<Expanded<NiceSkill>>,
}

pub(crate) fn format(ctx: &mut Forward<'_>, id: RecordId) -> Result<Option<NiceMysticCode>> {
    let Some(record) = ctx.store().mystic_code(id) else {
        return Ok(None);
    };
    let equip = &record.equip;
    Ok(Some(NiceMysticCode {
        id,
        name: equip.name.clone(),
        detail: equip.detail.clone(),
        max_lv: equip.max_lv,
        cond_user_lv: equip.cond_user_lv,
        skills: skills(ctx, record.skills.iter().map(|s| s.skill_id))?,
    }))
}
