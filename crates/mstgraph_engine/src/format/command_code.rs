//! Command code formatting.

use mstgraph_foundation::{RecordId, Result};
use serde::Serialize;

use super::servant::skills;
use super::skill::NiceSkill;
use crate::forward::{Expanded, Forward};

/// A command code.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NiceCommandCode {
    /// Command code ID.
    pub id: RecordId,
    /// Collection number.
    pub collection_no: i64,
    /// Display name.
    pub name: String,
    /// Reading of the name.
    pub ruby: String,
    /// Rarity in stars.
    pub rarity: i32,
    /// Skills granted, by slot then priority.
    pub skills: Vec<Expanded<NiceSkill>>,
}

pub(crate) fn format(ctx: &mut Forward<'_>, id: RecordId) -> Result<Option<NiceCommandCode>> {
    let Some(record) = ctx.store().command_code(id) else {
        return Ok(None);
    };
    let cc = &record.cc;
    Ok(Some(NiceCommandCode {
        id,
        collection_no: cc.collection_no,
        name: cc.name.clone(),
        ruby: cc.ruby.clone(),
        rarity: cc.rarity,
        skills: skills(ctx, record.skills.iter().map(|s| s.skill_id))?,
    }))
}
