//! AI action and AI script formatting.

use mstgraph_foundation::{EntityKind, RecordId, Result};
use mstgraph_storage::AiRecord;
use mstgraph_storage::record::MstAi;
use serde::Serialize;

use super::skill::{self, NiceSkill};
use super::traits::{NiceTrait, traits};
use crate::forward::{Expanded, Forward};

/// An AI action.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NiceAiAct {
    /// Action ID.
    pub id: RecordId,
    /// Upstream action type code.
    #[serde(rename = "type")]
    pub act_type: i32,
    /// Upstream target code.
    pub target: i32,
    /// Traits the target must have.
    pub target_individuality: Vec<NiceTrait>,
    /// Skill cast, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_id: Option<RecordId>,
    /// Level the skill is cast at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_lv: Option<i64>,
    /// The skill cast.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill: Option<Expanded<NiceSkill>>,
}

/// One row of an AI script.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NiceAi {
    /// Script ID.
    pub id: RecordId,
    /// Row index within the script.
    pub idx: i32,
    /// Upstream act number code.
    pub act_num: i32,
    /// Evaluation priority.
    pub priority: i32,
    /// Chance the row fires.
    pub probability: i32,
    /// Upstream condition code.
    pub cond: i32,
    /// Condition operands.
    pub vals: Vec<i64>,
    /// Action operands.
    pub avals: Vec<i64>,
    /// Debug text.
    pub info_text: String,
    /// Field AI timing, absent for servant AI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<i32>,
    /// The action taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_act: Option<Expanded<NiceAiAct>>,
}

/// Every row of one AI script.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NiceAiCollection {
    /// Script ID.
    pub id: RecordId,
    /// `svt` or `field`.
    pub ai_type: &'static str,
    /// Rows, by index then priority.
    pub ais: Vec<NiceAi>,
}

pub(crate) fn format_act(ctx: &mut Forward<'_>, id: RecordId) -> Result<Option<NiceAiAct>> {
    let Some(act) = ctx.store().ai_act(id) else {
        return Ok(None);
    };
    let skill_id = act.skill_id();
    let skill = match skill_id {
        Some(skill_id) => ctx.child(EntityKind::Skill.at(skill_id), skill::format)?,
        None => None,
    };
    Ok(Some(NiceAiAct {
        id,
        act_type: act.act_type,
        target: act.target,
        target_individuality: traits(&act.target_individuality),
        skill_id,
        skill_lv: skill_id.and_then(|_| act.skill_vals.get(1).copied()),
        skill,
    }))
}

fn nice_ai(ctx: &mut Forward<'_>, row: &MstAi) -> Result<NiceAi> {
    Ok(NiceAi {
        id: row.id,
        idx: row.idx,
        act_num: row.act_num,
        priority: row.priority,
        probability: row.probability,
        cond: row.cond,
        vals: row.vals.clone(),
        avals: row.avals.clone(),
        info_text: row.info_text.clone(),
        timing: row.timing,
        ai_act: ctx.child(EntityKind::AiAct.at(row.ai_act_id), format_act)?,
    })
}

fn collection(
    ctx: &mut Forward<'_>,
    record: Option<&AiRecord>,
    ai_type: &'static str,
) -> Result<Option<NiceAiCollection>> {
    let Some(record) = record else {
        return Ok(None);
    };
    let ais = record
        .rows
        .iter()
        .map(|row| nice_ai(ctx, row))
        .collect::<Result<Vec<_>>>()?;
    Ok(Some(NiceAiCollection {
        id: record.id,
        ai_type,
        ais,
    }))
}

pub(crate) fn format_svt(
    ctx: &mut Forward<'_>,
    id: RecordId,
) -> Result<Option<NiceAiCollection>> {
    let record = ctx.store().ai_svt(id);
    collection(ctx, record.map(|r| &**r), "svt")
}

pub(crate) fn format_field(
    ctx: &mut Forward<'_>,
    id: RecordId,
) -> Result<Option<NiceAiCollection>> {
    let record = ctx.store().ai_field(id);
    collection(ctx, record.map(|r| &**r), "field")
}
