//! Skill formatting.

use std::collections::BTreeSet;

use mstgraph_foundation::{RecordId, Result};
use mstgraph_storage::{EdgeKind, RelationIndex};
use serde::Serialize;

use super::function::{LevelVals, NiceFunction, format_calls};
use super::traits::{NiceTrait, traits};
use crate::forward::Forward;

/// AI scripts that cast a skill, by script kind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NiceAiIds {
    /// Servant AI IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub svt: Vec<RecordId>,
    /// Field AI IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub field: Vec<RecordId>,
}

impl NiceAiIds {
    /// Collects the AI scripts whose actions cast `skill_id`.
    #[must_use]
    pub fn lookup(index: &RelationIndex, skill_id: RecordId) -> Self {
        let acts = index.lookup(EdgeKind::SkillAiAct, skill_id);
        let collect = |edge| {
            acts.iter()
                .flat_map(|&act| index.lookup(edge, act).iter().copied())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect::<Vec<_>>()
        };
        Self {
            svt: collect(EdgeKind::AiActAiSvt),
            field: collect(EdgeKind::AiActAiField),
        }
    }

    /// Returns true if no script casts the skill.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.svt.is_empty() && self.field.is_empty()
    }
}

/// An active, passive, or equipment skill.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NiceSkill {
    /// Skill ID.
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// Reading of the name.
    pub ruby: String,
    /// Upstream skill type code.
    #[serde(rename = "type")]
    pub skill_type: i32,
    /// Maximum level.
    pub max_lv: i32,
    /// Icon ID.
    pub icon_id: i64,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Cooldown per level.
    pub cool_down: Vec<i32>,
    /// Traits the skill carries.
    pub act_individuality: Vec<NiceTrait>,
    /// Free-form upstream script.
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub script: serde_json::Value,
    /// AI scripts that cast this skill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_ids: Option<NiceAiIds>,
    /// Functions called, in call order.
    pub functions: Vec<NiceFunction>,
}

pub(crate) fn format(ctx: &mut Forward<'_>, id: RecordId) -> Result<Option<NiceSkill>> {
    let Some(record) = ctx.store().skill(id) else {
        return Ok(None);
    };
    let skill = &record.skill;

    let levels: Vec<_> = record
        .levels
        .iter()
        .map(|lv| LevelVals {
            func_ids: &lv.func_id,
            columns: [lv.svals.as_slice(), &[], &[], &[], &[]],
            script: &lv.script,
        })
        .collect();
    let functions = format_calls(ctx, &record.func_ids(), &levels)?;

    let ai_ids = ctx
        .include_ai_ids()
        .then(|| NiceAiIds::lookup(ctx.index(), id))
        .filter(|ids| !ids.is_empty());

    Ok(Some(NiceSkill {
        id,
        name: skill.name.clone(),
        ruby: skill.ruby.clone(),
        skill_type: skill.skill_type,
        max_lv: skill.max_lv,
        icon_id: skill.icon_id,
        detail: record.details.first().map(|d| d.detail.clone()),
        cool_down: record.levels.iter().map(|lv| lv.charge_turn).collect(),
        act_individuality: traits(&skill.act_individuality),
        script: skill.script.clone(),
        ai_ids,
        functions,
    }))
}
