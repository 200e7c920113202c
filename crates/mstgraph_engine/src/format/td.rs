//! Noble phantasm formatting.

use mstgraph_foundation::{RecordId, Result};
use serde::Serialize;

use super::function::{LevelVals, NiceFunction, format_calls};
use super::traits::{NiceTrait, traits};
use crate::forward::Forward;

static NO_SCRIPT: serde_json::Value = serde_json::Value::Null;

/// NP gained per hit, by card, one entry per level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NpGain {
    /// Buster cards.
    pub buster: Vec<i32>,
    /// Arts cards.
    pub arts: Vec<i32>,
    /// Quick cards.
    pub quick: Vec<i32>,
    /// Extra attacks.
    pub extra: Vec<i32>,
    /// When hit.
    pub defence: Vec<i32>,
    /// The noble phantasm itself.
    pub np: Vec<i32>,
}

/// A noble phantasm.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NiceTd {
    /// Noble phantasm ID.
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// Reading of the name.
    pub ruby: String,
    /// Rank string.
    pub rank: String,
    /// Type text.
    #[serde(rename = "type")]
    pub type_text: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// NP gain per level.
    pub np_gain: NpGain,
    /// Traits the noble phantasm carries.
    pub individuality: Vec<NiceTrait>,
    /// Functions called, in call order, with per-overcharge values.
    pub functions: Vec<NiceFunction>,
}

pub(crate) fn format(ctx: &mut Forward<'_>, id: RecordId) -> Result<Option<NiceTd>> {
    let Some(record) = ctx.store().noble_phantasm(id) else {
        return Ok(None);
    };
    let td = &record.td;

    let levels: Vec<_> = record
        .levels
        .iter()
        .map(|lv| LevelVals {
            func_ids: &lv.func_id,
            columns: [
                lv.svals.as_slice(),
                lv.svals2.as_slice(),
                lv.svals3.as_slice(),
                lv.svals4.as_slice(),
                lv.svals5.as_slice(),
            ],
            script: &NO_SCRIPT,
        })
        .collect();
    let functions = format_calls(ctx, &record.func_ids(), &levels)?;

    let mut np_gain = NpGain::default();
    for lv in &record.levels {
        np_gain.buster.push(lv.td_point_b);
        np_gain.arts.push(lv.td_point_a);
        np_gain.quick.push(lv.td_point_q);
        np_gain.extra.push(lv.td_point_ex);
        np_gain.defence.push(lv.td_point_def);
        np_gain.np.push(lv.td_point);
    }

    Ok(Some(NiceTd {
        id,
        name: td.name.clone(),
        ruby: td.ruby.clone(),
        rank: td.rank.clone(),
        type_text: td.type_text.clone(),
        detail: record.details.first().map(|d| d.detail.clone()),
        np_gain,
        individuality: traits(&td.individuality),
        functions,
    }))
}
