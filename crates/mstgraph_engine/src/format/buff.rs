//! Buff formatting.

use mstgraph_foundation::{RecordId, Result};
use mstgraph_storage::record::MstBuff;
use serde::Serialize;

use super::traits::{NiceTrait, traits};
use crate::forward::Forward;

/// A status effect.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NiceBuff {
    /// Buff ID.
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// Description.
    pub detail: String,
    /// Icon ID.
    pub icon_id: i64,
    /// Upstream buff type code.
    #[serde(rename = "type")]
    pub buff_type: i32,
    /// Stacking group; buffs sharing a non-zero group do not stack.
    pub buff_group: i64,
    /// Maximum accumulated rate.
    pub max_rate: i64,
    /// Traits the buff carries.
    pub vals: Vec<NiceTrait>,
    /// Traits the buff holder must have.
    pub tvals: Vec<NiceTrait>,
    /// Traits checked on the holder.
    pub ck_self_indv: Vec<NiceTrait>,
    /// Traits checked on the opponent.
    pub ck_op_indv: Vec<NiceTrait>,
    /// Free-form upstream script.
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub script: serde_json::Value,
}

impl From<&MstBuff> for NiceBuff {
    fn from(buff: &MstBuff) -> Self {
        Self {
            id: buff.id,
            name: buff.name.clone(),
            detail: buff.detail.clone(),
            icon_id: buff.icon_id,
            buff_type: buff.buff_type,
            buff_group: buff.buff_group,
            max_rate: buff.max_rate,
            vals: traits(&buff.vals),
            tvals: traits(&buff.tvals),
            ck_self_indv: traits(&buff.ck_self_indv),
            ck_op_indv: traits(&buff.ck_op_indv),
            script: buff.script.clone(),
        }
    }
}

pub(crate) fn format(ctx: &mut Forward<'_>, id: RecordId) -> Result<Option<NiceBuff>> {
    Ok(ctx.store().buff(id).map(|buff| NiceBuff::from(buff.as_ref())))
}
