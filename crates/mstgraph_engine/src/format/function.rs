//! Function formatting.
//!
//! A function appears in two shapes. [`NiceBaseFunction`] is the record
//! itself with its buffs inlined. [`NiceFunction`] is a function as a
//! skill or noble phantasm calls it, carrying the per-level parameter
//! values that call site supplies.

use mstgraph_datavals::{DataVals, FieldName, FuncType};
use mstgraph_foundation::{EntityKind, RecordId, Result};
use mstgraph_storage::record::MstFuncGroup;
use serde::Serialize;

use super::buff::{self, NiceBuff};
use super::traits::{NiceTrait, traits};
use crate::forward::{Expanded, Forward};

/// Event bonus grouping of a function.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NiceFuncGroup {
    /// Event the bonus applies to.
    pub event_id: i64,
    /// Function the bonus is grouped under.
    pub base_func_id: i64,
    /// Label for the summed bonus.
    pub name_total: String,
    /// Label for this bonus.
    pub name: String,
    /// Icon ID.
    pub icon_id: i64,
    /// Display order.
    pub priority: i64,
    /// Whether the value is shown.
    pub is_disp_value: bool,
}

impl From<&MstFuncGroup> for NiceFuncGroup {
    fn from(group: &MstFuncGroup) -> Self {
        Self {
            event_id: group.event_id,
            base_func_id: group.base_func_id,
            name_total: group.name_total.clone(),
            name: group.name.clone(),
            icon_id: group.icon_id,
            priority: group.priority,
            is_disp_value: group.is_disp_value,
        }
    }
}

/// A function record with its buffs inlined.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NiceBaseFunction {
    /// Function ID.
    pub func_id: RecordId,
    /// Function type name, or `unknown` for codes outside the vocabulary.
    pub func_type: &'static str,
    /// Upstream target type code.
    pub func_target_type: i32,
    /// Upstream apply target code.
    pub func_target_team: i32,
    /// Popup text.
    pub func_popup_text: String,
    /// Popup icon ID.
    pub func_popup_icon_id: i64,
    /// Traits the target must have.
    pub func_tvals: Vec<NiceTrait>,
    /// Traits the quest must have.
    pub func_quest_tvals: Vec<NiceTrait>,
    /// Event bonus groupings.
    pub func_group: Vec<NiceFuncGroup>,
    /// Trait operands, for types whose `vals` are traits.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trait_vals: Vec<NiceTrait>,
    /// Buffs applied, in `vals` order.
    pub buffs: Vec<Expanded<NiceBuff>>,
}

pub(crate) fn format_base(ctx: &mut Forward<'_>, id: RecordId) -> Result<Option<NiceBaseFunction>> {
    let Some(record) = ctx.store().function(id) else {
        return Ok(None);
    };
    let func = &record.func;
    let func_type = FuncType::from_code(func.func_type);

    let (trait_vals, buffs) = if func_type.is_some_and(FuncType::vals_are_traits) {
        (traits(&func.vals), Vec::new())
    } else {
        let mut buffs = Vec::with_capacity(func.vals.len());
        for &buff_id in &func.vals {
            if let Some(buff) = ctx.child(EntityKind::Buff.at(buff_id), buff::format)? {
                buffs.push(buff);
            }
        }
        (Vec::new(), buffs)
    };

    Ok(Some(NiceBaseFunction {
        func_id: func.id,
        func_type: func_type.map_or("unknown", FuncType::name),
        func_target_type: func.target_type,
        func_target_team: func.apply_target,
        func_popup_text: func.popup_text.clone(),
        func_popup_icon_id: func.popup_icon_id,
        func_tvals: traits(&func.tvals),
        func_quest_tvals: traits(&func.quest_tvals),
        func_group: record.groups.iter().map(NiceFuncGroup::from).collect(),
        trait_vals,
        buffs,
    }))
}

/// A function as called by a skill or noble phantasm.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NiceFunction {
    /// The function record, or a reference past the depth bound.
    #[serde(flatten)]
    pub function: Expanded<NiceBaseFunction>,
    /// Decoded values, one per level.
    pub svals: Vec<DataVals>,
    /// Overcharge 2 values, one per level.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub svals2: Vec<DataVals>,
    /// Overcharge 3 values, one per level.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub svals3: Vec<DataVals>,
    /// Overcharge 4 values, one per level.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub svals4: Vec<DataVals>,
    /// Overcharge 5 values, one per level.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub svals5: Vec<DataVals>,
    /// Values used when a support servant casts the skill.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub follower_vals: Vec<DataVals>,
    /// The function named by `DependFuncId`, run with `DependFuncVals`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depend_function: Option<Expanded<NiceBaseFunction>>,
}

impl NiceFunction {
    /// The function ID, whether inlined or referenced.
    #[must_use]
    pub fn func_id(&self) -> RecordId {
        match &self.function {
            Expanded::Full(function) => function.func_id,
            Expanded::Reference(entity) => entity.id,
        }
    }
}

/// One level row's value columns: `svals` first, then the overcharge
/// columns (empty for skills). Column entries line up with `func_ids`.
pub(crate) struct LevelVals<'r> {
    pub(crate) func_ids: &'r [RecordId],
    pub(crate) columns: [&'r [String]; 5],
    pub(crate) script: &'r serde_json::Value,
}

/// Formats every function a skill or noble phantasm calls, in call
/// order. Functions missing from the store are skipped.
///
/// Each function's values come from the levels that call it, read at
/// that level's own position for the function.
pub(crate) fn format_calls(
    ctx: &mut Forward<'_>,
    func_ids: &[RecordId],
    levels: &[LevelVals<'_>],
) -> Result<Vec<NiceFunction>> {
    let mut functions = Vec::with_capacity(func_ids.len());
    for &func_id in func_ids {
        let Some(record) = ctx.store().function(func_id) else {
            tracing::debug!(func_id, "expand.function.missing");
            continue;
        };
        let func_type = record.func.func_type;
        let entity = EntityKind::Function.at(func_id);

        let calls: Vec<_> = levels
            .iter()
            .filter_map(|lv| {
                let position = lv.func_ids.iter().position(|&id| id == func_id)?;
                Some((lv, position))
            })
            .collect();

        let [svals, svals2, svals3, svals4, svals5] = [0, 1, 2, 3, 4].map(|column| {
            calls
                .iter()
                .filter_map(|(lv, position)| lv.columns[column].get(*position))
                .map(|raw| ctx.decode(raw, func_type))
                .collect::<Result<Vec<_>>>()
        });
        let svals = svals?;
        let follower_vals = calls
            .iter()
            .filter_map(|(lv, position)| follower_raw(lv.script, *position))
            .map(|raw| ctx.decode(raw, func_type))
            .collect::<Result<Vec<_>>>()?;

        let Some(function) = ctx.child(entity, format_base)? else {
            continue;
        };

        let depend_id = svals.first().and_then(|vals| vals.int(FieldName::DependFuncId));
        let depend_function = match (depend_id, &function) {
            (Some(depend_id), Expanded::Full(_)) => ctx.within(entity, |ctx| {
                ctx.child(EntityKind::Function.at(depend_id), format_base)
            })?,
            _ => None,
        };

        functions.push(NiceFunction {
            function,
            svals,
            svals2: svals2?,
            svals3: svals3?,
            svals4: svals4?,
            svals5: svals5?,
            follower_vals,
            depend_function,
        });
    }
    Ok(functions)
}

fn follower_raw(script: &serde_json::Value, position: usize) -> Option<&str> {
    script.get("followerVals")?.as_array()?.get(position)?.as_str()
}
