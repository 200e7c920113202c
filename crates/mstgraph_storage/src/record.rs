//! Raw master-table rows, as shipped in the upstream dataset.
//!
//! Field names follow the upstream camelCase columns. Every column
//! defaults when absent so partial dumps still load; the store and index
//! decide what a missing reference means.

// Columns mirror the upstream tables one-to-one.
#![allow(missing_docs)]

use mstgraph_foundation::RecordId;
use serde::{Deserialize, Serialize};
use serde_json::Value as Script;

/// `mstBuff`: a status effect.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MstBuff {
    pub id: RecordId,
    pub buff_group: i64,
    #[serde(rename = "type")]
    pub buff_type: i32,
    pub name: String,
    pub detail: String,
    pub icon_id: i64,
    pub max_rate: i64,
    pub vals: Vec<i64>,
    pub tvals: Vec<i64>,
    pub ck_self_indv: Vec<i64>,
    pub ck_op_indv: Vec<i64>,
    pub script: Script,
}

/// `mstFunc`: one effect invocation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MstFunc {
    pub id: RecordId,
    pub cond: i64,
    pub func_type: i32,
    pub target_type: i32,
    pub apply_target: i32,
    pub popup_icon_id: i64,
    pub popup_text: String,
    pub popup_text_color: i32,
    /// Buff IDs, or trait IDs for trait-valued function types.
    pub vals: Vec<i64>,
    pub tvals: Vec<i64>,
    pub quest_tvals: Vec<i64>,
    pub effect_list: Vec<i64>,
}

/// `mstFuncGroup`: event bonus grouping for a function.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MstFuncGroup {
    pub func_id: RecordId,
    pub event_id: i64,
    pub base_func_id: i64,
    pub name_total: String,
    pub name: String,
    pub icon_id: i64,
    pub priority: i64,
    pub is_disp_value: bool,
}

/// `mstSkill`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MstSkill {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub skill_type: i32,
    pub name: String,
    pub ruby: String,
    pub max_lv: i32,
    pub icon_id: i64,
    pub motion: i64,
    pub effect_list: Vec<i64>,
    pub act_individuality: Vec<i64>,
    pub script: Script,
}

/// `mstSkillDetail`; `id` equals the skill ID.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MstSkillDetail {
    pub id: RecordId,
    pub detail: String,
    pub detail_short: String,
}

/// `mstSkillLv`: per-level functions and their DataVals.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MstSkillLv {
    pub skill_id: RecordId,
    pub lv: i32,
    pub charge_turn: i32,
    pub skill_detail_id: i64,
    pub priority: i64,
    pub func_id: Vec<RecordId>,
    /// One DataVals string per entry of `func_id`.
    pub svals: Vec<String>,
    pub script: Script,
}

/// `mstSvtSkill`: an active skill slot on a servant.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MstSvtSkill {
    pub svt_id: RecordId,
    pub num: i32,
    pub priority: i32,
    pub skill_id: RecordId,
    pub strength_status: i32,
    pub cond_quest_id: i64,
    pub cond_quest_phase: i32,
    pub cond_lv: i32,
    pub cond_limit_count: i32,
    pub event_id: i64,
    pub flag: i64,
}

/// `mstSvtPassiveSkill`: an extra passive granted to a servant.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MstSvtPassiveSkill {
    pub svt_id: RecordId,
    pub num: i32,
    pub priority: i32,
    pub skill_id: RecordId,
    pub cond_quest_id: i64,
    pub cond_lv: i32,
    pub event_id: i64,
    pub flag: i64,
    pub started_at: i64,
    pub ended_at: i64,
}

/// `mstTreasureDevice`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MstTreasureDevice {
    pub id: RecordId,
    pub seq_id: i64,
    pub name: String,
    pub ruby: String,
    pub rank: String,
    pub max_lv: i32,
    pub type_text: String,
    pub attack_attri: i32,
    pub individuality: Vec<i64>,
    pub script: Script,
}

/// `mstTreasureDeviceDetail`; `id` equals the noble phantasm ID.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MstTreasureDeviceDetail {
    pub id: RecordId,
    pub detail: String,
    pub detail_short: String,
}

/// `mstTreasureDeviceLv`: per-level functions, one `svals` column per
/// overcharge step.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MstTreasureDeviceLv {
    // Upstream column name is misspelled.
    #[serde(rename = "treaureDeviceId", alias = "treasureDeviceId")]
    pub treasure_device_id: RecordId,
    pub lv: i32,
    pub gauge_count: i32,
    pub detail_id: i64,
    pub td_point: i32,
    pub td_point_q: i32,
    pub td_point_a: i32,
    pub td_point_b: i32,
    pub td_point_ex: i32,
    pub td_point_def: i32,
    pub qp: i64,
    pub func_id: Vec<RecordId>,
    pub svals: Vec<String>,
    pub svals2: Vec<String>,
    pub svals3: Vec<String>,
    pub svals4: Vec<String>,
    pub svals5: Vec<String>,
}

/// `mstSvtTreasureDevice`: a noble phantasm slot on a servant.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MstSvtTreasureDevice {
    pub svt_id: RecordId,
    pub num: i32,
    pub priority: i32,
    pub treasure_device_id: RecordId,
    pub damage: Vec<i32>,
    pub strength_status: i32,
    pub flag: i64,
    pub image_index: i32,
    pub cond_quest_id: i64,
    pub cond_quest_phase: i32,
    pub cond_lv: i32,
    pub cond_friendship_rank: i32,
    pub motion: i32,
    pub card_id: i32,
}

/// `mstSvt`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MstSvt {
    pub id: RecordId,
    pub base_svt_id: i64,
    pub collection_no: i64,
    pub name: String,
    pub ruby: String,
    pub battle_name: String,
    pub class_id: i32,
    #[serde(rename = "type")]
    pub svt_type: i32,
    pub limit_max: i32,
    pub reward_lv: i32,
    pub cost: i32,
    pub attri: i32,
    pub gender_type: i32,
    pub star_rate: i32,
    pub death_rate: i32,
    pub individuality: Vec<i64>,
    /// Class passive skill IDs.
    pub class_passive: Vec<RecordId>,
    pub card_ids: Vec<i32>,
    pub relate_quest_ids: Vec<i64>,
    pub script: Script,
}

/// `mstEquip`: a mystic code.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MstEquip {
    pub id: RecordId,
    pub name: String,
    pub detail: String,
    pub cond_user_lv: i32,
    pub max_lv: i32,
    pub male_image_id: i64,
    pub female_image_id: i64,
    pub image_id: i64,
}

/// `mstEquipSkill`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MstEquipSkill {
    pub equip_id: RecordId,
    pub num: i32,
    pub skill_id: RecordId,
    pub cond_lv: i32,
}

/// `mstCommandCode`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MstCommandCode {
    pub id: RecordId,
    pub collection_no: i64,
    pub name: String,
    pub ruby: String,
    pub rarity: i32,
}

/// `mstCommandCodeSkill`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MstCommandCodeSkill {
    pub command_code_id: RecordId,
    pub num: i32,
    pub priority: i32,
    pub skill_id: RecordId,
    pub started_at: i64,
    pub ended_at: i64,
}

/// `mstItem`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MstItem {
    pub id: RecordId,
    pub name: String,
    pub detail: String,
    pub image_id: i64,
    pub bg_image_id: i32,
    #[serde(rename = "type")]
    pub item_type: i32,
    pub unit: String,
    pub individuality: Vec<i64>,
    pub event_id: i64,
    pub event_group_id: i64,
    pub priority: i64,
    pub drop_priority: i64,
    pub sell_qp: i64,
    pub is_sell: bool,
    pub started_at: i64,
    pub ended_at: i64,
}

/// `mstWar`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MstWar {
    pub id: RecordId,
    pub age: String,
    pub name: String,
    pub long_name: String,
    pub banner_id: i64,
    pub header_image_id: i64,
    pub priority: i64,
    pub parent_war_id: i64,
    pub flag: i64,
    pub event_id: i64,
    pub last_quest_id: i64,
}

/// `mstMap`: one map image of a war.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MstMap {
    pub id: RecordId,
    pub war_id: RecordId,
    pub map_image_id: i64,
    pub map_image_w: i32,
    pub map_image_h: i32,
    pub header_image_id: i64,
    pub bgm_id: i64,
}

/// `mstSpot`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MstSpot {
    pub id: RecordId,
    pub war_id: RecordId,
    pub map_id: i64,
    pub name: String,
    pub image_id: i64,
    pub x: i32,
    pub y: i32,
    pub join_spot_ids: Vec<i64>,
    pub flag: i64,
}

/// `mstQuest`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MstQuest {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "type")]
    pub quest_type: i32,
    pub consume_type: i32,
    pub act_consume: i32,
    pub spot_id: RecordId,
    pub gift_id: i64,
    pub priority: i64,
    pub chapter_id: i32,
    pub chapter_sub_id: i32,
    pub chapter_sub_str: String,
    pub recommend_lv: String,
    pub flag: i64,
    pub notice_at: i64,
    pub opened_at: i64,
    pub closed_at: i64,
}

/// `mstAi` / `mstAiField`: one row of an AI script. Rows sharing `id`
/// form one script.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MstAi {
    pub id: RecordId,
    pub idx: i32,
    pub act_num: i32,
    pub priority: i32,
    pub probability: i32,
    pub cond: i32,
    pub vals: Vec<i64>,
    pub ai_act_id: RecordId,
    pub avals: Vec<i64>,
    pub info_text: String,
    /// Only present on field AI rows.
    pub timing: Option<i32>,
}

/// `mstAiAct`: an AI action, possibly casting a skill.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MstAiAct {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub act_type: i32,
    pub target: i32,
    pub target_individuality: Vec<i64>,
    /// `[skillId, skillLv]` when the action casts a skill.
    pub skill_vals: Vec<i64>,
}

impl MstAiAct {
    /// The skill this action casts, if any.
    #[must_use]
    pub fn skill_id(&self) -> Option<RecordId> {
        self.skill_vals.first().copied().filter(|id| *id > 0)
    }
}
