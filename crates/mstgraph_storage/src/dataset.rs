//! The flat, parsed form of one dataset dump.

use serde::{Deserialize, Serialize};

use crate::record::{
    MstAi, MstAiAct, MstBuff, MstCommandCode, MstCommandCodeSkill, MstEquip, MstEquipSkill,
    MstFunc, MstFuncGroup, MstItem, MstMap, MstQuest, MstSkill, MstSkillDetail, MstSkillLv,
    MstSpot, MstSvt, MstSvtPassiveSkill, MstSvtSkill, MstSvtTreasureDevice, MstTreasureDevice,
    MstTreasureDeviceDetail, MstTreasureDeviceLv, MstWar,
};

/// Every master table the store consumes, as flat row lists.
///
/// This is what a loader hands over. Tables that are absent in the input
/// are empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct RawDataset {
    pub mst_buff: Vec<MstBuff>,
    pub mst_func: Vec<MstFunc>,
    pub mst_func_group: Vec<MstFuncGroup>,
    pub mst_skill: Vec<MstSkill>,
    pub mst_skill_detail: Vec<MstSkillDetail>,
    pub mst_skill_lv: Vec<MstSkillLv>,
    pub mst_svt_skill: Vec<MstSvtSkill>,
    pub mst_treasure_device: Vec<MstTreasureDevice>,
    pub mst_treasure_device_detail: Vec<MstTreasureDeviceDetail>,
    pub mst_treasure_device_lv: Vec<MstTreasureDeviceLv>,
    pub mst_svt_treasure_device: Vec<MstSvtTreasureDevice>,
    pub mst_svt: Vec<MstSvt>,
    pub mst_svt_passive_skill: Vec<MstSvtPassiveSkill>,
    pub mst_equip: Vec<MstEquip>,
    pub mst_equip_skill: Vec<MstEquipSkill>,
    pub mst_command_code: Vec<MstCommandCode>,
    pub mst_command_code_skill: Vec<MstCommandCodeSkill>,
    pub mst_item: Vec<MstItem>,
    pub mst_war: Vec<MstWar>,
    pub mst_map: Vec<MstMap>,
    pub mst_spot: Vec<MstSpot>,
    pub mst_quest: Vec<MstQuest>,
    pub mst_ai_act: Vec<MstAiAct>,
    pub mst_ai: Vec<MstAi>,
    pub mst_ai_field: Vec<MstAi>,
}

impl RawDataset {
    /// Creates an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of rows across all tables.
    #[must_use]
    pub fn row_count(&self) -> usize {
        [
            self.mst_buff.len(),
            self.mst_func.len(),
            self.mst_func_group.len(),
            self.mst_skill.len(),
            self.mst_skill_detail.len(),
            self.mst_skill_lv.len(),
            self.mst_svt_skill.len(),
            self.mst_treasure_device.len(),
            self.mst_treasure_device_detail.len(),
            self.mst_treasure_device_lv.len(),
            self.mst_svt_treasure_device.len(),
            self.mst_svt.len(),
            self.mst_svt_passive_skill.len(),
            self.mst_equip.len(),
            self.mst_equip_skill.len(),
            self.mst_command_code.len(),
            self.mst_command_code_skill.len(),
            self.mst_item.len(),
            self.mst_war.len(),
            self.mst_map.len(),
            self.mst_spot.len(),
            self.mst_quest.len(),
            self.mst_ai_act.len(),
            self.mst_ai.len(),
            self.mst_ai_field.len(),
        ]
        .iter()
        .sum()
    }
}
