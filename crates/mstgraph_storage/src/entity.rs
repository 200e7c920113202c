//! The entity store: every record of a snapshot, keyed by kind and ID.
//!
//! Child rows (levels, details, slot rows) are grouped under their parent
//! record when the store is built, so lookups never scan flat tables.
//! Tables are persistent maps; cloning a store is O(1).

use std::collections::HashMap;
use std::sync::Arc;

use im::OrdMap;
use mstgraph_foundation::{EntityKind, EntityRef, RecordId};

use crate::consistency::{ConsistencyReport, ConsistencyWarning};
use crate::dataset::RawDataset;
use crate::record::{
    MstAi, MstAiAct, MstBuff, MstCommandCode, MstCommandCodeSkill, MstEquip, MstEquipSkill,
    MstFunc, MstFuncGroup, MstItem, MstMap, MstQuest, MstSkill, MstSkillDetail, MstSkillLv,
    MstSpot, MstSvt, MstSvtPassiveSkill, MstSvtSkill, MstSvtTreasureDevice, MstTreasureDevice,
    MstTreasureDeviceDetail, MstTreasureDeviceLv, MstWar,
};

/// A function with its event groupings.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionRecord {
    /// The function row.
    pub func: MstFunc,
    /// `mstFuncGroup` rows for this function.
    pub groups: Vec<MstFuncGroup>,
}

/// A skill with its details and levels.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillRecord {
    /// The skill row.
    pub skill: MstSkill,
    /// `mstSkillDetail` rows.
    pub details: Vec<MstSkillDetail>,
    /// `mstSkillLv` rows, ascending by level.
    pub levels: Vec<MstSkillLv>,
}

impl SkillRecord {
    /// Every function any level calls, in order of first appearance.
    #[must_use]
    pub fn func_ids(&self) -> Vec<RecordId> {
        union_in_order(self.levels.iter().map(|lv| lv.func_id.as_slice()))
    }
}

/// A noble phantasm with its details and levels.
#[derive(Clone, Debug, PartialEq)]
pub struct TdRecord {
    /// The noble phantasm row.
    pub td: MstTreasureDevice,
    /// `mstTreasureDeviceDetail` rows.
    pub details: Vec<MstTreasureDeviceDetail>,
    /// `mstTreasureDeviceLv` rows, ascending by level.
    pub levels: Vec<MstTreasureDeviceLv>,
}

impl TdRecord {
    /// Every function any level calls, in order of first appearance.
    #[must_use]
    pub fn func_ids(&self) -> Vec<RecordId> {
        union_in_order(self.levels.iter().map(|lv| lv.func_id.as_slice()))
    }
}

/// Levels may add, drop or reorder functions; later levels append what
/// earlier ones lacked.
fn union_in_order<'a>(lists: impl Iterator<Item = &'a [RecordId]>) -> Vec<RecordId> {
    let mut ids = Vec::new();
    for &id in lists.flatten() {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

/// A servant with its skill and noble phantasm slots.
#[derive(Clone, Debug, PartialEq)]
pub struct ServantRecord {
    /// The servant row.
    pub svt: MstSvt,
    /// Active skill slots, by (num, priority).
    pub skills: Vec<MstSvtSkill>,
    /// Noble phantasm slots, by (num, priority).
    pub tds: Vec<MstSvtTreasureDevice>,
    /// Extra passive rows, by (num, priority).
    pub passives: Vec<MstSvtPassiveSkill>,
}

/// A mystic code with its skill rows.
#[derive(Clone, Debug, PartialEq)]
pub struct MysticCodeRecord {
    /// The equipment row.
    pub equip: MstEquip,
    /// Skill rows, by num.
    pub skills: Vec<MstEquipSkill>,
}

/// A command code with its skill rows.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandCodeRecord {
    /// The command code row.
    pub cc: MstCommandCode,
    /// Skill rows, by (num, priority).
    pub skills: Vec<MstCommandCodeSkill>,
}

/// A war with its map images.
#[derive(Clone, Debug, PartialEq)]
pub struct WarRecord {
    /// The war row.
    pub war: MstWar,
    /// `mstMap` rows.
    pub maps: Vec<MstMap>,
}

/// One AI script: every row sharing an AI ID.
#[derive(Clone, Debug, PartialEq)]
pub struct AiRecord {
    /// The AI ID.
    pub id: RecordId,
    /// Rows, by (idx, priority).
    pub rows: Vec<MstAi>,
}

type Table<R> = OrdMap<RecordId, Arc<R>>;

/// Immutable collection of every record in one dataset.
#[derive(Clone, Debug, Default)]
pub struct EntityStore {
    buffs: Table<MstBuff>,
    functions: Table<FunctionRecord>,
    skills: Table<SkillRecord>,
    tds: Table<TdRecord>,
    servants: Table<ServantRecord>,
    mystic_codes: Table<MysticCodeRecord>,
    command_codes: Table<CommandCodeRecord>,
    items: Table<MstItem>,
    wars: Table<WarRecord>,
    spots: Table<MstSpot>,
    quests: Table<MstQuest>,
    ai_acts: Table<MstAiAct>,
    ai_svts: Table<AiRecord>,
    ai_fields: Table<AiRecord>,
}

impl EntityStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a flat dataset, grouping child rows under
    /// their parents. Duplicate IDs and orphaned child rows are recorded
    /// in `report`.
    #[must_use]
    pub fn from_dataset(dataset: RawDataset, report: &mut ConsistencyReport) -> Self {
        let RawDataset {
            mst_buff,
            mst_func,
            mst_func_group,
            mst_skill,
            mst_skill_detail,
            mst_skill_lv,
            mst_svt_skill,
            mst_treasure_device,
            mst_treasure_device_detail,
            mst_treasure_device_lv,
            mst_svt_treasure_device,
            mst_svt,
            mst_svt_passive_skill,
            mst_equip,
            mst_equip_skill,
            mst_command_code,
            mst_command_code_skill,
            mst_item,
            mst_war,
            mst_map,
            mst_spot,
            mst_quest,
            mst_ai_act,
            mst_ai,
            mst_ai_field,
        } = dataset;

        let mut store = Self::new();

        store.buffs = insert_all(EntityKind::Buff, mst_buff, |b| b.id, report);

        let mut groups = group_by(mst_func_group, |g| g.func_id);
        store.functions = insert_all(
            EntityKind::Function,
            mst_func.into_iter().map(|func| FunctionRecord {
                groups: groups.remove(&func.id).unwrap_or_default(),
                func,
            }),
            |r| r.func.id,
            report,
        );
        report_orphans("mstFuncGroup", EntityKind::Function, groups, report);

        let mut details = group_by(mst_skill_detail, |d| d.id);
        let mut levels = group_by(mst_skill_lv, |l| l.skill_id);
        store.skills = insert_all(
            EntityKind::Skill,
            mst_skill.into_iter().map(|skill| {
                let mut lvs = levels.remove(&skill.id).unwrap_or_default();
                lvs.sort_by_key(|l| l.lv);
                SkillRecord {
                    details: details.remove(&skill.id).unwrap_or_default(),
                    levels: lvs,
                    skill,
                }
            }),
            |r| r.skill.id,
            report,
        );
        report_orphans("mstSkillDetail", EntityKind::Skill, details, report);
        report_orphans("mstSkillLv", EntityKind::Skill, levels, report);

        let mut details = group_by(mst_treasure_device_detail, |d| d.id);
        let mut levels = group_by(mst_treasure_device_lv, |l| l.treasure_device_id);
        store.tds = insert_all(
            EntityKind::NoblePhantasm,
            mst_treasure_device.into_iter().map(|td| {
                let mut lvs = levels.remove(&td.id).unwrap_or_default();
                lvs.sort_by_key(|l| l.lv);
                TdRecord {
                    details: details.remove(&td.id).unwrap_or_default(),
                    levels: lvs,
                    td,
                }
            }),
            |r| r.td.id,
            report,
        );
        report_orphans("mstTreasureDeviceDetail", EntityKind::NoblePhantasm, details, report);
        report_orphans("mstTreasureDeviceLv", EntityKind::NoblePhantasm, levels, report);

        let mut svt_skills = group_by(mst_svt_skill, |s| s.svt_id);
        let mut svt_tds = group_by(mst_svt_treasure_device, |t| t.svt_id);
        let mut svt_passives = group_by(mst_svt_passive_skill, |p| p.svt_id);
        store.servants = insert_all(
            EntityKind::Servant,
            mst_svt.into_iter().map(|svt| {
                let mut skills = svt_skills.remove(&svt.id).unwrap_or_default();
                skills.sort_by_key(|s| (s.num, s.priority));
                let mut tds = svt_tds.remove(&svt.id).unwrap_or_default();
                tds.sort_by_key(|t| (t.num, t.priority));
                let mut passives = svt_passives.remove(&svt.id).unwrap_or_default();
                passives.sort_by_key(|p| (p.num, p.priority));
                ServantRecord {
                    svt,
                    skills,
                    tds,
                    passives,
                }
            }),
            |r| r.svt.id,
            report,
        );
        report_orphans("mstSvtSkill", EntityKind::Servant, svt_skills, report);
        report_orphans("mstSvtTreasureDevice", EntityKind::Servant, svt_tds, report);
        report_orphans("mstSvtPassiveSkill", EntityKind::Servant, svt_passives, report);

        let mut equip_skills = group_by(mst_equip_skill, |s| s.equip_id);
        store.mystic_codes = insert_all(
            EntityKind::MysticCode,
            mst_equip.into_iter().map(|equip| {
                let mut skills = equip_skills.remove(&equip.id).unwrap_or_default();
                skills.sort_by_key(|s| s.num);
                MysticCodeRecord { equip, skills }
            }),
            |r| r.equip.id,
            report,
        );
        report_orphans("mstEquipSkill", EntityKind::MysticCode, equip_skills, report);

        let mut cc_skills = group_by(mst_command_code_skill, |s| s.command_code_id);
        store.command_codes = insert_all(
            EntityKind::CommandCode,
            mst_command_code.into_iter().map(|cc| {
                let mut skills = cc_skills.remove(&cc.id).unwrap_or_default();
                skills.sort_by_key(|s| (s.num, s.priority));
                CommandCodeRecord { cc, skills }
            }),
            |r| r.cc.id,
            report,
        );
        report_orphans("mstCommandCodeSkill", EntityKind::CommandCode, cc_skills, report);

        store.items = insert_all(EntityKind::Item, mst_item, |i| i.id, report);

        let mut maps = group_by(mst_map, |m| m.war_id);
        store.wars = insert_all(
            EntityKind::War,
            mst_war.into_iter().map(|war| WarRecord {
                maps: maps.remove(&war.id).unwrap_or_default(),
                war,
            }),
            |r| r.war.id,
            report,
        );
        report_orphans("mstMap", EntityKind::War, maps, report);

        store.spots = insert_all(EntityKind::Spot, mst_spot, |s| s.id, report);
        store.quests = insert_all(EntityKind::Quest, mst_quest, |q| q.id, report);
        store.ai_acts = insert_all(EntityKind::AiAct, mst_ai_act, |a| a.id, report);
        store.ai_svts = group_ai(mst_ai);
        store.ai_fields = group_ai(mst_ai_field);

        tracing::debug!(
            buffs = store.buffs.len(),
            functions = store.functions.len(),
            skills = store.skills.len(),
            noble_phantasms = store.tds.len(),
            servants = store.servants.len(),
            "store.build.complete"
        );
        store
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Looks up a buff.
    #[must_use]
    pub fn buff(&self, id: RecordId) -> Option<&Arc<MstBuff>> {
        self.buffs.get(&id)
    }

    /// Looks up a function.
    #[must_use]
    pub fn function(&self, id: RecordId) -> Option<&Arc<FunctionRecord>> {
        self.functions.get(&id)
    }

    /// Looks up a skill.
    #[must_use]
    pub fn skill(&self, id: RecordId) -> Option<&Arc<SkillRecord>> {
        self.skills.get(&id)
    }

    /// Looks up a noble phantasm.
    #[must_use]
    pub fn noble_phantasm(&self, id: RecordId) -> Option<&Arc<TdRecord>> {
        self.tds.get(&id)
    }

    /// Looks up a servant.
    #[must_use]
    pub fn servant(&self, id: RecordId) -> Option<&Arc<ServantRecord>> {
        self.servants.get(&id)
    }

    /// Looks up a mystic code.
    #[must_use]
    pub fn mystic_code(&self, id: RecordId) -> Option<&Arc<MysticCodeRecord>> {
        self.mystic_codes.get(&id)
    }

    /// Looks up a command code.
    #[must_use]
    pub fn command_code(&self, id: RecordId) -> Option<&Arc<CommandCodeRecord>> {
        self.command_codes.get(&id)
    }

    /// Looks up an item.
    #[must_use]
    pub fn item(&self, id: RecordId) -> Option<&Arc<MstItem>> {
        self.items.get(&id)
    }

    /// Looks up a war.
    #[must_use]
    pub fn war(&self, id: RecordId) -> Option<&Arc<WarRecord>> {
        self.wars.get(&id)
    }

    /// Looks up a spot.
    #[must_use]
    pub fn spot(&self, id: RecordId) -> Option<&Arc<MstSpot>> {
        self.spots.get(&id)
    }

    /// Looks up a quest.
    #[must_use]
    pub fn quest(&self, id: RecordId) -> Option<&Arc<MstQuest>> {
        self.quests.get(&id)
    }

    /// Looks up an AI action.
    #[must_use]
    pub fn ai_act(&self, id: RecordId) -> Option<&Arc<MstAiAct>> {
        self.ai_acts.get(&id)
    }

    /// Looks up a servant AI script.
    #[must_use]
    pub fn ai_svt(&self, id: RecordId) -> Option<&Arc<AiRecord>> {
        self.ai_svts.get(&id)
    }

    /// Looks up a field AI script.
    #[must_use]
    pub fn ai_field(&self, id: RecordId) -> Option<&Arc<AiRecord>> {
        self.ai_fields.get(&id)
    }

    // =========================================================================
    // Kind-generic access
    // =========================================================================

    /// Returns true if the referenced record exists.
    #[must_use]
    pub fn contains(&self, entity: EntityRef) -> bool {
        let id = &entity.id;
        match entity.kind {
            EntityKind::Buff => self.buffs.contains_key(id),
            EntityKind::Function => self.functions.contains_key(id),
            EntityKind::Skill => self.skills.contains_key(id),
            EntityKind::NoblePhantasm => self.tds.contains_key(id),
            EntityKind::Servant => self.servants.contains_key(id),
            EntityKind::MysticCode => self.mystic_codes.contains_key(id),
            EntityKind::CommandCode => self.command_codes.contains_key(id),
            EntityKind::Item => self.items.contains_key(id),
            EntityKind::War => self.wars.contains_key(id),
            EntityKind::Spot => self.spots.contains_key(id),
            EntityKind::Quest => self.quests.contains_key(id),
            EntityKind::AiAct => self.ai_acts.contains_key(id),
            EntityKind::AiSvt => self.ai_svts.contains_key(id),
            EntityKind::AiField => self.ai_fields.contains_key(id),
        }
    }

    /// Number of records of a kind.
    #[must_use]
    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Buff => self.buffs.len(),
            EntityKind::Function => self.functions.len(),
            EntityKind::Skill => self.skills.len(),
            EntityKind::NoblePhantasm => self.tds.len(),
            EntityKind::Servant => self.servants.len(),
            EntityKind::MysticCode => self.mystic_codes.len(),
            EntityKind::CommandCode => self.command_codes.len(),
            EntityKind::Item => self.items.len(),
            EntityKind::War => self.wars.len(),
            EntityKind::Spot => self.spots.len(),
            EntityKind::Quest => self.quests.len(),
            EntityKind::AiAct => self.ai_acts.len(),
            EntityKind::AiSvt => self.ai_svts.len(),
            EntityKind::AiField => self.ai_fields.len(),
        }
    }

    /// IDs of every record of a kind, ascending.
    #[must_use]
    pub fn ids(&self, kind: EntityKind) -> Vec<RecordId> {
        match kind {
            EntityKind::Buff => self.buffs.keys().copied().collect(),
            EntityKind::Function => self.functions.keys().copied().collect(),
            EntityKind::Skill => self.skills.keys().copied().collect(),
            EntityKind::NoblePhantasm => self.tds.keys().copied().collect(),
            EntityKind::Servant => self.servants.keys().copied().collect(),
            EntityKind::MysticCode => self.mystic_codes.keys().copied().collect(),
            EntityKind::CommandCode => self.command_codes.keys().copied().collect(),
            EntityKind::Item => self.items.keys().copied().collect(),
            EntityKind::War => self.wars.keys().copied().collect(),
            EntityKind::Spot => self.spots.keys().copied().collect(),
            EntityKind::Quest => self.quests.keys().copied().collect(),
            EntityKind::AiAct => self.ai_acts.keys().copied().collect(),
            EntityKind::AiSvt => self.ai_svts.keys().copied().collect(),
            EntityKind::AiField => self.ai_fields.keys().copied().collect(),
        }
    }

    /// The explicit ordering field of a record, if its kind has one.
    ///
    /// Servants order by collection number; wars, quests and items by
    /// priority. Other kinds order by ID alone.
    #[must_use]
    pub fn sort_key(&self, entity: EntityRef) -> Option<i64> {
        match entity.kind {
            EntityKind::Servant => self.servant(entity.id).map(|s| s.svt.collection_no),
            EntityKind::War => self.war(entity.id).map(|w| w.war.priority),
            EntityKind::Quest => self.quest(entity.id).map(|q| q.priority),
            EntityKind::Item => self.item(entity.id).map(|i| i.priority),
            _ => None,
        }
    }

    /// Total number of records across all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        EntityKind::ALL.iter().map(|k| self.count(*k)).sum()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // =========================================================================
    // Table iteration (for index building)
    // =========================================================================

    pub(crate) fn functions(&self) -> impl Iterator<Item = &Arc<FunctionRecord>> {
        self.functions.values()
    }

    pub(crate) fn skills(&self) -> impl Iterator<Item = &Arc<SkillRecord>> {
        self.skills.values()
    }

    pub(crate) fn noble_phantasms(&self) -> impl Iterator<Item = &Arc<TdRecord>> {
        self.tds.values()
    }

    pub(crate) fn servants(&self) -> impl Iterator<Item = &Arc<ServantRecord>> {
        self.servants.values()
    }

    pub(crate) fn mystic_codes(&self) -> impl Iterator<Item = &Arc<MysticCodeRecord>> {
        self.mystic_codes.values()
    }

    pub(crate) fn command_codes(&self) -> impl Iterator<Item = &Arc<CommandCodeRecord>> {
        self.command_codes.values()
    }

    pub(crate) fn spots(&self) -> impl Iterator<Item = &Arc<MstSpot>> {
        self.spots.values()
    }

    pub(crate) fn quests(&self) -> impl Iterator<Item = &Arc<MstQuest>> {
        self.quests.values()
    }

    pub(crate) fn ai_acts(&self) -> impl Iterator<Item = &Arc<MstAiAct>> {
        self.ai_acts.values()
    }

    pub(crate) fn ai_svts(&self) -> impl Iterator<Item = &Arc<AiRecord>> {
        self.ai_svts.values()
    }

    pub(crate) fn ai_fields(&self) -> impl Iterator<Item = &Arc<AiRecord>> {
        self.ai_fields.values()
    }
}

/// Inserts records, keeping the first of any duplicate IDs.
fn insert_all<R>(
    kind: EntityKind,
    records: impl IntoIterator<Item = R>,
    id_of: impl Fn(&R) -> RecordId,
    report: &mut ConsistencyReport,
) -> Table<R> {
    let mut table = Table::new();
    for record in records {
        let id = id_of(&record);
        if table.contains_key(&id) {
            report.record(ConsistencyWarning::DuplicateId {
                entity: kind.at(id),
            });
            continue;
        }
        table.insert(id, Arc::new(record));
    }
    table
}

fn group_by<T>(rows: Vec<T>, key: impl Fn(&T) -> RecordId) -> HashMap<RecordId, Vec<T>> {
    let mut groups: HashMap<RecordId, Vec<T>> = HashMap::new();
    for row in rows {
        groups.entry(key(&row)).or_default().push(row);
    }
    groups
}

/// Records every group whose parent never claimed it.
fn report_orphans<T>(
    table: &'static str,
    parent_kind: EntityKind,
    leftover: HashMap<RecordId, Vec<T>>,
    report: &mut ConsistencyReport,
) {
    let mut parents: Vec<_> = leftover.into_keys().collect();
    parents.sort_unstable();
    for parent in parents {
        report.record(ConsistencyWarning::OrphanRow {
            table,
            parent: parent_kind.at(parent),
        });
    }
}

fn group_ai(rows: Vec<MstAi>) -> Table<AiRecord> {
    group_by(rows, |r| r.id)
        .into_iter()
        .map(|(id, mut rows)| {
            rows.sort_by_key(|r| (r.idx, r.priority));
            (id, Arc::new(AiRecord { id, rows }))
        })
        .collect()
}
