//! The relation index: reverse foreign-key lookups for every edge kind.
//!
//! For each edge kind, maps a referenced record's ID to the IDs of the
//! records that reference it. Built in one pass over the store and never
//! mutated afterwards.

use std::collections::{HashMap, HashSet};

use mstgraph_datavals::FuncType;
use mstgraph_foundation::{EntityRef, RecordId};
use serde::Serialize;

use crate::consistency::{ConsistencyReport, ConsistencyWarning};
use crate::edge::EdgeKind;
use crate::entity::EntityStore;

type Buckets = HashMap<RecordId, Box<[RecordId]>>;

/// Reverse lookup tables, one per edge kind.
#[derive(Clone, Debug, Default)]
pub struct RelationIndex {
    /// Indexed by `EdgeKind::ordinal`.
    edges: Vec<Buckets>,
}

/// Entry counts for one edge kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStats {
    /// The edge kind.
    pub edge: EdgeKind,
    /// Distinct referenced IDs.
    pub keys: usize,
    /// Total (key, referencing ID) pairs.
    pub entries: usize,
}

impl RelationIndex {
    /// Builds the index from a store.
    ///
    /// Every foreign-key value contributes one entry; list-valued keys
    /// contribute one per element. A key naming a missing record is
    /// recorded as a dangling reference and left out. Buckets are
    /// deduplicated and ordered by the referencing kind's sort field,
    /// then by ID.
    #[must_use]
    pub fn build(store: &EntityStore, report: &mut ConsistencyReport) -> Self {
        let mut builder = IndexBuilder::new(store, report);

        for record in store.functions() {
            let func = &record.func;
            let trait_vals =
                FuncType::from_code(func.func_type).is_some_and(FuncType::vals_are_traits);
            if !trait_vals {
                for &buff in &func.vals {
                    builder.add(EdgeKind::BuffFunction, buff, func.id);
                }
            }
        }

        for record in store.skills() {
            for level in &record.levels {
                for &func in &level.func_id {
                    builder.add(EdgeKind::FunctionSkill, func, record.skill.id);
                }
            }
        }

        for record in store.noble_phantasms() {
            for level in &record.levels {
                for &func in &level.func_id {
                    builder.add(EdgeKind::FunctionNoblePhantasm, func, record.td.id);
                }
            }
        }

        for record in store.servants() {
            let svt = record.svt.id;
            for slot in &record.skills {
                builder.add(EdgeKind::SkillServantActive, slot.skill_id, svt);
            }
            for &skill in &record.svt.class_passive {
                builder.add(EdgeKind::SkillServantPassive, skill, svt);
            }
            for row in &record.passives {
                builder.add(EdgeKind::SkillServantExtraPassive, row.skill_id, svt);
            }
            for slot in &record.tds {
                builder.add(EdgeKind::NoblePhantasmServant, slot.treasure_device_id, svt);
            }
        }

        for record in store.mystic_codes() {
            for row in &record.skills {
                builder.add(EdgeKind::SkillMysticCode, row.skill_id, record.equip.id);
            }
        }

        for record in store.command_codes() {
            for row in &record.skills {
                builder.add(EdgeKind::SkillCommandCode, row.skill_id, record.cc.id);
            }
        }

        for act in store.ai_acts() {
            if let Some(skill) = act.skill_id() {
                builder.add(EdgeKind::SkillAiAct, skill, act.id);
            }
        }

        for ai in store.ai_svts() {
            for row in &ai.rows {
                builder.add(EdgeKind::AiActAiSvt, row.ai_act_id, ai.id);
            }
        }

        for ai in store.ai_fields() {
            for row in &ai.rows {
                builder.add(EdgeKind::AiActAiField, row.ai_act_id, ai.id);
            }
        }

        for spot in store.spots() {
            builder.add(EdgeKind::WarSpot, spot.war_id, spot.id);
        }

        for quest in store.quests() {
            builder.add(EdgeKind::SpotQuest, quest.spot_id, quest.id);
        }

        let index = builder.finish();
        tracing::debug!(
            edges = EdgeKind::COUNT,
            entries = index.stats().iter().map(|s| s.entries).sum::<usize>(),
            "index.build.complete"
        );
        index
    }

    /// IDs of the records that reference `key` through `edge`.
    ///
    /// Empty if nothing does.
    #[must_use]
    pub fn lookup(&self, edge: EdgeKind, key: RecordId) -> &[RecordId] {
        self.edges
            .get(edge.ordinal())
            .and_then(|buckets| buckets.get(&key))
            .map(|ids| &**ids)
            .unwrap_or_default()
    }

    /// Like [`lookup`](Self::lookup), returning typed references.
    pub fn referencing(
        &self,
        edge: EdgeKind,
        key: RecordId,
    ) -> impl Iterator<Item = EntityRef> + '_ {
        let kind = edge.referencing_kind();
        self.lookup(edge, key).iter().map(move |id| kind.at(*id))
    }

    /// Every (key, referencing IDs) pair of one edge kind, in no order.
    pub fn entries(&self, edge: EdgeKind) -> impl Iterator<Item = (RecordId, &[RecordId])> {
        self.edges
            .get(edge.ordinal())
            .into_iter()
            .flat_map(|buckets| buckets.iter().map(|(k, v)| (*k, &**v)))
    }

    /// Per-edge entry counts.
    #[must_use]
    pub fn stats(&self) -> Vec<EdgeStats> {
        EdgeKind::ALL
            .into_iter()
            .map(|edge| {
                let buckets = self.edges.get(edge.ordinal());
                EdgeStats {
                    edge,
                    keys: buckets.map_or(0, HashMap::len),
                    entries: buckets.map_or(0, |b| b.values().map(|ids| ids.len()).sum()),
                }
            })
            .collect()
    }
}

/// Accumulates raw edges, then sorts and freezes them.
struct IndexBuilder<'a> {
    store: &'a EntityStore,
    report: &'a mut ConsistencyReport,
    edges: Vec<HashMap<RecordId, Vec<RecordId>>>,
    /// Dangling references already reported, so per-level repeats warn once.
    dangling: HashSet<(EdgeKind, RecordId, RecordId)>,
}

impl<'a> IndexBuilder<'a> {
    fn new(store: &'a EntityStore, report: &'a mut ConsistencyReport) -> Self {
        Self {
            store,
            report,
            edges: vec![HashMap::new(); EdgeKind::COUNT],
            dangling: HashSet::new(),
        }
    }

    fn add(&mut self, edge: EdgeKind, key: RecordId, referencing: RecordId) {
        let target = edge.key_kind().at(key);
        if !self.store.contains(target) {
            if !self.dangling.insert((edge, referencing, key)) {
                return;
            }
            let from = edge.referencing_kind().at(referencing);
            tracing::debug!(%edge, %from, missing = %target, "index.edge.omitted");
            self.report.record(ConsistencyWarning::DanglingReference {
                edge,
                from,
                missing: target,
            });
            return;
        }
        self.edges[edge.ordinal()].entry(key).or_default().push(referencing);
    }

    fn finish(self) -> RelationIndex {
        let store = self.store;
        let edges = EdgeKind::ALL
            .into_iter()
            .zip(self.edges)
            .map(|(edge, buckets)| {
                let kind = edge.referencing_kind();
                buckets
                    .into_iter()
                    .map(|(key, mut ids)| {
                        ids.sort_unstable_by_key(|id| (store.sort_key(kind.at(*id)), *id));
                        ids.dedup();
                        (key, ids.into_boxed_slice())
                    })
                    .collect::<Buckets>()
            })
            .collect();
        RelationIndex { edges }
    }
}
