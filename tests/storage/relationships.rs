//! Integration tests for the relation index

use mstgraph_foundation::EntityKind;
use mstgraph_storage::EdgeKind;

use crate::sample;

// =============================================================================
// Buckets
// =============================================================================

#[test]
fn buff_to_functions() {
    let snapshot = sample();
    let index = snapshot.index();
    assert_eq!(index.lookup(EdgeKind::BuffFunction, 101), &[1, 6]);
    assert_eq!(index.lookup(EdgeKind::BuffFunction, 102), &[2]);
    assert!(index.lookup(EdgeKind::BuffFunction, 104).is_empty());
}

#[test]
fn trait_vals_are_not_buff_edges() {
    let snapshot = sample();
    assert!(snapshot.index().lookup(EdgeKind::BuffFunction, 3005).is_empty());
}

#[test]
fn function_to_skills_and_nps() {
    let snapshot = sample();
    let index = snapshot.index();
    assert_eq!(index.lookup(EdgeKind::FunctionSkill, 1), &[1000, 3000, 5000]);
    assert_eq!(index.lookup(EdgeKind::FunctionSkill, 2), &[1001, 2000, 4000]);
    assert_eq!(index.lookup(EdgeKind::FunctionNoblePhantasm, 4), &[100_101]);
}

#[test]
fn level_repeats_are_deduplicated() {
    let snapshot = sample();
    // Skill 1000 calls function 1 on both of its levels.
    assert_eq!(
        snapshot
            .index()
            .lookup(EdgeKind::FunctionSkill, 1)
            .iter()
            .filter(|id| **id == 1000)
            .count(),
        1
    );
}

#[test]
fn skill_owners_by_slot_kind() {
    let snapshot = sample();
    let index = snapshot.index();
    assert_eq!(index.lookup(EdgeKind::SkillServantActive, 1002), &[100_100]);
    assert_eq!(index.lookup(EdgeKind::SkillServantPassive, 2000), &[100_100]);
    assert_eq!(index.lookup(EdgeKind::SkillServantExtraPassive, 1003), &[100_100]);
    assert_eq!(index.lookup(EdgeKind::SkillMysticCode, 3000), &[1]);
    assert_eq!(index.lookup(EdgeKind::SkillCommandCode, 4000), &[8_400_010]);
    assert_eq!(index.lookup(EdgeKind::NoblePhantasmServant, 100_101), &[100_100]);
}

#[test]
fn ai_and_war_edges() {
    let snapshot = sample();
    let index = snapshot.index();
    assert_eq!(index.lookup(EdgeKind::SkillAiAct, 5000), &[1]);
    assert_eq!(index.lookup(EdgeKind::AiActAiSvt, 1), &[94_000_001]);
    assert_eq!(index.lookup(EdgeKind::AiActAiField, 1), &[95_000_001]);
    assert_eq!(index.lookup(EdgeKind::WarSpot, 100), &[10_001, 10_002]);
    assert_eq!(index.lookup(EdgeKind::SpotQuest, 10_002), &[1_000_002]);
}

#[test]
fn referencing_yields_typed_refs() {
    let snapshot = sample();
    let refs: Vec<_> = snapshot
        .index()
        .referencing(EdgeKind::FunctionNoblePhantasm, 1)
        .collect();
    assert_eq!(refs, vec![EntityKind::NoblePhantasm.at(100_101)]);
}

#[test]
fn unknown_key_is_empty() {
    let snapshot = sample();
    assert!(snapshot.index().lookup(EdgeKind::FunctionSkill, 424_242).is_empty());
    assert_eq!(snapshot.index().referencing(EdgeKind::WarSpot, 1).count(), 0);
}

// =============================================================================
// Ladder
// =============================================================================

#[test]
fn ladder_edges_above_each_kind() {
    let above_skill: Vec<_> = EdgeKind::ancestors_of(EntityKind::Skill).collect();
    assert_eq!(
        above_skill,
        vec![
            EdgeKind::SkillServantActive,
            EdgeKind::SkillServantPassive,
            EdgeKind::SkillServantExtraPassive,
            EdgeKind::SkillMysticCode,
            EdgeKind::SkillCommandCode,
        ]
    );
    assert_eq!(EdgeKind::ancestors_of(EntityKind::Servant).count(), 0);
    assert_eq!(EdgeKind::ancestors_of(EntityKind::Quest).count(), 0);
}

// =============================================================================
// Stats
// =============================================================================

#[test]
fn edge_stats() {
    let snapshot = sample();
    let stats = snapshot.index().stats();
    assert_eq!(stats.len(), EdgeKind::ALL.len());

    let buff = stats.iter().find(|s| s.edge == EdgeKind::BuffFunction).unwrap();
    assert_eq!((buff.keys, buff.entries), (3, 4));

    let skill = stats.iter().find(|s| s.edge == EdgeKind::FunctionSkill).unwrap();
    assert_eq!((skill.keys, skill.entries), (5, 9));
}
