//! Integration tests for the entity store

use mstgraph_foundation::EntityKind;

use crate::sample;

// =============================================================================
// Counts
// =============================================================================

#[test]
fn counts_per_kind() {
    let snapshot = sample();
    let store = snapshot.store();
    let expected = [
        (EntityKind::Buff, 4),
        (EntityKind::Function, 6),
        (EntityKind::Skill, 8),
        (EntityKind::NoblePhantasm, 1),
        (EntityKind::Servant, 1),
        (EntityKind::MysticCode, 1),
        (EntityKind::CommandCode, 1),
        (EntityKind::Item, 1),
        (EntityKind::War, 1),
        (EntityKind::Spot, 2),
        (EntityKind::Quest, 3),
        (EntityKind::AiAct, 2),
        (EntityKind::AiSvt, 1),
        (EntityKind::AiField, 1),
    ];
    for (kind, count) in expected {
        assert_eq!(store.count(kind), count, "{kind}");
    }
}

#[test]
fn ids_are_ascending() {
    let snapshot = sample();
    assert_eq!(
        snapshot.store().ids(EntityKind::Skill),
        vec![1000, 1001, 1002, 1003, 2000, 3000, 4000, 5000]
    );
}

// =============================================================================
// Child Rows
// =============================================================================

#[test]
fn skill_levels_are_grouped_and_ordered() {
    let snapshot = sample();
    let skill = snapshot.store().skill(1000).unwrap();
    let levels: Vec<_> = skill.levels.iter().map(|l| l.lv).collect();
    assert_eq!(levels, vec![1, 2]);
    assert_eq!(skill.func_ids(), &[1]);
    assert_eq!(skill.details.len(), 1);
}

#[test]
fn misspelled_td_level_column_is_read() {
    let snapshot = sample();
    let td = snapshot.store().noble_phantasm(100_101).unwrap();
    assert_eq!(td.levels.len(), 1);
    assert_eq!(td.func_ids(), &[1, 4]);
}

#[test]
fn servant_rows_are_grouped() {
    let snapshot = sample();
    let svt = snapshot.store().servant(100_100).unwrap();
    let skills: Vec<_> = svt.skills.iter().map(|s| s.skill_id).collect();
    assert_eq!(skills, vec![1000, 1001, 1002]);
    assert_eq!(svt.passives.len(), 1);
    assert_eq!(svt.tds.len(), 1);
}

#[test]
fn function_groups_attach_to_functions() {
    let snapshot = sample();
    let store = snapshot.store();
    assert_eq!(store.function(4).unwrap().groups.len(), 1);
    assert!(store.function(1).unwrap().groups.is_empty());
}

#[test]
fn ai_rows_group_by_script() {
    let snapshot = sample();
    let ai = snapshot.store().ai_svt(94_000_001).unwrap();
    assert_eq!(ai.rows.len(), 2);
    let field = snapshot.store().ai_field(95_000_001).unwrap();
    assert_eq!(field.rows[0].timing, Some(1));
}

#[test]
fn contains_checks_kind() {
    let snapshot = sample();
    let store = snapshot.store();
    assert!(store.contains(EntityKind::Buff.at(101)));
    assert!(!store.contains(EntityKind::Function.at(101)));
    assert!(!store.contains(EntityKind::Skill.at(77_777)));
}
