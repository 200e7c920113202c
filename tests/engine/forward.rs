//! Integration tests for forward expansion

use mstgraph_datavals::FieldName;
use mstgraph_engine::{Engine, ForwardOptions, FormattedEntity, NiceServant, NiceSkill};
use mstgraph_foundation::EntityKind;

use crate::{sample, show};

fn servant() -> NiceServant {
    match show(EntityKind::Servant, 100_100) {
        FormattedEntity::Servant(svt) => svt,
        other => panic!("expected servant, got {:?}", other.entity()),
    }
}

fn skill(id: i64) -> NiceSkill {
    match show(EntityKind::Skill, id) {
        FormattedEntity::Skill(skill) => skill,
        other => panic!("expected skill, got {:?}", other.entity()),
    }
}

// =============================================================================
// Inlining
// =============================================================================

#[test]
fn servant_inlines_skills_functions_and_buffs() {
    let svt = servant();
    let skills: Vec<_> = svt.skills.iter().map(|s| s.skill.full().unwrap().id).collect();
    assert_eq!(skills, vec![1000, 1001, 1002]);

    let charisma = svt.skills[0].skill.full().unwrap();
    let function = charisma.functions[0].function.full().unwrap();
    assert_eq!(function.func_id, 1);
    assert_eq!(function.buffs[0].full().unwrap().name, "Attack Up");
}

#[test]
fn svals_are_decoded_per_level() {
    let charisma = skill(1000);
    let svals = &charisma.functions[0].svals;
    assert_eq!(svals.len(), 2);
    assert_eq!(svals[0].int(FieldName::Value), Some(100));
    assert_eq!(svals[1].int(FieldName::Value), Some(200));
    assert_eq!(svals[1].int(FieldName::Turn), Some(3));
    assert_eq!(charisma.cool_down, vec![7, 6]);
}

#[test]
fn functions_follow_call_order() {
    let mana_burst = skill(1001);
    let ids: Vec<_> = mana_burst.functions.iter().map(|f| f.func_id()).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn class_passive_and_extra_passive() {
    let svt = servant();
    let passives: Vec<_> = svt
        .class_passive
        .iter()
        .map(|s| s.full().unwrap().id)
        .collect();
    assert_eq!(passives, vec![2000]);
    assert_eq!(svt.extra_passive.len(), 1);
    assert_eq!(svt.extra_passive[0].full().unwrap().id, 1003);
}

#[test]
fn noble_phantasm_overcharge_columns() {
    let svt = servant();
    let slot = &svt.noble_phantasms[0];
    assert_eq!(slot.np_distribution, vec![16, 33, 51]);

    let td = slot.td.full().unwrap();
    assert_eq!(td.name, "Excalibur");
    assert_eq!(td.functions.len(), 2);
    assert_eq!(td.functions[0].svals2[0].int(FieldName::Value), Some(200));
    assert!(td.functions[0].svals3.is_empty());
    assert_eq!(td.np_gain.buster, vec![86]);
}

// =============================================================================
// Depth Bounds
// =============================================================================

#[test]
fn depth_zero_formats_root_only() {
    let snapshot = sample();
    let options = ForwardOptions::default().with_max_depth(0);
    let entity = EntityKind::Servant.at(100_100);
    let FormattedEntity::Servant(svt) =
        Engine::default().expand_forward_with(&snapshot, entity, options).unwrap()
    else {
        panic!("expected servant");
    };
    assert!(svt.skills.iter().all(|s| s.skill.is_reference()));
    assert_eq!(
        svt.skills[0].skill.reference(),
        Some(EntityKind::Skill.at(1000))
    );
    assert!(svt.noble_phantasms[0].td.is_reference());
}

#[test]
fn depth_one_stops_below_skills() {
    let snapshot = sample();
    let options = ForwardOptions::default().with_max_depth(1);
    let entity = EntityKind::Servant.at(100_100);
    let FormattedEntity::Servant(svt) =
        Engine::default().expand_forward_with(&snapshot, entity, options).unwrap()
    else {
        panic!("expected servant");
    };
    let charisma = svt.skills[0].skill.full().unwrap();
    let call = &charisma.functions[0];
    assert_eq!(call.function.reference(), Some(EntityKind::Function.at(1)));
    // Values are decoded even when the function itself is a reference.
    assert_eq!(call.svals.len(), 2);
}

#[test]
fn requested_depth_is_clamped_to_engine_limit() {
    let options = ForwardOptions::default().with_max_depth(100);
    assert_eq!(options.effective_depth(8), 8);
    assert_eq!(ForwardOptions::default().effective_depth(8), 8);
}

// =============================================================================
// Cycles and Dependencies
// =============================================================================

#[test]
fn depend_function_is_inlined() {
    let instinct = skill(1002);
    let call = &instinct.functions[0];
    assert_eq!(call.svals[0].int(FieldName::DependFuncId), Some(5));

    let depend = call.depend_function.as_ref().unwrap().full().unwrap();
    assert_eq!(depend.func_id, 5);
    assert_eq!(depend.buffs[0].full().unwrap().id, 103);
}

#[test]
fn self_dependency_becomes_reference() {
    let ouroboros = skill(1003);
    let call = &ouroboros.functions[0];
    assert!(call.function.full().is_some());
    assert_eq!(
        call.depend_function.as_ref().unwrap().reference(),
        Some(EntityKind::Function.at(6))
    );
}

#[test]
fn follower_vals_are_decoded() {
    let instinct = skill(1002);
    let follower = &instinct.functions[0].follower_vals;
    assert_eq!(follower.len(), 1);
    assert_eq!(follower[0].int(FieldName::Value), Some(1000));
}

// =============================================================================
// Dangling References
// =============================================================================

#[test]
fn dangling_buff_is_dropped() {
    let mana_burst = skill(1001);
    let function = mana_burst.functions[0].function.full().unwrap();
    let buffs: Vec<_> = function.buffs.iter().map(|b| b.full().unwrap().id).collect();
    assert_eq!(buffs, vec![102]);
}

#[test]
fn dangling_class_passive_is_dropped() {
    assert_eq!(servant().class_passive.len(), 1);
}

#[test]
fn quest_with_dangling_spot_still_formats() {
    let FormattedEntity::Quest(quest) = show(EntityKind::Quest, 1_000_003) else {
        panic!("expected quest");
    };
    assert_eq!(quest.spot_id, 99_999);
}

// =============================================================================
// AI
// =============================================================================

#[test]
fn skills_list_the_ai_scripts_that_cast_them() {
    let roar = skill(5000);
    let ai_ids = roar.ai_ids.unwrap();
    assert_eq!(ai_ids.svt, vec![94_000_001]);
    assert_eq!(ai_ids.field, vec![95_000_001]);
}

#[test]
fn ai_ids_can_be_disabled() {
    let snapshot = sample();
    let options = ForwardOptions::default().with_ai_ids(false);
    let entity = EntityKind::Skill.at(5000);
    let FormattedEntity::Skill(roar) =
        Engine::default().expand_forward_with(&snapshot, entity, options).unwrap()
    else {
        panic!("expected skill");
    };
    assert!(roar.ai_ids.is_none());
}

#[test]
fn skills_without_ai_have_no_ai_ids() {
    assert!(skill(1000).ai_ids.is_none());
}

#[test]
fn ai_script_inlines_act_and_skill() {
    let FormattedEntity::AiSvt(ai) = show(EntityKind::AiSvt, 94_000_001) else {
        panic!("expected servant AI");
    };
    assert_eq!(ai.ai_type, "svt");
    assert_eq!(ai.ais.len(), 2);

    let act = ai.ais[0].ai_act.as_ref().unwrap().full().unwrap();
    assert_eq!(act.skill_id, Some(5000));
    assert_eq!(act.skill_lv, Some(3));
    assert_eq!(act.skill.as_ref().unwrap().full().unwrap().name, "Enemy Roar");

    let idle = ai.ais[1].ai_act.as_ref().unwrap().full().unwrap();
    assert!(idle.skill.is_none());
}

// =============================================================================
// Other Kinds
// =============================================================================

#[test]
fn war_inlines_spots_and_quests() {
    let FormattedEntity::War(war) = show(EntityKind::War, 100) else {
        panic!("expected war");
    };
    assert_eq!(war.maps.len(), 1);
    let spots: Vec<_> = war.spots.iter().map(|s| s.full().unwrap()).collect();
    assert_eq!(spots.len(), 2);
    assert_eq!(spots[0].quests[0].full().unwrap().id, 1_000_001);
    assert_eq!(spots[1].quests[0].full().unwrap().name, "Cavern Boss");
}

#[test]
fn mystic_and_command_codes_inline_skills() {
    let FormattedEntity::MysticCode(mc) = show(EntityKind::MysticCode, 1) else {
        panic!("expected mystic code");
    };
    assert_eq!(mc.skills[0].full().unwrap().id, 3000);

    let FormattedEntity::CommandCode(cc) = show(EntityKind::CommandCode, 8_400_010) else {
        panic!("expected command code");
    };
    assert_eq!(cc.skills[0].full().unwrap().id, 4000);
}

#[test]
fn every_entity_round_trips_its_ref() {
    let snapshot = sample();
    let engine = Engine::default();
    for kind in EntityKind::ALL {
        for id in snapshot.store().ids(kind) {
            let formatted = engine.expand_forward(&snapshot, kind, id).unwrap();
            assert_eq!(formatted.entity(), kind.at(id));
        }
    }
}

#[test]
fn expansion_is_deterministic() {
    let snapshot = sample();
    let engine = Engine::default();
    let a = engine.expand_forward(&snapshot, EntityKind::Servant, 100_100).unwrap();
    let b = engine.expand_forward(&snapshot, EntityKind::Servant, 100_100).unwrap();
    assert_eq!(a, b);
    assert!(matches!(a, FormattedEntity::Servant(_)));
}
