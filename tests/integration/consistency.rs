//! Forward and reverse expansion agree with each other
//!
//! Every ancestor a reverse expansion reports must reference its child
//! when forward-expanded, and every reference forward expansion inlines
//! must show up in the child's reverse expansion.

use mstgraph_engine::{Engine, Expanded, FormattedEntity, NiceSkill, ReverseDepth, ReverseNode};
use mstgraph_foundation::{EntityKind, EntityRef, RecordId};
use mstgraph_storage::Snapshot;

use crate::sample;

// =============================================================================
// Helpers
// =============================================================================

fn refer<T>(expanded: &Expanded<T>, kind: EntityKind, id: fn(&T) -> RecordId) -> EntityRef {
    match expanded {
        Expanded::Full(value) => kind.at(id(value)),
        Expanded::Reference(entity) => *entity,
    }
}

/// Direct children of a formatted entity on the reverse ladder.
fn ladder_children(formatted: &FormattedEntity) -> Vec<EntityRef> {
    let skill = |s: &Expanded<NiceSkill>| refer(s, EntityKind::Skill, |s| s.id);
    match formatted {
        FormattedEntity::Function(function) => function
            .buffs
            .iter()
            .map(|b| refer(b, EntityKind::Buff, |b| b.id))
            .collect(),
        FormattedEntity::Skill(nice) => nice
            .functions
            .iter()
            .map(|f| EntityKind::Function.at(f.func_id()))
            .collect(),
        FormattedEntity::NoblePhantasm(td) => td
            .functions
            .iter()
            .map(|f| EntityKind::Function.at(f.func_id()))
            .collect(),
        FormattedEntity::Servant(svt) => svt
            .skills
            .iter()
            .map(|slot| skill(&slot.skill))
            .chain(svt.class_passive.iter().map(skill))
            .chain(svt.extra_passive.iter().map(skill))
            .chain(
                svt.noble_phantasms
                    .iter()
                    .map(|slot| refer(&slot.td, EntityKind::NoblePhantasm, |td| td.id)),
            )
            .collect(),
        FormattedEntity::MysticCode(mc) => mc.skills.iter().map(skill).collect(),
        FormattedEntity::CommandCode(cc) => cc.skills.iter().map(skill).collect(),
        _ => Vec::new(),
    }
}

/// Checks that every (parent, child) pair in a reverse tree is a real
/// forward reference.
fn check_node(engine: &Engine, snapshot: &Snapshot, child: EntityRef, node: &ReverseNode) {
    for group in node.groups() {
        for parent in &group.nodes {
            let entity = parent.entity();
            let formatted = engine.expand_forward(snapshot, entity.kind, entity.id).unwrap();
            assert!(
                ladder_children(&formatted).contains(&child),
                "{entity} does not reference {child}"
            );
            check_node(engine, snapshot, entity, parent);
        }
    }
}

fn full_entities(node: &ReverseNode, out: &mut Vec<EntityRef>) {
    for group in node.groups() {
        for child in &group.nodes {
            if matches!(child, ReverseNode::Entity { .. }) {
                out.push(child.entity());
            }
            full_entities(child, out);
        }
    }
}

// =============================================================================
// Agreement
// =============================================================================

#[test]
fn every_reverse_edge_is_a_forward_reference() {
    let snapshot = sample();
    let engine = Engine::default();
    for kind in [EntityKind::Buff, EntityKind::Function, EntityKind::Skill] {
        for id in snapshot.store().ids(kind) {
            let tree = engine
                .expand_reverse(&snapshot, kind, id, Some(ReverseDepth::Servant))
                .unwrap();
            check_node(&engine, &snapshot, tree.root, &tree.node);
        }
    }
}

#[test]
fn every_forward_reference_appears_in_reverse() {
    let snapshot = sample();
    let engine = Engine::default();
    for kind in [EntityKind::Servant, EntityKind::Skill, EntityKind::Function] {
        for id in snapshot.store().ids(kind) {
            let parent = kind.at(id);
            let formatted = engine.expand_forward(&snapshot, kind, id).unwrap();
            for child in ladder_children(&formatted) {
                let tree = engine
                    .expand_reverse(&snapshot, child.kind, child.id, Some(ReverseDepth::Servant))
                    .unwrap();
                assert!(tree.contains(parent), "{child} reverse misses {parent}");
            }
        }
    }
}

#[test]
fn reverse_reports_each_entity_in_full_once() {
    let snapshot = sample();
    let tree = Engine::default()
        .expand_reverse(&snapshot, EntityKind::Buff, 101, Some(ReverseDepth::Servant))
        .unwrap();

    let mut seen = Vec::new();
    full_entities(&tree.node, &mut seen);
    let mut unique = seen.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(seen.len(), unique.len());
    assert!(!seen.contains(&tree.root));
}
