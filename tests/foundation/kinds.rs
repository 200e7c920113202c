//! Integration tests for entity kinds and references

use std::collections::HashSet;

use mstgraph_foundation::{EntityKind, EntityRef, ErrorKind};

// =============================================================================
// Names
// =============================================================================

#[test]
fn every_kind_parses_from_its_name() {
    for kind in EntityKind::ALL {
        assert_eq!(kind.name().parse::<EntityKind>().unwrap(), kind);
    }
}

#[test]
fn aliases_resolve() {
    let cases = [
        ("func", EntityKind::Function),
        ("td", EntityKind::NoblePhantasm),
        ("NoblePhantasm", EntityKind::NoblePhantasm),
        ("svt", EntityKind::Servant),
        ("MysticCode", EntityKind::MysticCode),
        ("commandCode", EntityKind::CommandCode),
        ("AiField", EntityKind::AiField),
    ];
    for (name, kind) in cases {
        assert_eq!(name.parse::<EntityKind>().unwrap(), kind, "{name}");
    }
}

#[test]
fn unknown_kind_names_the_input() {
    let err = "weapon".parse::<EntityKind>().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownKind(ref s) if s == "weapon"));
}

#[test]
fn kind_names_are_unique() {
    let names: HashSet<_> = EntityKind::ALL.iter().map(|k| k.name()).collect();
    assert_eq!(names.len(), EntityKind::ALL.len());
}

// =============================================================================
// References
// =============================================================================

#[test]
fn reference_display() {
    assert_eq!(EntityKind::Buff.at(101).to_string(), "buff:101");
    assert_eq!(EntityKind::Servant.at(100_100).to_string(), "servant:100100");
}

#[test]
fn references_are_kind_scoped() {
    let buff = EntityKind::Buff.at(1);
    let func = EntityKind::Function.at(1);
    assert_ne!(buff, func);

    let set: HashSet<EntityRef> = [buff, func, EntityKind::Buff.at(1)].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn reference_serializes_kind_and_id() {
    let json = serde_json::to_value(EntityKind::NoblePhantasm.at(100_101)).unwrap();
    assert_eq!(json["kind"], "noblePhantasm");
    assert_eq!(json["id"], 100_101);
}
