//! Integration tests for expansion errors

use mstgraph_datavals::{DataVal, FieldName, FuncType};
use mstgraph_engine::{Engine, EngineConfig, FormattedEntity, ReverseDepth};
use mstgraph_foundation::{DecodeFailure, EntityKind, ErrorCategory, ErrorKind, Region};
use mstgraph_storage::record::{MstFunc, MstSkill, MstSkillLv, MstSvt, MstSvtSkill};
use mstgraph_storage::{RawDataset, Snapshot};

use crate::sample;

/// A malformed DataVals string.
fn broken() -> Snapshot {
    servant_with_svals("[1000,Bogus:1]")
}

/// A servant whose only skill calls a gainNp function with `svals`.
fn servant_with_svals(svals: &str) -> Snapshot {
    Snapshot::build(
        RawDataset {
            mst_func: vec![MstFunc {
                id: 1,
                func_type: FuncType::GainNp.code(),
                ..MstFunc::default()
            }],
            mst_skill: vec![MstSkill {
                id: 10,
                ..MstSkill::default()
            }],
            mst_skill_lv: vec![MstSkillLv {
                skill_id: 10,
                lv: 1,
                func_id: vec![1],
                svals: vec![svals.into()],
                ..MstSkillLv::default()
            }],
            mst_svt: vec![MstSvt {
                id: 1,
                ..MstSvt::default()
            }],
            mst_svt_skill: vec![MstSvtSkill {
                svt_id: 1,
                num: 1,
                skill_id: 10,
                ..MstSvtSkill::default()
            }],
            ..RawDataset::default()
        },
        Region::NA,
        "broken",
    )
}

#[test]
fn missing_root_is_caller_error() {
    let err = Engine::default()
        .expand_forward(&sample(), EntityKind::Servant, 1)
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::EntityNotFound(entity) if entity == EntityKind::Servant.at(1)
    ));
    assert_eq!(err.category(), ErrorCategory::Caller);
}

#[test]
fn same_id_other_kind_is_not_found() {
    // 101 is a buff, not a function.
    assert!(
        Engine::default()
            .expand_forward(&sample(), EntityKind::Function, 101)
            .is_err()
    );
}

#[test]
fn decode_error_carries_path_and_region() {
    let err = Engine::default()
        .expand_forward(&broken(), EntityKind::Servant, 1)
        .unwrap_err();
    let ErrorKind::DataValsDecode { ref token, failure, .. } = err.kind else {
        panic!("expected decode error, got {:?}", err.kind);
    };
    assert_eq!(token, "Bogus");
    assert_eq!(failure, DecodeFailure::UnknownField);

    let context = err.context.as_ref().unwrap();
    assert_eq!(context.source.as_deref(), Some("NA"));
    assert_eq!(
        context.path,
        vec![EntityKind::Servant.at(1), EntityKind::Skill.at(10)]
    );
}

#[test]
fn decode_error_fails_reverse_too() {
    let err = Engine::default()
        .expand_reverse(&broken(), EntityKind::Function, 1, None)
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Decode);
}

#[test]
fn values_past_the_schema_expand_both_ways() {
    let snapshot = servant_with_svals("[1000,3000,0,5]");
    let engine = Engine::default();

    let FormattedEntity::Servant(svt) = engine
        .expand_forward(&snapshot, EntityKind::Servant, 1)
        .unwrap()
    else {
        panic!("expected servant");
    };
    let skill = svt.skills[0].skill.full().unwrap();
    let svals = &skill.functions[0].svals[0];
    assert_eq!(svals.int(FieldName::Value), Some(3000));
    assert_eq!(svals.unmapped(3), Some(&DataVal::Int(5)));

    let tree = engine
        .expand_reverse(&snapshot, EntityKind::Function, 1, Some(ReverseDepth::Servant))
        .unwrap();
    assert!(tree.contains(EntityKind::Skill.at(10)));
    assert!(tree.contains(EntityKind::Servant.at(1)));
}

#[test]
fn engine_decode_uses_configured_schemas() {
    use mstgraph_datavals::SchemaRegistry;

    let registry = SchemaRegistry::standard()
        .with_schema(FuncType::GainNp, vec![Some(FieldName::Value)]);
    let engine = Engine::new(EngineConfig::new().with_schemas(registry));
    let vals = engine.decode("[500]", Some(FuncType::GainNp)).unwrap();
    assert_eq!(vals.int(FieldName::Value), Some(500));
}
