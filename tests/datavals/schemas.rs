//! Integration tests for positional schemas and custom registries

use mstgraph_datavals::{DataVal, Decoder, FieldName, FuncType, SchemaRegistry};

// =============================================================================
// Standard Table
// =============================================================================

#[test]
fn same_string_decodes_differently_by_type() {
    let decoder = Decoder::standard();
    let add_state = decoder.decode("[1000,300]", Some(FuncType::AddState)).unwrap();
    let sub_state = decoder.decode("[1000,300]", Some(FuncType::SubState)).unwrap();
    assert_eq!(add_state.int(FieldName::Turn), Some(300));
    assert_eq!(sub_state.int(FieldName::Value), Some(300));
}

#[test]
fn unregistered_type_uses_default() {
    let decoder = Decoder::standard();
    assert!(!decoder.registry().has_schema(FuncType::GainNp));
    let vals = decoder.decode("[1000,2000,1]", Some(FuncType::GainNp)).unwrap();
    assert_eq!(vals.int(FieldName::Target), Some(1));
}

#[test]
fn damage_np_family_shares_a_schema() {
    let decoder = Decoder::standard();
    let raw = "[1000,1500,2000,3000]";
    let a = decoder.decode(raw, Some(FuncType::DamageNpIndividual)).unwrap();
    let b = decoder.decode(raw, Some(FuncType::DamageNpRare)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.int(FieldName::Correction), Some(3000));
}

#[test]
fn reserved_slot_has_no_name() {
    let decoder = Decoder::standard();
    let vals = decoder.decode("[4,1000,80001]", Some(FuncType::ClassDropUp)).unwrap();
    assert_eq!(vals.len(), 2);
    assert_eq!(vals.int(FieldName::RateCount), Some(1000));
    assert_eq!(vals.int(FieldName::EventId), Some(80001));
    assert_eq!(vals.unmapped(0), Some(&DataVal::Int(4)));
}

// =============================================================================
// Custom Registries
// =============================================================================

#[test]
fn registry_override_changes_decoding() {
    let registry = SchemaRegistry::standard()
        .with_schema(FuncType::GainNp, vec![Some(FieldName::Rate), Some(FieldName::Count)]);
    let decoder = Decoder::new(registry);
    let vals = decoder.decode("[1000,2]", Some(FuncType::GainNp)).unwrap();
    assert_eq!(vals.int(FieldName::Count), Some(2));
    assert!(!vals.contains(FieldName::Value));
}

#[test]
fn registry_default_override() {
    let registry = SchemaRegistry::standard().with_default(vec![Some(FieldName::Value)]);
    let decoder = Decoder::new(registry);
    let vals = decoder.decode("[1,2]", None).unwrap();
    assert_eq!(vals.int(FieldName::Value), Some(1));
    assert!(!vals.contains(FieldName::Rate));
    assert_eq!(vals.unmapped(1), Some(&DataVal::Int(2)));
}

// =============================================================================
// Function Types
// =============================================================================

#[test]
fn func_type_parses_code_and_names() {
    assert_eq!("1".parse::<FuncType>().unwrap(), FuncType::AddState);
    assert_eq!("addState".parse::<FuncType>().unwrap(), FuncType::AddState);
    assert_eq!("ADD_STATE".parse::<FuncType>().unwrap(), FuncType::AddState);
    assert!("9999".parse::<FuncType>().is_err());
    assert!("notAType".parse::<FuncType>().is_err());
}

#[test]
fn trait_valued_types() {
    assert!(FuncType::SubState.vals_are_traits());
    assert!(!FuncType::AddState.vals_are_traits());
}
