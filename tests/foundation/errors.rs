//! Integration tests for error types

use mstgraph_foundation::{
    DecodeFailure, EntityKind, Error, ErrorCategory, ErrorContext, ErrorKind,
};

// =============================================================================
// Categories
// =============================================================================

#[test]
fn decode_errors_are_their_own_category() {
    let err = Error::decode("[1000,Foo:1]", "Foo", DecodeFailure::UnknownField);
    assert_eq!(err.category(), ErrorCategory::Decode);
}

#[test]
fn request_errors_are_caller_errors() {
    let errors = [
        Error::entity_not_found(EntityKind::Buff.at(9)),
        Error::unsupported_depth(EntityKind::Skill, "function"),
        Error::invalid_argument("bad"),
        Error::new(ErrorKind::UnknownKind("weapon".into())),
    ];
    for err in errors {
        assert_eq!(err.category(), ErrorCategory::Caller, "{err}");
    }
}

#[test]
fn load_errors_are_load_category() {
    assert_eq!(
        Error::new(ErrorKind::Io("missing".into())).category(),
        ErrorCategory::Load
    );
    assert_eq!(
        Error::new(ErrorKind::Serialization("eof".into())).category(),
        ErrorCategory::Load
    );
}

// =============================================================================
// Messages
// =============================================================================

#[test]
fn decode_message_names_raw_and_token() {
    let err = Error::decode("[1000,Foo:1]", "Foo", DecodeFailure::UnknownField);
    let message = err.to_string();
    assert!(message.contains("[1000,Foo:1]"));
    assert!(message.contains("\"Foo\""));
    assert!(message.contains("unknown field"));
}

#[test]
fn not_found_message_names_entity() {
    let err = Error::entity_not_found(EntityKind::Servant.at(100_100));
    assert_eq!(err.to_string(), "entity not found: servant:100100");
}

#[test]
fn unsupported_depth_message() {
    let err = Error::unsupported_depth(EntityKind::Servant, "function");
    assert!(err.to_string().contains("function"));
    assert!(err.to_string().contains("servant"));
}

// =============================================================================
// Context
// =============================================================================

#[test]
fn context_records_source_and_path() {
    let context = ErrorContext::new()
        .with_source("JP")
        .with_entity(EntityKind::Servant.at(1))
        .with_entity(EntityKind::Skill.at(2));
    let err = Error::invalid_argument("x").with_context(context);

    let context = err.context.as_ref().unwrap();
    assert_eq!(context.source.as_deref(), Some("JP"));
    assert_eq!(
        context.path,
        vec![EntityKind::Servant.at(1), EntityKind::Skill.at(2)]
    );

    let rendered = context.to_string();
    assert!(rendered.contains("in JP"));
    assert!(rendered.contains("while expanding skill:2"));
}
