//! Integration tests for decode failures
//!
//! Every malformed input is an error naming the raw string and the
//! offending token. Nothing is silently dropped.

use mstgraph_datavals::{FuncType, decode};
use mstgraph_foundation::{DecodeFailure, ErrorCategory, ErrorKind};

fn failure(raw: &str, context: Option<FuncType>) -> (String, DecodeFailure) {
    let err = decode(raw, context).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Decode);
    match err.kind {
        ErrorKind::DataValsDecode {
            raw: reported,
            token,
            failure,
        } => {
            assert_eq!(reported, raw);
            (token, failure)
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[test]
fn unknown_key() {
    let (token, kind) = failure("[1000,NotAField:1]", None);
    assert_eq!(token, "NotAField");
    assert_eq!(kind, DecodeFailure::UnknownField);
}

#[test]
fn key_without_value() {
    let (token, kind) = failure("[1000,Rate:]", None);
    assert_eq!(token, "Rate");
    assert_eq!(kind, DecodeFailure::MissingValue);
}

#[test]
fn bare_field_name() {
    let (token, kind) = failure("[1000,HideMiss]", None);
    assert_eq!(token, "HideMiss");
    assert_eq!(kind, DecodeFailure::MissingValue);
}

#[test]
fn non_integer_value() {
    let (token, kind) = failure("[1000,abc]", None);
    assert_eq!(token, "abc");
    assert_eq!(kind, DecodeFailure::InvalidInteger);
}

#[test]
fn non_integer_past_schema() {
    let (token, kind) = failure("[1000,3,-1,abc]", Some(FuncType::GainNp));
    assert_eq!(token, "abc");
    assert_eq!(kind, DecodeFailure::InvalidInteger);
}

#[test]
fn list_given_to_scalar() {
    let (_, kind) = failure("[1000,HideMiss:1/2]", None);
    assert_eq!(kind, DecodeFailure::ExpectedScalar);
}

#[test]
fn duplicate_field() {
    let (token, kind) = failure("[1000,Rate:500]", None);
    assert_eq!(token, "Rate");
    assert_eq!(kind, DecodeFailure::DuplicateField);
}

#[test]
fn empty_element() {
    let (_, kind) = failure("[1000,,300]", None);
    assert_eq!(kind, DecodeFailure::EmptyEntry);
}

#[test]
fn empty_input() {
    let (_, kind) = failure("", None);
    assert_eq!(kind, DecodeFailure::EmptyEntry);
}

#[test]
fn unbalanced_brackets() {
    let (_, kind) = failure("[1000,DependFuncVals:[1000,200]", None);
    assert_eq!(kind, DecodeFailure::UnbalancedBrackets);
}

#[test]
fn nesting_is_one_level_deep() {
    let (_, kind) = failure("[DependFuncVals:[DependFuncVals:[1000]]]", None);
    assert_eq!(kind, DecodeFailure::NestingTooDeep);
}

#[test]
fn message_names_raw_and_token() {
    let err = decode("[1000,NotAField:1]", None).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("[1000,NotAField:1]"));
    assert!(message.contains("NotAField"));
}
