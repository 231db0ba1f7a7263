#![forbid(unsafe_code)]

use super::*;
use qa_core::{EntityId, QuestionId, UserId};
use serde_json::json;

fn args(value: serde_json::Value) -> Args {
    value.as_object().cloned().expect("object")
}

#[test]
fn require_string_distinguishes_missing_and_wrong_type() {
    let a = args(json!({"title": "Hi", "count": 3}));
    assert_eq!(require_string(&a, "title").expect("title"), "Hi");
    let err = require_string(&a, "content").expect_err("missing");
    assert_eq!(err.message, "content is required");
    let err = require_string(&a, "count").expect_err("number");
    assert_eq!(err.code(), "INVALID_INPUT");
}

#[test]
fn optional_trimmed_treats_blank_as_absent() {
    let a = args(json!({"searchQuery": "   ", "filter": " newest "}));
    assert_eq!(optional_trimmed(&a, "searchQuery").expect("q"), None);
    assert_eq!(
        optional_trimmed(&a, "filter").expect("filter"),
        Some("newest".to_string())
    );
}

#[test]
fn page_request_clamps_page_and_rejects_zero_size() {
    let a = args(json!({"page": -3, "pageSize": 500}));
    let page = page_request(&a, 20).expect("page");
    assert_eq!(page.page(), 1);
    assert_eq!(page.page_size(), 100);

    let a = args(json!({"pageSize": 0}));
    let err = page_request(&a, 20).expect_err("zero size");
    assert_eq!(err.code(), "INVALID_INPUT");

    let a = args(json!({"page": "2"}));
    assert!(page_request(&a, 20).is_err());
}

#[test]
fn ids_are_validated_by_kind() {
    let a = args(json!({"questionId": "Q-000001", "userId": "Q-000001", "viewer": ""}));
    let q: QuestionId = require_id(&a, "questionId").expect("question id");
    assert_eq!(q.as_str(), "Q-000001");

    let err = require_id::<UserId>(&a, "userId").expect_err("wrong prefix");
    assert!(err.message.starts_with("userId:"));

    assert_eq!(optional_id::<UserId>(&a, "viewer").expect("blank"), None);
    assert_eq!(optional_id::<UserId>(&a, "missing").expect("missing"), None);
}

#[test]
fn string_arrays_reject_mixed_items() {
    let a = args(json!({"tags": ["rust", 1], "ok": ["a", "b"]}));
    assert!(optional_string_array(&a, "tags").is_err());
    assert_eq!(
        optional_string_array(&a, "ok").expect("ok"),
        Some(vec!["a".to_string(), "b".to_string()])
    );
}
