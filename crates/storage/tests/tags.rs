#![forbid(unsafe_code)]

mod support;

use qa_storage::ErrorKind;
use support::*;

#[test]
fn resolving_the_same_tag_twice_reuses_it() {
    let mut fx = open_store();
    let author = user(&mut fx.store, "author");
    let q = question(&mut fx.store, &author, "Pattern matching", &["rust"]);
    let first = q.tags[0].id.clone();

    let again = fx
        .store
        .resolve_tags(&["rust".to_string()], &q.id)
        .expect("resolve again");
    assert_eq!(again, vec![first.clone()]);

    let tag = fx.store.find_tag("rust").expect("find").expect("tag exists");
    assert_eq!(tag.id, first);
    assert_eq!(tag.question_ids, vec![q.id.clone()]);
    assert_eq!(fx.store.get_question(&q.id).expect("question").tags.len(), 1);
}

#[test]
fn tag_lookup_is_case_insensitive() {
    let mut fx = open_store();
    let author = user(&mut fx.store, "author");
    let first = question(&mut fx.store, &author, "Generics", &["Java"]);
    let second = question(&mut fx.store, &author, "Streams", &["java"]);

    assert_eq!(first.tags[0].id, second.tags[0].id);
    assert_eq!(second.tags[0].name, "Java");

    let tag = fx.store.find_tag("JAVA").expect("find").expect("tag exists");
    assert_eq!(tag.question_ids, vec![first.id.clone(), second.id.clone()]);
}

#[test]
fn duplicate_names_in_one_request_link_once() {
    let mut fx = open_store();
    let author = user(&mut fx.store, "author");
    let q = question(&mut fx.store, &author, "Closures", &["rust", "Rust", "closures"]);

    let names: Vec<&str> = q.tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["rust", "closures"]);
}

#[test]
fn blank_tag_name_is_rejected_and_rolls_back() {
    let mut fx = open_store();
    let author = user(&mut fx.store, "author");
    let q = question(&mut fx.store, &author, "Modules", &[]);

    let err = fx
        .store
        .resolve_tags(&["ok".to_string(), "   ".to_string()], &q.id)
        .expect_err("blank tag");
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(fx.store.find_tag("ok").expect("find").is_none());
}

#[test]
fn unknown_tag_is_none() {
    let fx = open_store();
    assert!(fx.store.find_tag("nothing").expect("find").is_none());
    assert!(fx.store.find_tag("  ").expect("find").is_none());
}
