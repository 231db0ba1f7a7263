#![forbid(unsafe_code)]
#![allow(dead_code)]

use qa_core::{PageRequest, QuestionId, UserId};
use qa_storage::{
    AnswerRow, CreateAnswerRequest, CreateQuestionRequest, CreateUserRequest, QuestionRow,
    SqliteStore,
};
use tempfile::TempDir;

pub struct Fixture {
    pub store: SqliteStore,
    _dir: TempDir,
}

pub fn open_store() -> Fixture {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = SqliteStore::open(dir.path()).expect("open store");
    Fixture { store, _dir: dir }
}

pub fn user(store: &mut SqliteStore, username: &str) -> UserId {
    store
        .create_user(CreateUserRequest {
            name: format!("{username} name"),
            username: username.to_string(),
            email: format!("{username}@example.test"),
            picture: None,
            bio: None,
        })
        .expect("create user")
        .id
}

pub fn question(
    store: &mut SqliteStore,
    author: &UserId,
    title: &str,
    tags: &[&str],
) -> QuestionRow {
    store
        .create_question(CreateQuestionRequest {
            title: title.to_string(),
            content: format!("{title} body"),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            author_id: author.clone(),
        })
        .expect("create question")
}

pub fn answer(
    store: &mut SqliteStore,
    author: &UserId,
    question_id: &QuestionId,
    content: &str,
) -> AnswerRow {
    store
        .create_answer(CreateAnswerRequest {
            content: content.to_string(),
            author_id: author.clone(),
            question_id: question_id.clone(),
        })
        .expect("create answer")
}

pub fn reputation(store: &SqliteStore, user_id: &UserId) -> i64 {
    store.get_user(user_id).expect("get user").reputation
}

pub fn page(page: i64, page_size: i64) -> PageRequest {
    PageRequest::try_new(Some(page), Some(page_size), 20).expect("page request")
}
