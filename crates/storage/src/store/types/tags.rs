#![forbid(unsafe_code)]

use qa_core::{QuestionId, TagId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagRef {
    pub id: TagId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagRow {
    pub id: TagId,
    pub name: String,
    pub question_ids: Vec<QuestionId>,
    pub created_at_ms: i64,
}
