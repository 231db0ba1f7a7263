#![forbid(unsafe_code)]

use qa_core::{AnswerId, InteractionAction, QuestionId, TagId, UserId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InteractionRow {
    pub seq: i64,
    pub user_id: UserId,
    pub action: InteractionAction,
    pub question_id: Option<QuestionId>,
    pub answer_id: Option<AnswerId>,
    pub tag_ids: Vec<TagId>,
    pub created_at_ms: i64,
}
