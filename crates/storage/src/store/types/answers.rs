#![forbid(unsafe_code)]

use qa_core::{AnswerId, QuestionId, UserId, VoteState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerRow {
    pub id: AnswerId,
    pub question_id: QuestionId,
    pub author_id: UserId,
    pub content: String,
    pub upvoters: Vec<UserId>,
    pub downvoters: Vec<UserId>,
    pub created_at_ms: i64,
}

impl AnswerRow {
    pub fn vote_state_of(&self, user_id: &UserId) -> VoteState {
        VoteState::from_flags(
            self.upvoters.contains(user_id),
            self.downvoters.contains(user_id),
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnswerDeletion {
    pub interactions_deleted: usize,
    pub votes_removed: usize,
}
