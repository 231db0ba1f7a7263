#![forbid(unsafe_code)]

use super::TagRef;
use qa_core::{AnswerId, QuestionId, UserId, VoteState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionRow {
    pub id: QuestionId,
    pub title: String,
    pub content: String,
    pub author_id: UserId,
    pub tags: Vec<TagRef>,
    pub answer_ids: Vec<AnswerId>,
    pub upvoters: Vec<UserId>,
    pub downvoters: Vec<UserId>,
    pub views: i64,
    pub created_at_ms: i64,
}

impl QuestionRow {
    pub fn vote_state_of(&self, user_id: &UserId) -> VoteState {
        VoteState::from_flags(
            self.upvoters.contains(user_id),
            self.downvoters.contains(user_id),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewOutcome {
    pub views: i64,
    pub interaction_recorded: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuestionDeletion {
    pub answers_deleted: usize,
    pub interactions_deleted: usize,
    pub tag_links_removed: usize,
    pub saves_removed: usize,
    pub votes_removed: usize,
}
