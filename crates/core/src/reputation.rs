#![forbid(unsafe_code)]

use crate::vote::VoteTransition;

/// Reputation magnitudes applied as side effects of votes and content
/// creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReputationPolicy {
    pub voter: i64,
    pub question_author: i64,
    pub answer_author: i64,
    pub ask_question: i64,
    pub post_answer: i64,
}

impl Default for ReputationPolicy {
    fn default() -> Self {
        Self {
            voter: 2,
            question_author: 0,
            answer_author: 10,
            ask_question: 5,
            post_answer: 10,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteTarget {
    Question,
    Answer,
}

impl VoteTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Answer => "answer",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReputationDeltas {
    pub voter: i64,
    pub author: i64,
}

impl ReputationPolicy {
    pub fn vote_deltas(&self, target: VoteTarget, transition: &VoteTransition) -> ReputationDeltas {
        let author_magnitude = match target {
            VoteTarget::Question => self.question_author,
            VoteTarget::Answer => self.answer_author,
        };
        ReputationDeltas {
            voter: transition.reputation_delta(self.voter),
            author: transition.reputation_delta(author_magnitude),
        }
    }
}
