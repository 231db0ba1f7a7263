#![forbid(unsafe_code)]

use qa_core::{ReputationDeltas, UserId, VoteTarget, VoteTransition};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteOutcome {
    pub target: VoteTarget,
    pub transition: VoteTransition,
    pub author_id: UserId,
    pub deltas: ReputationDeltas,
    pub upvotes: usize,
    pub downvotes: usize,
}
