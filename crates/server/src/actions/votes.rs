#![forbid(unsafe_code)]

use super::render::vote_outcome_json;
use crate::support::ActionResult;
use crate::support::args::*;
use qa_core::VoteDirection;
use qa_storage::{SqliteStore, VoteRequest};

// Prior vote flags sent by clients are ignored; the store reads the current
// state inside the vote transaction.

fn vote_question(store: &mut SqliteStore, args: &Args, direction: VoteDirection) -> ActionResult {
    let request = VoteRequest {
        target_id: require_id(args, "questionId")?,
        voter_id: require_id(args, "userId")?,
        direction,
    };
    let outcome = store.vote_question(request)?;
    Ok(vote_outcome_json(&outcome))
}

fn vote_answer(store: &mut SqliteStore, args: &Args, direction: VoteDirection) -> ActionResult {
    let request = VoteRequest {
        target_id: require_id(args, "answerId")?,
        voter_id: require_id(args, "userId")?,
        direction,
    };
    let outcome = store.vote_answer(request)?;
    Ok(vote_outcome_json(&outcome))
}

pub(super) fn question_upvote(store: &mut SqliteStore, args: &Args) -> ActionResult {
    vote_question(store, args, VoteDirection::Up)
}

pub(super) fn question_downvote(store: &mut SqliteStore, args: &Args) -> ActionResult {
    vote_question(store, args, VoteDirection::Down)
}

pub(super) fn answer_upvote(store: &mut SqliteStore, args: &Args) -> ActionResult {
    vote_answer(store, args, VoteDirection::Up)
}

pub(super) fn answer_downvote(store: &mut SqliteStore, args: &Args) -> ActionResult {
    vote_answer(store, args, VoteDirection::Down)
}
