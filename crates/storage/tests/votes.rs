#![forbid(unsafe_code)]

mod support;

use qa_core::{AnswerId, EntityId, QuestionId, VoteDirection, VoteState, VoteTarget};
use qa_storage::{ErrorKind, QuestionVoteRequest, StoreError, VoteRequest};
use support::*;

fn vote(target_id: &QuestionId, voter: &qa_core::UserId, direction: VoteDirection) -> QuestionVoteRequest {
    VoteRequest {
        target_id: target_id.clone(),
        voter_id: voter.clone(),
        direction,
    }
}

#[test]
fn upvote_twice_restores_counts_and_reputation() {
    let mut fx = open_store();
    let author = user(&mut fx.store, "author");
    let voter = user(&mut fx.store, "voter");
    let q = question(&mut fx.store, &author, "How do lifetimes work?", &["rust"]);
    let author_before = reputation(&fx.store, &author);

    let first = fx
        .store
        .vote_question(vote(&q.id, &voter, VoteDirection::Up))
        .expect("first upvote");
    assert_eq!(first.transition.next, VoteState::Up);
    assert_eq!(first.upvotes, 1);
    assert_eq!(reputation(&fx.store, &voter), 2);

    let second = fx
        .store
        .vote_question(vote(&q.id, &voter, VoteDirection::Up))
        .expect("second upvote");
    assert_eq!(second.transition.next, VoteState::None);
    assert_eq!(second.upvotes, 0);
    assert_eq!(second.downvotes, 0);
    assert_eq!(reputation(&fx.store, &voter), 0);
    assert_eq!(reputation(&fx.store, &author), author_before);

    let row = fx.store.get_question(&q.id).expect("question");
    assert!(row.upvoters.is_empty());
    assert_eq!(row.vote_state_of(&voter), VoteState::None);
}

#[test]
fn switching_direction_moves_the_vote_and_credits_voter_again() {
    let mut fx = open_store();
    let author = user(&mut fx.store, "author");
    let voter = user(&mut fx.store, "voter");
    let q = question(&mut fx.store, &author, "Borrow checker error", &[]);

    fx.store
        .vote_question(vote(&q.id, &voter, VoteDirection::Up))
        .expect("upvote");
    let switched = fx
        .store
        .vote_question(vote(&q.id, &voter, VoteDirection::Down))
        .expect("downvote");

    assert_eq!(switched.transition.previous, VoteState::Up);
    assert_eq!(switched.transition.next, VoteState::Down);
    assert_eq!(switched.upvotes, 0);
    assert_eq!(switched.downvotes, 1);
    assert_eq!(reputation(&fx.store, &voter), 4);

    let row = fx.store.get_question(&q.id).expect("question");
    assert_eq!(row.downvoters, vec![voter.clone()]);
    assert_eq!(
        fx.store
            .vote_state(VoteTarget::Question, q.id.as_str(), &voter)
            .expect("vote state"),
        VoteState::Down
    );
}

#[test]
fn answer_votes_move_author_reputation_by_ten() {
    let mut fx = open_store();
    let asker = user(&mut fx.store, "asker");
    let answerer = user(&mut fx.store, "answerer");
    let voter = user(&mut fx.store, "voter");
    let q = question(&mut fx.store, &asker, "Why is my future not Send?", &["async"]);
    let a = answer(&mut fx.store, &answerer, &q.id, "Hold no guard across await.");
    assert_eq!(reputation(&fx.store, &answerer), 10);

    let up = fx
        .store
        .vote_answer(VoteRequest {
            target_id: a.id.clone(),
            voter_id: voter.clone(),
            direction: VoteDirection::Up,
        })
        .expect("upvote answer");
    assert_eq!(up.deltas.author, 10);
    assert_eq!(reputation(&fx.store, &answerer), 20);

    fx.store
        .vote_answer(VoteRequest {
            target_id: a.id.clone(),
            voter_id: voter.clone(),
            direction: VoteDirection::Up,
        })
        .expect("remove upvote");
    assert_eq!(reputation(&fx.store, &answerer), 10);
    assert_eq!(reputation(&fx.store, &voter), 0);
}

#[test]
fn unknown_target_fails_without_side_effects() {
    let mut fx = open_store();
    let voter = user(&mut fx.store, "voter");
    let missing = QuestionId::try_new("Q-999999").expect("question id");

    let err = fx
        .store
        .vote_question(vote(&missing, &voter, VoteDirection::Up))
        .expect_err("unknown question");
    assert!(matches!(err, StoreError::NotFound { .. }));
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(reputation(&fx.store, &voter), 0);

    let missing_answer = AnswerId::try_new("A-999999").expect("answer id");
    let err = fx
        .store
        .vote_answer(VoteRequest {
            target_id: missing_answer,
            voter_id: voter.clone(),
            direction: VoteDirection::Down,
        })
        .expect_err("unknown answer");
    assert_eq!(err.code(), "NOT_FOUND");
    assert_eq!(reputation(&fx.store, &voter), 0);
}

#[test]
fn unknown_voter_leaves_author_untouched() {
    let mut fx = open_store();
    let author = user(&mut fx.store, "author");
    let q = question(&mut fx.store, &author, "Trait objects", &[]);
    let author_before = reputation(&fx.store, &author);
    let ghost = qa_core::UserId::try_new("U-424242").expect("user id");

    let err = fx
        .store
        .vote_question(vote(&q.id, &ghost, VoteDirection::Up))
        .expect_err("unknown voter");
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let row = fx.store.get_question(&q.id).expect("question");
    assert!(row.upvoters.is_empty());
    assert_eq!(reputation(&fx.store, &author), author_before);
}
