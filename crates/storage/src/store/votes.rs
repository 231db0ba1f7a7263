#![forbid(unsafe_code)]

use super::*;
use qa_core::{VoteState, VoteTarget};
use rusqlite::TransactionBehavior;

struct VoteTable {
    target: VoteTarget,
    target_table: &'static str,
    votes_table: &'static str,
    target_column: &'static str,
}

const QUESTION_VOTES: VoteTable = VoteTable {
    target: VoteTarget::Question,
    target_table: "questions",
    votes_table: "question_votes",
    target_column: "question_id",
};

const ANSWER_VOTES: VoteTable = VoteTable {
    target: VoteTarget::Answer,
    target_table: "answers",
    votes_table: "answer_votes",
    target_column: "answer_id",
};

impl SqliteStore {
    pub fn vote_question(&mut self, request: QuestionVoteRequest) -> Result<VoteOutcome, StoreError> {
        let VoteRequest {
            target_id,
            voter_id,
            direction,
        } = request;
        let policy = self.policy;
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let Some(author_id) = target_author_tx(&tx, &QUESTION_VOTES, target_id.as_str())? else {
            return Err(StoreError::not_found(&target_id));
        };
        let outcome = apply_vote_tx(
            &tx,
            &QUESTION_VOTES,
            target_id.as_str(),
            author_id,
            &voter_id,
            direction,
            &policy,
        )?;
        tx.commit()?;
        tracing::debug!(
            question_id = %target_id,
            voter_id = %voter_id,
            direction = direction.as_str(),
            state = ?outcome.transition.next,
            "vote applied"
        );
        Ok(outcome)
    }

    pub fn vote_answer(&mut self, request: AnswerVoteRequest) -> Result<VoteOutcome, StoreError> {
        let VoteRequest {
            target_id,
            voter_id,
            direction,
        } = request;
        let policy = self.policy;
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let Some(author_id) = target_author_tx(&tx, &ANSWER_VOTES, target_id.as_str())? else {
            return Err(StoreError::not_found(&target_id));
        };
        let outcome = apply_vote_tx(
            &tx,
            &ANSWER_VOTES,
            target_id.as_str(),
            author_id,
            &voter_id,
            direction,
            &policy,
        )?;
        tx.commit()?;
        tracing::debug!(
            answer_id = %target_id,
            voter_id = %voter_id,
            direction = direction.as_str(),
            state = ?outcome.transition.next,
            "vote applied"
        );
        Ok(outcome)
    }

    pub fn vote_state(
        &self,
        target: VoteTarget,
        target_id: &str,
        voter_id: &UserId,
    ) -> Result<VoteState, StoreError> {
        let table = match target {
            VoteTarget::Question => &QUESTION_VOTES,
            VoteTarget::Answer => &ANSWER_VOTES,
        };
        current_vote_state(&self.conn, table, target_id, voter_id)
    }
}

fn target_author_tx(
    tx: &Transaction<'_>,
    table: &VoteTable,
    target_id: &str,
) -> Result<Option<UserId>, StoreError> {
    let author = tx
        .query_row(
            &format!("SELECT author_id FROM {} WHERE id=?1", table.target_table),
            params![target_id],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    author.map(decode_id).transpose()
}

fn current_vote_state(
    conn: &Connection,
    table: &VoteTable,
    target_id: &str,
    voter_id: &UserId,
) -> Result<VoteState, StoreError> {
    let direction = conn
        .query_row(
            &format!(
                "SELECT direction FROM {} WHERE {}=?1 AND user_id=?2",
                table.votes_table, table.target_column
            ),
            params![target_id, voter_id.as_str()],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    match direction {
        None => Ok(VoteState::None),
        Some(raw) => match VoteDirection::from_str(&raw) {
            Some(direction) => Ok(VoteState::from_direction(Some(direction))),
            None => Err(StoreError::InvalidInput(format!(
                "invalid vote direction row: {raw}"
            ))),
        },
    }
}

/// Applies one toggle-vote transition plus its two reputation adjustments.
/// The target has already been resolved; the voter is checked before any
/// write so a missing voter leaves nothing behind.
fn apply_vote_tx(
    tx: &Transaction<'_>,
    table: &VoteTable,
    target_id: &str,
    author_id: UserId,
    voter_id: &UserId,
    direction: VoteDirection,
    policy: &ReputationPolicy,
) -> Result<VoteOutcome, StoreError> {
    ensure_user_exists(tx, voter_id)?;

    let previous = current_vote_state(tx, table, target_id, voter_id)?;
    let transition = previous.apply(direction);

    match transition.next.direction() {
        None => {
            tx.execute(
                &format!(
                    "DELETE FROM {} WHERE {}=?1 AND user_id=?2",
                    table.votes_table, table.target_column
                ),
                params![target_id, voter_id.as_str()],
            )?;
        }
        Some(next) => {
            tx.execute(
                &format!(
                    "INSERT INTO {votes}({column}, user_id, direction, updated_at_ms) VALUES (?1, ?2, ?3, ?4) \
                     ON CONFLICT({column}, user_id) DO UPDATE SET direction=excluded.direction, updated_at_ms=excluded.updated_at_ms",
                    votes = table.votes_table,
                    column = table.target_column
                ),
                params![target_id, voter_id.as_str(), next.as_str(), now_ms()],
            )?;
        }
    }

    let deltas = policy.vote_deltas(table.target, &transition);
    adjust_reputation_tx(tx, voter_id, deltas.voter)?;
    adjust_reputation_tx(tx, &author_id, deltas.author)?;

    let (upvoters, downvoters) =
        voters_by_direction(tx, table.votes_table, table.target_column, target_id)?;

    Ok(VoteOutcome {
        target: table.target,
        transition,
        author_id,
        deltas,
        upvotes: upvoters.len(),
        downvotes: downvoters.len(),
    })
}
