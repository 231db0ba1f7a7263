#![forbid(unsafe_code)]

use super::*;
use rusqlite::TransactionBehavior;

impl SqliteStore {
    /// Deletes an answer, its votes and every interaction referencing it.
    /// The parent question's answer set is derived from `answers`, so removing
    /// the row also removes it there.
    pub fn delete_answer(&mut self, answer_id: &AnswerId) -> Result<AnswerDeletion, StoreError> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let answer = require_answer(&tx, answer_id)?;
        let id = answer_id.as_str();

        let interactions_deleted =
            tx.execute("DELETE FROM interactions WHERE answer_id=?1", params![id])?;
        let votes_removed = tx.execute("DELETE FROM answer_votes WHERE answer_id=?1", params![id])?;
        tx.execute("DELETE FROM answers WHERE id=?1", params![id])?;

        tx.commit()?;

        let report = AnswerDeletion {
            interactions_deleted,
            votes_removed,
        };
        tracing::debug!(
            answer_id = %answer_id,
            question_id = %answer.question_id,
            ?report,
            "answer deleted"
        );
        Ok(report)
    }
}
