#![forbid(unsafe_code)]

use super::*;
use rusqlite::TransactionBehavior;

impl SqliteStore {
    /// Deletes a question with everything that references it: its answers
    /// (and their votes), interactions on the question or its answers, tag
    /// links, saved-question links and its own votes. One transaction, so a
    /// failing step leaves the store untouched.
    pub fn delete_question(
        &mut self,
        question_id: &QuestionId,
    ) -> Result<QuestionDeletion, StoreError> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        ensure_question_exists(&tx, question_id)?;
        let id = question_id.as_str();

        let interactions_deleted = tx.execute(
            "DELETE FROM interactions \
             WHERE question_id=?1 \
                OR answer_id IN (SELECT id FROM answers WHERE question_id=?1)",
            params![id],
        )?;
        let answer_votes_removed = tx.execute(
            "DELETE FROM answer_votes WHERE answer_id IN (SELECT id FROM answers WHERE question_id=?1)",
            params![id],
        )?;
        let answers_deleted = tx.execute("DELETE FROM answers WHERE question_id=?1", params![id])?;
        let question_votes_removed =
            tx.execute("DELETE FROM question_votes WHERE question_id=?1", params![id])?;
        let tag_links_removed =
            tx.execute("DELETE FROM question_tags WHERE question_id=?1", params![id])?;
        let saves_removed =
            tx.execute("DELETE FROM saved_questions WHERE question_id=?1", params![id])?;
        tx.execute("DELETE FROM questions WHERE id=?1", params![id])?;

        tx.commit()?;

        let report = QuestionDeletion {
            answers_deleted,
            interactions_deleted,
            tag_links_removed,
            saves_removed,
            votes_removed: answer_votes_removed + question_votes_removed,
        };
        tracing::debug!(question_id = %question_id, ?report, "question deleted");
        Ok(report)
    }
}
