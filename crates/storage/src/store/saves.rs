#![forbid(unsafe_code)]

use super::questions::{SEARCH_FILTER, load_questions, search_needle};
use super::*;
use qa_core::Page;
use rusqlite::TransactionBehavior;

impl SqliteStore {
    /// Adds the question to the user's saved set, or removes it when already
    /// saved. Returns whether the question is saved afterwards.
    pub fn toggle_save_question(
        &mut self,
        user_id: &UserId,
        question_id: &QuestionId,
    ) -> Result<bool, StoreError> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        ensure_user_exists(&tx, user_id)?;
        ensure_question_exists(&tx, question_id)?;

        let removed = tx.execute(
            "DELETE FROM saved_questions WHERE user_id=?1 AND question_id=?2",
            params![user_id.as_str(), question_id.as_str()],
        )?;
        let saved = removed == 0;
        if saved {
            tx.execute(
                "INSERT INTO saved_questions(user_id, question_id, saved_at_ms) VALUES (?1, ?2, ?3)",
                params![user_id.as_str(), question_id.as_str(), now_ms()],
            )?;
        }
        tx.commit()?;

        tracing::debug!(user_id = %user_id, question_id = %question_id, saved, "save toggled");
        Ok(saved)
    }

    /// Saved questions of one user, most recently saved first.
    pub fn saved_questions(
        &self,
        request: SavedQuestionsRequest,
    ) -> Result<Page<QuestionRow>, StoreError> {
        ensure_user_exists(&self.conn, &request.user_id)?;
        let needle = search_needle(request.search.as_deref());
        let limit = to_sqlite_i64(request.page.page_size())?;
        let offset = sqlite_offset(&request.page);

        let from = format!(
            "FROM saved_questions s JOIN questions q ON q.id = s.question_id \
             WHERE s.user_id=?2 AND {SEARCH_FILTER}"
        );

        let total: i64 = self.conn.query_row(
            &format!("SELECT COUNT(1) {from}"),
            params![needle, request.user_id.as_str()],
            |row| row.get(0),
        )?;

        let mut stmt = self.conn.prepare(&format!(
            "SELECT q.id {from} ORDER BY s.saved_at_ms DESC, s.rowid DESC LIMIT ?3 OFFSET ?4"
        ))?;
        let rows = stmt.query_map(
            params![needle, request.user_id.as_str(), limit, offset],
            |row| row.get::<_, String>(0),
        )?;
        let mut ids = Vec::new();
        for row in rows {
            ids.push(row?);
        }

        let items = load_questions(&self.conn, ids)?;
        Ok(Page::new(
            &request.page,
            items,
            usize::try_from(total).unwrap_or(0),
        ))
    }
}
