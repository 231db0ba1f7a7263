#![forbid(unsafe_code)]

use super::*;
use qa_core::fold_search_text;
use rusqlite::TransactionBehavior;

impl SqliteStore {
    pub fn edit_question(&mut self, request: EditQuestionRequest) -> Result<QuestionRow, StoreError> {
        let title = require_text(&request.title, "title")?;
        let content = require_body(&request.content, "content")?;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let updated = tx.execute(
            "UPDATE questions SET title=?2, content=?3, title_fold=?4, content_fold=?5 WHERE id=?1",
            params![
                request.question_id.as_str(),
                title,
                content,
                fold_search_text(&title),
                fold_search_text(&content),
            ],
        )?;
        if updated == 0 {
            return Err(StoreError::not_found(&request.question_id));
        }
        let row = require_question(&tx, &request.question_id)?;
        tx.commit()?;

        tracing::debug!(question_id = %request.question_id, "question edited");
        Ok(row)
    }
}
