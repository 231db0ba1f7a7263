#![forbid(unsafe_code)]

use super::*;

impl SqliteStore {
    pub fn get_question(&self, question_id: &QuestionId) -> Result<QuestionRow, StoreError> {
        require_question(&self.conn, question_id)
    }
}
