#![forbid(unsafe_code)]

mod create;
mod delete;
mod list;

use super::*;

pub(super) fn load_answer(
    conn: &Connection,
    answer_id: &AnswerId,
) -> Result<Option<AnswerRow>, StoreError> {
    let row = conn
        .query_row(
            "SELECT id, question_id, author_id, content, created_at_ms FROM answers WHERE id=?1",
            params![answer_id.as_str()],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, i64>(4)?,
                ))
            },
        )
        .optional()?;
    let Some((id, question_id, author_id, content, created_at_ms)) = row else {
        return Ok(None);
    };

    let (upvoters, downvoters) =
        voters_by_direction(conn, "answer_votes", "answer_id", answer_id.as_str())?;

    Ok(Some(AnswerRow {
        id: decode_id(id)?,
        question_id: decode_id(question_id)?,
        author_id: decode_id(author_id)?,
        content,
        upvoters,
        downvoters,
        created_at_ms,
    }))
}

pub(super) fn require_answer(
    conn: &Connection,
    answer_id: &AnswerId,
) -> Result<AnswerRow, StoreError> {
    load_answer(conn, answer_id)?.ok_or_else(|| StoreError::not_found(answer_id))
}

impl SqliteStore {
    pub fn get_answer(&self, answer_id: &AnswerId) -> Result<AnswerRow, StoreError> {
        require_answer(&self.conn, answer_id)
    }
}
