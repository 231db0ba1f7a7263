#![forbid(unsafe_code)]

use super::*;
use qa_core::{AnswerSort, Page};

const UPVOTE_COUNT: &str =
    "(SELECT COUNT(1) FROM answer_votes v WHERE v.answer_id = a.id AND v.direction = 'up')";

impl SqliteStore {
    pub fn list_answers(&self, request: ListAnswersRequest) -> Result<Page<AnswerRow>, StoreError> {
        ensure_question_exists(&self.conn, &request.question_id)?;
        let limit = to_sqlite_i64(request.page.page_size())?;
        let offset = sqlite_offset(&request.page);

        let order = match request.sort {
            Some(AnswerSort::HighestUpvotes) => format!("{UPVOTE_COUNT} DESC, a.seq ASC"),
            Some(AnswerSort::LowestUpvotes) => format!("{UPVOTE_COUNT} ASC, a.seq ASC"),
            Some(AnswerSort::Recent) => "a.created_at_ms DESC, a.seq DESC".to_string(),
            Some(AnswerSort::Old) => "a.created_at_ms ASC, a.seq ASC".to_string(),
            None => "a.seq ASC".to_string(),
        };

        let total: i64 = self.conn.query_row(
            "SELECT COUNT(1) FROM answers WHERE question_id=?1",
            params![request.question_id.as_str()],
            |row| row.get(0),
        )?;

        let mut stmt = self.conn.prepare(&format!(
            "SELECT a.id FROM answers a WHERE a.question_id=?1 ORDER BY {order} LIMIT ?2 OFFSET ?3"
        ))?;
        let rows = stmt.query_map(
            params![request.question_id.as_str(), limit, offset],
            |row| row.get::<_, String>(0),
        )?;
        let mut ids = Vec::new();
        for row in rows {
            ids.push(row?);
        }

        let mut items = Vec::with_capacity(ids.len());
        for id in decode_ids::<AnswerId>(ids)? {
            items.push(require_answer(&self.conn, &id)?);
        }
        Ok(Page::new(
            &request.page,
            items,
            usize::try_from(total).unwrap_or(0),
        ))
    }
}
