#![forbid(unsafe_code)]

use super::*;
use qa_core::{Page, QuestionSort};

impl SqliteStore {
    pub fn list_questions(
        &self,
        request: ListQuestionsRequest,
    ) -> Result<Page<QuestionRow>, StoreError> {
        let needle = search_needle(request.search.as_deref());
        let limit = to_sqlite_i64(request.page.page_size())?;
        let offset = sqlite_offset(&request.page);

        let mut filter = format!("WHERE {SEARCH_FILTER}");
        if request.sort == Some(QuestionSort::Unanswered) {
            filter.push_str(" AND NOT EXISTS (SELECT 1 FROM answers a WHERE a.question_id = q.id)");
        }
        let order = match request.sort {
            Some(QuestionSort::Newest) => "q.created_at_ms DESC, q.seq DESC",
            Some(QuestionSort::Frequent) => "q.views DESC, q.seq ASC",
            Some(QuestionSort::Unanswered) | None => "q.seq ASC",
        };

        let total: i64 = self.conn.query_row(
            &format!("SELECT COUNT(1) FROM questions q {filter}"),
            params![needle],
            |row| row.get(0),
        )?;

        let mut stmt = self.conn.prepare(&format!(
            "SELECT q.id FROM questions q {filter} ORDER BY {order} LIMIT ?2 OFFSET ?3"
        ))?;
        let rows = stmt.query_map(params![needle, limit, offset], |row| row.get::<_, String>(0))?;
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
