#![forbid(unsafe_code)]

mod create;
mod delete;
mod edit;
mod get;
mod list;
mod view;

use super::*;

pub(super) fn load_question(
    conn: &Connection,
    question_id: &QuestionId,
) -> Result<Option<QuestionRow>, StoreError> {
    let row = conn
        .query_row(
            "SELECT id, title, content, author_id, views, created_at_ms FROM questions WHERE id=?1",
            params![question_id.as_str()],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, i64>(4)?,
                    row.get::<_, i64>(5)?,
                ))
            },
        )
        .optional()?;
    let Some((id, title, content, author_id, views, created_at_ms)) = row else {
        return Ok(None);
    };

    let mut stmt = conn.prepare(
        "SELECT t.id, t.name FROM question_tags qt \
         JOIN tags t ON t.id = qt.tag_id \
         WHERE qt.question_id=?1 ORDER BY qt.position ASC",
    )?;
    let rows = stmt.query_map(params![question_id.as_str()], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;
    let mut tags = Vec::new();
    for row in rows {
        let (tag_id, name) = row?;
        tags.push(TagRef {
            id: decode_id(tag_id)?,
            name,
        });
    }

    let (upvoters, downvoters) =
        voters_by_direction(conn, "question_votes", "question_id", question_id.as_str())?;

    Ok(Some(QuestionRow {
        id: decode_id(id)?,
        title,
        content,
        author_id: decode_id(author_id)?,
        tags,
        answer_ids: answer_ids_for_question(conn, question_id)?,
        upvoters,
        downvoters,
        views,
        created_at_ms,
    }))
}

pub(super) fn require_question(
    conn: &Connection,
    question_id: &QuestionId,
) -> Result<QuestionRow, StoreError> {
    load_question(conn, question_id)?.ok_or_else(|| StoreError::not_found(question_id))
}

/// Loads full rows for `ids`, preserving their order.
pub(super) fn load_questions(
    conn: &Connection,
    ids: Vec<String>,
) -> Result<Vec<QuestionRow>, StoreError> {
    let mut out = Vec::with_capacity(ids.len());
    for id in decode_ids::<QuestionId>(ids)? {
        out.push(require_question(conn, &id)?);
    }
    Ok(out)
}

/// Search condition over the folded title and body; `?1` is the folded
/// needle or NULL.
pub(super) const SEARCH_FILTER: &str =
    "(?1 IS NULL OR instr(q.title_fold, ?1) > 0 OR instr(q.content_fold, ?1) > 0)";

pub(super) fn search_needle(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(qa_core::fold_search_text)
}
