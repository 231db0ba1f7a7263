#![forbid(unsafe_code)]

use super::*;
use qa_core::{TagName, fold_tag_key};
use rusqlite::TransactionBehavior;

impl SqliteStore {
    /// Resolves tag names to canonical tags, creating missing ones, and links
    /// each to `question_id`. Returns one id per input name, in input order.
    pub fn resolve_tags(
        &mut self,
        names: &[String],
        question_id: &QuestionId,
    ) -> Result<Vec<TagId>, StoreError> {
        let created_at_ms = now_ms();
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        ensure_question_exists(&tx, question_id)?;
        let tag_ids = resolve_tags_tx(&tx, names, question_id, created_at_ms)?;
        tx.commit()?;
        Ok(tag_ids)
    }

    pub fn find_tag(&self, name: &str) -> Result<Option<TagRow>, StoreError> {
        let key = fold_tag_key(name);
        if key.is_empty() {
            return Ok(None);
        }
        let row = self
            .conn
            .query_row(
                "SELECT id, name, created_at_ms FROM tags WHERE name_key=?1",
                params![key],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, i64>(2)?,
                    ))
                },
            )
            .optional()?;
        let Some((id, name, created_at_ms)) = row else {
            return Ok(None);
        };

        let mut stmt = self.conn.prepare(
            "SELECT qt.question_id FROM question_tags qt \
             JOIN questions q ON q.id = qt.question_id \
             WHERE qt.tag_id=?1 ORDER BY q.seq ASC",
        )?;
        let rows = stmt.query_map(params![id], |row| row.get::<_, String>(0))?;
        let mut question_ids = Vec::new();
        for row in rows {
            question_ids.push(row?);
        }

        Ok(Some(TagRow {
            id: decode_id(id)?,
            name,
            question_ids: decode_ids(question_ids)?,
            created_at_ms,
        }))
    }
}

pub(super) fn resolve_tags_tx(
    tx: &Transaction<'_>,
    names: &[String],
    question_id: &QuestionId,
    created_at_ms: i64,
) -> Result<Vec<TagId>, StoreError> {
    let mut out = Vec::with_capacity(names.len());
    for raw in names {
        let name = TagName::try_new(raw)?;
        let tag_id = upsert_tag_tx(tx, &name, created_at_ms)?;
        link_question_tag_tx(tx, question_id, &tag_id)?;
        out.push(tag_id);
    }
    if !out.is_empty() {
        tracing::debug!(question_id = %question_id, resolved = out.len(), "tags resolved");
    }
    Ok(out)
}

/// Find-or-create by folded key in one statement. The id is derived from
/// the highest existing sequence; tags are never deleted so ids are not
/// reused.
fn upsert_tag_tx(
    tx: &Transaction<'_>,
    name: &TagName,
    created_at_ms: i64,
) -> Result<TagId, StoreError> {
    let id: String = tx.query_row(
        r#"
        INSERT INTO tags(id, seq, name, name_key, created_at_ms)
        SELECT printf('T-%06d', next_seq), next_seq, ?1, ?2, ?3
        FROM (SELECT COALESCE(MAX(seq), 0) + 1 AS next_seq FROM tags)
        WHERE true
        ON CONFLICT(name_key) DO UPDATE SET name_key=excluded.name_key
        RETURNING id
        "#,
        params![name.display(), name.key(), created_at_ms],
        |row| row.get(0),
    )?;
    decode_id(id)
}

/// Links with set semantics; a new link goes to the end of the question's
/// ordered tag list.
fn link_question_tag_tx(
    tx: &Transaction<'_>,
    question_id: &QuestionId,
    tag_id: &TagId,
) -> Result<(), StoreError> {
    tx.execute(
        r#"
        INSERT OR IGNORE INTO question_tags(question_id, tag_id, position)
        SELECT ?1, ?2, COALESCE(MAX(position), -1) + 1
        FROM question_tags WHERE question_id=?1
        "#,
        params![question_id.as_str(), tag_id.as_str()],
    )?;
    Ok(())
}
