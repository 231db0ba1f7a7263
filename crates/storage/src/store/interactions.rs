#![forbid(unsafe_code)]

use super::*;
use qa_core::InteractionAction;

pub(super) struct NewInteraction<'a> {
    pub user_id: &'a UserId,
    pub action: InteractionAction,
    pub question_id: Option<&'a QuestionId>,
    pub answer_id: Option<&'a AnswerId>,
    pub tag_ids: &'a [TagId],
    pub created_at_ms: i64,
}

pub(super) fn record_interaction_tx(
    tx: &Transaction<'_>,
    interaction: NewInteraction<'_>,
) -> Result<i64, StoreError> {
    let tags_json = tag_ids_to_json(interaction.tag_ids)?;
    tx.execute(
        "INSERT INTO interactions(user_id, action, question_id, answer_id, tags_json, created_at_ms) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            interaction.user_id.as_str(),
            interaction.action.as_str(),
            interaction.question_id.map(|id| id.as_str()),
            interaction.answer_id.map(|id| id.as_str()),
            tags_json,
            interaction.created_at_ms,
        ],
    )?;
    Ok(tx.last_insert_rowid())
}

pub(super) fn has_interaction(
    conn: &Connection,
    user_id: &UserId,
    action: InteractionAction,
    question_id: &QuestionId,
) -> Result<bool, StoreError> {
    Ok(conn
        .query_row(
            "SELECT 1 FROM interactions WHERE user_id=?1 AND action=?2 AND question_id=?3 LIMIT 1",
            params![user_id.as_str(), action.as_str(), question_id.as_str()],
            |row| row.get::<_, i64>(0),
        )
        .optional()?
        .is_some())
}

impl SqliteStore {
    pub fn user_interactions(&self, user_id: &UserId) -> Result<Vec<InteractionRow>, StoreError> {
        ensure_user_exists(&self.conn, user_id)?;

        let mut stmt = self.conn.prepare(
            "SELECT seq, user_id, action, question_id, answer_id, tags_json, created_at_ms \
             FROM interactions WHERE user_id=?1 ORDER BY seq ASC",
        )?;
        let rows = stmt.query_map(params![user_id.as_str()], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, Option<String>>(4)?,
                row.get::<_, String>(5)?,
                row.get::<_, i64>(6)?,
            ))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (seq, user_id, action, question_id, answer_id, tags_json, created_at_ms) = row?;
            let Some(action) = InteractionAction::from_str(&action) else {
                return Err(StoreError::InvalidInput(format!(
                    "invalid interaction action row: {action}"
                )));
            };
            out.push(InteractionRow {
                seq,
                user_id: decode_id(user_id)?,
                action,
                question_id: question_id.map(decode_id).transpose()?,
                answer_id: answer_id.map(decode_id).transpose()?,
                tag_ids: tag_ids_from_json(&tags_json)?,
                created_at_ms,
            });
        }
        Ok(out)
    }

    /// Total interaction rows referencing a question or answer; used by
    /// callers checking that a cascade left nothing behind.
    pub fn count_interactions_referencing(
        &self,
        question_id: Option<&QuestionId>,
        answer_id: Option<&AnswerId>,
    ) -> Result<usize, StoreError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(1) FROM interactions \
             WHERE (?1 IS NOT NULL AND question_id=?1) OR (?2 IS NOT NULL AND answer_id=?2)",
            params![
                question_id.map(|id| id.as_str()),
                answer_id.map(|id| id.as_str())
            ],
            |row| row.get(0),
        )?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}
