#![forbid(unsafe_code)]

use super::super::interactions::{NewInteraction, has_interaction, record_interaction_tx};
use super::*;
use qa_core::InteractionAction;
use rusqlite::TransactionBehavior;

impl SqliteStore {
    /// Counts a view. A signed-in viewer gets one `view` interaction per
    /// question; repeat views only bump the counter.
    pub fn view_question(
        &mut self,
        question_id: &QuestionId,
        viewer_id: Option<&UserId>,
    ) -> Result<ViewOutcome, StoreError> {
        let created_at_ms = now_ms();
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        if let Some(viewer_id) = viewer_id {
            ensure_user_exists(&tx, viewer_id)?;
        }

        let updated = tx.execute(
            "UPDATE questions SET views = views + 1 WHERE id=?1",
            params![question_id.as_str()],
        )?;
        if updated == 0 {
            return Err(StoreError::not_found(question_id));
        }

        let mut interaction_recorded = false;
        if let Some(viewer_id) = viewer_id {
            if has_interaction(&tx, viewer_id, InteractionAction::View, question_id)? {
                tracing::debug!(question_id = %question_id, user_id = %viewer_id, "view already recorded");
            } else {
                let tag_ids = question_tag_ids(&tx, question_id)?;
                record_interaction_tx(
                    &tx,
                    NewInteraction {
                        user_id: viewer_id,
                        action: InteractionAction::View,
                        question_id: Some(question_id),
                        answer_id: None,
                        tag_ids: &tag_ids,
                        created_at_ms,
                    },
                )?;
                interaction_recorded = true;
            }
        }

        let views: i64 = tx.query_row(
            "SELECT views FROM questions WHERE id=?1",
            params![question_id.as_str()],
            |row| row.get(0),
        )?;
        tx.commit()?;

        Ok(ViewOutcome {
            views,
            interaction_recorded,
        })
    }
}
