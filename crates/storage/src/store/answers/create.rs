#![forbid(unsafe_code)]

use super::super::interactions::{NewInteraction, record_interaction_tx};
use super::*;
use qa_core::InteractionAction;
use rusqlite::TransactionBehavior;

impl SqliteStore {
    /// Posts an answer, logs the `answer` interaction with the question's
    /// tags and credits the author, all in one transaction.
    pub fn create_answer(&mut self, request: CreateAnswerRequest) -> Result<AnswerRow, StoreError> {
        let content = require_body(&request.content, "content")?;
        let created_at_ms = now_ms();
        let post_delta = self.policy.post_answer;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        ensure_user_exists(&tx, &request.author_id)?;
        ensure_question_exists(&tx, &request.question_id)?;

        let (answer_id, seq) = mint_id_tx::<AnswerId>(&tx)?;
        tx.execute(
            "INSERT INTO answers(id, seq, question_id, author_id, content, created_at_ms) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                answer_id.as_str(),
                seq,
                request.question_id.as_str(),
                request.author_id.as_str(),
                content,
                created_at_ms,
            ],
        )?;

        let tag_ids = question_tag_ids(&tx, &request.question_id)?;
        record_interaction_tx(
            &tx,
            NewInteraction {
                user_id: &request.author_id,
                action: InteractionAction::Answer,
                question_id: Some(&request.question_id),
                answer_id: Some(&answer_id),
                tag_ids: &tag_ids,
                created_at_ms,
            },
        )?;
        adjust_reputation_tx(&tx, &request.author_id, post_delta)?;

        let row = require_answer(&tx, &answer_id)?;
        tx.commit()?;

        tracing::debug!(
            answer_id = %answer_id,
            question_id = %request.question_id,
            author_id = %request.author_id,
            "answer created"
        );
        Ok(row)
    }
}
