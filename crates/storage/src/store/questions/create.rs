#![forbid(unsafe_code)]

use super::super::interactions::{NewInteraction, record_interaction_tx};
use super::super::tags::resolve_tags_tx;
use super::*;
use qa_core::{InteractionAction, fold_search_text};
use rusqlite::TransactionBehavior;

impl SqliteStore {
    /// Creates a question, resolves its tags, logs the `ask_question`
    /// interaction and credits the author, all in one transaction.
    pub fn create_question(
        &mut self,
        request: CreateQuestionRequest,
    ) -> Result<QuestionRow, StoreError> {
        let title = require_text(&request.title, "title")?;
        let content = require_body(&request.content, "content")?;
        let created_at_ms = now_ms();
        let ask_delta = self.policy.ask_question;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        ensure_user_exists(&tx, &request.author_id)?;

        let (question_id, seq) = mint_id_tx::<QuestionId>(&tx)?;
        tx.execute(
            "INSERT INTO questions(id, seq, title, content, title_fold, content_fold, author_id, views, created_at_ms) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 0, ?8)",
            params![
                question_id.as_str(),
                seq,
                title,
                content,
                fold_search_text(&title),
                fold_search_text(&content),
                request.author_id.as_str(),
                created_at_ms,
            ],
        )?;

        resolve_tags_tx(&tx, &request.tags, &question_id, created_at_ms)?;
        let tag_ids = question_tag_ids(&tx, &question_id)?;

        record_interaction_tx(
            &tx,
            NewInteraction {
                user_id: &request.author_id,
                action: InteractionAction::AskQuestion,
                question_id: Some(&question_id),
                answer_id: None,
                tag_ids: &tag_ids,
                created_at_ms,
            },
        )?;
        adjust_reputation_tx(&tx, &request.author_id, ask_delta)?;

        let row = require_question(&tx, &question_id)?;
        tx.commit()?;

        tracing::debug!(
            question_id = %question_id,
            author_id = %request.author_id,
            tags = tag_ids.len(),
            "question created"
        );
        Ok(row)
    }
}
