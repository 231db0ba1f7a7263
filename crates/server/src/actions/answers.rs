#![forbid(unsafe_code)]

use super::render::{answer_json, page_json, vote_state_json};
use crate::support::args::*;
use crate::support::{ActionError, ActionResult};
use qa_core::{AnswerId, AnswerSort, DEFAULT_ANSWER_PAGE_SIZE, EntityId, UserId};
use qa_storage::{CreateAnswerRequest, ListAnswersRequest, SqliteStore};
use serde_json::json;

pub(super) fn create(store: &mut SqliteStore, args: &Args) -> ActionResult {
    let request = CreateAnswerRequest {
        content: require_string(args, "content")?,
        author_id: require_id(args, "author")?,
        question_id: require_id(args, "question")?,
    };
    let answer = store.create_answer(request)?;
    Ok(answer_json(&answer))
}

/// With `userId`, each answer also carries that user's vote on it.
pub(super) fn list(store: &mut SqliteStore, args: &Args) -> ActionResult {
    let viewer: Option<UserId> = optional_id(args, "userId")?;
    let sort_by = optional_string(args, "sortBy")?;
    let sort = AnswerSort::parse_optional(sort_by.as_deref())
        .map_err(|err| ActionError::invalid(err.message()))?;
    let request = ListAnswersRequest {
        question_id: require_id(args, "questionId")?,
        sort,
        page: page_request(args, DEFAULT_ANSWER_PAGE_SIZE)?,
    };
    let page = store.list_answers(request)?;

    let mut out = page_json("answers", &page, answer_json);
    if let Some(viewer) = viewer
        && let Some(rendered) = out.get_mut("answers").and_then(|v| v.as_array_mut())
    {
        for (answer, value) in page.items.iter().zip(rendered.iter_mut()) {
            if let Some(obj) = value.as_object_mut() {
                obj.insert(
                    "viewer".to_string(),
                    vote_state_json(answer.vote_state_of(&viewer)),
                );
            }
        }
    }
    Ok(out)
}

pub(super) fn delete(store: &mut SqliteStore, args: &Args) -> ActionResult {
    let answer_id: AnswerId = require_id(args, "answerId")?;
    let report = store.delete_answer(&answer_id)?;
    Ok(json!({
        "answerId": answer_id.as_str(),
        "interactionsDeleted": report.interactions_deleted,
        "votesRemoved": report.votes_removed,
    }))
}
