#![forbid(unsafe_code)]

use super::render::{page_json, question_json, vote_state_json};
use crate::support::args::*;
use crate::support::{ActionError, ActionResult};
use qa_core::{DEFAULT_QUESTION_PAGE_SIZE, EntityId, QuestionId, QuestionSort, UserId};
use qa_storage::{
    CreateQuestionRequest, EditQuestionRequest, ListQuestionsRequest, SavedQuestionsRequest,
    SqliteStore,
};
use serde_json::json;

pub(super) fn create(store: &mut SqliteStore, args: &Args) -> ActionResult {
    let request = CreateQuestionRequest {
        title: require_string(args, "title")?,
        content: require_string(args, "content")?,
        tags: optional_string_array(args, "tags")?.unwrap_or_default(),
        author_id: require_id(args, "author")?,
    };
    let question = store.create_question(request)?;
    Ok(question_json(&question))
}

/// With `userId`, also reports that user's vote on the question.
pub(super) fn get(store: &mut SqliteStore, args: &Args) -> ActionResult {
    let question_id: QuestionId = require_id(args, "questionId")?;
    let viewer: Option<UserId> = optional_id(args, "userId")?;
    let question = store.get_question(&question_id)?;

    let mut out = question_json(&question);
    if let Some(viewer) = viewer
        && let Some(obj) = out.as_object_mut()
    {
        obj.insert(
            "viewer".to_string(),
            vote_state_json(question.vote_state_of(&viewer)),
        );
    }
    Ok(out)
}

pub(super) fn edit(store: &mut SqliteStore, args: &Args) -> ActionResult {
    let request = EditQuestionRequest {
        question_id: require_id(args, "questionId")?,
        title: require_string(args, "title")?,
        content: require_string(args, "content")?,
    };
    let question = store.edit_question(request)?;
    Ok(question_json(&question))
}

pub(super) fn list(store: &mut SqliteStore, args: &Args) -> ActionResult {
    let filter = optional_string(args, "filter")?;
    let sort = QuestionSort::parse_optional(filter.as_deref())
        .map_err(|err| ActionError::invalid(err.message()))?;
    let request = ListQuestionsRequest {
        search: optional_trimmed(args, "searchQuery")?,
        sort,
        page: page_request(args, DEFAULT_QUESTION_PAGE_SIZE)?,
    };
    let page = store.list_questions(request)?;
    Ok(page_json("questions", &page, question_json))
}

pub(super) fn view(store: &mut SqliteStore, args: &Args) -> ActionResult {
    let question_id: QuestionId = require_id(args, "questionId")?;
    let viewer: Option<UserId> = optional_id(args, "userId")?;
    let outcome = store.view_question(&question_id, viewer.as_ref())?;
    Ok(json!({
        "questionId": question_id.as_str(),
        "views": outcome.views,
        "interactionRecorded": outcome.interaction_recorded,
    }))
}

pub(super) fn delete(store: &mut SqliteStore, args: &Args) -> ActionResult {
    let question_id: QuestionId = require_id(args, "questionId")?;
    let report = store.delete_question(&question_id)?;
    Ok(json!({
        "questionId": question_id.as_str(),
        "answersDeleted": report.answers_deleted,
        "interactionsDeleted": report.interactions_deleted,
        "tagLinksRemoved": report.tag_links_removed,
        "savesRemoved": report.saves_removed,
        "votesRemoved": report.votes_removed,
    }))
}

pub(super) fn save(store: &mut SqliteStore, args: &Args) -> ActionResult {
    let user_id: UserId = require_id(args, "userId")?;
    let question_id: QuestionId = require_id(args, "questionId")?;
    let saved = store.toggle_save_question(&user_id, &question_id)?;
    Ok(json!({ "questionId": question_id.as_str(), "saved": saved }))
}

pub(super) fn saved(store: &mut SqliteStore, args: &Args) -> ActionResult {
    let request = SavedQuestionsRequest {
        user_id: require_id(args, "userId")?,
        search: optional_trimmed(args, "searchQuery")?,
        page: page_request(args, DEFAULT_QUESTION_PAGE_SIZE)?,
    };
    let page = store.saved_questions(request)?;
    Ok(page_json("questions", &page, question_json))
}
