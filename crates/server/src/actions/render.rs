#![forbid(unsafe_code)]

use crate::support::ts_ms_to_rfc3339;
use qa_core::{EntityId, Page, VoteState};
use qa_storage::{
    AnswerRow, InteractionRow, QuestionRow, TagRef, TagRow, UserRow, VoteOutcome,
};
use serde_json::{Value, json};

fn ids<T: EntityId>(ids: &[T]) -> Vec<&str> {
    ids.iter().map(EntityId::as_str).collect()
}

fn tag_ref_json(tag: &TagRef) -> Value {
    json!({ "id": tag.id.as_str(), "name": tag.name })
}

pub(super) fn user_json(user: &UserRow) -> Value {
    json!({
        "id": user.id.as_str(),
        "name": user.name,
        "username": user.username,
        "email": user.email,
        "picture": user.picture,
        "bio": user.bio,
        "reputation": user.reputation,
        "createdAt": ts_ms_to_rfc3339(user.created_at_ms),
    })
}

pub(super) fn question_json(question: &QuestionRow) -> Value {
    json!({
        "id": question.id.as_str(),
        "title": question.title,
        "content": question.content,
        "author": question.author_id.as_str(),
        "tags": question.tags.iter().map(tag_ref_json).collect::<Vec<_>>(),
        "answers": ids(&question.answer_ids),
        "upvotes": ids(&question.upvoters),
        "downvotes": ids(&question.downvoters),
        "views": question.views,
        "createdAt": ts_ms_to_rfc3339(question.created_at_ms),
    })
}

pub(super) fn answer_json(answer: &AnswerRow) -> Value {
    json!({
        "id": answer.id.as_str(),
        "question": answer.question_id.as_str(),
        "author": answer.author_id.as_str(),
        "content": answer.content,
        "upvotes": ids(&answer.upvoters),
        "downvotes": ids(&answer.downvoters),
        "createdAt": ts_ms_to_rfc3339(answer.created_at_ms),
    })
}

pub(super) fn tag_json(tag: &TagRow) -> Value {
    json!({
        "id": tag.id.as_str(),
        "name": tag.name,
        "questions": ids(&tag.question_ids),
        "createdOn": ts_ms_to_rfc3339(tag.created_at_ms),
    })
}

pub(super) fn interaction_json(row: &InteractionRow) -> Value {
    json!({
        "seq": row.seq,
        "user": row.user_id.as_str(),
        "action": row.action.as_str(),
        "question": row.question_id.as_ref().map(EntityId::as_str),
        "answer": row.answer_id.as_ref().map(EntityId::as_str),
        "tags": ids(&row.tag_ids),
        "createdAt": ts_ms_to_rfc3339(row.created_at_ms),
    })
}

pub(super) fn vote_state_json(state: VoteState) -> Value {
    json!({
        "hasUpvoted": state.has_upvoted(),
        "hasDownvoted": state.has_downvoted(),
    })
}

pub(super) fn vote_outcome_json(outcome: &VoteOutcome) -> Value {
    json!({
        "target": outcome.target.as_str(),
        "hasUpvoted": outcome.transition.next.has_upvoted(),
        "hasDownvoted": outcome.transition.next.has_downvoted(),
        "upvotes": outcome.upvotes,
        "downvotes": outcome.downvotes,
        "voterDelta": outcome.deltas.voter,
        "authorDelta": outcome.deltas.author,
    })
}

/// Renders a page under `key`, with the `isNext` flag clients page on.
pub(super) fn page_json<T>(key: &str, page: &Page<T>, render: fn(&T) -> Value) -> Value {
    let mut out = serde_json::Map::new();
    out.insert(
        key.to_string(),
        Value::Array(page.items.iter().map(render).collect()),
    );
    out.insert("isNext".to_string(), Value::Bool(page.has_next));
    out.insert("total".to_string(), json!(page.total));
    Value::Object(out)
}
