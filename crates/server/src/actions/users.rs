#![forbid(unsafe_code)]

use super::render::{interaction_json, user_json};
use crate::support::ActionResult;
use crate::support::args::*;
use qa_core::UserId;
use qa_storage::{CreateUserRequest, SqliteStore};
use serde_json::{Value, json};

pub(super) fn create(store: &mut SqliteStore, args: &Args) -> ActionResult {
    let request = CreateUserRequest {
        name: require_string(args, "name")?,
        username: require_string(args, "username")?,
        email: require_string(args, "email")?,
        picture: optional_trimmed(args, "picture")?,
        bio: optional_trimmed(args, "bio")?,
    };
    let user = store.create_user(request)?;
    Ok(user_json(&user))
}

pub(super) fn get(store: &mut SqliteStore, args: &Args) -> ActionResult {
    let user_id: UserId = require_id(args, "userId")?;
    let user = store.get_user(&user_id)?;
    Ok(user_json(&user))
}

pub(super) fn interactions(store: &mut SqliteStore, args: &Args) -> ActionResult {
    let user_id: UserId = require_id(args, "userId")?;
    let rows = store.user_interactions(&user_id)?;
    Ok(json!({
        "interactions": rows.iter().map(interaction_json).collect::<Vec<Value>>(),
    }))
}
