#![forbid(unsafe_code)]

use super::render::tag_json;
use crate::support::args::*;
use crate::support::{ActionError, ActionResult};
use qa_storage::SqliteStore;

pub(super) fn get(store: &mut SqliteStore, args: &Args) -> ActionResult {
    let name = require_string(args, "name")?;
    match store.find_tag(&name)? {
        Some(tag) => Ok(tag_json(&tag)),
        None => Err(ActionError::not_found(format!(
            "tag not found: {}",
            name.trim()
        ))),
    }
}
