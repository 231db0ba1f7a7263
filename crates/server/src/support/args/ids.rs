#![forbid(unsafe_code)]

use super::Args;
use super::strings::{optional_string, require_string};
use crate::support::ActionError;
use qa_core::EntityId;

pub(crate) fn require_id<T: EntityId>(args: &Args, key: &str) -> Result<T, ActionError> {
    let raw = require_string(args, key)?;
    parse_id(&raw, key)
}

pub(crate) fn optional_id<T: EntityId>(args: &Args, key: &str) -> Result<Option<T>, ActionError> {
    match optional_string(args, key)? {
        Some(raw) if !raw.trim().is_empty() => parse_id(&raw, key).map(Some),
        _ => Ok(None),
    }
}

fn parse_id<T: EntityId>(raw: &str, key: &str) -> Result<T, ActionError> {
    T::try_new(raw).map_err(|err| ActionError::invalid(format!("{key}: {}", err.message())))
}
