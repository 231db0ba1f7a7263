#![forbid(unsafe_code)]

use super::Args;
use crate::support::ActionError;
use serde_json::Value;

pub(crate) fn require_string(args: &Args, key: &str) -> Result<String, ActionError> {
    match args.get(key) {
        Some(Value::String(v)) => Ok(v.to_string()),
        None | Some(Value::Null) => Err(ActionError::invalid(format!("{key} is required"))),
        Some(_) => Err(ActionError::invalid(format!("{key} must be a string"))),
    }
}

pub(crate) fn optional_string(args: &Args, key: &str) -> Result<Option<String>, ActionError> {
    let Some(value) = args.get(key) else {
        return Ok(None);
    };
    match value {
        Value::Null => Ok(None),
        Value::String(v) => Ok(Some(v.to_string())),
        _ => Err(ActionError::invalid(format!("{key} must be a string"))),
    }
}

/// Like [`optional_string`], but blank values count as absent.
pub(crate) fn optional_trimmed(args: &Args, key: &str) -> Result<Option<String>, ActionError> {
    Ok(optional_string(args, key)?
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}
