#![forbid(unsafe_code)]

use super::Args;
use crate::support::ActionError;
use qa_core::PageRequest;
use serde_json::Value;

pub(crate) fn optional_i64(args: &Args, key: &str) -> Result<Option<i64>, ActionError> {
    let Some(value) = args.get(key) else {
        return Ok(None);
    };
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| ActionError::invalid(format!("{key} must be an integer"))),
        _ => Err(ActionError::invalid(format!("{key} must be an integer"))),
    }
}

/// Reads `page` and `pageSize`.
pub(crate) fn page_request(args: &Args, default_page_size: usize) -> Result<PageRequest, ActionError> {
    let page = optional_i64(args, "page")?;
    let page_size = optional_i64(args, "pageSize")?;
    PageRequest::try_new(page, page_size, default_page_size)
        .map_err(|err| ActionError::invalid(err.message()))
}
