#![forbid(unsafe_code)]

use super::Args;
use crate::support::ActionError;
use serde_json::Value;

pub(crate) fn optional_string_array(
    args: &Args,
    key: &str,
) -> Result<Option<Vec<String>>, ActionError> {
    let Some(value) = args.get(key) else {
        return Ok(None);
    };
    if value.is_null() {
        return Ok(None);
    }
    let Some(arr) = value.as_array() else {
        return Err(ActionError::invalid(format!(
            "{key} must be an array of strings"
        )));
    };
    let mut out = Vec::with_capacity(arr.len());
    for item in arr {
        let Some(s) = item.as_str() else {
            return Err(ActionError::invalid(format!(
                "{key} must be an array of strings"
            )));
        };
        out.push(s.to_string());
    }
    Ok(Some(out))
}
