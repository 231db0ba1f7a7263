#![forbid(unsafe_code)]

use super::super::StoreError;
use qa_core::{EntityId, PageRequest};

/// Decodes an id column; a malformed value means the row was not written by
/// this store.
pub(in crate::store) fn decode_id<T: EntityId>(raw: String) -> Result<T, StoreError> {
    T::try_new(raw).map_err(|err| {
        StoreError::InvalidInput(format!("invalid {} row: {}", T::KIND, err.message()))
    })
}

pub(in crate::store) fn decode_ids<T: EntityId>(raw: Vec<String>) -> Result<Vec<T>, StoreError> {
    raw.into_iter().map(decode_id).collect()
}

pub(in crate::store) fn to_sqlite_i64(value: usize) -> Result<i64, StoreError> {
    i64::try_from(value).map_err(|_| StoreError::InvalidInput("numeric overflow".to_string()))
}

/// Row offset for a page request. Offsets past `i64::MAX` are clamped; such a
/// page is past the end of any table and comes back empty.
pub(in crate::store) fn sqlite_offset(page: &PageRequest) -> i64 {
    i64::try_from(page.skip()).unwrap_or(i64::MAX)
}

pub(in crate::store) fn require_text(value: &str, field: &str) -> Result<String, StoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

/// Like [`require_text`] but keeps the body exactly as sent.
pub(in crate::store) fn require_body(value: &str, field: &str) -> Result<String, StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(value.to_string())
}
