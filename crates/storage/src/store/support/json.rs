#![forbid(unsafe_code)]

use super::super::StoreError;
use qa_core::{EntityId, TagId};

pub(in crate::store) fn tag_ids_to_json(tag_ids: &[TagId]) -> Result<String, StoreError> {
    let raw = tag_ids.iter().map(|id| id.as_str()).collect::<Vec<_>>();
    serde_json::to_string(&raw)
        .map_err(|err| StoreError::InvalidInput(format!("tags_json encode: {err}")))
}

pub(in crate::store) fn tag_ids_from_json(raw: &str) -> Result<Vec<TagId>, StoreError> {
    let values: Vec<String> = serde_json::from_str(raw)
        .map_err(|err| StoreError::InvalidInput(format!("invalid tags_json row: {err}")))?;
    values
        .into_iter()
        .map(|value| TagId::try_new(value).map_err(StoreError::from))
        .collect()
}
