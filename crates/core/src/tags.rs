#![forbid(unsafe_code)]

/// A tag name as the author typed it, plus the folded key used for
/// case-insensitive uniqueness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagName {
    display: String,
    key: String,
}

impl TagName {
    pub fn try_new(value: &str) -> Result<Self, TagNameError> {
        let display = value.trim();
        if display.is_empty() {
            return Err(TagNameError::Empty);
        }
        if display.chars().any(|c| c.is_control()) {
            return Err(TagNameError::ContainsControl);
        }
        Ok(Self {
            display: display.to_string(),
            key: fold_tag_key(display),
        })
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

pub fn fold_tag_key(value: &str) -> String {
    value.trim().to_lowercase()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagNameError {
    Empty,
    ContainsControl,
}

impl TagNameError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Empty => "tag name must not be empty",
            Self::ContainsControl => "tag name contains control characters",
        }
    }
}

/// Folds free text for case-insensitive substring search.
pub fn fold_search_text(value: &str) -> String {
    value.to_lowercase()
}
