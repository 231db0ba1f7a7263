#![forbid(unsafe_code)]

use qa_core::{EntityId, IdError, PageError, SortKeyError, TagNameError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

/// Coarse classification surfaced to callers that only need to know which
/// family an error belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Validation,
    Persistence,
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Validation => "INVALID_INPUT",
            Self::Persistence => "PERSISTENCE",
        }
    }
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::InvalidInput(_) => ErrorKind::Validation,
            Self::Io(_) | Self::Sql(_) => ErrorKind::Persistence,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    pub fn not_found<T: EntityId>(id: &T) -> Self {
        Self::NotFound {
            kind: T::KIND,
            id: id.as_str().to_string(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl From<IdError> for StoreError {
    fn from(value: IdError) -> Self {
        Self::InvalidInput(value.message())
    }
}

impl From<TagNameError> for StoreError {
    fn from(value: TagNameError) -> Self {
        Self::InvalidInput(value.message().to_string())
    }
}

impl From<SortKeyError> for StoreError {
    fn from(value: SortKeyError) -> Self {
        Self::InvalidInput(value.message())
    }
}

impl From<PageError> for StoreError {
    fn from(value: PageError) -> Self {
        Self::InvalidInput(value.message())
    }
}
