#![forbid(unsafe_code)]

/// Opaque entity identifier minted by the store from a per-kind counter.
///
/// Ids render as `<PREFIX>-<seq>` (for example `Q-000042`), but callers must
/// treat them as opaque strings; only the prefix is checked on parse.
pub trait EntityId: Sized {
    const PREFIX: &'static str;
    const KIND: &'static str;

    fn try_new(value: impl Into<String>) -> Result<Self, IdError>;

    fn as_str(&self) -> &str;

    fn from_seq(seq: i64) -> Self;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IdError {
    Empty,
    TooLong,
    WrongPrefix { expected: &'static str },
    InvalidChar { ch: char, index: usize },
}

impl IdError {
    pub fn message(&self) -> String {
        match self {
            Self::Empty => "id must not be empty".to_string(),
            Self::TooLong => "id is too long".to_string(),
            Self::WrongPrefix { expected } => format!("id must start with '{expected}-'"),
            Self::InvalidChar { ch, index } => {
                format!("id contains invalid character {ch:?} at {index}")
            }
        }
    }
}

fn validate_id(value: &str, prefix: &'static str) -> Result<(), IdError> {
    if value.is_empty() {
        return Err(IdError::Empty);
    }
    if value.len() > 64 {
        return Err(IdError::TooLong);
    }
    let Some(rest) = value
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
    else {
        return Err(IdError::WrongPrefix { expected: prefix });
    };
    if rest.is_empty() {
        return Err(IdError::Empty);
    }
    let offset = prefix.len() + 1;
    for (index, ch) in rest.chars().enumerate() {
        if ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-') {
            continue;
        }
        return Err(IdError::InvalidChar {
            ch,
            index: index + offset,
        });
    }
    Ok(())
}

macro_rules! entity_id {
    ($name:ident, $prefix:literal, $kind:literal) => {
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl EntityId for $name {
            const PREFIX: &'static str = $prefix;
            const KIND: &'static str = $kind;

            fn try_new(value: impl Into<String>) -> Result<Self, IdError> {
                let value = value.into();
                let value = value.trim().to_string();
                validate_id(&value, $prefix)?;
                Ok(Self(value))
            }

            fn as_str(&self) -> &str {
                &self.0
            }

            fn from_seq(seq: i64) -> Self {
                Self(format!("{}-{:06}", $prefix, seq))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

entity_id!(UserId, "U", "user");
entity_id!(QuestionId, "Q", "question");
entity_id!(AnswerId, "A", "answer");
entity_id!(TagId, "T", "tag");
