#![forbid(unsafe_code)]

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionSort {
    Newest,
    Frequent,
    Unanswered,
}

impl QuestionSort {
    pub const ALL: &'static [QuestionSort] = &[Self::Newest, Self::Frequent, Self::Unanswered];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Frequent => "frequent",
            Self::Unanswered => "unanswered",
        }
    }

    pub fn parse(value: &str) -> Result<Self, SortKeyError> {
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.as_str() == value.trim())
            .ok_or_else(|| SortKeyError::unknown(value, Self::ALL.iter().map(|s| s.as_str())))
    }

    /// Parses an optional key; a missing or blank key means "no sort".
    pub fn parse_optional(value: Option<&str>) -> Result<Option<Self>, SortKeyError> {
        match value.map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => Self::parse(value).map(Some),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerSort {
    HighestUpvotes,
    LowestUpvotes,
    Recent,
    Old,
}

impl AnswerSort {
    pub const ALL: &'static [AnswerSort] = &[
        Self::HighestUpvotes,
        Self::LowestUpvotes,
        Self::Recent,
        Self::Old,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::HighestUpvotes => "highestUpvotes",
            Self::LowestUpvotes => "lowestUpvotes",
            Self::Recent => "recent",
            Self::Old => "old",
        }
    }

    pub fn parse(value: &str) -> Result<Self, SortKeyError> {
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.as_str() == value.trim())
            .ok_or_else(|| SortKeyError::unknown(value, Self::ALL.iter().map(|s| s.as_str())))
    }

    pub fn parse_optional(value: Option<&str>) -> Result<Option<Self>, SortKeyError> {
        match value.map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => Self::parse(value).map(Some),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortKeyError {
    pub key: String,
    pub expected: Vec<&'static str>,
}

impl SortKeyError {
    fn unknown(key: &str, expected: impl Iterator<Item = &'static str>) -> Self {
        Self {
            key: key.trim().to_string(),
            expected: expected.collect(),
        }
    }

    pub fn message(&self) -> String {
        format!(
            "unknown sort key '{}' (expected one of: {})",
            self.key,
            self.expected.join("|")
        )
    }
}
