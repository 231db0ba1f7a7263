#![forbid(unsafe_code)]

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionAction {
    AskQuestion,
    Answer,
    View,
}

impl InteractionAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AskQuestion => "ask_question",
            Self::Answer => "answer",
            Self::View => "view",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "ask_question" => Some(Self::AskQuestion),
            "answer" => Some(Self::Answer),
            "view" => Some(Self::View),
            _ => None,
        }
    }
}
