#![forbid(unsafe_code)]

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim() {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            _ => None,
        }
    }
}

/// A voter's relationship to one target. Being a single value per
/// (voter, target) pair, a voter can never be both an upvoter and a
/// downvoter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VoteState {
    #[default]
    None,
    Up,
    Down,
}

impl VoteState {
    pub fn from_flags(has_upvoted: bool, has_downvoted: bool) -> Self {
        match (has_upvoted, has_downvoted) {
            (true, _) => Self::Up,
            (false, true) => Self::Down,
            (false, false) => Self::None,
        }
    }

    pub fn from_direction(direction: Option<VoteDirection>) -> Self {
        match direction {
            Some(VoteDirection::Up) => Self::Up,
            Some(VoteDirection::Down) => Self::Down,
            None => Self::None,
        }
    }

    pub fn direction(self) -> Option<VoteDirection> {
        match self {
            Self::None => None,
            Self::Up => Some(VoteDirection::Up),
            Self::Down => Some(VoteDirection::Down),
        }
    }

    pub fn has_upvoted(self) -> bool {
        self == Self::Up
    }

    pub fn has_downvoted(self) -> bool {
        self == Self::Down
    }

    pub fn apply(self, direction: VoteDirection) -> VoteTransition {
        let already_set = self.direction() == Some(direction);
        let (kind, next) = if already_set {
            (VoteTransitionKind::ToggleOff, Self::None)
        } else if self == Self::None {
            (VoteTransitionKind::ToggleOn, Self::from_direction(Some(direction)))
        } else {
            (VoteTransitionKind::Switch, Self::from_direction(Some(direction)))
        };
        VoteTransition {
            previous: self,
            next,
            kind,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteTransitionKind {
    ToggleOn,
    ToggleOff,
    Switch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoteTransition {
    pub previous: VoteState,
    pub next: VoteState,
    pub kind: VoteTransitionKind,
}

impl VoteTransition {
    /// One signed adjustment per call: negative only when the vote in the
    /// requested direction was already present.
    pub fn reputation_delta(&self, magnitude: i64) -> i64 {
        match self.kind {
            VoteTransitionKind::ToggleOff => -magnitude,
            VoteTransitionKind::ToggleOn | VoteTransitionKind::Switch => magnitude,
        }
    }
}
