mod actions;
pub use actions::{ActionCategory, ActionCounts, ActionRates, Actions};

mod field_state;
pub use field_state::{AutoFieldState, EndgameFieldState, UnknownFieldState};

pub mod raw;
pub mod tables;

pub type TeamNumber = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    Qualification,
    Playoff,
}

impl Stage {
    pub fn is_playoff(&self) -> bool {
        matches!(self, Self::Playoff)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Qualification => write!(f, "qualification"),
            Self::Playoff => write!(f, "playoff"),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub enum AllianceColor {
    #[default]
    Red,
    Blue,
}

/// One of the four robot slots of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub enum Station {
    Red1,
    Red2,
    Blue1,
    Blue2,
}

impl Station {
    pub const ALL: [Station; 4] = [Self::Red1, Self::Red2, Self::Blue1, Self::Blue2];

    pub fn alliance(&self) -> AllianceColor {
        match self {
            Self::Red1 | Self::Red2 => AllianceColor::Red,
            Self::Blue1 | Self::Blue2 => AllianceColor::Blue,
        }
    }

    pub fn partner(&self) -> Station {
        match self {
            Self::Red1 => Self::Red2,
            Self::Red2 => Self::Red1,
            Self::Blue1 => Self::Blue2,
            Self::Blue2 => Self::Blue1,
        }
    }

    /// The robot slot (1 or 2) inside the alliance, as used by the per-robot
    /// fields of an alliance score.
    pub fn robot(&self) -> u8 {
        match self {
            Self::Red1 | Self::Blue1 => 1,
            Self::Red2 | Self::Blue2 => 2,
        }
    }
}

/// Identifies a single played match inside an event.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct MatchKey {
    pub event_code: String,
    pub stage: Stage,
    pub match_number: u32,
}

impl std::fmt::Display for MatchKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} #{}", self.event_code, self.stage, self.match_number)
    }
}
