use serde::{Deserialize, Serialize};
use std::fmt;

/// How the player answers each question. Fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    MultipleChoice,
    TypingPractice,
}

impl GameMode {
    pub const ALL: [GameMode; 2] = [GameMode::MultipleChoice, GameMode::TypingPractice];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::MultipleChoice => "multiple_choice",
            GameMode::TypingPractice => "typing_practice",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            GameMode::MultipleChoice => "Multiple Choice",
            GameMode::TypingPractice => "Typing Practice",
        }
    }

    #[must_use]
    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "multiple_choice" | "mcq" | "choice" => Some(GameMode::MultipleChoice),
            "typing_practice" | "typing" => Some(GameMode::TypingPractice),
            _ => None,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
