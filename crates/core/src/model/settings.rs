use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_OPTIONS_PER_QUESTION: u32 = 4;
pub const DEFAULT_FEEDBACK_DELAY_MS: u64 = 3_000;

const MIN_FEEDBACK_DELAY_MS: u64 = 500;
const MAX_FEEDBACK_DELAY_MS: u64 = 60_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("options per question must be at least 2 (got {0})")]
    InvalidOptionsPerQuestion(u32),

    #[error("feedback delay must be between 500 and 60000 ms (got {0})")]
    InvalidFeedbackDelay(u64),
}

/// Tunables for a quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizSettings {
    options_per_question: u32,
    feedback_delay_ms: u64,
    auto_advance: bool,
}

/// Partially specified settings, as read from a file, the environment or flags.
///
/// Unset fields fall back to the defaults on `validate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuizSettingsDraft {
    pub options_per_question: Option<u32>,
    pub feedback_delay_ms: Option<u64>,
    pub auto_advance: Option<bool>,
}

impl QuizSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlays every field that is set in `other`.
    #[must_use]
    pub fn merge(self, other: QuizSettingsDraft) -> Self {
        Self {
            options_per_question: other.options_per_question.or(self.options_per_question),
            feedback_delay_ms: other.feedback_delay_ms.or(self.feedback_delay_ms),
            auto_advance: other.auto_advance.or(self.auto_advance),
        }
    }

    /// # Errors
    ///
    /// Returns `SettingsError` for out-of-range values.
    pub fn validate(self) -> Result<QuizSettings, SettingsError> {
        let options_per_question = self
            .options_per_question
            .unwrap_or(DEFAULT_OPTIONS_PER_QUESTION);
        if options_per_question < 2 {
            return Err(SettingsError::InvalidOptionsPerQuestion(options_per_question));
        }

        let feedback_delay_ms = self.feedback_delay_ms.unwrap_or(DEFAULT_FEEDBACK_DELAY_MS);
        if !(MIN_FEEDBACK_DELAY_MS..=MAX_FEEDBACK_DELAY_MS).contains(&feedback_delay_ms) {
            return Err(SettingsError::InvalidFeedbackDelay(feedback_delay_ms));
        }

        Ok(QuizSettings {
            options_per_question,
            feedback_delay_ms,
            auto_advance: self.auto_advance.unwrap_or(true),
        })
    }
}

impl QuizSettings {
    /// Number of options shown per multiple-choice question (K).
    #[must_use]
    pub fn options_per_question(&self) -> usize {
        usize::try_from(self.options_per_question).unwrap_or(usize::MAX)
    }

    #[must_use]
    pub fn feedback_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.feedback_delay_ms)
    }

    #[must_use]
    pub fn feedback_delay_ms(&self) -> u64 {
        self.feedback_delay_ms
    }

    #[must_use]
    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            options_per_question: DEFAULT_OPTIONS_PER_QUESTION,
            feedback_delay_ms: DEFAULT_FEEDBACK_DELAY_MS,
            auto_advance: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_yields_defaults() {
        let settings = QuizSettingsDraft::new().validate().unwrap();
        assert_eq!(settings, QuizSettings::default());
        assert_eq!(settings.options_per_question(), 4);
        assert_eq!(settings.feedback_delay_ms(), 3_000);
        assert!(settings.auto_advance());
    }

    #[test]
    fn merge_prefers_later_values() {
        let file = QuizSettingsDraft {
            options_per_question: Some(3),
            feedback_delay_ms: Some(1_000),
            auto_advance: None,
        };
        let flags = QuizSettingsDraft {
            options_per_question: Some(5),
            ..QuizSettingsDraft::default()
        };
        let merged = file.merge(flags).validate().unwrap();
        assert_eq!(merged.options_per_question(), 5);
        assert_eq!(merged.feedback_delay_ms(), 1_000);
        assert!(merged.auto_advance());
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = QuizSettingsDraft {
            options_per_question: Some(1),
            ..QuizSettingsDraft::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, SettingsError::InvalidOptionsPerQuestion(1));

        let err = QuizSettingsDraft {
            feedback_delay_ms: Some(10),
            ..QuizSettingsDraft::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, SettingsError::InvalidFeedbackDelay(10));
    }
}
