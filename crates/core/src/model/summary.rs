use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::GameMode;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("score ({score}) exceeds the number of questions ({total})")]
    ScoreOutOfRange { score: usize, total: usize },
}

/// Coarse performance band shown on the end screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Perfect,
    Great,
    Good,
    KeepPracticing,
}

impl ScoreTier {
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            100.. => ScoreTier::Perfect,
            75..=99 => ScoreTier::Great,
            50..=74 => ScoreTier::Good,
            _ => ScoreTier::KeepPracticing,
        }
    }
}

/// Result of a finished play-through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    mode: GameMode,
    score: usize,
    total: usize,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl SessionSummary {
    /// # Errors
    ///
    /// Returns `SessionSummaryError` if the score exceeds the total or the
    /// time range is inverted.
    pub fn new(
        mode: GameMode,
        score: usize,
        total: usize,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, SessionSummaryError> {
        if completed_at < started_at {
            return Err(SessionSummaryError::InvalidTimeRange);
        }
        if score > total {
            return Err(SessionSummaryError::ScoreOutOfRange { score, total });
        }
        Ok(Self {
            mode,
            score,
            total,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn elapsed(&self) -> chrono::Duration {
        self.completed_at - self.started_at
    }

    /// Whole-number percentage, rounded half up. Zero for an empty session.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let scaled = (self.score * 200 + self.total) / (self.total * 2);
        u32::try_from(scaled).unwrap_or(100)
    }

    #[must_use]
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_percentage(self.percentage())
    }
}
