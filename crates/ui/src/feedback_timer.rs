//! Auto-dismiss for the feedback toast.
//!
//! The timer only tells the presentation that the toast has been up long
//! enough; the presentation then calls `advance_to_next` itself.

use std::time::Duration;

use log::debug;
use quiz_core::model::QuizSettings;

#[derive(Debug, Clone, Copy)]
pub struct FeedbackTimer {
    delay: Duration,
    enabled: bool,
}

impl FeedbackTimer {
    #[must_use]
    pub fn new(delay: Duration, enabled: bool) -> Self {
        Self { delay, enabled }
    }

    #[must_use]
    pub fn from_settings(settings: &QuizSettings) -> Self {
        Self::new(settings.feedback_delay(), settings.auto_advance())
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Resolves once the toast should close. Never resolves when auto-advance
    /// is off, so it can sit in a `select!` next to user input.
    pub async fn elapsed(&self) {
        if !self.enabled {
            std::future::pending::<()>().await;
        }
        tokio::time::sleep(self.delay).await;
        debug!("feedback timer fired after {:?}", self.delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn enabled_timer_fires_after_delay() {
        let timer = FeedbackTimer::new(Duration::from_millis(10), true);
        let started = std::time::Instant::now();
        timer.elapsed().await;
        assert!(started.elapsed() >= Duration::from_millis(10));
    }

    #[tokio::test]
    async fn disabled_timer_never_fires() {
        let timer = FeedbackTimer::new(Duration::from_millis(1), false);
        let result = tokio::time::timeout(Duration::from_millis(30), timer.elapsed()).await;
        assert!(result.is_err());
    }

    #[test]
    fn settings_drive_the_timer() {
        let timer = FeedbackTimer::from_settings(&QuizSettings::default());
        assert!(timer.is_enabled());
        assert_eq!(timer.delay(), Duration::from_millis(3_000));
    }
}
