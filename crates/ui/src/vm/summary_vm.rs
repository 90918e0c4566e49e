use quiz_core::model::ScoreTier;
use services::SessionController;

/// End screen model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub score_label: String,
    pub percentage: u32,
    pub message: &'static str,
    pub emoji: &'static str,
    pub elapsed_label: String,
}

#[must_use]
pub fn tier_message(tier: ScoreTier) -> (&'static str, &'static str) {
    match tier {
        ScoreTier::Perfect => ("Perfect Score! You're a vocabulary superstar!", "🏆"),
        ScoreTier::Great => ("Great job! You know a lot of food words!", "🥳"),
        ScoreTier::Good => ("Good effort! Keep practicing!", "😊"),
        ScoreTier::KeepPracticing => ("Nice try! Practice makes perfect!", "📚"),
    }
}

#[must_use]
pub fn map_summary(controller: &SessionController) -> Option<SummaryVm> {
    let summary = controller.summary()?;
    let (message, emoji) = tier_message(summary.tier());
    let secs = summary.elapsed().num_seconds().max(0);

    Some(SummaryVm {
        score_label: format!("{} / {}", summary.score(), summary.total()),
        percentage: summary.percentage(),
        message,
        emoji,
        elapsed_label: format!("{}m {:02}s", secs / 60, secs % 60),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::catalog::Catalog;
    use quiz_core::model::{FoodItem, GameMode, QuizSettings};
    use quiz_core::time::fixed_clock;

    #[test]
    fn messages_cover_every_tier() {
        assert_eq!(tier_message(ScoreTier::Perfect).1, "🏆");
        assert!(tier_message(ScoreTier::Good).0.starts_with("Good effort"));
        assert!(tier_message(ScoreTier::KeepPracticing).0.starts_with("Nice try"));
    }

    #[test]
    fn summary_only_on_end_screen() {
        let items = vec![
            FoodItem::new("corn", "Corn", "corn.png").unwrap(),
            FoodItem::new("milk", "Milk", "milk.png").unwrap(),
        ];
        let mut c =
            SessionController::with_seed(Catalog::new(items).unwrap(), QuizSettings::default(), 3)
                .with_clock(fixed_clock());
        c.begin();
        c.select_mode(GameMode::TypingPractice);
        assert!(map_summary(&c).is_none());

        let answer = c.current_item().unwrap().display_name().to_string();
        c.submit_typed_answer(&answer);
        c.advance_to_next();
        c.submit_typed_answer("wrong");
        c.advance_to_next();

        let vm = map_summary(&c).unwrap();
        assert_eq!(vm.score_label, "1 / 2");
        assert_eq!(vm.percentage, 50);
        assert_eq!(vm.message, "Good effort! Keep practicing!");
        assert_eq!(vm.elapsed_label, "0m 00s");
    }
}
