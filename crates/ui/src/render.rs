//! Plain-text screens for terminal front-ends.

use std::fmt::Write as _;

use quiz_core::model::GameMode;
use services::{QuizPhase, SessionController};

use crate::vm::{OptionStatus, map_feedback, map_question, map_summary};

#[must_use]
pub fn start_screen() -> String {
    "Let's learn English words for delicious foods!\n\nPress Enter to play.".to_string()
}

#[must_use]
pub fn mode_select_screen() -> String {
    let mut out = String::from("How do you want to learn today?\n");
    for (n, mode) in GameMode::ALL.iter().enumerate() {
        let _ = write!(out, "\n  {}) {}", n + 1, mode.label());
    }
    out
}

fn option_marker(status: OptionStatus) -> &'static str {
    match status {
        OptionStatus::Default | OptionStatus::DisabledLoading => "  ",
        OptionStatus::CorrectSelected | OptionStatus::RevealedCorrect => "✔ ",
        OptionStatus::IncorrectSelected => "✘ ",
        OptionStatus::RevealedNeutral => "· ",
    }
}

/// Renders whichever screen the controller is on.
#[must_use]
pub fn screen(controller: &SessionController) -> String {
    match controller.phase() {
        QuizPhase::Start => start_screen(),
        QuizPhase::ModeSelect => mode_select_screen(),
        QuizPhase::Playing | QuizPhase::Feedback => question_screen(controller),
        QuizPhase::End => end_screen(controller),
    }
}

fn question_screen(controller: &SessionController) -> String {
    let Some(vm) = map_question(controller) else {
        return "Loading your next challenge...".to_string();
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}   {}", vm.progress_label, vm.score_label);
    let _ = writeln!(out, "[picture: {}]", vm.image);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", vm.prompt);
    for (n, option) in vm.options.iter().enumerate() {
        let _ = writeln!(out, "{}{}) {}", option_marker(option.status), n + 1, option.label);
    }

    if let Some(feedback) = map_feedback(controller) {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} {}", feedback.title, feedback.body);
        let _ = write!(out, "Press Enter for: {}", feedback.next_label);
    }
    out
}

fn end_screen(controller: &SessionController) -> String {
    let Some(vm) = map_summary(controller) else {
        return String::new();
    };
    format!(
        "{} Score: {} ({}%)\n{}\nTime: {}\n\nPlay again? (y/q)",
        vm.emoji, vm.score_label, vm.percentage, vm.message, vm.elapsed_label
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::catalog::Catalog;
    use quiz_core::model::{FoodItem, QuizSettings};

    #[test]
    fn walks_through_every_screen() {
        let corn = FoodItem::new("corn", "Corn", "https://example.com/corn.jpg").unwrap();
        let mut c = SessionController::with_seed(
            Catalog::new(vec![corn]).unwrap(),
            QuizSettings::default(),
            1,
        );
        assert!(screen(&c).contains("Press Enter"));

        c.begin();
        let text = screen(&c);
        assert!(text.contains("1) Multiple Choice"));
        assert!(text.contains("2) Typing Practice"));

        c.select_mode(GameMode::MultipleChoice);
        let text = screen(&c);
        assert!(text.contains("Question 1 of 1"));
        assert!(text.contains("example.com/corn.jpg"));
        assert!(text.contains("1) Corn"));

        c.submit_multiple_choice_answer("Corn");
        let text = screen(&c);
        assert!(text.contains("✔ 1) Corn"));
        assert!(text.contains("See Results"));

        c.advance_to_next();
        let text = screen(&c);
        assert!(text.contains("1 / 1 (100%)"));
        assert!(text.contains("superstar"));
    }
}
