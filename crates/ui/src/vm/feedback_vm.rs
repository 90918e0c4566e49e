use services::{QuizPhase, SessionController};

/// Toast shown after an answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub is_correct: bool,
    pub title: &'static str,
    pub body: String,
    pub next_label: &'static str,
}

#[must_use]
pub fn map_feedback(controller: &SessionController) -> Option<FeedbackVm> {
    if controller.phase() != QuizPhase::Feedback {
        return None;
    }
    let is_correct = controller.last_answer_correct()?;
    let answer = controller.current_item()?.display_name();

    let (title, body) = if is_correct {
        ("Correct!", format!("Well done! It's \"{answer}\"."))
    } else {
        ("Not quite!", format!("The correct word is \"{answer}\"."))
    };
    let next_label = if controller.has_next_question() {
        "Next Word"
    } else {
        "See Results"
    };

    Some(FeedbackVm {
        is_correct,
        title,
        body,
        next_label,
    })
}
