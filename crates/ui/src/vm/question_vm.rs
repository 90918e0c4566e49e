use quiz_core::model::GameMode;
use services::{QuizPhase, SessionController};

/// How a single multiple-choice option should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionStatus {
    Default,
    DisabledLoading,
    CorrectSelected,
    IncorrectSelected,
    RevealedCorrect,
    RevealedNeutral,
}

impl OptionStatus {
    #[must_use]
    pub fn is_interactive(self) -> bool {
        matches!(self, OptionStatus::Default)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub label: String,
    pub status: OptionStatus,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub mode: GameMode,
    pub prompt: &'static str,
    pub progress_label: String,
    pub score_label: String,
    pub image: String,
    pub options: Vec<OptionVm>,
    pub accepts_input: bool,
    pub is_loading: bool,
}

#[must_use]
pub fn option_status(
    option: &str,
    correct: &str,
    selected: Option<&str>,
    showing_feedback: bool,
    loading: bool,
) -> OptionStatus {
    if !showing_feedback {
        return if loading {
            OptionStatus::DisabledLoading
        } else {
            OptionStatus::Default
        };
    }

    let is_selected = selected == Some(option);
    let is_correct = option == correct;
    match (is_selected, is_correct) {
        (true, true) => OptionStatus::CorrectSelected,
        (true, false) => OptionStatus::IncorrectSelected,
        (false, true) => OptionStatus::RevealedCorrect,
        (false, false) => OptionStatus::RevealedNeutral,
    }
}

/// Builds the question screen model; `None` outside Playing/Feedback or when
/// there is no current item.
#[must_use]
pub fn map_question(controller: &SessionController) -> Option<QuestionVm> {
    let phase = controller.phase();
    if !matches!(phase, QuizPhase::Playing | QuizPhase::Feedback) {
        return None;
    }
    let item = controller.current_item()?;
    let mode = controller.mode()?;
    let progress = controller.progress();
    let showing_feedback = phase == QuizPhase::Feedback;
    let loading = controller.is_content_loading();

    let options = controller
        .options()
        .iter()
        .map(|label| OptionVm {
            label: label.clone(),
            status: option_status(
                label,
                item.display_name(),
                controller.selected_answer(),
                showing_feedback,
                loading,
            ),
        })
        .collect();

    let prompt = match mode {
        GameMode::MultipleChoice => "What is this food?",
        GameMode::TypingPractice => "Type the word:",
    };

    Some(QuestionVm {
        mode,
        prompt,
        progress_label: format!("Question {} of {}", progress.position, progress.total),
        score_label: format!("Score: {}", progress.score),
        image: item.image().to_display_string(),
        options,
        accepts_input: !showing_feedback && !loading,
        is_loading: loading,
    })
}
