//! Maps one line of terminal input onto a controller action.

use quiz_core::model::GameMode;
use services::{AnswerOutcome, QuizPhase, Rejection, SessionController};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue,
    Hint(String),
    Quit,
}

pub fn handle_line(controller: &mut SessionController, line: &str) -> Step {
    let input = line.trim();
    if input == ":q" {
        return Step::Quit;
    }

    match controller.phase() {
        QuizPhase::Start => {
            controller.begin();
        }
        QuizPhase::ModeSelect => {
            let mode = match input {
                "1" => Some(GameMode::MultipleChoice),
                "2" => Some(GameMode::TypingPractice),
                other => GameMode::from_key(other),
            };
            match mode {
                Some(mode) => {
                    controller.select_mode(mode);
                }
                None => return Step::Hint("Choose 1 or 2.".to_string()),
            }
        }
        QuizPhase::Playing => return answer(controller, line),
        QuizPhase::Feedback => {
            controller.advance_to_next();
        }
        QuizPhase::End => match input.to_lowercase().as_str() {
            "" | "y" | "yes" => {
                controller.restart();
            }
            "q" | "n" | "no" => return Step::Quit,
            _ => return Step::Hint("Type y to play again or q to quit.".to_string()),
        },
    }
    Step::Continue
}

fn answer(controller: &mut SessionController, line: &str) -> Step {
    match controller.mode() {
        Some(GameMode::MultipleChoice) => {
            let picked = line
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| controller.options().get(i).cloned());
            match picked {
                Some(option) => {
                    controller.submit_multiple_choice_answer(&option);
                    Step::Continue
                }
                None => Step::Hint(format!(
                    "Pick a number between 1 and {}.",
                    controller.options().len()
                )),
            }
        }
        Some(GameMode::TypingPractice) => {
            controller.update_draft(line);
            match controller.submit_typed_answer(line) {
                AnswerOutcome::Ignored(Rejection::EmptyAnswer) => {
                    Step::Hint("Type a word first.".to_string())
                }
                _ => Step::Continue,
            }
        }
        None => Step::Continue,
    }
}
