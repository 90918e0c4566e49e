mod answer;
mod controller;
mod options;
mod plan;
mod progress;

// Public API of the quiz subsystem.
pub use answer::{evaluate_typed, is_correct_choice};
pub use controller::{
    AdvanceOutcome, AnswerOutcome, AnswerRecord, QuizPhase, Rejection, Round, SessionController,
    Transition,
};
pub use options::build_options;
pub use plan::build_order;
pub use progress::QuizProgress;
