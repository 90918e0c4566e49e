mod feedback_vm;
mod question_vm;
mod summary_vm;

pub use feedback_vm::{FeedbackVm, map_feedback};
pub use question_vm::{OptionStatus, OptionVm, QuestionVm, map_question, option_status};
pub use summary_vm::{SummaryVm, map_summary, tier_message};
