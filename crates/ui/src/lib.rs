pub mod feedback_timer;
pub mod render;
pub mod vm;

pub use feedback_timer::FeedbackTimer;
