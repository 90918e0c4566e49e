mod food;
mod ids;
mod mode;
mod settings;
mod summary;

pub use food::{FoodItem, FoodItemError, ImageRef};
pub use ids::FoodId;
pub use mode::GameMode;
pub use settings::{QuizSettings, QuizSettingsDraft, SettingsError};
pub use summary::{ScoreTier, SessionSummary, SessionSummaryError};
