#![forbid(unsafe_code)]

pub mod catalog_service;
pub mod error;
pub mod quiz;
pub mod settings_service;

pub use quiz_core::Clock;

pub use catalog_service::CatalogService;
pub use error::ConfigError;
pub use settings_service::SettingsService;

pub use quiz::{
    AdvanceOutcome, AnswerOutcome, AnswerRecord, QuizPhase, QuizProgress, Rejection, Round,
    SessionController, Transition,
};
