use std::path::{Path, PathBuf};

use log::debug;

use quiz_core::model::{QuizSettings, QuizSettingsDraft};

use crate::error::ConfigError;

pub const ENV_OPTIONS: &str = "QUIZ_OPTIONS";
pub const ENV_FEEDBACK_DELAY_MS: &str = "QUIZ_FEEDBACK_DELAY_MS";
pub const ENV_AUTO_ADVANCE: &str = "QUIZ_AUTO_ADVANCE";

/// Resolves quiz settings from, in increasing precedence: defaults, an
/// optional JSON file, `QUIZ_*` environment variables and caller overrides.
#[derive(Debug, Clone, Default)]
pub struct SettingsService {
    file: Option<PathBuf>,
}

impl SettingsService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed, an
    /// environment variable is malformed, or the result is out of range.
    pub fn load(&self, overrides: QuizSettingsDraft) -> Result<QuizSettings, ConfigError> {
        self.load_with_env(overrides, |key| std::env::var(key).ok())
    }

    /// Same as `load`, with an explicit environment lookup.
    ///
    /// # Errors
    ///
    /// See [`SettingsService::load`].
    pub fn load_with_env(
        &self,
        overrides: QuizSettingsDraft,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<QuizSettings, ConfigError> {
        let from_file = match self.file.as_deref() {
            Some(path) => read_settings_file(path)?,
            None => QuizSettingsDraft::new(),
        };
        let from_env = settings_from_env(lookup)?;
        let settings = from_file.merge(from_env).merge(overrides).validate()?;
        debug!("resolved settings: {settings:?}");
        Ok(settings)
    }
}

fn read_settings_file(path: &Path) -> Result<QuizSettingsDraft, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

fn settings_from_env(lookup: impl Fn(&str) -> Option<String>) -> Result<QuizSettingsDraft, ConfigError> {
    let mut draft = QuizSettingsDraft::new();
    if let Some(raw) = lookup(ENV_OPTIONS) {
        draft.options_per_question = Some(parse_env(ENV_OPTIONS, &raw, |v| v.parse().ok())?);
    }
    if let Some(raw) = lookup(ENV_FEEDBACK_DELAY_MS) {
        draft.feedback_delay_ms = Some(parse_env(ENV_FEEDBACK_DELAY_MS, &raw, |v| v.parse().ok())?);
    }
    if let Some(raw) = lookup(ENV_AUTO_ADVANCE) {
        draft.auto_advance = Some(parse_env(ENV_AUTO_ADVANCE, &raw, parse_bool)?);
    }
    Ok(draft)
}

fn parse_env<T>(
    key: &'static str,
    raw: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, ConfigError> {
    parse(raw.trim()).ok_or_else(|| ConfigError::InvalidEnv {
        key,
        value: raw.to_string(),
    })
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
