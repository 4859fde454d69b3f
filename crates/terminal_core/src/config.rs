//! Launch-time configuration for a terminal session.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use terminal_contract::Lang;
use thiserror::Error;

/// Default pause between simulated keystrokes.
pub const DEFAULT_TYPING_DELAY_MS: u64 = 50;

/// Command typed automatically when a session starts.
pub const DEFAULT_WELCOME_COMMAND: &str = "intro";

#[derive(Debug, Error)]
/// Configuration parsing errors.
pub enum ConfigError {
    /// The launch parameters did not match the configuration schema.
    #[error("invalid terminal launch parameters: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Session settings supplied by the host page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Pause between simulated keystrokes, in milliseconds.
    pub typing_delay_ms: u64,
    /// Command played once per session. `None` disables the welcome sequence.
    pub welcome_command: Option<String>,
    /// User name displayed in the prompt label.
    pub visitor_label: String,
    /// Language used until `set-lang` changes it.
    pub default_lang: Lang,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: DEFAULT_TYPING_DELAY_MS,
            welcome_command: Some(DEFAULT_WELCOME_COMMAND.to_string()),
            visitor_label: "visitor".to_string(),
            default_lang: Lang::default(),
        }
    }
}

impl TerminalConfig {
    /// Reads the configuration from host launch parameters. `null` yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a field has the wrong type.
    pub fn from_launch_params(params: &Value) -> Result<Self, ConfigError> {
        if params.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(params.clone())?)
    }
}
