//! Runtime configuration loaded from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `GEMINI_API_KEY` | unset (generation disabled) |
//! | `KANBAN_AI_MODEL` | `gemini-2.5-flash-lite` |
//! | `KANBAN_AI_BASE_URL` | `https://generativelanguage.googleapis.com/v1beta` |
//! | `KANBAN_AI_MAX_SUGGESTIONS` | `5` |
//! | `KANBAN_AI_TIMEOUT_SECS` | `30` |
//! | `KANBAN_BIND` | `0.0.0.0` |
//! | `KANBAN_PORT` | `8080` |

use std::str::FromStr;

use thiserror::Error;

use crate::suggestion::adapters::GeminiConfig;
use crate::suggestion::services::SuggestionConfig;

/// Default bind address.
pub const DEFAULT_BIND: &str = "0.0.0.0";
/// Default port.
pub const DEFAULT_PORT: u16 = 8080;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable holds a value of the wrong type.
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        /// Variable name.
        key: &'static str,
        /// Offending value.
        value: String,
        /// Parse failure.
        reason: String,
    },
    /// A numeric variable must be positive.
    #[error("{key} must be greater than zero")]
    Zero {
        /// Variable name.
        key: &'static str,
    },
}

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub bind: String,
    /// TCP port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_owned(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Returns `bind:port`.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Generation provider settings.
    pub gemini: GeminiConfig,
    /// Suggestion pipeline settings.
    pub suggestions: SuggestionConfig,
    /// Listener settings.
    pub server: ServerConfig,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns a variable's value
    /// or `None` when unset. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(api_key) = read("GEMINI_API_KEY") {
            config.gemini = config.gemini.with_api_key(api_key);
        }
        if let Some(model) = read("KANBAN_AI_MODEL") {
            config.gemini = config.gemini.with_model(model.trim());
        }
        if let Some(base_url) = read("KANBAN_AI_BASE_URL") {
            config.gemini = config.gemini.with_base_url(base_url.trim());
        }
        if let Some(raw) = read("KANBAN_AI_TIMEOUT_SECS") {
            let timeout = parse_positive::<u64>("KANBAN_AI_TIMEOUT_SECS", &raw)?;
            config.gemini = config.gemini.with_timeout_secs(timeout);
        }
        if let Some(raw) = read("KANBAN_AI_MAX_SUGGESTIONS") {
            let max = parse_positive::<usize>("KANBAN_AI_MAX_SUGGESTIONS", &raw)?;
            config.suggestions = config.suggestions.with_max_suggestions(max);
        }
        if let Some(bind) = read("KANBAN_BIND") {
            config.server.bind = bind.trim().to_owned();
        }
        if let Some(raw) = read("KANBAN_PORT") {
            config.server.port = parse_value("KANBAN_PORT", &raw)?;
        }
        Ok(config)
    }

    /// Replaces the generation provider settings.
    #[must_use]
    pub fn with_gemini(mut self, gemini: GeminiConfig) -> Self {
        self.gemini = gemini;
        self
    }

    /// Replaces the suggestion settings.
    #[must_use]
    pub const fn with_suggestions(mut self, suggestions: SuggestionConfig) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Replaces the listener settings.
    #[must_use]
    pub fn with_server(mut self, server: ServerConfig) -> Self {
        self.server = server;
        self
    }
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|err: T::Err| ConfigError::InvalidValue {
            key,
            value: raw.to_owned(),
            reason: err.to_string(),
        })
}

fn parse_positive<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr + Default + PartialEq,
    T::Err: std::fmt::Display,
{
    let value = parse_value::<T>(key, raw)?;
    if value == T::default() {
        return Err(ConfigError::Zero { key });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[rstest]
    fn empty_environment_yields_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).expect("defaults are valid");

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.gemini.api_key, None);
        assert_eq!(config.suggestions.max_suggestions, 5);
        assert_eq!(config.server.address(), "0.0.0.0:8080");
    }

    #[rstest]
    fn variables_override_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "secret"),
            ("KANBAN_AI_MODEL", "gemini-pro"),
            ("KANBAN_AI_BASE_URL", "http://localhost:9000/v1"),
            ("KANBAN_AI_MAX_SUGGESTIONS", "8"),
            ("KANBAN_AI_TIMEOUT_SECS", "5"),
            ("KANBAN_BIND", "127.0.0.1"),
            ("KANBAN_PORT", "3000"),
        ]))
        .expect("valid configuration");

        assert_eq!(config.gemini.api_key.as_deref(), Some("secret"));
        assert_eq!(
            config.gemini.endpoint(),
            "http://localhost:9000/v1/models/gemini-pro:generateContent"
        );
        assert_eq!(config.gemini.timeout_secs, 5);
        assert_eq!(config.suggestions.max_suggestions, 8);
        assert_eq!(config.server.address(), "127.0.0.1:3000");
    }

    #[rstest]
    fn blank_api_key_counts_as_missing() {
        let config =
            AppConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "  ")])).expect("valid");

        assert_eq!(config.gemini.api_key, None);
    }

    #[rstest]
    #[case("KANBAN_PORT", "eighty")]
    #[case("KANBAN_AI_MAX_SUGGESTIONS", "-1")]
    #[case("KANBAN_AI_TIMEOUT_SECS", "soon")]
    fn invalid_numbers_are_rejected(#[case] key: &str, #[case] value: &str) {
        let result = AppConfig::from_lookup(lookup(&[(key, value)]));

        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[rstest]
    fn zero_cap_is_rejected() {
        let result = AppConfig::from_lookup(lookup(&[("KANBAN_AI_MAX_SUGGESTIONS", "0")]));

        assert_eq!(
            result,
            Err(ConfigError::Zero {
                key: "KANBAN_AI_MAX_SUGGESTIONS"
            })
        );
    }

    #[rstest]
    fn debug_output_redacts_api_key() {
        let config = AppConfig::default().with_gemini(GeminiConfig::default().with_api_key("secret"));

        let rendered = format!("{config:?}");

        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
