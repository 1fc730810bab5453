use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{GeminiError, Result};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
pub const DEFAULT_API_HOST: &str = "generativelanguage.googleapis.com";
pub const DEFAULT_OUTPUT_DIR: &str = "images";
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_host: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_host: DEFAULT_API_HOST.to_string(),
        }
    }
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY").ok();
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        GeminiConfig {
            api_key,
            model,
            api_host: DEFAULT_API_HOST.to_string(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_host(mut self, api_host: impl Into<String>) -> Self {
        self.api_host = api_host.into();
        self
    }

    /// Fails when no API key is present; checked once at startup so the
    /// pipeline itself never reads ambient environment state.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                GeminiError::ConfigError("GEMINI_API_KEY environment variable not set".into())
            })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub output_dir: PathBuf,
    pub delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            gemini: GeminiConfig::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            delay: DEFAULT_DELAY,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let output_dir = env::var("GEMGEN_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_DIR));

        Config {
            gemini: GeminiConfig::from_env(),
            output_dir,
            delay: DEFAULT_DELAY,
        }
    }

    pub fn with_gemini(mut self, gemini: GeminiConfig) -> Self {
        self.gemini = gemini;
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_is_a_config_error() {
        let config = GeminiConfig::new();
        let err = config.require_api_key().unwrap_err();
        assert!(matches!(err, GeminiError::ConfigError(_)));
    }

    #[test]
    fn empty_api_key_is_rejected() {
        let config = GeminiConfig::new().with_api_key("");
        assert!(config.require_api_key().is_err());
    }

    #[test]
    fn builders_override_defaults() {
        let config = Config::new()
            .with_gemini(GeminiConfig::new().with_api_key("k").with_model("m"))
            .with_output_dir("out")
            .with_delay(Duration::from_millis(10));

        assert_eq!(config.gemini.require_api_key().unwrap(), "k");
        assert_eq!(config.gemini.model, "m");
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.delay, Duration::from_millis(10));
    }
}
