//! Configuration settings for fxpulse.

use crate::catalog::{self, CurrencyPair, Timeframe};
use crate::error::{Error, Result};
use ::config::builder::DefaultState;
use ::config::{ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Prefix for environment overrides, e.g. `FXPULSE_UI__REFRESH_INTERVAL_SECS`.
const ENV_PREFIX: &str = "FXPULSE";

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API configuration.
    pub api: ApiConfig,
    /// UI configuration.
    pub ui: UiConfig,
    /// Key bindings.
    pub keybindings: KeyBindings,
}

impl Config {
    /// Load configuration from the default location.
    pub fn load_or_default() -> Result<Self> {
        Self::load(None)
    }

    /// Load configuration from an optional TOML file, then apply environment overrides.
    ///
    /// A missing file is not an error; every field has a default.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = path.unwrap_or_else(|| {
            super::config_dir()
                .map(|p| p.join("config.toml"))
                .unwrap_or_else(|_| PathBuf::from("config.toml"))
        });

        let builder = ::config::Config::builder().add_source(
            File::from(config_path.as_path())
                .format(FileFormat::Toml)
                .required(false),
        );

        Self::build(builder, Self::environment(None))
    }

    fn environment(source: Option<::config::Map<String, String>>) -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(source)
    }

    fn build(builder: ConfigBuilder<DefaultState>, env: Environment) -> Result<Self> {
        let config: Self = builder.add_source(env).build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints the types cannot express.
    pub fn validate(&self) -> Result<()> {
        self.ui.default_pair()?;
        self.ui.default_timeframe()?;
        if self.ui.refresh_interval_secs == 0 {
            return Err(Error::config("ui.refresh_interval_secs must be at least 1"));
        }
        if self.api.api_key_env.trim().is_empty() {
            return Err(Error::config("api.api_key_env must name a variable"));
        }
        Ok(())
    }
}

/// API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Generative Language API base URL.
    pub base_url: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Model used for trading signals.
    pub signal_model: String,
    /// Model used for search-grounded news.
    pub news_model: String,
    /// Sampling temperature for signal requests.
    pub signal_temperature: f32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key_env: "API_KEY".to_string(),
            signal_model: "gemini-2.5-pro".to_string(),
            news_model: "gemini-2.5-flash".to_string(),
            signal_temperature: 0.2,
            timeout_secs: 60,
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long to wait for terminal input per loop iteration, in milliseconds.
    pub tick_rate_ms: u64,
    /// Auto-refresh interval in seconds.
    pub refresh_interval_secs: u64,
    /// Pair selected at startup.
    pub default_pair: String,
    /// Timeframe selected at startup (label or value).
    pub default_timeframe: String,
    /// Show the key hint line.
    pub show_help_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            refresh_interval_secs: 30,
            default_pair: catalog::DEFAULT_PAIR.name.to_string(),
            default_timeframe: catalog::DEFAULT_TIMEFRAME.label.to_string(),
            show_help_bar: true,
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn default_pair(&self) -> Result<CurrencyPair> {
        catalog::find_pair(&self.default_pair)
            .ok_or_else(|| Error::config(format!("unknown currency pair '{}'", self.default_pair)))
    }

    pub fn default_timeframe(&self) -> Result<Timeframe> {
        catalog::find_timeframe(&self.default_timeframe).ok_or_else(|| {
            Error::config(format!("unknown timeframe '{}'", self.default_timeframe))
        })
    }
}

/// Key bindings configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Show help.
    pub help: String,
    /// Refresh now.
    pub refresh: String,
    /// Select the next pair.
    pub next_pair: String,
    /// Select the previous pair.
    pub prev_pair: String,
    /// Select the next timeframe.
    pub next_timeframe: String,
    /// Select the previous timeframe.
    pub prev_timeframe: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            help: "?".to_string(),
            refresh: "r".to_string(),
            next_pair: "j".to_string(),
            prev_pair: "k".to_string(),
            next_timeframe: "l".to_string(),
            prev_timeframe: "h".to_string(),
        }
    }
}
