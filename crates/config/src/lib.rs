//! Configuration loading, validation, and management for Storyloom.
//!
//! Loads configuration from `~/.storyloom/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.storyloom/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Token budget for assembled contexts
    #[serde(default)]
    pub budget: BudgetConfig,

    /// Context builder settings
    #[serde(default)]
    pub context: ContextConfig,

    /// Where story data is read from
    #[serde(default)]
    pub store: StoreConfig,
}

/// Budget ceiling and the reserves carved out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetConfig {
    /// Total ceiling, in estimated size units
    #[serde(default = "default_total")]
    pub total: usize,

    /// Reserved for the model's expected output
    #[serde(default = "default_output_reserve")]
    pub output_reserve: usize,

    /// Reserved for fixed prompt scaffolding
    #[serde(default = "default_prompt_reserve")]
    pub prompt_reserve: usize,
}

fn default_total() -> usize {
    32_000
}
fn default_output_reserve() -> usize {
    4_000
}
fn default_prompt_reserve() -> usize {
    2_000
}

impl BudgetConfig {
    /// What is left for context items once both reserves are taken out.
    pub fn available(&self) -> usize {
        self.total
            .saturating_sub(self.output_reserve)
            .saturating_sub(self.prompt_reserve)
    }
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            total: default_total(),
            output_reserve: default_output_reserve(),
            prompt_reserve: default_prompt_reserve(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Trailing characters of the previous chapter kept as a continuity excerpt
    #[serde(default = "default_continuity_chars")]
    pub continuity_chars: usize,
}

fn default_continuity_chars() -> usize {
    500
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            continuity_chars: default_continuity_chars(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Story snapshot (JSON). Falls back to `~/.storyloom/story.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<String>,
}

impl AppConfig {
    /// Load configuration from the default path (~/.storyloom/config.toml).
    ///
    /// Environment variables override file values:
    /// - `STORYLOOM_BUDGET_TOTAL`
    /// - `STORYLOOM_OUTPUT_RESERVE`
    /// - `STORYLOOM_PROMPT_RESERVE`
    /// - `STORYLOOM_STORY`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in `load`).
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let number = |key: &str| -> Option<usize> {
            let raw = lookup(key)?;
            match raw.trim().parse() {
                Ok(n) => Some(n),
                Err(_) => {
                    tracing::warn!(key, value = %raw, "Ignoring non-numeric override");
                    None
                }
            }
        };

        if let Some(total) = number("STORYLOOM_BUDGET_TOTAL") {
            self.budget.total = total;
        }
        if let Some(reserve) = number("STORYLOOM_OUTPUT_RESERVE") {
            self.budget.output_reserve = reserve;
        }
        if let Some(reserve) = number("STORYLOOM_PROMPT_RESERVE") {
            self.budget.prompt_reserve = reserve;
        }
        if let Some(path) = lookup("STORYLOOM_STORY") {
            self.store.snapshot_path = Some(path);
        }
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".storyloom")
    }

    /// Resolved story snapshot path.
    pub fn snapshot_path(&self) -> PathBuf {
        match &self.store.snapshot_path {
            Some(p) => expand_home(p),
            None => Self::config_dir().join("story.json"),
        }
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.budget.available() == 0 {
            return Err(ConfigError::ValidationError(format!(
                "budget reserves ({} output + {} prompt) leave nothing of total {}",
                self.budget.output_reserve, self.budget.prompt_reserve, self.budget.total
            )));
        }

        if self.context.continuity_chars == 0 {
            return Err(ConfigError::ValidationError(
                "context.continuity_chars must be > 0".into(),
            ));
        }

        Ok(())
    }

    /// Generate a default config TOML string (for `config --init`).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs_home().join(rest),
        None => PathBuf::from(path),
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
