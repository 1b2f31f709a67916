use crate::core::aggregator::TotalScope;
use crate::errors::{AppError, AppResult};
use crate::models::IdentifierKind;
use crate::utils::path::expand_tilde;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate;

/// Overrides the configuration directory (tests, portable installs).
pub const HOME_ENV: &str = "RMOTOHOURS_HOME";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub identifier_kind: IdentifierKind,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default)]
    pub total_scope: TotalScope,
    #[serde(default)]
    pub guard_manual_save: bool,
    #[serde(default)]
    pub auto_save: bool,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_date_format() -> String {
    "%d.%m.%Y".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            identifier_kind: IdentifierKind::default(),
            date_format: default_date_format(),
            total_scope: TotalScope::default(),
            guard_manual_save: false,
            auto_save: false,
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(custom) = env::var(HOME_ENV) {
            return PathBuf::from(custom);
        }

        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rmotohours")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rmotohours")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rmotohours.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rmotohours.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject settings that would only fail later.
    pub fn validate(&self) -> AppResult<()> {
        if self.date_format.trim().is_empty() {
            return Err(AppError::Config("date_format must not be empty".into()));
        }
        // chrono panics when rendering an invalid format, reject it here
        if StrftimeItems::new(&self.date_format).any(|i| matches!(i, Item::Error)) {
            return Err(AppError::Config(format!(
                "date_format '{}' is not a valid chrono format",
                self.date_format
            )));
        }
        if self.separator_char.chars().count() != 1 {
            return Err(AppError::Config(format!(
                "separator_char must be a single character, got '{}'",
                self.separator_char
            )));
        }
        Ok(())
    }

    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Initialize configuration directory, config file and database path.
    ///
    /// Returns the configuration that was written (or would have been, in
    /// test mode).
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => expand_tilde(&name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            fs::write(Self::config_file(), config.to_yaml()?)?;
        }

        Ok(config)
    }
}
