use crate::errors::{AppError, AppResult};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_seed")]
    pub seed_demo_events: bool,
    #[serde(default = "default_title_prefix")]
    pub new_title_prefix: String,
    #[serde(default = "default_time_format")]
    pub time_format: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_color")]
    pub color: bool,
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_seed() -> bool {
    true
}
fn default_title_prefix() -> String {
    crate::core::store::DEFAULT_TITLE_PREFIX.to_string()
}
fn default_time_format() -> String {
    "%Y-%m-%dT%H:%M:%S%.3fZ".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_color() -> bool {
    true
}
fn default_prompt() -> String {
    "eventboard> ".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_demo_events: default_seed(),
            new_title_prefix: default_title_prefix(),
            time_format: default_time_format(),
            separator_char: default_separator_char(),
            color: default_color(),
            prompt: default_prompt(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        match dirs::config_dir() {
            Some(dir) => dir.join("eventboard"),
            None => dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".eventboard"),
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("eventboard.yaml")
    }

    /// Load configuration from `path` (or the standard location), falling
    /// back to defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content).map_err(|e| match e {
            AppError::Config(msg) => AppError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // an empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Self =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values that would only fail later, at render time.
    pub fn validate(&self) -> AppResult<()> {
        if StrftimeItems::new(&self.time_format).any(|i| matches!(i, Item::Error)) {
            return Err(AppError::Config(format!(
                "invalid time_format '{}'",
                self.time_format
            )));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the default configuration to `path` (or the standard location).
    /// An existing file is left alone unless `force` is set.
    pub fn init(path: Option<&Path>, force: bool) -> AppResult<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, Self::default().to_yaml()?)?;
        Ok(path)
    }
}
