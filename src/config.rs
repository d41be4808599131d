//! Configuration file handling for getty.
//!
//! Loads configuration from `/etc/getty.toml` or a custom path. Every field
//! has a default, so a missing file or a partial file is fine.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::banner::{DEFAULT_ISSUE_PATH, DEFAULT_PROMPT};
use crate::speed::{LineSpeed, SpeedError, DEFAULT_SPEED};
use crate::terminal::{DEFAULT_SECURETTY_PATH, DEFAULT_USERNAME_MAX, USERNAME_MAX_LIMIT};

/// Default configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/getty.toml";
/// Default authentication program.
pub const DEFAULT_LOGIN: &str = "/bin/login";
/// Default fallback shell for secure terminals.
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Configuration file structure for getty.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct GettyConfig {
    #[serde(default)]
    pub banner: BannerConfig,
    #[serde(default)]
    pub login: LoginConfig,
    #[serde(default)]
    pub line: LineConfig,
    #[serde(default)]
    pub securetty: SecureTtyConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BannerConfig {
    pub issue_file: PathBuf,
    pub prompt: String,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            issue_file: PathBuf::from(DEFAULT_ISSUE_PATH),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoginConfig {
    pub program: PathBuf,
    pub fallback_shell: PathBuf,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_LOGIN),
            fallback_shell: PathBuf::from(DEFAULT_SHELL),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LineConfig {
    /// Bits per second, must be in the speed table
    pub speed: u32,
    /// Username buffer size including the terminator
    pub username_max: usize,
    pub line_kill: bool,
    pub erase: bool,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            username_max: DEFAULT_USERNAME_MAX,
            line_kill: true,
            erase: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SecureTtyConfig {
    /// Extra allow-list file, one terminal per line
    pub file: Option<PathBuf>,
    pub allow: Vec<String>,
}

impl Default for SecureTtyConfig {
    fn default() -> Self {
        Self {
            file: Some(PathBuf::from(DEFAULT_SECURETTY_PATH)),
            allow: vec!["console".to_string()],
        }
    }
}

impl GettyConfig {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed or holds
    /// values getty cannot use.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config: GettyConfig =
                toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                    path: path.clone(),
                    source: e,
                })?;
            config.validate(&path)?;
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(GettyConfig::default())
        }
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        LineSpeed::from_bps(self.line.speed).map_err(|e| ConfigError::InvalidSpeed {
            path: path.to_path_buf(),
            source: e,
        })?;
        if !(2..=USERNAME_MAX_LIMIT).contains(&self.line.username_max) {
            return Err(ConfigError::InvalidValue {
                path: path.to_path_buf(),
                message: format!(
                    "line.username_max must be between 2 and {}, got {}",
                    USERNAME_MAX_LIMIT, self.line.username_max
                ),
            });
        }
        Ok(())
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    InvalidSpeed {
        path: PathBuf,
        source: SpeedError,
    },
    InvalidValue {
        path: PathBuf,
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::InvalidSpeed { path, source } => {
                write!(f, "Config file '{}': {}", path.display(), source)
            }
            ConfigError::InvalidValue { path, message } => {
                write!(f, "Config file '{}': {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::InvalidSpeed { source, .. } => Some(source),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_PATH)
}
