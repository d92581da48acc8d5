//! Configuration system for yit.
//!
//! This module provides the configuration structure for yit with sensible
//! defaults and support for serialization/deserialization via serde.
//! Configuration is loaded from a TOML file and merged with command-line
//! arguments, which take precedence.
//!
//! # Example
//!
//! ```
//! use yit::config::{Config, OutputFormat};
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.limit, 0);
//! assert_eq!(config.output, OutputFormat::Line);
//!
//! // Create custom configuration
//! let custom = Config {
//!     limit: 10,
//!     output: OutputFormat::Yaml,
//!     ..Config::default()
//! };
//! assert!(custom.show_kind);
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// How matches are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per match
    #[default]
    Line,
    /// Each match rendered as a YAML document
    Yaml,
}

/// Configuration for the yit command-line tool.
///
/// # Fields
///
/// * `limit` - Maximum number of matches printed, 0 for unlimited (default: 0)
/// * `show_kind` - Prefix each output line with the node kind (default: true)
/// * `show_tag` - Include the short tag in each output line (default: false)
/// * `output` - Output format, "line" or "yaml" (default: "line")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of matches printed, 0 for unlimited
    #[serde(default)]
    pub limit: usize,

    /// Prefix each output line with the node kind
    #[serde(default = "default_show_kind")]
    pub show_kind: bool,

    /// Include the short tag in each output line
    #[serde(default)]
    pub show_tag: bool,

    /// Output format
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_show_kind() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limit: 0,
            show_kind: default_show_kind(),
            show_tag: false,
            output: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/yit/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("yit");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(path),
            None => {
                debug!("no home directory, using default config");
                Self::default()
            }
        }
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file is missing or invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Self::default();
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read config, using defaults");
                return Self::default();
            }
        };

        toml::from_str(&contents).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "invalid config, using defaults");
            Self::default()
        })
    }

    /// Saves configuration to `path` as pretty-printed TOML.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, toml_string)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        Ok(())
    }
}
