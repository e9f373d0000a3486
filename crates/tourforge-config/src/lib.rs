//! Configuration system for TourForge.
//!
//! Load search configuration from TOML or YAML to control the worker pool
//! and the forking depth without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use tourforge_config::{SearchConfig, ThreadCount};
//!
//! let config = SearchConfig::from_toml_str(r#"
//!     fork_depth = 4
//!     thread_count = { count = 8 }
//! "#).unwrap();
//!
//! assert_eq!(config.fork_depth, 4);
//! assert_eq!(config.thread_count, ThreadCount::Count(8));
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use tourforge_config::SearchConfig;
//!
//! let config = SearchConfig::load("search.toml").unwrap_or_default();
//! assert_eq!(config.fork_depth, 3);
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Depth up to which the default policy forks child branches.
pub const DEFAULT_FORK_DEPTH: usize = 3;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Branch-and-bound search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct SearchConfig {
    /// Worker threads of the task pool.
    pub thread_count: ThreadCount,

    /// Branching steps whose route has at most this many fixed cities
    /// spawn their children as separate tasks.
    pub fork_depth: usize,

    /// Whether every improvement of the best tour is logged.
    ///
    /// Improvements are DEBUG events, so the console's default filter
    /// (`warn,tourforge_solver=info`) drops them; set
    /// `RUST_LOG=tourforge_solver=debug` to see them.
    pub log_progress: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            thread_count: ThreadCount::Auto,
            fork_depth: DEFAULT_FORK_DEPTH,
            log_progress: true,
        }
    }
}

impl SearchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML or
    /// fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the worker thread count.
    pub fn with_thread_count(mut self, thread_count: ThreadCount) -> Self {
        self.thread_count = thread_count;
        self
    }

    /// Sets the fork depth.
    pub fn with_fork_depth(mut self, fork_depth: usize) -> Self {
        self.fork_depth = fork_depth;
        self
    }

    /// Enables or disables improvement logging.
    pub fn with_log_progress(mut self, log_progress: bool) -> Self {
        self.log_progress = log_progress;
        self
    }

    /// Checks values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thread_count == ThreadCount::Count(0) {
            return Err(ConfigError::Invalid(
                "thread_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Worker thread count configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadCount {
    /// One worker per available CPU core.
    #[default]
    Auto,

    /// A specific number of workers.
    Count(usize),
}

impl ThreadCount {
    /// Resolves to an actual number of workers.
    pub fn resolve(&self) -> usize {
        match self {
            ThreadCount::Auto => std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(1),
            ThreadCount::Count(n) => (*n).max(1),
        }
    }
}

impl fmt::Display for ThreadCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThreadCount::Auto => write!(f, "Auto"),
            ThreadCount::Count(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests;
