//! Configuration loading and types.
//!
//! - Type definitions for the config file (`types`)
//! - Loading the config from disk (`load`)

use std::path::PathBuf;

mod load;
mod types;

pub use types::{Config, FilesConfig, MarkdownConfig, PreviewConfig, StoreConfig};

/// Default config file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "mdfill.yaml";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("failed to parse config file {0}: {1}")]
    Parse(PathBuf, serde_yaml::Error),

    #[error("failed to get current working directory: {0}")]
    CwdFailure(std::io::Error),
}
