//! Configuration type definitions.
//!
//! Pure data, no I/O. Every section of the config file is optional and
//! falls back to its defaults, so an empty file is a valid config.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// =============================================================================
// Top-level config
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Working files the preview samples and the render command reads
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub markdown: MarkdownConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

// =============================================================================
// Working files
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesConfig {
    /// Markdown template file
    #[serde(default = "default_template_file")]
    pub template: PathBuf,
    /// YAML data file
    #[serde(default = "default_data_file")]
    pub data: PathBuf,
}

fn default_template_file() -> PathBuf {
    PathBuf::from("template.md")
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data.yaml")
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            template: default_template_file(),
            data: default_data_file(),
        }
    }
}

impl FilesConfig {
    pub fn template_path(&self, base: &Path) -> PathBuf {
        resolve(base, &self.template)
    }

    pub fn data_path(&self, base: &Path) -> PathBuf {
        resolve(base, &self.data)
    }
}

// =============================================================================
// Markdown configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownConfig {
    /// Extensions to enable for markdown processing
    #[serde(default = "default_markdown_extensions")]
    pub extensions: Vec<String>,
}

fn default_markdown_extensions() -> Vec<String> {
    vec![
        "smart_punctuation".to_string(),
        "strikethrough".to_string(),
        "tables".to_string(),
    ]
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            extensions: default_markdown_extensions(),
        }
    }
}

// =============================================================================
// Preview configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// How often the preview samples the working files, in milliseconds
    #[serde(default = "default_sample_interval_ms")]
    pub sample_interval_ms: u64,
    /// Reload the browser when a new render is published (default: true)
    #[serde(default = "default_live_reload")]
    pub live_reload: bool,
}

fn default_sample_interval_ms() -> u64 {
    500
}

fn default_live_reload() -> bool {
    true
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: default_sample_interval_ms(),
            live_reload: default_live_reload(),
        }
    }
}

// =============================================================================
// Store configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding saved templates and data records
    #[serde(default = "default_store_dir")]
    pub dir: PathBuf,
}

fn default_store_dir() -> PathBuf {
    PathBuf::from(".mdfill")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: default_store_dir(),
        }
    }
}

impl StoreConfig {
    pub fn dir_path(&self, base: &Path) -> PathBuf {
        resolve(base, &self.dir)
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_paths_resolve_against_base() {
        let files = FilesConfig::default();
        assert_eq!(
            files.template_path(Path::new("/work")),
            PathBuf::from("/work/template.md")
        );
    }

    #[test]
    fn test_absolute_paths_kept_as_is() {
        let files = FilesConfig {
            template: PathBuf::from("/elsewhere/t.md"),
            ..Default::default()
        };
        assert_eq!(
            files.template_path(Path::new("/work")),
            PathBuf::from("/elsewhere/t.md")
        );
    }
}
