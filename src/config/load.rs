//! Configuration loading from files.

use std::path::{Path, PathBuf};

use super::{Config, ConfigError, DEFAULT_CONFIG_FILE};

impl Config {
    /// Load the config from the command line argument, defaulting to
    /// `mdfill.yaml` in the working directory. Returns the config together
    /// with the base directory relative paths resolve against, which is the
    /// directory holding the config file.
    ///
    /// The default config file is optional; an explicitly named one is not.
    pub async fn load_from_arg(config_file: Option<&Path>) -> Result<(Self, PathBuf), ConfigError> {
        let explicit = config_file.is_some();
        let config_file = config_file.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
        let config_file = if config_file.is_relative() {
            std::env::current_dir()
                .map_err(ConfigError::CwdFailure)?
                .join(config_file)
        } else {
            config_file.to_path_buf()
        };

        Self::load_from_file(&config_file, explicit)
    }

    fn load_from_file(path: &Path, explicit: bool) -> Result<(Self, PathBuf), ConfigError> {
        let base = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if !explicit && e.kind() == std::io::ErrorKind::NotFound => {
                return Ok((Self::default(), base));
            }
            Err(e) => return Err(ConfigError::Read(path.to_path_buf(), e)),
        };

        let config = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        Ok((config, base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_default_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);

        let (config, base) = Config::load_from_file(&path, false).unwrap();

        assert_eq!(config.preview.sample_interval_ms, 500);
        assert_eq!(config.files.template, PathBuf::from("template.md"));
        assert_eq!(base, dir.path());
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.yaml");

        let err = Config::load_from_file(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Read(..)));
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "preview:\n  sample_interval_ms: 100\n").unwrap();

        let (config, _) = Config::load_from_file(&path, false).unwrap();

        assert_eq!(config.preview.sample_interval_ms, 100);
        assert!(config.preview.live_reload);
        assert!(config.markdown.extensions.iter().any(|e| e == "smart_punctuation"));
    }

    #[test]
    fn test_invalid_config_reports_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "files: [oops\n").unwrap();

        let err = Config::load_from_file(&path, false).unwrap_err();
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }
}
