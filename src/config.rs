use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::{
    DEFAULT_FINISH_TEMPLATE, DEFAULT_LOG_FILE, DEFAULT_MESSAGE_TEMPLATE, DEFAULT_START_TEMPLATE,
};

/// Which timestamp rendering log lines carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampFormat {
    /// Unpadded fields, zero-based month (January = 0). The historical
    /// on-disk format; existing consumers parse it, so it stays the default.
    #[default]
    Legacy,
    /// Zero-padded `%Y-%m-%d %H:%M:%S` with a 1-based month.
    Corrected,
}

/// Logger configuration: templates, default target path, timestamp format.
///
/// Built once and handed to the logger; there is no process-wide mutable
/// state. Templates use positional `{}` placeholders — the session templates
/// take a timestamp, the message template takes severity rank, timestamp and
/// message, in that order. Placeholder count is not validated; a mismatched
/// template garbles its lines rather than erroring.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggerConfig {
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    #[serde(default = "default_start_template")]
    pub start_template: String,
    #[serde(default = "default_finish_template")]
    pub finish_template: String,
    #[serde(default = "default_message_template")]
    pub message_template: String,
    #[serde(default)]
    pub timestamp: TimestampFormat,
}

fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

fn default_start_template() -> String {
    DEFAULT_START_TEMPLATE.to_string()
}

fn default_finish_template() -> String {
    DEFAULT_FINISH_TEMPLATE.to_string()
}

fn default_message_template() -> String {
    DEFAULT_MESSAGE_TEMPLATE.to_string()
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            start_template: default_start_template(),
            finish_template: default_finish_template(),
            message_template: default_message_template(),
            timestamp: TimestampFormat::default(),
        }
    }
}

impl LoggerConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Falls back to [`Default`] when the file is missing or unreadable, and
    /// warns on stderr when it exists but fails to parse. Missing keys take
    /// their default values.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if path.exists()
            && let Ok(content) = fs::read_to_string(path)
        {
            match toml::from_str::<LoggerConfig>(&content) {
                Ok(config) => return config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                }
            }
        }

        Self::default()
    }

    /// Replaces the default target path.
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    /// Replaces all three templates at once, verbatim and unconditionally.
    pub fn with_templates(
        mut self,
        start: impl Into<String>,
        finish: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.start_template = start.into();
        self.finish_template = finish.into();
        self.message_template = message.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_consts() {
        let config = LoggerConfig::default();
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(config.start_template, DEFAULT_START_TEMPLATE);
        assert_eq!(config.finish_template, DEFAULT_FINISH_TEMPLATE);
        assert_eq!(config.message_template, DEFAULT_MESSAGE_TEMPLATE);
        assert_eq!(config.timestamp, TimestampFormat::Legacy);
    }

    #[test]
    fn parses_toml_with_partial_keys() {
        let config: LoggerConfig = toml::from_str(
            r#"
            log_file = "/tmp/app.log"
            timestamp = "corrected"
            "#,
        )
        .expect("valid config");
        assert_eq!(config.log_file, PathBuf::from("/tmp/app.log"));
        assert_eq!(config.timestamp, TimestampFormat::Corrected);
        assert_eq!(config.message_template, DEFAULT_MESSAGE_TEMPLATE);
    }

    #[test]
    fn load_missing_file_falls_back_to_default() {
        let dir = tempdir().expect("temp dir");
        let config = LoggerConfig::load(dir.path().join("nope.toml"));
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn load_garbage_falls_back_to_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "not = [valid").expect("write config");
        let config = LoggerConfig::load(&path);
        assert_eq!(config.start_template, DEFAULT_START_TEMPLATE);
    }

    #[test]
    fn builder_overrides() {
        let config = LoggerConfig::default()
            .with_log_file("/tmp/x.log")
            .with_templates("start {}", "finish {}", "{} {} {}");
        assert_eq!(config.log_file, PathBuf::from("/tmp/x.log"));
        assert_eq!(config.start_template, "start {}");
        assert_eq!(config.message_template, "{} {} {}");
    }
}
