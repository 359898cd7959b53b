use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::config::{LoggerConfig, TimestampFormat};
use crate::error::LogError;
use crate::level::Severity;
use crate::template::fill;
use crate::timestamp::{timestamp_now, timestamp_now_corrected};

/// Appends severity-tagged, timestamped lines to a text file.
///
/// Every operation opens the target in append mode, writes one line, and
/// closes the handle before returning, so each call is individually durable.
/// The configured path is used by default; the `*_to` / `*_at` variants take
/// a per-call override. For batched writes use
/// [`BufferedLineLogger`](crate::BufferedLineLogger) instead.
pub struct LineLogger {
    config: LoggerConfig,
}

impl LineLogger {
    pub fn new(config: LoggerConfig) -> Self {
        Self { config }
    }

    /// Logger with the default path and templates.
    pub fn with_defaults() -> Self {
        Self::new(LoggerConfig::default())
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Whether `path` can be opened for reading.
    ///
    /// Any open failure counts as "does not exist", including permission
    /// errors; callers that need the distinction should stat the path
    /// themselves.
    pub fn file_exists(path: impl AsRef<Path>) -> bool {
        File::open(path).is_ok()
    }

    /// Creates an empty file at `path` unless one is already readable there.
    ///
    /// Idempotent: an existing file is left untouched. The parent directory
    /// is never created; a missing directory surfaces as
    /// [`LogError::FileCreate`].
    pub fn ensure_file(path: impl AsRef<Path>) -> Result<(), LogError> {
        let path = path.as_ref();
        if Self::file_exists(path) {
            return Ok(());
        }
        File::create(path).map_err(|source| LogError::FileCreate {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }

    /// Appends `line` plus a newline to `path`, creating the file if absent.
    ///
    /// One open-write-close cycle per call. The parent directory must exist.
    pub fn append_line(&self, line: &str, path: impl AsRef<Path>) -> Result<(), LogError> {
        let path = path.as_ref();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LogError::FileOpen {
                path: path.to_path_buf(),
                source,
            })?;
        writeln!(file, "{line}").map_err(|source| LogError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Renders the message template with `level`'s rank, the current
    /// timestamp, and `message` verbatim (no escaping).
    pub fn format_line(&self, level: Severity, message: &str) -> String {
        let ts = self.timestamp();
        fill(
            &self.config.message_template,
            &[&level.rank().to_string(), &ts, message],
        )
    }

    /// Writes the session start marker to the configured path.
    pub fn begin_session(&self) -> Result<(), LogError> {
        self.begin_session_at(&self.config.log_file)
    }

    /// Writes the session start marker to `path`, creating the file first.
    pub fn begin_session_at(&self, path: impl AsRef<Path>) -> Result<(), LogError> {
        Self::ensure_file(&path)?;
        let line = fill(&self.config.start_template, &[&self.timestamp()]);
        self.append_line(&line, path)
    }

    /// Writes the session finish marker to the configured path.
    pub fn end_session(&self) -> Result<(), LogError> {
        self.end_session_at(&self.config.log_file)
    }

    /// Writes the session finish marker to `path`.
    pub fn end_session_at(&self, path: impl AsRef<Path>) -> Result<(), LogError> {
        let line = fill(&self.config.finish_template, &[&self.timestamp()]);
        self.append_line(&line, path)
    }

    /// Formats and appends one message line to the configured path.
    pub fn log(&self, level: Severity, message: &str) -> Result<(), LogError> {
        self.log_to(level, message, &self.config.log_file)
    }

    /// Formats and appends one message line to `path`.
    pub fn log_to(
        &self,
        level: Severity,
        message: &str,
        path: impl AsRef<Path>,
    ) -> Result<(), LogError> {
        let line = self.format_line(level, message);
        self.append_line(&line, path)
    }

    pub fn debug(&self, message: &str) -> Result<(), LogError> {
        self.log(Severity::Debug, message)
    }

    pub fn info(&self, message: &str) -> Result<(), LogError> {
        self.log(Severity::Info, message)
    }

    pub fn warning(&self, message: &str) -> Result<(), LogError> {
        self.log(Severity::Warning, message)
    }

    pub fn error(&self, message: &str) -> Result<(), LogError> {
        self.log(Severity::Error, message)
    }

    pub fn fatal(&self, message: &str) -> Result<(), LogError> {
        self.log(Severity::Fatal, message)
    }

    fn timestamp(&self) -> String {
        match self.config.timestamp {
            TimestampFormat::Legacy => timestamp_now(),
            TimestampFormat::Corrected => timestamp_now_corrected(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn logger_at(path: impl Into<std::path::PathBuf>) -> LineLogger {
        LineLogger::new(LoggerConfig::default().with_log_file(path))
    }

    #[test]
    fn file_exists_reflects_readability() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("probe.log");
        assert!(!LineLogger::file_exists(&path));
        fs::write(&path, "").expect("create file");
        assert!(LineLogger::file_exists(&path));
    }

    #[test]
    fn ensure_file_creates_then_preserves() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("app.log");

        LineLogger::ensure_file(&path).expect("first create");
        fs::write(&path, "existing line\n").expect("populate");
        LineLogger::ensure_file(&path).expect("second call");

        assert_eq!(fs::read_to_string(&path).expect("read"), "existing line\n");
    }

    #[test]
    fn ensure_file_missing_directory_is_create_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("missing").join("app.log");
        match LineLogger::ensure_file(&path) {
            Err(LogError::FileCreate { .. }) => {}
            other => panic!("expected FileCreate, got: {other:?}"),
        }
    }

    #[test]
    fn format_line_carries_rank_and_message_verbatim() {
        let logger = LineLogger::with_defaults();
        for (level, rank) in [
            (Severity::Debug, 1),
            (Severity::Info, 2),
            (Severity::Warning, 3),
            (Severity::Error, 4),
            (Severity::Fatal, 5),
        ] {
            let line = logger.format_line(level, "hello {braces} \\ unescaped");
            assert!(line.starts_with(&format!("[l={rank} | dt=")), "line: {line}");
            assert!(line.ends_with("] hello {braces} \\ unescaped"), "line: {line}");
        }
    }

    #[test]
    fn append_line_never_truncates() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("app.log");
        let logger = logger_at(&path);

        logger.append_line("first", &path).expect("append");
        logger.append_line("second", &path).expect("append");
        logger.append_line("third", &path).expect("append");

        let content = fs::read_to_string(&path).expect("read");
        assert_eq!(content, "first\nsecond\nthird\n");
    }

    #[test]
    fn append_line_missing_directory_is_open_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("missing").join("app.log");
        let logger = logger_at(&path);
        match logger.append_line("x", &path) {
            Err(LogError::FileOpen { .. }) => {}
            other => panic!("expected FileOpen, got: {other:?}"),
        }
    }

    #[test]
    fn corrected_timestamp_reaches_log_lines() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("app.log");
        let config = LoggerConfig {
            timestamp: TimestampFormat::Corrected,
            ..LoggerConfig::default()
        }
        .with_log_file(&path);
        let logger = LineLogger::new(config);

        logger.info("padded").expect("log");
        let content = fs::read_to_string(&path).expect("read");
        // Corrected format pads every field: "[l=2 | dt=2026-08-31 09:05:02] padded"
        let dt = content
            .split("dt=")
            .nth(1)
            .and_then(|rest| rest.split(']').next())
            .expect("dt field");
        assert_eq!(dt.len(), 19, "dt: {dt}");
    }
}
