use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::sync::{Mutex, PoisonError};

use crate::config::{LoggerConfig, TimestampFormat};
use crate::error::LogError;
use crate::level::Severity;
use crate::template::fill;
use crate::timestamp::{timestamp_now, timestamp_now_corrected};

/// Batched counterpart to [`LineLogger`](crate::LineLogger).
///
/// Opens the configured file once in append mode and buffers writes; lines
/// become durable on [`flush`](Self::flush) or drop, not per call. The buffer
/// sits behind a mutex, so each line is appended atomically even with
/// multiple threads logging through a shared reference.
pub struct BufferedLineLogger {
    config: LoggerConfig,
    writer: Mutex<BufWriter<std::fs::File>>,
}

impl BufferedLineLogger {
    /// Opens the configured log file for appending, creating it if absent.
    pub fn open(config: LoggerConfig) -> Result<Self, LogError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log_file)
            .map_err(|source| LogError::FileOpen {
                path: config.log_file.clone(),
                source,
            })?;

        Ok(Self {
            config,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Buffers the session start marker.
    pub fn begin_session(&self) -> Result<(), LogError> {
        let line = fill(&self.config.start_template, &[&self.timestamp()]);
        self.write_line(&line)
    }

    /// Buffers the session finish marker.
    pub fn end_session(&self) -> Result<(), LogError> {
        let line = fill(&self.config.finish_template, &[&self.timestamp()]);
        self.write_line(&line)
    }

    /// Formats and buffers one message line.
    pub fn log(&self, level: Severity, message: &str) -> Result<(), LogError> {
        let ts = self.timestamp();
        let line = fill(
            &self.config.message_template,
            &[&level.rank().to_string(), &ts, message],
        );
        self.write_line(&line)
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

    /// Flushes buffered lines to disk.
    pub fn flush(&self) -> Result<(), LogError> {
        let mut writer = self.lock_writer();
        writer.flush().map_err(|source| LogError::Write {
            path: self.config.log_file.clone(),
            source,
        })
    }

    fn write_line(&self, line: &str) -> Result<(), LogError> {
        let mut writer = self.lock_writer();
        writeln!(writer, "{line}").map_err(|source| LogError::Write {
            path: self.config.log_file.clone(),
            source,
        })
    }

    fn lock_writer(&self) -> std::sync::MutexGuard<'_, BufWriter<std::fs::File>> {
        // A poisoned lock only means another thread panicked mid-write; the
        // buffer itself is still usable.
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn timestamp(&self) -> String {
        match self.config.timestamp {
            TimestampFormat::Legacy => timestamp_now(),
            TimestampFormat::Corrected => timestamp_now_corrected(),
        }
    }
}

impl Drop for BufferedLineLogger {
    fn drop(&mut self) {
        let writer = self.writer.get_mut().unwrap_or_else(PoisonError::into_inner);
        let _ = writer.flush();
    }
}
