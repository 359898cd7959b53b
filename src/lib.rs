//! File-backed line logger: timestamped, severity-tagged lines appended to a
//! plain text file.
//!
//! Each entry is one line shaped `[l=<rank> | dt=<timestamp>] <message>`, and
//! a session can be bracketed with start/finish marker lines. [`LineLogger`]
//! opens and closes the file per call (immediate durability);
//! [`BufferedLineLogger`] is the batched alternative.

mod buffered;
mod config;
mod consts;
mod error;
mod level;
mod logger;
mod template;
mod timestamp;

pub use buffered::BufferedLineLogger;
pub use config::{LoggerConfig, TimestampFormat};
pub use consts::{
    DEFAULT_FINISH_TEMPLATE, DEFAULT_LOG_FILE, DEFAULT_MESSAGE_TEMPLATE, DEFAULT_START_TEMPLATE,
};
pub use error::{LogError, abort_on_error};
pub use level::Severity;
pub use logger::LineLogger;
pub use timestamp::{timestamp_now, timestamp_now_corrected};
