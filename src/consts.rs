/// Default log target, relative to the process working directory.
///
/// The `log/` directory is never created by this crate; if it is missing,
/// file creation fails and the error is reported to the caller.
pub const DEFAULT_LOG_FILE: &str = "./log/linelog.log";

/// Session start marker, filled with the current timestamp.
pub const DEFAULT_START_TEMPLATE: &str = "Logging session started at {}";

/// Session finish marker, filled with the current timestamp.
pub const DEFAULT_FINISH_TEMPLATE: &str = "Logging session finished at {}";

/// Per-message line, filled with severity rank, timestamp, message.
pub const DEFAULT_MESSAGE_TEMPLATE: &str = "[l={} | dt={}] {}";
