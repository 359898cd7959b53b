//! Local wall-clock timestamps for log lines.
//!
//! The legacy format is the one existing log consumers parse: fields are not
//! zero-padded and the month is zero-based (January = 0), so March 7th at
//! 09:05:02 renders as `2024-2-7 9:5:2`. That off-by-one looks like a bug but
//! is part of the on-disk contract, so it is preserved as the default and a
//! corrected formatter is offered alongside it.

use chrono::{Datelike, Local, Timelike};

/// Current local time in the legacy format (unpadded, zero-based month).
pub fn timestamp_now() -> String {
    render_legacy(&Local::now())
}

/// Current local time as `%Y-%m-%d %H:%M:%S` (zero-padded, 1-based month).
pub fn timestamp_now_corrected() -> String {
    render_corrected(&Local::now())
}

pub(crate) fn render_legacy(t: &(impl Datelike + Timelike)) -> String {
    format!(
        "{}-{}-{} {}:{}:{}",
        t.year(),
        t.month0(),
        t.day(),
        t.hour(),
        t.minute(),
        t.second()
    )
}

pub(crate) fn render_corrected(t: &(impl Datelike + Timelike)) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        t.year(),
        t.month(),
        t.day(),
        t.hour(),
        t.minute(),
        t.second()
    )
}
