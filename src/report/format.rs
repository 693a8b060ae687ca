use std::time::Duration;

/// Seconds with microsecond precision, e.g. `4.600000`.
#[must_use]
pub fn format_secs(duration: Duration) -> String {
    format!("{}.{:06}", duration.as_secs(), duration.subsec_micros())
}

#[must_use]
pub fn format_x100(value: u64) -> String {
    format!("{}.{:02}", value / 100, value % 100)
}
