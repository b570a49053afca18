//! Presentation-side formatting. Aggregation carries whole seconds end to
//! end; hours appear only here.

/// Whole seconds rendered as fractional hours, eg. `1.50h`.
pub fn hours(secs: i64) -> String {
    format!("{:.2}h", secs as f64 / 3600.0)
}

/// Whole seconds rendered as `H:MM:SS` for elapsed-time display.
pub fn clock(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.abs();
    format!("{}{}:{:02}:{:02}", sign, s / 3600, (s % 3600) / 60, s % 60)
}
