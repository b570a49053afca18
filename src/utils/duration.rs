//! Duration shorthand parsing: `5m`, `2h`, `1h30m`, `-45m`, `90s`.

use crate::errors::{AppError, AppResult};
use chrono::Duration;

/// Parse a signed shorthand duration into a chrono Duration.
/// One or more `<int><h|m|s>` components, optional leading sign.
pub fn parse_duration(input: &str) -> AppResult<Duration> {
    let raw = input.trim();
    let (negative, body) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };

    if body.is_empty() {
        return Err(AppError::InvalidDuration(input.to_string()));
    }

    let mut total_secs: i64 = 0;
    let mut digits = String::new();
    let mut components = 0;

    for c in body.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }

        let value: i64 = digits
            .parse()
            .map_err(|_| AppError::InvalidDuration(input.to_string()))?;
        digits.clear();

        let unit_secs = match c {
            'h' => 3600,
            'm' => 60,
            's' => 1,
            _ => return Err(AppError::InvalidDuration(input.to_string())),
        };

        total_secs += value * unit_secs;
        components += 1;
    }

    // trailing digits without a unit, or no components at all
    if !digits.is_empty() || components == 0 {
        return Err(AppError::InvalidDuration(input.to_string()));
    }

    if negative {
        total_secs = -total_secs;
    }

    Ok(Duration::seconds(total_secs))
}

/// Parse an optional shorthand duration, defaulting to zero when absent.
pub fn parse_optional_duration(input: Option<&String>) -> AppResult<Duration> {
    match input {
        Some(s) => parse_duration(s),
        None => Ok(Duration::zero()),
    }
}
