mod common;
use common::local;

use chrono::{Datelike, Duration, Local};
use trackr::errors::AppError;
use trackr::utils::date::{day_sequence, month_from_shorthand, next_month, time_from_shorthand};
use trackr::utils::duration::parse_duration;

#[test]
fn test_parse_duration_units() {
    assert_eq!(parse_duration("5m").unwrap(), Duration::minutes(5));
    assert_eq!(parse_duration("2h").unwrap(), Duration::hours(2));
    assert_eq!(parse_duration("90s").unwrap(), Duration::seconds(90));
    assert_eq!(parse_duration("1h30m").unwrap(), Duration::minutes(90));
    assert_eq!(parse_duration("1h30m15s").unwrap(), Duration::seconds(5415));
}

#[test]
fn test_parse_duration_signs() {
    assert_eq!(parse_duration("-45m").unwrap(), Duration::minutes(-45));
    assert_eq!(parse_duration("+45m").unwrap(), Duration::minutes(45));
    assert_eq!(parse_duration("-1h30m").unwrap(), Duration::minutes(-90));
}

#[test]
fn test_parse_duration_rejects_garbage() {
    for bad in ["", "h", "5", "5x", "1h30", "abc", "-", "1hh"] {
        assert!(
            matches!(parse_duration(bad), Err(AppError::InvalidDuration(_))),
            "{:?} should be rejected",
            bad
        );
    }
}

#[test]
fn test_date_shorthand_literal_forms() {
    assert_eq!(
        time_from_shorthand("2025-03-10").unwrap(),
        local(2025, 3, 10, 0, 0)
    );
    assert_eq!(
        time_from_shorthand("20250310").unwrap(),
        local(2025, 3, 10, 0, 0)
    );
    assert_eq!(time_from_shorthand("2025").unwrap(), local(2025, 1, 1, 0, 0));

    let year = Local::now().year();
    assert_eq!(
        time_from_shorthand("03-10").unwrap(),
        local(year, 3, 10, 0, 0)
    );
}

#[test]
fn test_date_shorthand_relative_forms() {
    let today = Local::now().date_naive();

    let yesterday = time_from_shorthand("-1d").unwrap();
    assert_eq!(yesterday.date_naive(), today - Duration::days(1));
    assert_eq!(yesterday.time(), chrono::NaiveTime::MIN);

    let last_week = time_from_shorthand("-1w").unwrap();
    assert_eq!(last_week.date_naive(), today - Duration::days(7));

    assert_eq!(time_from_shorthand("0d").unwrap().date_naive(), today);
}

#[test]
fn test_date_shorthand_rejects_garbage() {
    for bad in ["", "yesterday", "2025-13-01", "123", "1d2"] {
        assert!(
            matches!(time_from_shorthand(bad), Err(AppError::InvalidDate(_))),
            "{:?} should be rejected",
            bad
        );
    }
}

#[test]
fn test_month_shorthand_forms() {
    assert_eq!(
        month_from_shorthand("2025-03").unwrap(),
        local(2025, 3, 1, 0, 0)
    );
    assert_eq!(
        month_from_shorthand("202503").unwrap(),
        local(2025, 3, 1, 0, 0)
    );
    assert_eq!(
        month_from_shorthand("2503").unwrap(),
        local(2025, 3, 1, 0, 0)
    );
    assert_eq!(
        month_from_shorthand("25-03").unwrap(),
        local(2025, 3, 1, 0, 0)
    );

    let year = Local::now().year();
    assert_eq!(month_from_shorthand("3").unwrap(), local(year, 3, 1, 0, 0));
}

#[test]
fn test_month_shorthand_rejects_garbage() {
    for bad in ["", "13", "2025-3-1", "march"] {
        assert!(
            matches!(month_from_shorthand(bad), Err(AppError::InvalidMonth(_))),
            "{:?} should be rejected",
            bad
        );
    }
}

#[test]
fn test_next_month_rolls_over_year() {
    assert_eq!(
        next_month(local(2025, 12, 1, 0, 0)).unwrap(),
        local(2026, 1, 1, 0, 0)
    );
    assert_eq!(
        next_month(local(2025, 3, 1, 0, 0)).unwrap(),
        local(2025, 4, 1, 0, 0)
    );
}

#[test]
fn test_day_sequence_is_half_open() {
    let days = day_sequence(local(2025, 3, 10, 0, 0), local(2025, 3, 13, 0, 0));
    assert_eq!(days.len(), 3);
    assert_eq!(days[0].day(), 10);
    assert_eq!(days[2].day(), 12);

    // a partial last day still appears
    let days = day_sequence(local(2025, 3, 10, 0, 0), local(2025, 3, 12, 8, 0));
    assert_eq!(days.len(), 3);

    // empty window yields no days
    let days = day_sequence(local(2025, 3, 10, 0, 0), local(2025, 3, 10, 0, 0));
    assert!(days.is_empty());
}
