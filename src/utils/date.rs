//! Date and month shorthand parsing, plus calendar-day sequences for the
//! daily and timeline reports.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Duration, Local, Months, NaiveDate, NaiveTime};

/// Local midnight of a calendar day.
pub fn at_midnight(day: NaiveDate) -> AppResult<DateTime<Local>> {
    day.and_time(NaiveTime::MIN)
        .and_local_timezone(Local)
        .earliest()
        .ok_or_else(|| AppError::InvalidDate(day.to_string()))
}

/// Parse a date shorthand into a local midnight timestamp.
///
/// Relative suffix forms: `Nd`, `Nw`, `Nm`, `Ny` mean N units from now,
/// truncated to midnight (N may be negative, eg. `-7d`).
/// Literal forms, matched by width: `M`/`MM` (month of the current year),
/// `YYYY`, `MM-DD`, `YYYYMMDD`, `YYYY-MM-DD`.
pub fn time_from_shorthand(input: &str) -> AppResult<DateTime<Local>> {
    let v = input.trim();
    if v.is_empty() {
        return Err(AppError::InvalidDate(input.to_string()));
    }

    let now = Local::now();
    let today = now.date_naive();

    if let Some(suffix) = v.chars().last()
        && matches!(suffix, 'd' | 'w' | 'm' | 'y')
    {
        let n: i64 = v[..v.len() - 1]
            .parse()
            .map_err(|_| AppError::InvalidDate(input.to_string()))?;

        let day = match suffix {
            'd' => today
                .checked_add_signed(Duration::days(n))
                .ok_or_else(|| AppError::InvalidDate(input.to_string()))?,
            'w' => today
                .checked_add_signed(Duration::days(n * 7))
                .ok_or_else(|| AppError::InvalidDate(input.to_string()))?,
            'm' => shift_months(today, n).ok_or_else(|| AppError::InvalidDate(input.to_string()))?,
            'y' => shift_months(today, n * 12)
                .ok_or_else(|| AppError::InvalidDate(input.to_string()))?,
            _ => unreachable!(),
        };
        return at_midnight(day);
    }

    let day = match v.len() {
        // bare month number, current year
        1 | 2 => {
            let month: u32 = v
                .parse()
                .map_err(|_| AppError::InvalidDate(input.to_string()))?;
            NaiveDate::from_ymd_opt(today.year(), month, 1)
        }
        // bare year
        4 => {
            let year: i32 = v
                .parse()
                .map_err(|_| AppError::InvalidDate(input.to_string()))?;
            NaiveDate::from_ymd_opt(year, 1, 1)
        }
        // MM-DD on the current year
        5 => NaiveDate::parse_from_str(&format!("{}-{}", today.year(), v), "%Y-%m-%d").ok(),
        8 => NaiveDate::parse_from_str(v, "%Y%m%d").ok(),
        10 => NaiveDate::parse_from_str(v, "%Y-%m-%d").ok(),
        _ => None,
    }
    .ok_or_else(|| AppError::InvalidDate(input.to_string()))?;

    at_midnight(day)
}

/// Parse a month shorthand into the first of that month, local midnight.
///
/// Forms by width: `M`/`MM` (current year), `YYMM`, `YY-MM`, `YYYYMM`,
/// `YYYY-MM`.
pub fn month_from_shorthand(input: &str) -> AppResult<DateTime<Local>> {
    let v = input.trim();
    let current_year = Local::now().year();

    let (year, month) = match v.len() {
        1 | 2 => {
            let month: u32 = v
                .parse()
                .map_err(|_| AppError::InvalidMonth(input.to_string()))?;
            (current_year, month)
        }
        4 => parse_year_month(&v[..2], &v[2..], 2000)
            .ok_or_else(|| AppError::InvalidMonth(input.to_string()))?,
        5 if v.as_bytes()[2] == b'-' => parse_year_month(&v[..2], &v[3..], 2000)
            .ok_or_else(|| AppError::InvalidMonth(input.to_string()))?,
        6 => parse_year_month(&v[..4], &v[4..], 0)
            .ok_or_else(|| AppError::InvalidMonth(input.to_string()))?,
        7 if v.as_bytes()[4] == b'-' => parse_year_month(&v[..4], &v[5..], 0)
            .ok_or_else(|| AppError::InvalidMonth(input.to_string()))?,
        _ => return Err(AppError::InvalidMonth(input.to_string())),
    };

    let day = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::InvalidMonth(input.to_string()))?;
    at_midnight(day)
}

fn parse_year_month(year_part: &str, month_part: &str, century: i32) -> Option<(i32, u32)> {
    let year: i32 = year_part.parse().ok()?;
    let month: u32 = month_part.parse().ok()?;
    Some((century + year, month))
}

/// First of the month following `month_start`.
pub fn next_month(month_start: DateTime<Local>) -> AppResult<DateTime<Local>> {
    let day = month_start
        .date_naive()
        .with_day(1)
        .and_then(|d| shift_months(d, 1))
        .ok_or_else(|| AppError::InvalidMonth(month_start.to_string()))?;
    at_midnight(day)
}

fn shift_months(day: NaiveDate, n: i64) -> Option<NaiveDate> {
    if n >= 0 {
        day.checked_add_months(Months::new(n as u32))
    } else {
        day.checked_sub_months(Months::new((-n) as u32))
    }
}

/// Calendar days covered by `[from, to)`: step from `from`'s date while the
/// day still starts before `to`. Zero-activity days are the caller's problem
/// to render; every day in the window appears exactly once, ascending.
pub fn day_sequence(from: DateTime<Local>, to: DateTime<Local>) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut day = from.date_naive();
    while day.and_time(NaiveTime::MIN) < to.naive_local() {
        days.push(day);
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    days
}
