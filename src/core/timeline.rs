//! Timeline model: a day × task presence matrix over a generated day
//! sequence, with neighbour connectivity for the chart connectors.

use crate::core::report::NameFilter;
use crate::db::queries;
use crate::errors::AppResult;
use crate::utils::date::day_sequence;
use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use rusqlite::Connection;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    Inactive,
    Isolated,
    Left,
    Right,
    Both,
}

pub struct TimelineRow {
    pub task_id: i64,
    pub task_name: String,
    pub project_name: String,
    pub cells: Vec<Connector>,
}

pub struct Timeline {
    pub days: Vec<NaiveDate>,
    pub rows: Vec<TimelineRow>,
}

/// True when the frame's interval overlaps the calendar day. Open frames
/// extend to now.
fn overlaps_day(start: DateTime<Local>, end: DateTime<Local>, day: NaiveDate) -> bool {
    let day_start = day.and_time(NaiveTime::MIN);
    let Some(next) = day.succ_opt() else {
        return false;
    };
    let day_end = next.and_time(NaiveTime::MIN);
    start.naive_local() < day_end && end.naive_local() > day_start
}

/// Build the presence matrix for `[from, to)`. Every generated day appears
/// as a column even when nothing was active; rows are ordered by task id
/// ascending and carry their project name for visual grouping.
pub fn timeline(
    conn: &Connection,
    from: DateTime<Local>,
    to: DateTime<Local>,
    filter: &NameFilter,
) -> AppResult<Timeline> {
    let rows = queries::load_joined_frames(conn)?;
    let days = day_sequence(from, to);
    let now = Local::now();

    struct Acc {
        task_name: String,
        project_name: String,
        active: Vec<bool>,
    }

    let mut tasks: BTreeMap<i64, Acc> = BTreeMap::new();

    for row in &rows {
        if !filter.matches(&row.project.name, &row.task.name) {
            continue;
        }
        let end = row.frame.end_or(now);

        for (i, day) in days.iter().enumerate() {
            if !overlaps_day(row.frame.start, end, *day) {
                continue;
            }
            let acc = tasks.entry(row.task.id).or_insert_with(|| Acc {
                task_name: row.task.name.clone(),
                project_name: row.project.name.clone(),
                active: vec![false; days.len()],
            });
            acc.active[i] = true;
        }
    }

    // BTreeMap iteration gives task id ascending
    let rows = tasks
        .into_iter()
        .map(|(task_id, acc)| {
            let cells = (0..acc.active.len())
                .map(|i| {
                    if !acc.active[i] {
                        return Connector::Inactive;
                    }
                    let prev = i > 0 && acc.active[i - 1];
                    let next = i + 1 < acc.active.len() && acc.active[i + 1];
                    match (prev, next) {
                        (true, true) => Connector::Both,
                        (true, false) => Connector::Left,
                        (false, true) => Connector::Right,
                        (false, false) => Connector::Isolated,
                    }
                })
                .collect();
            TimelineRow {
                task_id,
                task_name: acc.task_name,
                project_name: acc.project_name,
                cells,
            }
        })
        .collect();

    Ok(Timeline { days, rows })
}
