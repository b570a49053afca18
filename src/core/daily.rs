//! Day-bucketed totals. Days are generated, not grouped from frames, so
//! zero-activity days still appear. A frame belongs to the calendar day its
//! end timestamp falls on.

use crate::core::report::NameFilter;
use crate::db::queries;
use crate::errors::AppResult;
use crate::utils::date::day_sequence;
use chrono::{DateTime, Local, NaiveDate};
use rusqlite::Connection;
use std::collections::BTreeMap;

pub struct DayTaskRow {
    pub task_name: String,
    pub total_secs: i64,
    pub first_start: DateTime<Local>,
}

pub struct DayProjectRow {
    pub project_name: String,
    pub total_secs: i64,
    pub tasks: Vec<DayTaskRow>,
}

pub struct DayRow {
    pub date: NaiveDate,
    pub total_secs: i64,
    pub projects: Vec<DayProjectRow>,
}

/// One row per calendar day in `[from, to)`, ascending, zero days included.
pub fn daily_report(
    conn: &Connection,
    from: DateTime<Local>,
    to: DateTime<Local>,
    filter: &NameFilter,
) -> AppResult<Vec<DayRow>> {
    let rows = queries::load_joined_frames(conn)?;
    let days = day_sequence(from, to);

    // day -> project -> task -> (secs, first start)
    type TaskBucket = BTreeMap<String, (i64, DateTime<Local>)>;
    let mut buckets: BTreeMap<NaiveDate, BTreeMap<String, TaskBucket>> = BTreeMap::new();

    for row in &rows {
        let Some(end) = row.frame.end else { continue };
        if !filter.matches(&row.project.name, &row.task.name) {
            continue;
        }

        let day = end.date_naive();
        let secs = (end - row.frame.start).num_seconds();

        let tasks = buckets
            .entry(day)
            .or_default()
            .entry(row.project.name.clone())
            .or_default();
        let entry = tasks
            .entry(row.task.name.clone())
            .or_insert((0, row.frame.start));
        entry.0 += secs;
        entry.1 = entry.1.min(row.frame.start);
    }

    let mut out = Vec::with_capacity(days.len());
    for day in days {
        let mut projects = Vec::new();
        let mut day_total = 0;

        if let Some(project_buckets) = buckets.get(&day) {
            for (project_name, tasks) in project_buckets {
                let mut task_rows: Vec<DayTaskRow> = tasks
                    .iter()
                    .map(|(name, (secs, first_start))| DayTaskRow {
                        task_name: name.clone(),
                        total_secs: *secs,
                        first_start: *first_start,
                    })
                    .collect();
                task_rows.sort_by_key(|t| t.first_start);

                let project_total: i64 = task_rows.iter().map(|t| t.total_secs).sum();
                day_total += project_total;
                projects.push(DayProjectRow {
                    project_name: project_name.clone(),
                    total_secs: project_total,
                    tasks: task_rows,
                });
            }
        }

        out.push(DayRow {
            date: day,
            total_secs: day_total,
            projects,
        });
    }

    Ok(out)
}
