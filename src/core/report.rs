//! Aggregation engine: window-clipped totals per task and project, and the
//! monthly report with its lifetime-total bypass for monthly-flagged tasks.
//!
//! All grouping and summing happens in memory over joined rows; the store
//! only supplies them. Durations are whole seconds throughout; hours appear
//! at presentation time only.

use crate::db::queries;
use crate::errors::AppResult;
use crate::models::Frame;
use chrono::{DateTime, Local};
use rusqlite::Connection;
use std::collections::BTreeMap;

/// Window-overlap test used by log, report and daily: a frame is included
/// when its END timestamp falls inside `[from, to)`. Open frames never
/// qualify.
pub fn ends_in_window(frame: &Frame, from: DateTime<Local>, to: DateTime<Local>) -> bool {
    match frame.end {
        Some(end) => from <= end && end < to,
        None => false,
    }
}

/// Window-clipped duration: `min(end, to) - max(start, from)`, in whole
/// seconds. Callers filter with `ends_in_window` first, so `end < to` holds
/// and only the start can be clipped.
pub fn clipped_secs(frame: &Frame, from: DateTime<Local>, to: DateTime<Local>) -> i64 {
    let Some(end) = frame.end else { return 0 };
    let clipped_end = end.min(to);
    let clipped_start = frame.start.max(from);
    (clipped_end - clipped_start).num_seconds().max(0)
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Name substring filters shared by log, daily and timeline.
#[derive(Debug, Default, Clone)]
pub struct NameFilter {
    pub project: Option<String>,
    pub task: Option<String>,
}

impl NameFilter {
    pub fn matches(&self, project_name: &str, task_name: &str) -> bool {
        if let Some(p) = &self.project
            && !contains(project_name, p)
        {
            return false;
        }
        if let Some(t) = &self.task
            && !contains(task_name, t)
        {
            return false;
        }
        true
    }
}

// ---------------------------
// Log report
// ---------------------------

pub struct TaskRow {
    pub task_id: i64,
    pub task_name: String,
    pub total_secs: i64,
    pub first_start: DateTime<Local>,
    pub last_end: DateTime<Local>,
    /// Window-included frames with their position in the task's full
    /// 0-based frame list.
    pub frames: Vec<(usize, Frame)>,
}

pub struct ProjectGroup {
    pub project_name: String,
    pub total_secs: i64,
    pub tasks: Vec<TaskRow>,
}

pub struct LogReport {
    pub projects: Vec<ProjectGroup>,
    pub total_secs: i64,
}

/// Per-task and per-project totals over `[from, to)`. Project totals are the
/// sum of their tasks' totals, so additivity holds by construction. Projects
/// are ordered by name, tasks by first included start time.
pub fn log_report(
    conn: &Connection,
    from: DateTime<Local>,
    to: DateTime<Local>,
    filter: &NameFilter,
) -> AppResult<LogReport> {
    let rows = queries::load_joined_frames(conn)?;

    struct TaskAcc {
        task_name: String,
        project_name: String,
        total_secs: i64,
        first_start: DateTime<Local>,
        last_end: DateTime<Local>,
        frames: Vec<(usize, Frame)>,
    }

    // rows arrive ordered by frame id, so per-task positions count up from 0
    let mut tasks: BTreeMap<i64, TaskAcc> = BTreeMap::new();
    let mut positions: BTreeMap<i64, usize> = BTreeMap::new();

    for row in &rows {
        let position = {
            let counter = positions.entry(row.task.id).or_insert(0);
            let p = *counter;
            *counter += 1;
            p
        };

        if !filter.matches(&row.project.name, &row.task.name) {
            continue;
        }
        if !ends_in_window(&row.frame, from, to) {
            continue;
        }

        let secs = clipped_secs(&row.frame, from, to);
        let end = row.frame.end_or(to);

        let acc = tasks.entry(row.task.id).or_insert_with(|| TaskAcc {
            task_name: row.task.name.clone(),
            project_name: row.project.name.clone(),
            total_secs: 0,
            first_start: row.frame.start,
            last_end: end,
            frames: Vec::new(),
        });
        acc.total_secs += secs;
        acc.first_start = acc.first_start.min(row.frame.start);
        acc.last_end = acc.last_end.max(end);
        acc.frames.push((position, row.frame.clone()));
    }

    let mut grouped: BTreeMap<String, Vec<TaskRow>> = BTreeMap::new();
    for (task_id, acc) in tasks {
        grouped
            .entry(acc.project_name.clone())
            .or_default()
            .push(TaskRow {
                task_id,
                task_name: acc.task_name,
                total_secs: acc.total_secs,
                first_start: acc.first_start,
                last_end: acc.last_end,
                frames: acc.frames,
            });
    }

    let mut projects = Vec::new();
    let mut total_secs = 0;
    for (project_name, mut task_rows) in grouped {
        task_rows.sort_by_key(|t| t.first_start);
        let project_total: i64 = task_rows.iter().map(|t| t.total_secs).sum();
        total_secs += project_total;
        projects.push(ProjectGroup {
            project_name,
            total_secs: project_total,
            tasks: task_rows,
        });
    }

    Ok(LogReport {
        projects,
        total_secs,
    })
}

// ---------------------------
// Monthly report
// ---------------------------

pub struct ReportRow {
    pub project_name: String,
    pub task_name: String,
    pub first_start: DateTime<Local>,
    pub last_end: DateTime<Local>,
    pub total_secs: i64,
    /// Marked rows carry a lifetime or month-restricted total instead of the
    /// window total; rendering annotates them with `*`.
    pub monthly: bool,
}

/// Calendar-month report over `[month_start, month_end)`.
///
/// Non-monthly tasks report the window-clipped total of frames ending in the
/// month. Monthly-flagged tasks bypass the window: their total is the
/// lifetime sum of all closed frames, independent of the month asked for.
/// With `all_monthly` every task is treated as monthly, but sums are
/// restricted to frames lying fully inside the month.
pub fn month_report(
    conn: &Connection,
    month_start: DateTime<Local>,
    month_end: DateTime<Local>,
    all_monthly: bool,
) -> AppResult<Vec<ReportRow>> {
    let rows = queries::load_joined_frames(conn)?;

    struct Acc {
        project_name: String,
        task_name: String,
        monthly: bool,
        total_secs: i64,
        first_start: Option<DateTime<Local>>,
        last_end: Option<DateTime<Local>>,
        any_end_in_month: bool,
    }

    let mut tasks: BTreeMap<i64, Acc> = BTreeMap::new();

    for row in &rows {
        let treat_monthly = all_monthly || row.task.monthly;

        let acc = tasks.entry(row.task.id).or_insert_with(|| Acc {
            project_name: row.project.name.clone(),
            task_name: row.task.name.clone(),
            monthly: treat_monthly,
            total_secs: 0,
            first_start: None,
            last_end: None,
            any_end_in_month: false,
        });

        let Some(end) = row.frame.end else { continue };

        let (secs, counted) = if all_monthly {
            // month-restricted: only frames fully inside the month
            if row.frame.start >= month_start && end < month_end {
                ((end - row.frame.start).num_seconds(), true)
            } else {
                (0, false)
            }
        } else if treat_monthly {
            // lifetime total, independent of the query window
            ((end - row.frame.start).num_seconds(), true)
        } else if ends_in_window(&row.frame, month_start, month_end) {
            (clipped_secs(&row.frame, month_start, month_end), true)
        } else {
            (0, false)
        };

        if ends_in_window(&row.frame, month_start, month_end) {
            acc.any_end_in_month = true;
        }

        if counted {
            acc.total_secs += secs;
            acc.first_start = Some(match acc.first_start {
                Some(s) => s.min(row.frame.start),
                None => row.frame.start,
            });
            acc.last_end = Some(match acc.last_end {
                Some(e) => e.max(end),
                None => end,
            });
        }
    }

    let mut out: Vec<ReportRow> = tasks
        .into_values()
        .filter_map(|acc| {
            let included = if acc.monthly {
                acc.total_secs > 0
            } else {
                acc.any_end_in_month
            };
            if !included {
                return None;
            }
            let first_start = acc.first_start?;
            let last_end = acc.last_end?;
            Some(ReportRow {
                project_name: acc.project_name,
                task_name: acc.task_name,
                first_start,
                last_end,
                total_secs: acc.total_secs,
                monthly: acc.monthly,
            })
        })
        .collect();

    out.sort_by(|a, b| {
        a.project_name
            .cmp(&b.project_name)
            .then(a.first_start.cmp(&b.first_start))
    });

    Ok(out)
}
