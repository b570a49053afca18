//! Opening a new frame. The caller decides what to do about an already
//! running frame (no-op for the same task, confirm-then-close otherwise);
//! this module enforces that nothing is open when the insert happens.

use crate::core::tasks::get_or_create_task;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::{Project, Task};
use chrono::{DateTime, Duration, Local};
use rusqlite::Connection;

#[derive(Debug)]
pub struct Started {
    pub task: Task,
    pub created_task: bool,
    pub start_time: DateTime<Local>,
}

/// Insert a new open frame for `task_name` under `project`, started at
/// `now + offset`. The task is created implicitly when absent.
pub fn start(
    conn: &Connection,
    project: &Project,
    task_name: &str,
    offset: Duration,
) -> AppResult<Started> {
    if !queries::open_frames(conn)?.is_empty() {
        return Err(AppError::InvariantViolation(
            "cannot start: a frame is still open".to_string(),
        ));
    }

    let resolved = get_or_create_task(conn, project, task_name)?;
    let start_time = Local::now() + offset;
    queries::insert_frame(conn, resolved.task.id, start_time, None)?;

    Ok(Started {
        task: resolved.task,
        created_task: resolved.created,
        start_time,
    })
}

/// Close the open frame at now, so a different task can be started.
/// Used by the interactive stop-and-switch flow after the user accepts.
pub fn close_running(conn: &Connection) -> AppResult<usize> {
    queries::close_open_frame(conn, Local::now())
}
