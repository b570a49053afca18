//! Running-state tracker. "What is running" is always re-derived from the
//! store, never cached across operations.

use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::State;
use chrono::Local;
use rusqlite::Connection;

/// Resolve the current running state from the single open frame, if any.
/// More than one open frame means the single-open-frame invariant has been
/// broken by a bug elsewhere and is reported as a fatal consistency error.
pub fn get_state(conn: &Connection) -> AppResult<State> {
    let open = queries::open_frames(conn)?;

    let frame = match open.as_slice() {
        [] => return Ok(State::idle()),
        [frame] => frame,
        more => {
            return Err(AppError::InvariantViolation(format!(
                "{} frames are open at the same time",
                more.len()
            )));
        }
    };

    let task = queries::get_task_by_id(conn, frame.task_id)?.ok_or_else(|| {
        AppError::InvariantViolation(format!(
            "open frame {} references missing task {}",
            frame.id, frame.task_id
        ))
    })?;
    let project = queries::get_project_by_id(conn, task.project_id)?.ok_or_else(|| {
        AppError::InvariantViolation(format!(
            "task {} references missing project {}",
            task.id, task.project_id
        ))
    })?;

    let now = Local::now();
    Ok(State {
        running: true,
        elapsed_secs: (now - frame.start).num_seconds(),
        start_time: Some(frame.start),
        task: Some(task),
        project: Some(project),
    })
}

/// Lifetime total of a task in whole seconds, an open frame measured up to
/// now.
pub fn task_total_secs(conn: &Connection, task_id: i64) -> AppResult<i64> {
    let now = Local::now();
    let frames = queries::frames_for_task(conn, task_id)?;
    Ok(frames.iter().map(|f| f.duration_secs(now)).sum())
}
