//! Backfilling closed frames with an explicit duration and optional offset.

use crate::core::tasks::get_or_create_task;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::{Frame, Project, Task};
use chrono::{Duration, Local};
use rusqlite::Connection;

pub struct AddedFrame {
    pub task: Task,
    pub created_task: bool,
    pub frame: Frame,
    /// Position in the task's 0-based frame list.
    pub index: usize,
}

/// Insert the closed frame `[now - duration + offset, now + offset]`.
/// Never creates an open frame, so the running-state invariant is untouched.
pub fn add_frame(
    conn: &Connection,
    project: &Project,
    task_name: &str,
    duration: Duration,
    offset: Duration,
) -> AppResult<AddedFrame> {
    let resolved = get_or_create_task(conn, project, task_name)?;

    let now = Local::now();
    let start = now - duration + offset;
    let end = now + offset;

    let frame = queries::insert_frame(conn, resolved.task.id, start, Some(end))?;
    let index = (queries::count_frames(conn, resolved.task.id)? - 1).max(0) as usize;

    Ok(AddedFrame {
        task: resolved.task,
        created_task: resolved.created,
        frame,
        index,
    })
}
