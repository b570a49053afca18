//! Frame-level edits: index lookup, time shifts, delete, move.
//! Frames of a task are exposed as a stable 0-based list in insertion order.

use crate::core::tasks::get_or_create_task;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::{Frame, Project, Task};
use chrono::Duration;
use rusqlite::Connection;

/// Frame at `index` in the task's 0-based list.
pub fn frame_at(conn: &Connection, task: &Task, index: usize) -> AppResult<Frame> {
    let frames = queries::frames_for_task(conn, task.id)?;
    frames
        .into_iter()
        .nth(index)
        .ok_or_else(|| AppError::FrameNotFound {
            index,
            task: task.name.clone(),
        })
}

/// Shift a frame's start and/or end by the given deltas. An open frame keeps
/// its null end: editing never changes the open/closed status.
pub fn edit_frame(
    conn: &Connection,
    task: &Task,
    index: usize,
    start_delta: Duration,
    end_delta: Duration,
) -> AppResult<Frame> {
    let mut frame = frame_at(conn, task, index)?;

    frame.start = frame.start + start_delta;
    if let Some(end) = frame.end {
        frame.end = Some(end + end_delta);
    }

    queries::update_frame_times(conn, frame.id, frame.start, frame.end)?;
    Ok(frame)
}

pub fn remove_frame(conn: &Connection, frame: &Frame) -> AppResult<()> {
    queries::delete_frame(conn, frame.id)
}

pub struct MovedFrame {
    pub task: Task,
    pub created_task: bool,
}

/// Reassign a frame to a task under `new_project`, creating the destination
/// task when absent.
pub fn move_frame(
    conn: &Connection,
    frame: &Frame,
    new_project: &Project,
    new_task_name: &str,
) -> AppResult<MovedFrame> {
    let resolved = get_or_create_task(conn, new_project, new_task_name)?;
    queries::move_frame(conn, frame.id, resolved.task.id)?;
    Ok(MovedFrame {
        task: resolved.task,
        created_task: resolved.created,
    })
}
