//! Task lifecycle: get-or-create, rename, remove, merge, monthly flag.

use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::{Project, Task};
use rusqlite::Connection;

/// Result of resolving a task name under a project. `created` is true
/// exactly once per new name, so callers can report the implicit creation.
pub struct ResolvedTask {
    pub task: Task,
    pub created: bool,
}

/// Get-or-create with a reported side effect, never silent creation.
pub fn get_or_create_task(
    conn: &Connection,
    project: &Project,
    name: &str,
) -> AppResult<ResolvedTask> {
    if let Some(task) = queries::get_task(conn, project.id, name)? {
        return Ok(ResolvedTask {
            task,
            created: false,
        });
    }
    let task = queries::insert_task(conn, project.id, name)?;
    Ok(ResolvedTask {
        task,
        created: true,
    })
}

/// Lookup that treats a missing task as an error.
pub fn require_task(conn: &Connection, project: &Project, name: &str) -> AppResult<Task> {
    queries::get_task(conn, project.id, name)?.ok_or_else(|| AppError::TaskNotFound {
        task: name.to_string(),
        project: project.name.clone(),
    })
}

pub fn rename_task(
    conn: &Connection,
    project: &Project,
    old_name: &str,
    new_name: &str,
) -> AppResult<()> {
    if queries::get_task(conn, project.id, new_name)?.is_some() {
        return Err(AppError::TaskExists {
            task: new_name.to_string(),
            project: project.name.clone(),
        });
    }
    let task = require_task(conn, project, old_name)?;
    queries::rename_task(conn, task.id, new_name)
}

/// Frame count shown in the confirmation preview before a destructive
/// remove or merge.
pub fn frame_count(conn: &Connection, task: &Task) -> AppResult<i64> {
    queries::count_frames(conn, task.id)
}

/// Delete a task; its frames cascade.
pub fn remove_task(conn: &Connection, task: &Task) -> AppResult<()> {
    queries::delete_task(conn, task.id)
}

/// Reassign every frame of `from` onto `to`, then delete `from`.
/// Returns the number of frames moved.
pub fn merge_tasks(conn: &Connection, from: &Task, to: &Task) -> AppResult<usize> {
    let moved = queries::reassign_frames(conn, from.id, to.id)?;
    queries::delete_task(conn, from.id)?;
    Ok(moved)
}

pub fn set_monthly(conn: &Connection, task: &Task, monthly: bool) -> AppResult<()> {
    queries::set_task_monthly(conn, task.id, monthly)
}
