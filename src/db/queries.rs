use crate::errors::{AppError, AppResult};
use crate::models::{Frame, Project, Task};
use chrono::{DateTime, Local};
use rusqlite::{Connection, OptionalExtension, Row, params};

/// Timestamps are persisted as RFC3339 text so chronological and
/// lexicographic ordering coincide.
pub fn ts(t: DateTime<Local>) -> String {
    t.to_rfc3339()
}

pub fn parse_ts(s: &str) -> AppResult<DateTime<Local>> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Local))
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}

fn ts_conversion_error(s: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        Box::new(AppError::InvalidDate(s)),
    )
}

pub fn map_frame(row: &Row) -> rusqlite::Result<Frame> {
    let start_str: String = row.get("start_time")?;
    let end_str: Option<String> = row.get("end_time")?;

    let start = parse_ts(&start_str).map_err(|_| ts_conversion_error(start_str))?;
    let end = match end_str {
        Some(s) => Some(parse_ts(&s).map_err(|_| ts_conversion_error(s))?),
        None => None,
    };

    Ok(Frame {
        id: row.get("id")?,
        task_id: row.get("task_id")?,
        start,
        end,
    })
}

// ---------------------------
// Projects
// ---------------------------

pub fn list_projects(conn: &Connection) -> AppResult<Vec<Project>> {
    let mut stmt = conn.prepare("SELECT id, name FROM project ORDER BY name ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(Project {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_project_by_name(conn: &Connection, name: &str) -> AppResult<Option<Project>> {
    let p = conn
        .query_row("SELECT id FROM project WHERE name = ?1", [name], |row| {
            row.get::<_, i64>(0)
        })
        .optional()?;

    Ok(p.map(|id| Project {
        id,
        name: name.to_string(),
    }))
}

pub fn get_project_by_id(conn: &Connection, id: i64) -> AppResult<Option<Project>> {
    let name = conn
        .query_row("SELECT name FROM project WHERE id = ?1", [id], |row| {
            row.get::<_, String>(0)
        })
        .optional()?;

    Ok(name.map(|name| Project { id, name }))
}

/// Lookup that treats a missing project as an error, since most operations
/// require the project to already exist.
pub fn require_project(conn: &Connection, name: &str) -> AppResult<Project> {
    get_project_by_name(conn, name)?.ok_or_else(|| AppError::ProjectNotFound(name.to_string()))
}

pub fn insert_project(conn: &Connection, name: &str) -> AppResult<Project> {
    conn.execute("INSERT INTO project (name) VALUES (?1)", [name])?;
    Ok(Project {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
    })
}

pub fn rename_project(conn: &Connection, id: i64, new_name: &str) -> AppResult<()> {
    conn.execute(
        "UPDATE project SET name = ?1 WHERE id = ?2",
        params![new_name, id],
    )?;
    Ok(())
}

pub fn delete_project(conn: &Connection, id: i64) -> AppResult<()> {
    // tasks and frames go with it (ON DELETE CASCADE)
    conn.execute("DELETE FROM project WHERE id = ?1", [id])?;
    Ok(())
}

// ---------------------------
// Tasks
// ---------------------------

pub fn map_task(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get("id")?,
        project_id: row.get("project_id")?,
        name: row.get("name")?,
        monthly: row.get("monthly")?,
    })
}

pub fn get_task(conn: &Connection, project_id: i64, name: &str) -> AppResult<Option<Task>> {
    let mut stmt = conn.prepare(
        "SELECT id, project_id, name, monthly FROM task
         WHERE project_id = ?1 AND name = ?2",
    )?;
    Ok(stmt
        .query_row(params![project_id, name], map_task)
        .optional()?)
}

pub fn get_task_by_id(conn: &Connection, id: i64) -> AppResult<Option<Task>> {
    let mut stmt = conn.prepare("SELECT id, project_id, name, monthly FROM task WHERE id = ?1")?;
    Ok(stmt.query_row([id], map_task).optional()?)
}

pub fn insert_task(conn: &Connection, project_id: i64, name: &str) -> AppResult<Task> {
    conn.execute(
        "INSERT INTO task (project_id, name) VALUES (?1, ?2)",
        params![project_id, name],
    )?;
    Ok(Task {
        id: conn.last_insert_rowid(),
        project_id,
        name: name.to_string(),
        monthly: false,
    })
}

pub fn rename_task(conn: &Connection, id: i64, new_name: &str) -> AppResult<()> {
    conn.execute(
        "UPDATE task SET name = ?1 WHERE id = ?2",
        params![new_name, id],
    )?;
    Ok(())
}

pub fn delete_task(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM task WHERE id = ?1", [id])?;
    Ok(())
}

pub fn set_task_monthly(conn: &Connection, id: i64, monthly: bool) -> AppResult<()> {
    conn.execute(
        "UPDATE task SET monthly = ?1 WHERE id = ?2",
        params![monthly, id],
    )?;
    Ok(())
}

pub fn count_frames(conn: &Connection, task_id: i64) -> AppResult<i64> {
    let n = conn.query_row(
        "SELECT COUNT(*) FROM frame WHERE task_id = ?1",
        [task_id],
        |row| row.get(0),
    )?;
    Ok(n)
}

/// Move every frame of `from_task` onto `to_task`. Returns the number of
/// frames reassigned.
pub fn reassign_frames(conn: &Connection, from_task: i64, to_task: i64) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE frame SET task_id = ?1 WHERE task_id = ?2",
        params![to_task, from_task],
    )?;
    Ok(n)
}

/// Drop tasks that no longer own any frame (used after cancel).
pub fn delete_empty_tasks(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM task
         WHERE NOT EXISTS (SELECT 1 FROM frame WHERE frame.task_id = task.id)",
        [],
    )?;
    Ok(n)
}

// ---------------------------
// Frames
// ---------------------------

/// All open frames. The invariant allows at most one; callers treat more as
/// a fatal consistency error.
pub fn open_frames(conn: &Connection) -> AppResult<Vec<Frame>> {
    let mut stmt = conn.prepare(
        "SELECT id, task_id, start_time, end_time FROM frame
         WHERE end_time IS NULL
         ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], map_frame)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_frame(
    conn: &Connection,
    task_id: i64,
    start: DateTime<Local>,
    end: Option<DateTime<Local>>,
) -> AppResult<Frame> {
    conn.execute(
        "INSERT INTO frame (task_id, start_time, end_time) VALUES (?1, ?2, ?3)",
        params![task_id, ts(start), end.map(ts)],
    )?;
    Ok(Frame {
        id: conn.last_insert_rowid(),
        task_id,
        start,
        end,
    })
}

/// Set the end timestamp of the open frame. Returns rows affected (0 when
/// nothing is running).
pub fn close_open_frame(conn: &Connection, end: DateTime<Local>) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE frame SET end_time = ?1 WHERE end_time IS NULL",
        [ts(end)],
    )?;
    Ok(n)
}

/// Delete the open frame without ever writing an end timestamp.
pub fn delete_open_frame(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM frame WHERE end_time IS NULL", [])?;
    Ok(n)
}

pub fn set_open_frame_start(conn: &Connection, start: DateTime<Local>) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE frame SET start_time = ?1 WHERE end_time IS NULL",
        [ts(start)],
    )?;
    Ok(n)
}

/// Frames of a task as a stable 0-based list (insertion order).
pub fn frames_for_task(conn: &Connection, task_id: i64) -> AppResult<Vec<Frame>> {
    let mut stmt = conn.prepare(
        "SELECT id, task_id, start_time, end_time FROM frame
         WHERE task_id = ?1
         ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([task_id], map_frame)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn update_frame_times(
    conn: &Connection,
    id: i64,
    start: DateTime<Local>,
    end: Option<DateTime<Local>>,
) -> AppResult<()> {
    conn.execute(
        "UPDATE frame SET start_time = ?1, end_time = ?2 WHERE id = ?3",
        params![ts(start), end.map(ts), id],
    )?;
    Ok(())
}

pub fn delete_frame(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM frame WHERE id = ?1", [id])?;
    Ok(())
}

pub fn move_frame(conn: &Connection, id: i64, new_task_id: i64) -> AppResult<()> {
    conn.execute(
        "UPDATE frame SET task_id = ?1 WHERE id = ?2",
        params![new_task_id, id],
    )?;
    Ok(())
}

// ---------------------------
// Aggregation source rows
// ---------------------------

/// A frame joined to its owning task and project, the unit the aggregation
/// engines work over. Windowing, bucketing and monthly handling all happen
/// in memory; the store only supplies rows.
#[derive(Debug, Clone)]
pub struct JoinedFrame {
    pub frame: Frame,
    pub task: Task,
    pub project: Project,
}

pub fn load_joined_frames(conn: &Connection) -> AppResult<Vec<JoinedFrame>> {
    let mut stmt = conn.prepare(
        "SELECT
            f.id, f.task_id, f.start_time, f.end_time,
            t.id AS t_id, t.project_id, t.name AS t_name, t.monthly,
            p.id AS p_id, p.name AS p_name
         FROM frame f
         JOIN task t ON t.id = f.task_id
         JOIN project p ON p.id = t.project_id
         ORDER BY f.id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        let frame = map_frame(row)?;
        Ok(JoinedFrame {
            frame,
            task: Task {
                id: row.get("t_id")?,
                project_id: row.get("project_id")?,
                name: row.get("t_name")?,
                monthly: row.get("monthly")?,
            },
            project: Project {
                id: row.get("p_id")?,
                name: row.get("p_name")?,
            },
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
