use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{add, state};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::duration::{parse_duration, parse_optional_duration};
use crate::utils::hours;
use chrono::Duration;
use rusqlite::Connection;

pub(crate) fn run_add(
    conn: &Connection,
    project: &str,
    task: &str,
    duration: Duration,
    offset: Duration,
) -> AppResult<()> {
    let proj = queries::require_project(conn, project)?;
    let added = add::add_frame(conn, &proj, task, duration, offset)?;

    if added.created_task {
        println!("Added task {}", messages::task(task));
    }

    let total = state::task_total_secs(conn, added.task.id)?;
    println!(
        "Added: {} {} ({}, {} total)",
        messages::project(&proj.name),
        messages::task(task),
        hours(duration.num_seconds()),
        hours(total),
    );

    let end = added.frame.end_or(added.frame.start);
    println!(
        "  {} {} - {} {}",
        messages::grey(format!("[{}]", added.index)),
        messages::time(added.frame.start.format("%a %b %d %H:%M")),
        messages::time(end.format("%H:%M")),
        hours(added.frame.duration_secs(end)),
    );

    Ok(())
}

/// Backfill a closed frame: `[now - duration + offset, now + offset]`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        project,
        task,
        duration,
        offset,
    } = cmd
    {
        let dur = parse_duration(duration)?;
        let off = parse_optional_duration(offset.as_ref())?;

        let pool = DbPool::open(&cfg.database)?;
        run_add(&pool.conn, project, task, dur, off)?;
    }

    Ok(())
}
