use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{start, state};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::{dialog, messages};
use crate::utils::duration::parse_optional_duration;
use crate::utils::{format, hours};

/// Start tracking time for a task. A frame already open for the same task is
/// reported and left alone; for a different task the user is asked to stop
/// it first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start {
        project,
        task,
        ago,
        r#in,
    } = cmd
    {
        let offset = parse_optional_duration(r#in.as_ref())? - parse_optional_duration(ago.as_ref())?;

        let pool = DbPool::open(&cfg.database)?;
        let proj = queries::require_project(&pool.conn, project)?;

        let current = state::get_state(&pool.conn)?;
        if current.running {
            let running_task = current.task.as_ref().map(|t| t.name.as_str()).unwrap_or("");
            let running_project = current
                .project
                .as_ref()
                .map(|p| p.name.as_str())
                .unwrap_or("");
            let total = current
                .task
                .as_ref()
                .map(|t| state::task_total_secs(&pool.conn, t.id))
                .transpose()?
                .unwrap_or(0);

            println!(
                "Already running: {} {} ({}, {} total)",
                messages::project(running_project),
                messages::task(running_task),
                hours(current.elapsed_secs),
                hours(total),
            );
            if let Some(started) = current.start_time {
                println!(
                    "Started at {} ({} ago)",
                    messages::time(started.format("%H:%M")),
                    format::clock(current.elapsed_secs),
                );
            }

            if running_project == proj.name && running_task == *task {
                return Ok(());
            }
            if !dialog::confirm("Stop running task?", true)? {
                return Ok(());
            }
            start::close_running(&pool.conn)?;
        }

        let started = start::start(&pool.conn, &proj, task, offset)?;
        if started.created_task {
            println!("Added task {}", messages::task(task));
        }

        let total = state::task_total_secs(&pool.conn, started.task.id)?;
        println!(
            "Running: {} {} ({} total)",
            messages::project(&proj.name),
            messages::task(task),
            hours(total),
        );
        println!(
            "Started at {}",
            messages::time(started.start_time.format("%H:%M"))
        );
    }

    Ok(())
}
