use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::state::{self, get_state};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::State;
use crate::ui::messages;
use crate::utils::{format, hours};
use rusqlite::Connection;
use std::thread;
use std::time::Duration;

/// Print the running state. Returns the number of lines written so the
/// watch loop can rewind the cursor.
fn print_status(conn: &Connection, state: &State) -> AppResult<usize> {
    if !state.running {
        println!("Not running\x1b[J");
        return Ok(1);
    }

    let total = state
        .task
        .as_ref()
        .map(|t| state::task_total_secs(conn, t.id))
        .transpose()?
        .unwrap_or(0);

    println!(
        "Running: {} {} ({}, {} total)\x1b[J",
        messages::project(state.project.as_ref().map(|p| p.name.as_str()).unwrap_or("")),
        messages::task(state.task.as_ref().map(|t| t.name.as_str()).unwrap_or("")),
        hours(state.elapsed_secs),
        hours(total),
    );
    if let Some(started) = state.start_time {
        println!(
            "Started at {} ({} ago)\x1b[J",
            messages::time(started.format("%H:%M")),
            format::clock(state.elapsed_secs),
        );
        Ok(2)
    } else {
        Ok(1)
    }
}

/// Display the running task. `--watch` re-reads the state once per second,
/// rewriting in place; it is a pure polling read and never mutates the
/// store. The last full print stays on screen when the loop is interrupted.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { watch } = cmd {
        let pool = DbPool::open(&cfg.database)?;

        if *watch {
            loop {
                let state = get_state(&pool.conn)?;
                let lines = print_status(&pool.conn, &state)?;
                thread::sleep(Duration::from_secs(1));
                print!("\x1b[{}A", lines);
            }
        }

        let state = get_state(&pool.conn)?;
        print_status(&pool.conn, &state)?;
    }

    Ok(())
}
