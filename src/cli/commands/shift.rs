use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stop::{Shifted, shift_start};
use crate::core::state;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::duration::parse_duration;
use crate::utils::{format, hours};
use rusqlite::Connection;

pub(crate) fn print_shift(conn: &Connection, shifted: &Shifted) -> AppResult<()> {
    let task = shifted.current.task.as_ref();
    let total = task
        .map(|t| state::task_total_secs(conn, t.id))
        .transpose()?
        .unwrap_or(0);

    println!(
        "Running: {} {} ({} -> {}, {} total)",
        messages::project(
            shifted
                .current
                .project
                .as_ref()
                .map(|p| p.name.as_str())
                .unwrap_or("")
        ),
        messages::task(task.map(|t| t.name.as_str()).unwrap_or("")),
        hours(shifted.previous.elapsed_secs),
        hours(shifted.current.elapsed_secs),
        hours(total),
    );

    if let (Some(prev), Some(cur)) = (shifted.previous.start_time, shifted.current.start_time) {
        println!(
            "Started at {} -> {} ({} -> {} ago)",
            messages::time(prev.format("%H:%M")),
            messages::time(cur.format("%H:%M")),
            format::clock(shifted.previous.elapsed_secs),
            format::clock(shifted.current.elapsed_secs),
        );
    }

    Ok(())
}

/// Shift the start time of the running task: a positive duration stretches
/// the elapsed time backward.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shift { duration } = cmd {
        let delta = parse_duration(duration)?;

        let pool = DbPool::open(&cfg.database)?;
        let Some(shifted) = shift_start(&pool.conn, delta)? else {
            println!("Not running");
            return Ok(());
        };

        print_shift(&pool.conn, &shifted)?;
    }

    Ok(())
}
