use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stop;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::{format, hours};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Cancel = cmd {
        let pool = DbPool::open(&cfg.database)?;
        let Some(state) = stop::cancel(&pool.conn)? else {
            println!("Not running");
            return Ok(());
        };

        println!(
            "Cancelled: {} {} ({})",
            messages::project(state.project.as_ref().map(|p| p.name.as_str()).unwrap_or("")),
            messages::task(state.task.as_ref().map(|t| t.name.as_str()).unwrap_or("")),
            hours(state.elapsed_secs),
        );
        if let Some(started) = state.start_time {
            println!(
                "Started at {} ({} ago)",
                messages::time(started.format("%H:%M")),
                format::clock(state.elapsed_secs),
            );
        }
    }

    Ok(())
}
