use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{state, stop};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::duration::parse_optional_duration;
use crate::utils::{format, hours};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stop { ago, r#in } = cmd {
        let offset = parse_optional_duration(r#in.as_ref())? - parse_optional_duration(ago.as_ref())?;

        let pool = DbPool::open(&cfg.database)?;
        let Some(stopped) = stop::stop(&pool.conn, offset)? else {
            println!("No task started");
            return Ok(());
        };

        let task = stopped.state.task.as_ref();
        let project_name = stopped
            .state
            .project
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or("");
        let total = task
            .map(|t| state::task_total_secs(&pool.conn, t.id))
            .transpose()?
            .unwrap_or(0);

        println!(
            "Stopped: {} {} ({}, {} total)",
            messages::project(project_name),
            messages::task(task.map(|t| t.name.as_str()).unwrap_or("")),
            hours(stopped.elapsed_secs),
            hours(total),
        );
        println!(
            "Finished at {} ({})",
            messages::time(stopped.end_time.format("%H:%M")),
            format::clock(stopped.elapsed_secs),
        );
    }

    Ok(())
}
