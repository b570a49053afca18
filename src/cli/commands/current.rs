use crate::cli::commands::shift::print_shift;
use crate::cli::parser::{Commands, CurrentCommands};
use crate::config::Config;
use crate::core::stop::shift_start;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::duration::parse_duration;

/// `current add D` grows the running duration (start moves back),
/// `current sub D` shrinks it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Current { command } = cmd {
        let delta = match command {
            CurrentCommands::Add { duration } => parse_duration(duration)?,
            CurrentCommands::Sub { duration } => -parse_duration(duration)?,
        };

        let pool = DbPool::open(&cfg.database)?;
        let Some(shifted) = shift_start(&pool.conn, delta)? else {
            println!("Not running");
            return Ok(());
        };

        print_shift(&pool.conn, &shifted)?;
    }

    Ok(())
}
