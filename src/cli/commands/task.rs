use crate::cli::parser::{Commands, TaskCommands};
use crate::config::Config;
use crate::core::tasks;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::{dialog, messages};

fn plural(n: i64) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Manage tasks: rename, remove, merge, monthly flag. Remove and merge show
/// the affected frame count and ask first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Task { command } = cmd else {
        return Ok(());
    };

    let pool = DbPool::open(&cfg.database)?;
    let conn = &pool.conn;

    match command {
        TaskCommands::Rename {
            project,
            old_name,
            new_name,
        } => {
            let proj = queries::require_project(conn, project)?;
            tasks::rename_task(conn, &proj, old_name, new_name)?;
            println!(
                "Renamed task {} to {} on project {}",
                messages::task(old_name),
                messages::task(new_name),
                messages::project(project),
            );
        }

        TaskCommands::Remove { project, task } => {
            let proj = queries::require_project(conn, project)?;
            let t = tasks::require_task(conn, &proj, task)?;
            let frames = tasks::frame_count(conn, &t)?;

            let prompt = format!(
                "Delete task {} and {} frame{} on project {}?",
                messages::task(task),
                frames,
                plural(frames),
                messages::project(project),
            );
            if !dialog::confirm(&prompt, false)? {
                return Ok(());
            }

            tasks::remove_task(conn, &t)?;
            println!("Deleted");
        }

        TaskCommands::Merge {
            from_project,
            from_task,
            to_project,
            to_task,
        } => {
            let from_proj = queries::require_project(conn, from_project)?;
            let from = tasks::require_task(conn, &from_proj, from_task)?;
            let to_proj = queries::require_project(conn, to_project)?;
            let to = tasks::require_task(conn, &to_proj, to_task)?;
            let frames = tasks::frame_count(conn, &from)?;

            let prompt = format!(
                "Merge {} frame{} from {} {} into {} {}?",
                frames,
                plural(frames),
                messages::project(from_project),
                messages::task(from_task),
                messages::project(to_project),
                messages::task(to_task),
            );
            if !dialog::confirm(&prompt, false)? {
                return Ok(());
            }

            tasks::merge_tasks(conn, &from, &to)?;
            println!("Merged");
        }

        TaskCommands::Set {
            project,
            task,
            monthly,
            no_monthly,
        } => {
            let proj = queries::require_project(conn, project)?;
            let t = tasks::require_task(conn, &proj, task)?;

            if *monthly {
                tasks::set_monthly(conn, &t, true)?;
                println!("Monthly reporting enabled");
            }
            if *no_monthly {
                tasks::set_monthly(conn, &t, false)?;
                println!("Monthly reporting disabled");
            }
        }
    }

    Ok(())
}
