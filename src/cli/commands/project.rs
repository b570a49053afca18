use crate::cli::parser::{Commands, ProjectCommands};
use crate::config::Config;
use crate::core::projects;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::{dialog, messages};

/// Manage projects; `projects` lists them.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open(&cfg.database)?;
    let conn = &pool.conn;

    match cmd {
        Commands::Project { command } => match command {
            ProjectCommands::Add { name } => {
                projects::add_project(conn, name)?;
                println!("Added project {}", messages::project(name));
            }

            ProjectCommands::Rename { old_name, new_name } => {
                projects::rename_project(conn, old_name, new_name)?;
                println!(
                    "Renamed project {} to {}",
                    messages::project(old_name),
                    messages::project(new_name),
                );
            }

            ProjectCommands::Remove { name } => {
                let proj = queries::require_project(conn, name)?;

                let prompt = format!("Delete project {}?", messages::project(name));
                if !dialog::confirm(&prompt, false)? {
                    return Ok(());
                }

                projects::remove_project(conn, &proj)?;
                println!("Deleted project {}", messages::project(name));
            }
        },

        Commands::Projects => {
            for project in projects::list_projects(conn)? {
                println!("{}", messages::project(&project.name));
            }
        }

        _ => {}
    }

    Ok(())
}
