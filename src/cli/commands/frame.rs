use crate::cli::commands::add::run_add;
use crate::cli::parser::{Commands, FrameCommands};
use crate::config::Config;
use crate::core::frames;
use crate::core::tasks::require_task;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::{dialog, messages};
use crate::utils::duration::{parse_duration, parse_optional_duration};
use crate::utils::hours;
use chrono::Local;

/// Manage recorded frames: add, edit, remove, move. Destructive subcommands
/// show the frame they are about to touch and ask first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Frame { command } = cmd else {
        return Ok(());
    };

    let pool = DbPool::open(&cfg.database)?;
    let conn = &pool.conn;

    match command {
        FrameCommands::Add {
            project,
            task,
            duration,
            offset,
        } => {
            let dur = parse_duration(duration)?;
            let off = parse_optional_duration(offset.as_ref())?;
            run_add(conn, project, task, dur, off)?;
        }

        FrameCommands::Edit {
            project,
            task,
            frame,
            start,
            end,
        } => {
            let start_delta = parse_optional_duration(start.as_ref())?;
            let end_delta = parse_optional_duration(end.as_ref())?;

            let proj = queries::require_project(conn, project)?;
            let t = require_task(conn, &proj, task)?;
            let edited = frames::edit_frame(conn, &t, *frame, start_delta, end_delta)?;

            let end_time = edited.end_or(Local::now());
            println!("{}", messages::project(&proj.name));
            println!("  {}", messages::task(task));
            println!(
                "  {} {} - {} {}",
                messages::grey(format!("[{}]", frame)),
                messages::time(edited.start.format("%a %b %d %H:%M")),
                messages::time(end_time.format("%H:%M")),
                hours(edited.duration_secs(end_time)),
            );
        }

        FrameCommands::Remove {
            project,
            task,
            frame,
        } => {
            let proj = queries::require_project(conn, project)?;
            let t = require_task(conn, &proj, task)?;
            let target = frames::frame_at(conn, &t, *frame)?;

            let end_time = target.end_or(Local::now());
            let prompt = format!(
                "Delete frame {} - {} on {} {}?",
                messages::time(target.start.format("%a %b %d %H:%M")),
                messages::time(end_time.format("%H:%M")),
                messages::project(&proj.name),
                messages::task(task),
            );
            if !dialog::confirm(&prompt, false)? {
                return Ok(());
            }

            frames::remove_frame(conn, &target)?;
            println!("Deleted");
        }

        FrameCommands::Move {
            project,
            task,
            frame,
            new_project,
            new_task,
        } => {
            let proj = queries::require_project(conn, project)?;
            let t = require_task(conn, &proj, task)?;
            let target = frames::frame_at(conn, &t, *frame)?;
            let dest_proj = queries::require_project(conn, new_project)?;

            let end_time = target.end_or(Local::now());
            let prompt = format!(
                "Move frame {} - {} from {} {} to {} {}?",
                messages::time(target.start.format("%a %b %d %H:%M")),
                messages::time(end_time.format("%a %b %d")),
                messages::project(&proj.name),
                messages::task(task),
                messages::project(new_project),
                messages::task(new_task),
            );
            if !dialog::confirm(&prompt, false)? {
                return Ok(());
            }

            let moved = frames::move_frame(conn, &target, &dest_proj, new_task)?;
            if moved.created_task {
                println!("Added task {}", messages::task(new_task));
            }
            println!("Moved");
        }
    }

    Ok(())
}
