use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{NameFilter, clipped_secs, log_report};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::date::time_from_shorthand;
use crate::utils::hours;
use chrono::{DateTime, Local, Utc};

fn window(
    from: Option<&String>,
    to: Option<&String>,
) -> AppResult<(DateTime<Local>, DateTime<Local>)> {
    let from = match from {
        Some(v) => time_from_shorthand(v)?,
        None => DateTime::<Utc>::UNIX_EPOCH.with_timezone(&Local),
    };
    let to = match to {
        Some(v) => time_from_shorthand(v)?,
        None => Local::now(),
    };
    Ok((from, to))
}

/// Display time spent per project and task over a window.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log {
        project,
        task,
        from,
        to,
        frames,
    } = cmd
    {
        let (from, to) = window(from.as_ref(), to.as_ref())?;
        let filter = NameFilter {
            project: project.clone(),
            task: task.clone(),
        };

        let pool = DbPool::open(&cfg.database)?;
        let report = log_report(&pool.conn, from, to, &filter)?;

        let mut first = true;
        for group in &report.projects {
            if !first {
                println!();
            }
            first = false;

            println!(
                "{} {}",
                messages::project(&group.project_name),
                hours(group.total_secs)
            );

            for task_row in &group.tasks {
                println!(
                    "  {} - {} {:>7} {}",
                    messages::time(task_row.first_start.format("%a %b %d")),
                    messages::time(task_row.last_end.format("%a %b %d %Y")),
                    hours(task_row.total_secs),
                    messages::task(&task_row.task_name),
                );

                if *frames {
                    for (index, frame) in &task_row.frames {
                        let end = frame.end_or(to);
                        println!(
                            "    {} {} - {} {:>7}",
                            messages::grey(format!("[{}]", index)),
                            messages::time(frame.start.format("%a %b %d %H:%M")),
                            messages::time(end.format("%H:%M")),
                            hours(clipped_secs(frame, from, to)),
                        );
                    }
                    println!();
                }
            }
        }

        println!();
        println!("Total: {}", hours(report.total_secs));
    }

    Ok(())
}
