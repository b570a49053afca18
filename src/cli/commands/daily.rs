use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::daily::daily_report;
use crate::core::report::NameFilter;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::date::time_from_shorthand;
use crate::utils::hours;
use chrono::Local;

/// Day-by-day report: every calendar day in the window appears, including
/// days with no recorded time.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Daily {
        project,
        task,
        from,
        to,
    } = cmd
    {
        let from = time_from_shorthand(from)?;
        let to = match to {
            Some(v) => time_from_shorthand(v)?,
            None => Local::now(),
        };
        let filter = NameFilter {
            project: project.clone(),
            task: task.clone(),
        };

        let pool = DbPool::open(&cfg.database)?;
        let days = daily_report(&pool.conn, from, to, &filter)?;

        let mut total_secs = 0;
        let mut first = true;
        for day in &days {
            if !first {
                println!();
            }
            first = false;

            println!(
                "{} {:>7}",
                messages::time(day.date.format("%a %b %d")),
                hours(day.total_secs),
            );

            for proj in &day.projects {
                println!(
                    "  {:>7} {}",
                    hours(proj.total_secs),
                    messages::project(&proj.project_name)
                );
                for task_row in &proj.tasks {
                    println!(
                        "  {:>7}   {}",
                        hours(task_row.total_secs),
                        messages::task(&task_row.task_name)
                    );
                }
            }

            total_secs += day.total_secs;
        }

        println!();
        println!("Total: {}", hours(total_secs));
    }

    Ok(())
}
