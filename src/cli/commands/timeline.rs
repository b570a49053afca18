use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::NameFilter;
use crate::core::timeline::{Connector, timeline};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::date::time_from_shorthand;
use chrono::{Datelike, Local};

/// Render the day × task presence chart.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Timeline {
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
        let chart = timeline(&pool.conn, from, to, &filter)?;

        let project_width = chart
            .rows
            .iter()
            .map(|r| r.project_name.len())
            .max()
            .unwrap_or(0);
        let task_width = chart
            .rows
            .iter()
            .map(|r| r.task_name.len())
            .max()
            .unwrap_or(0);

        // header: day-of-month per column
        print!("{}", " ".repeat(project_width + task_width + 2));
        for day in &chart.days {
            print!("{}", messages::grey(format!("{:>3}", day.day())));
        }
        println!();

        for row in &chart.rows {
            print!(
                "{} {} {}",
                messages::project(format!("{:<project_width$}", row.project_name)),
                messages::task(format!("{:<task_width$}", row.task_name)),
                messages::grey("┃"),
            );
            for cell in &row.cells {
                let glyph = match cell {
                    Connector::Inactive => "   ",
                    Connector::Isolated => " ● ",
                    Connector::Left => "━● ",
                    Connector::Right => " ●━",
                    Connector::Both => "━●━",
                };
                if *cell == Connector::Inactive {
                    print!("{}", glyph);
                } else {
                    print!("{}", messages::chart(glyph));
                }
            }
            println!("{}", messages::grey("┃"));
        }
    }

    Ok(())
}
