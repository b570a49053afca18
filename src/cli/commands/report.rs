use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::month_report;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::date::{month_from_shorthand, next_month};
use crate::utils::hours;
use std::io;

/// Monthly report. Monthly-tracked tasks are marked with `*`: their total is
/// not bounded by the month.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        month,
        csv,
        monthly,
    } = cmd
    {
        let from = month_from_shorthand(month)?;
        let to = next_month(from)?;

        let pool = DbPool::open(&cfg.database)?;
        let rows = month_report(&pool.conn, from, to, *monthly)?;

        if *csv {
            let mut w = csv::Writer::from_writer(io::stdout());
            w.write_record(["Project", "Task", "Start", "End", "Total"])?;

            for row in &rows {
                let marker = if row.monthly { "*" } else { "" };
                w.write_record([
                    row.project_name.clone(),
                    format!("{}{}", row.task_name, marker),
                    row.first_start.format("%a %b %d %Y").to_string(),
                    row.last_end.format("%a %b %d %Y").to_string(),
                    format!("{:.2}", row.total_secs as f64 / 3600.0),
                ])?;
            }

            // spreadsheet-style grand total over the Total column
            w.write_record([
                "Total".to_string(),
                String::new(),
                String::new(),
                String::new(),
                format!("=SUM(E2:E{})", rows.len() + 1),
            ])?;
            w.flush()?;
            return Ok(());
        }

        let mut last_project = String::new();
        for row in &rows {
            if last_project != row.project_name {
                if !last_project.is_empty() {
                    println!();
                }
                println!("{}", messages::project(&row.project_name));
                last_project = row.project_name.clone();
            }

            let marker = if row.monthly { "*" } else { "" };
            println!(
                "  {} - {} {:>7} {}{}",
                messages::time(row.first_start.format("%a %b %d")),
                messages::time(row.last_end.format("%a %b %d")),
                hours(row.total_secs),
                messages::task(&row.task_name),
                marker,
            );
        }
        println!();
    }

    Ok(())
}
