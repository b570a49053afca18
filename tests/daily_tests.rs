mod common;
use common::{local, open_db, seed_frame, seed_project, seed_task, setup_test_db};

use chrono::NaiveDate;
use trackr::core::daily::daily_report;
use trackr::core::report::NameFilter;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn test_seven_day_window_yields_seven_rows() {
    let db_path = setup_test_db("daily_complete");
    let conn = open_db(&db_path);
    let proj = seed_project(&conn, "acme");
    let task = seed_task(&conn, &proj, "design");

    // activity on two of the seven days only
    seed_frame(&conn, &task, local(2025, 3, 10, 9, 0), local(2025, 3, 10, 10, 0));
    seed_frame(&conn, &task, local(2025, 3, 13, 9, 0), local(2025, 3, 13, 9, 30));

    let rows = daily_report(
        &conn,
        local(2025, 3, 10, 0, 0),
        local(2025, 3, 17, 0, 0),
        &NameFilter::default(),
    )
    .expect("report");

    assert_eq!(rows.len(), 7);
    let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
    assert_eq!(
        dates,
        (10..17).map(|d| day(2025, 3, d)).collect::<Vec<_>>()
    );

    assert_eq!(rows[0].total_secs, 3600);
    assert_eq!(rows[1].total_secs, 0);
    assert!(rows[1].projects.is_empty());
    assert_eq!(rows[3].total_secs, 1800);
}

#[test]
fn test_frame_belongs_to_the_day_it_ends() {
    let db_path = setup_test_db("daily_end_day");
    let conn = open_db(&db_path);
    let proj = seed_project(&conn, "acme");
    let task = seed_task(&conn, &proj, "nightshift");

    // crosses midnight: the whole 2h land on March 11
    seed_frame(&conn, &task, local(2025, 3, 10, 23, 0), local(2025, 3, 11, 1, 0));

    let rows = daily_report(
        &conn,
        local(2025, 3, 10, 0, 0),
        local(2025, 3, 12, 0, 0),
        &NameFilter::default(),
    )
    .expect("report");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].total_secs, 0);
    assert_eq!(rows[1].total_secs, 7200);
}

#[test]
fn test_day_totals_sum_projects() {
    let db_path = setup_test_db("daily_sums");
    let conn = open_db(&db_path);
    let acme = seed_project(&conn, "acme");
    let other = seed_project(&conn, "other");
    let design = seed_task(&conn, &acme, "design");
    let misc = seed_task(&conn, &other, "misc");

    seed_frame(&conn, &design, local(2025, 3, 10, 9, 0), local(2025, 3, 10, 10, 0));
    seed_frame(&conn, &misc, local(2025, 3, 10, 14, 0), local(2025, 3, 10, 14, 45));

    let rows = daily_report(
        &conn,
        local(2025, 3, 10, 0, 0),
        local(2025, 3, 11, 0, 0),
        &NameFilter::default(),
    )
    .expect("report");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].projects.len(), 2);
    let project_sum: i64 = rows[0].projects.iter().map(|p| p.total_secs).sum();
    assert_eq!(rows[0].total_secs, project_sum);
    assert_eq!(rows[0].total_secs, 3600 + 2700);
}
