mod common;
use common::{local, open_db, seed_frame, seed_project, seed_task, setup_test_db};

use trackr::core::report::{NameFilter, log_report, month_report};
use trackr::core::tasks;
use trackr::db::queries;

#[test]
fn test_project_total_is_sum_of_task_totals() {
    let db_path = setup_test_db("report_additivity");
    let conn = open_db(&db_path);
    let proj = seed_project(&conn, "acme");
    let design = seed_task(&conn, &proj, "design");
    let review = seed_task(&conn, &proj, "review");

    // 1h + 30m on design, 45m on review
    seed_frame(&conn, &design, local(2025, 3, 10, 9, 0), local(2025, 3, 10, 10, 0));
    seed_frame(&conn, &design, local(2025, 3, 11, 9, 0), local(2025, 3, 11, 9, 30));
    seed_frame(&conn, &review, local(2025, 3, 11, 14, 0), local(2025, 3, 11, 14, 45));

    let report = log_report(
        &conn,
        local(2025, 3, 1, 0, 0),
        local(2025, 4, 1, 0, 0),
        &NameFilter::default(),
    )
    .expect("report");

    assert_eq!(report.projects.len(), 1);
    let group = &report.projects[0];
    let task_sum: i64 = group.tasks.iter().map(|t| t.total_secs).sum();
    assert_eq!(group.total_secs, task_sum);
    assert_eq!(group.total_secs, 3600 + 1800 + 2700);
    assert_eq!(report.total_secs, group.total_secs);
}

#[test]
fn test_frame_straddling_window_start_is_clipped() {
    let db_path = setup_test_db("report_clip");
    let conn = open_db(&db_path);
    let proj = seed_project(&conn, "acme");
    let task = seed_task(&conn, &proj, "design");

    // 09:00-11:00, window opens at 10:00: only the second hour counts
    seed_frame(&conn, &task, local(2025, 3, 10, 9, 0), local(2025, 3, 10, 11, 0));

    let report = log_report(
        &conn,
        local(2025, 3, 10, 10, 0),
        local(2025, 3, 11, 0, 0),
        &NameFilter::default(),
    )
    .expect("report");

    assert_eq!(report.total_secs, 3600);
}

#[test]
fn test_frame_ending_at_window_end_is_excluded() {
    let db_path = setup_test_db("report_end_excl");
    let conn = open_db(&db_path);
    let proj = seed_project(&conn, "acme");
    let task = seed_task(&conn, &proj, "design");

    // the window is half-open: an end exactly at `to` does not qualify
    seed_frame(&conn, &task, local(2025, 3, 10, 9, 0), local(2025, 3, 11, 0, 0));

    let report = log_report(
        &conn,
        local(2025, 3, 10, 0, 0),
        local(2025, 3, 11, 0, 0),
        &NameFilter::default(),
    )
    .expect("report");

    assert_eq!(report.total_secs, 0);
    assert!(report.projects.is_empty());
}

#[test]
fn test_open_frame_is_not_reported() {
    let db_path = setup_test_db("report_open_frame");
    let conn = open_db(&db_path);
    let proj = seed_project(&conn, "acme");
    let task = seed_task(&conn, &proj, "design");

    queries::insert_frame(&conn, task.id, local(2025, 3, 10, 9, 0), None).expect("insert");

    let report = log_report(
        &conn,
        local(2025, 3, 1, 0, 0),
        local(2025, 4, 1, 0, 0),
        &NameFilter::default(),
    )
    .expect("report");

    assert_eq!(report.total_secs, 0);
}

#[test]
fn test_name_filter_is_case_insensitive_substring() {
    let db_path = setup_test_db("report_filter");
    let conn = open_db(&db_path);
    let acme = seed_project(&conn, "Acme");
    let other = seed_project(&conn, "other");
    let design = seed_task(&conn, &acme, "Design");
    let misc = seed_task(&conn, &other, "misc");

    seed_frame(&conn, &design, local(2025, 3, 10, 9, 0), local(2025, 3, 10, 10, 0));
    seed_frame(&conn, &misc, local(2025, 3, 10, 9, 0), local(2025, 3, 10, 10, 0));

    let filter = NameFilter {
        project: Some("acm".to_string()),
        task: Some("SIGN".to_string()),
    };
    let report = log_report(
        &conn,
        local(2025, 3, 1, 0, 0),
        local(2025, 4, 1, 0, 0),
        &filter,
    )
    .expect("report");

    assert_eq!(report.projects.len(), 1);
    assert_eq!(report.projects[0].project_name, "Acme");
    assert_eq!(report.projects[0].tasks.len(), 1);
    assert_eq!(report.projects[0].tasks[0].task_name, "Design");
}

#[test]
fn test_frame_positions_follow_full_task_list() {
    let db_path = setup_test_db("report_positions");
    let conn = open_db(&db_path);
    let proj = seed_project(&conn, "acme");
    let task = seed_task(&conn, &proj, "design");

    // frame [0] lands in February, frames [1] and [2] in March
    seed_frame(&conn, &task, local(2025, 2, 20, 9, 0), local(2025, 2, 20, 10, 0));
    seed_frame(&conn, &task, local(2025, 3, 10, 9, 0), local(2025, 3, 10, 10, 0));
    seed_frame(&conn, &task, local(2025, 3, 11, 9, 0), local(2025, 3, 11, 10, 0));

    let report = log_report(
        &conn,
        local(2025, 3, 1, 0, 0),
        local(2025, 4, 1, 0, 0),
        &NameFilter::default(),
    )
    .expect("report");

    let frames = &report.projects[0].tasks[0].frames;
    let positions: Vec<usize> = frames.iter().map(|(i, _)| *i).collect();
    assert_eq!(positions, vec![1, 2]);
}

#[test]
fn test_month_report_clips_nonmonthly_tasks() {
    let db_path = setup_test_db("report_month_clip");
    let conn = open_db(&db_path);
    let proj = seed_project(&conn, "acme");
    let task = seed_task(&conn, &proj, "design");

    seed_frame(&conn, &task, local(2025, 2, 20, 9, 0), local(2025, 2, 20, 10, 0));
    seed_frame(&conn, &task, local(2025, 3, 10, 9, 0), local(2025, 3, 10, 11, 0));

    let rows = month_report(
        &conn,
        local(2025, 3, 1, 0, 0),
        local(2025, 4, 1, 0, 0),
        false,
    )
    .expect("report");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].total_secs, 7200);
    assert!(!rows[0].monthly);
}

#[test]
fn test_monthly_task_reports_lifetime_total_in_any_month() {
    let db_path = setup_test_db("report_month_bypass");
    let conn = open_db(&db_path);
    let proj = seed_project(&conn, "acme");
    let task = seed_task(&conn, &proj, "retainer");
    tasks::set_monthly(&conn, &task, true).expect("set monthly");

    seed_frame(&conn, &task, local(2025, 1, 15, 9, 0), local(2025, 1, 15, 10, 0));
    seed_frame(&conn, &task, local(2025, 2, 15, 9, 0), local(2025, 2, 15, 11, 0));

    let task = queries::get_task(&conn, proj.id, "retainer")
        .expect("lookup")
        .expect("task exists");
    assert!(task.monthly);

    let march = month_report(
        &conn,
        local(2025, 3, 1, 0, 0),
        local(2025, 4, 1, 0, 0),
        false,
    )
    .expect("march");
    let june = month_report(
        &conn,
        local(2025, 6, 1, 0, 0),
        local(2025, 7, 1, 0, 0),
        false,
    )
    .expect("june");

    // same lifetime total regardless of the month asked for
    assert_eq!(march.len(), 1);
    assert_eq!(june.len(), 1);
    assert_eq!(march[0].total_secs, 3600 + 7200);
    assert_eq!(june[0].total_secs, march[0].total_secs);
    assert!(march[0].monthly);
}

#[test]
fn test_all_monthly_restricts_to_frames_inside_month() {
    let db_path = setup_test_db("report_all_monthly");
    let conn = open_db(&db_path);
    let proj = seed_project(&conn, "acme");
    let task = seed_task(&conn, &proj, "design");

    // straddles the month boundary: dropped under --monthly
    seed_frame(&conn, &task, local(2025, 2, 28, 23, 0), local(2025, 3, 1, 1, 0));
    // fully inside March: counted
    seed_frame(&conn, &task, local(2025, 3, 10, 9, 0), local(2025, 3, 10, 10, 0));

    let rows = month_report(
        &conn,
        local(2025, 3, 1, 0, 0),
        local(2025, 4, 1, 0, 0),
        true,
    )
    .expect("report");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].total_secs, 3600);
    assert!(rows[0].monthly);
}

#[test]
fn test_merge_moves_frames_and_drops_source() {
    let db_path = setup_test_db("report_merge");
    let conn = open_db(&db_path);
    let proj = seed_project(&conn, "acme");
    let design = seed_task(&conn, &proj, "design");
    let sketches = seed_task(&conn, &proj, "sketches");

    seed_frame(&conn, &design, local(2025, 3, 10, 9, 0), local(2025, 3, 10, 10, 0));
    seed_frame(&conn, &sketches, local(2025, 3, 11, 9, 0), local(2025, 3, 11, 9, 30));
    seed_frame(&conn, &sketches, local(2025, 3, 12, 9, 0), local(2025, 3, 12, 9, 15));

    let moved = tasks::merge_tasks(&conn, &sketches, &design).expect("merge");
    assert_eq!(moved, 2);
    assert!(queries::get_task(&conn, proj.id, "sketches").expect("lookup").is_none());
    assert_eq!(queries::count_frames(&conn, design.id).expect("count"), 3);

    let report = log_report(
        &conn,
        local(2025, 3, 1, 0, 0),
        local(2025, 4, 1, 0, 0),
        &NameFilter::default(),
    )
    .expect("report");
    assert_eq!(report.projects[0].tasks.len(), 1);
    assert_eq!(report.total_secs, 3600 + 1800 + 900);
}
