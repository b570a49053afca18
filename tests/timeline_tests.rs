mod common;
use common::{local, open_db, seed_frame, seed_project, seed_task, setup_test_db};

use trackr::core::report::NameFilter;
use trackr::core::timeline::{Connector, timeline};
use trackr::db::queries;

#[test]
fn test_connectors_reflect_neighbouring_days() {
    let db_path = setup_test_db("timeline_connectors");
    let conn = open_db(&db_path);
    let proj = seed_project(&conn, "acme");
    let task = seed_task(&conn, &proj, "design");

    // active on days 10, 11 and 13; idle on 12 and 14
    seed_frame(&conn, &task, local(2025, 3, 10, 9, 0), local(2025, 3, 10, 10, 0));
    seed_frame(&conn, &task, local(2025, 3, 11, 9, 0), local(2025, 3, 11, 10, 0));
    seed_frame(&conn, &task, local(2025, 3, 13, 9, 0), local(2025, 3, 13, 10, 0));

    let tl = timeline(
        &conn,
        local(2025, 3, 10, 0, 0),
        local(2025, 3, 15, 0, 0),
        &NameFilter::default(),
    )
    .expect("timeline");

    assert_eq!(tl.days.len(), 5);
    assert_eq!(tl.rows.len(), 1);
    assert_eq!(
        tl.rows[0].cells,
        vec![
            Connector::Right,
            Connector::Left,
            Connector::Inactive,
            Connector::Isolated,
            Connector::Inactive,
        ]
    );
}

#[test]
fn test_frame_spanning_midnight_marks_both_days() {
    let db_path = setup_test_db("timeline_midnight");
    let conn = open_db(&db_path);
    let proj = seed_project(&conn, "acme");
    let task = seed_task(&conn, &proj, "nightshift");

    seed_frame(&conn, &task, local(2025, 3, 10, 23, 0), local(2025, 3, 11, 1, 0));

    let tl = timeline(
        &conn,
        local(2025, 3, 10, 0, 0),
        local(2025, 3, 12, 0, 0),
        &NameFilter::default(),
    )
    .expect("timeline");

    assert_eq!(tl.rows.len(), 1);
    assert_eq!(tl.rows[0].cells, vec![Connector::Right, Connector::Left]);
}

#[test]
fn test_open_frame_is_active_through_today() {
    let db_path = setup_test_db("timeline_open");
    let conn = open_db(&db_path);
    let proj = seed_project(&conn, "acme");
    let task = seed_task(&conn, &proj, "ongoing");

    let start = chrono::Local::now() - chrono::Duration::days(1);
    queries::insert_frame(&conn, task.id, start, None).expect("insert");

    let from = start - chrono::Duration::hours(12);
    let to = chrono::Local::now() + chrono::Duration::hours(12);
    let tl = timeline(&conn, from, to, &NameFilter::default()).expect("timeline");

    assert_eq!(tl.rows.len(), 1);
    // both yesterday and today light up
    let active = tl.rows[0]
        .cells
        .iter()
        .filter(|c| **c != Connector::Inactive)
        .count();
    assert!(active >= 2);
}

#[test]
fn test_rows_ordered_by_task_id() {
    let db_path = setup_test_db("timeline_order");
    let conn = open_db(&db_path);
    let proj = seed_project(&conn, "acme");
    let first = seed_task(&conn, &proj, "zeta");
    let second = seed_task(&conn, &proj, "alpha");

    seed_frame(&conn, &first, local(2025, 3, 10, 9, 0), local(2025, 3, 10, 10, 0));
    seed_frame(&conn, &second, local(2025, 3, 10, 11, 0), local(2025, 3, 10, 12, 0));

    let tl = timeline(
        &conn,
        local(2025, 3, 10, 0, 0),
        local(2025, 3, 11, 0, 0),
        &NameFilter::default(),
    )
    .expect("timeline");

    // creation order wins over name order
    assert_eq!(tl.rows[0].task_name, "zeta");
    assert_eq!(tl.rows[1].task_name, "alpha");
}
