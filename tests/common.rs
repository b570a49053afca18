#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone};
use rusqlite::Connection;
use std::env;
use std::fs;
use std::path::PathBuf;
use trackr::db::queries;
use trackr::models::{Frame, Project, Task};

pub fn trk() -> Command {
    cargo_bin_cmd!("trackr")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_trackr.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Open the DB through the library so the schema is migrated, then hand the
/// raw connection to the test for direct seeding.
pub fn open_db(db_path: &str) -> Connection {
    trackr::db::pool::DbPool::open(db_path).expect("open db").conn
}

/// Deterministic local timestamp with whole seconds.
pub fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("valid local time")
}

pub fn seed_project(conn: &Connection, name: &str) -> Project {
    queries::insert_project(conn, name).expect("insert project")
}

pub fn seed_task(conn: &Connection, project: &Project, name: &str) -> Task {
    queries::insert_task(conn, project.id, name).expect("insert task")
}

pub fn seed_frame(
    conn: &Connection,
    task: &Task,
    start: DateTime<Local>,
    end: DateTime<Local>,
) -> Frame {
    queries::insert_frame(conn, task.id, start, Some(end)).expect("insert frame")
}
