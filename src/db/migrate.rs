//! Forward-only schema migrations, driven by a SCHEMA_VERSION row in the
//! `setting` table. Each migration is applied at most once, in ascending
//! version order.

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

pub const SCHEMA_VERSION: &str = "SCHEMA_VERSION";

struct Migration {
    version: i64,
    up: fn(&Connection) -> AppResult<()>,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        up: migrate_base_schema,
    },
    Migration {
        version: 2,
        up: migrate_add_monthly_flag,
    },
];

/// The `setting` table bootstraps itself: it has to exist before the schema
/// version can be read.
fn ensure_setting_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS setting (
            key   TEXT PRIMARY KEY,
            value TEXT
        );
        "#,
    )?;
    Ok(())
}

fn schema_version(conn: &Connection) -> AppResult<i64> {
    let value: Option<String> = conn
        .query_row(
            "SELECT value FROM setting WHERE key = ?1",
            [SCHEMA_VERSION],
            |row| row.get(0),
        )
        .optional()?;

    match value {
        Some(v) => v
            .parse()
            .map_err(|_| AppError::Migration(format!("bad schema version: {}", v))),
        None => Ok(0),
    }
}

fn update_setting(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO setting (key, value) VALUES (?1, ?2)
         ON CONFLICT (key) DO UPDATE SET value = excluded.value",
        [key, value],
    )?;
    Ok(())
}

fn migrate_base_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS project (
            id   INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS task (
            id         INTEGER PRIMARY KEY,
            project_id INTEGER NOT NULL,
            name       TEXT NOT NULL,

            FOREIGN KEY (project_id) REFERENCES project(id) ON DELETE CASCADE
        );

        CREATE TABLE IF NOT EXISTS frame (
            id         INTEGER PRIMARY KEY,
            task_id    INTEGER NOT NULL,
            start_time TEXT NOT NULL,
            end_time   TEXT,

            FOREIGN KEY (task_id) REFERENCES task(id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_frame_task ON frame(task_id);
        CREATE INDEX IF NOT EXISTS idx_frame_end ON frame(end_time);
        "#,
    )?;
    Ok(())
}

fn migrate_add_monthly_flag(conn: &Connection) -> AppResult<()> {
    conn.execute_batch("ALTER TABLE task ADD COLUMN monthly BOOL DEFAULT FALSE;")?;
    Ok(())
}

/// Run all pending migrations. Invoked every time the database is opened.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_setting_table(conn)?;

    let current = schema_version(conn)?;

    for m in MIGRATIONS {
        if current < m.version {
            (m.up)(conn).map_err(|e| {
                AppError::Migration(format!("migration {} failed: {}", m.version, e))
            })?;
            update_setting(conn, SCHEMA_VERSION, &m.version.to_string())?;
        }
    }

    Ok(())
}
