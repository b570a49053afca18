//! Project lifecycle.

use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::Project;
use rusqlite::Connection;

pub fn add_project(conn: &Connection, name: &str) -> AppResult<Project> {
    if queries::get_project_by_name(conn, name)?.is_some() {
        return Err(AppError::ProjectExists(name.to_string()));
    }
    queries::insert_project(conn, name)
}

pub fn rename_project(conn: &Connection, old_name: &str, new_name: &str) -> AppResult<()> {
    if queries::get_project_by_name(conn, new_name)?.is_some() {
        return Err(AppError::ProjectExists(new_name.to_string()));
    }
    let project = queries::require_project(conn, old_name)?;
    queries::rename_project(conn, project.id, new_name)
}

/// Delete a project; tasks and frames cascade.
pub fn remove_project(conn: &Connection, project: &Project) -> AppResult<()> {
    queries::delete_project(conn, project.id)
}

pub fn list_projects(conn: &Connection) -> AppResult<Vec<Project>> {
    queries::list_projects(conn)
}
