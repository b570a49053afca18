//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("Project '{0}' doesn't exist")]
    ProjectNotFound(String),

    #[error("Task '{task}' doesn't exist on project '{project}'")]
    TaskNotFound { task: String, project: String },

    #[error("Frame [{index}] doesn't exist on task '{task}'")]
    FrameNotFound { index: usize, task: String },

    #[error("Project '{0}' already exists")]
    ProjectExists(String),

    #[error("Task '{task}' already exists on project '{project}'")]
    TaskExists { task: String, project: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Bad duration: {0}")]
    InvalidDuration(String),

    #[error("Bad date: {0}")]
    InvalidDate(String),

    #[error("Bad month: {0}")]
    InvalidMonth(String),

    // ---------------------------
    // Consistency errors
    // ---------------------------
    #[error("Consistency error: {0}")]
    InvariantViolation(String),

    // ---------------------------
    // Config / export errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type AppResult<T> = Result<T, AppError>;
