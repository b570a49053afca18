use crate::models::{Project, Task};
use chrono::{DateTime, Local};

/// Snapshot of the running-state tracker: whether a frame is open right now,
/// and which task/project it belongs to. Always re-derived from the store,
/// never cached across operations.
#[derive(Debug, Clone)]
pub struct State {
    pub running: bool,
    pub task: Option<Task>,
    pub project: Option<Project>,
    pub start_time: Option<DateTime<Local>>,
    pub elapsed_secs: i64,
}

impl State {
    pub fn idle() -> Self {
        Self {
            running: false,
            task: None,
            project: None,
            start_time: None,
            elapsed_secs: 0,
        }
    }
}
