use chrono::{DateTime, Local};
use serde::Serialize;

/// A single recorded time interval belonging to a task.
/// `end == None` means the frame is still running.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub id: i64,
    pub task_id: i64,
    pub start: DateTime<Local>,
    pub end: Option<DateTime<Local>>,
}

impl Frame {
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// End timestamp for arithmetic: `now` while the frame is open.
    pub fn end_or(&self, now: DateTime<Local>) -> DateTime<Local> {
        self.end.unwrap_or(now)
    }

    /// Duration in whole seconds (open frames measured against `now`).
    pub fn duration_secs(&self, now: DateTime<Local>) -> i64 {
        (self.end_or(now) - self.start).num_seconds()
    }
}
