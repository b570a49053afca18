//! Stop, cancel and shift: the three ways an open frame changes or ends.

use crate::core::state::get_state;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::State;
use chrono::{DateTime, Duration, Local};
use rusqlite::Connection;

pub struct Stopped {
    pub state: State,
    pub end_time: DateTime<Local>,
    pub elapsed_secs: i64,
}

/// Close the open frame at `now + offset`. Returns None when nothing is
/// running (the caller reports "no task started" and nothing is written).
pub fn stop(conn: &Connection, offset: Duration) -> AppResult<Option<Stopped>> {
    let state = get_state(conn)?;
    if !state.running {
        return Ok(None);
    }

    let end_time = Local::now() + offset;
    queries::close_open_frame(conn, end_time)?;

    let elapsed_secs = state
        .start_time
        .map(|s| (end_time - s).num_seconds())
        .unwrap_or(0);

    Ok(Some(Stopped {
        state,
        end_time,
        elapsed_secs,
    }))
}

/// Delete the open frame outright; no end timestamp is ever written. A task
/// left with zero frames is removed with it. This is a destructive undo of
/// start, not a stop variant.
pub fn cancel(conn: &Connection) -> AppResult<Option<State>> {
    let state = get_state(conn)?;
    if !state.running {
        return Ok(None);
    }

    queries::delete_open_frame(conn)?;
    queries::delete_empty_tasks(conn)?;

    Ok(Some(state))
}

pub struct Shifted {
    pub previous: State,
    pub current: State,
}

/// Move the open frame's start back by `delta` (positive stretches the
/// elapsed time, negative shrinks it). None when nothing is running.
pub fn shift_start(conn: &Connection, delta: Duration) -> AppResult<Option<Shifted>> {
    let previous = get_state(conn)?;
    let Some(start_time) = previous.start_time else {
        return Ok(None);
    };

    queries::set_open_frame_start(conn, start_time - delta)?;
    let current = get_state(conn)?;

    Ok(Some(Shifted { previous, current }))
}
