use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: i64,
    pub project_id: i64, // owner resolved by id lookup, never by pointer
    pub name: String,
    pub monthly: bool,
}
