use serde::{Deserialize, Serialize};

pub const TEXT_MAX_LEN: usize = 255;

/// A stored meeting, as returned to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Meeting {
    pub id: i64,
    pub title: String,
    pub agenda: String,
    pub summary: String,
    pub owner_id: i64,
}

/// One page of meetings plus the total visible to the caller.
#[derive(Debug, Serialize, Deserialize)]
pub struct MeetingsPublic {
    pub data: Vec<Meeting>,
    pub count: i64,
}

/// Body of `POST /meetings/`. Any `owner_id` in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct MeetingCreate {
    pub title: String,
    pub agenda: String,
    #[serde(default)]
    pub summary: String,
}

/// Body of `PUT /meetings/{id}`. Absent (or null) fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MeetingUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub agenda: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Query string of the list endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

impl Default for ListParams {
    fn default() -> Self {
        ListParams { skip: 0, limit: default_limit() }
    }
}
