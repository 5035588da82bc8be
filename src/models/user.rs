use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Closed set of account roles. Anything else is rejected at the API
/// boundary when a signup payload is deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Jobseeker,
    Recruiter,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Jobseeker => "jobseeker",
            UserRole::Recruiter => "recruiter",
        }
    }
}
