use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Skill {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    /// Proficiency 0-100, enforced by payload validation and a DB check.
    pub level: i32,
    pub category: String,
}
