use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::skill::Skill;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSkillPayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0, max = 100))]
    pub level: i32,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillResponse {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub level: i32,
    pub category: String,
}

impl From<Skill> for SkillResponse {
    fn from(value: Skill) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            name: value.name,
            level: value.level,
            category: value.category,
        }
    }
}
