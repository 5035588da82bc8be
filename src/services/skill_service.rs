use crate::dto::skill_dto::CreateSkillPayload;
use crate::error::Result;
use crate::models::skill::Skill;
use sqlx::PgPool;

#[derive(Clone)]
pub struct SkillService {
    pool: PgPool,
}

impl SkillService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Skill>> {
        let skills = sqlx::query_as::<_, Skill>(
            "SELECT id, user_id, name, level, category
             FROM skills
             WHERE user_id = $1
             ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    pub async fn create(&self, user_id: i64, payload: CreateSkillPayload) -> Result<Skill> {
        let skill = sqlx::query_as::<_, Skill>(
            "INSERT INTO skills (user_id, name, level, category)
             VALUES ($1, $2, $3, $4)
             RETURNING id, user_id, name, level, category",
        )
        .bind(user_id)
        .bind(payload.name)
        .bind(payload.level)
        .bind(payload.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(skill)
    }

    /// Deletes a skill by its per-user name. Returns whether anything was
    /// deleted so the route can 404 on a miss.
    pub async fn delete_by_name(&self, user_id: i64, name: &str) -> Result<bool> {
        let res = sqlx::query("DELETE FROM skills WHERE user_id = $1 AND name = $2")
            .bind(user_id)
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(res.rows_affected() > 0)
    }
}
