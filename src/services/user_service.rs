use crate::error::Result;
use crate::models::user::User;
use sqlx::PgPool;

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, full_name, password_hash, role, created_at
             FROM users
             WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn create(
        &self,
        email: &str,
        full_name: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, full_name, password_hash, role)
             VALUES ($1, $2, $3, $4)
             RETURNING id, email, full_name, password_hash, role, created_at",
        )
        .bind(email)
        .bind(full_name)
        .bind(password_hash)
        .bind(role)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }
}
