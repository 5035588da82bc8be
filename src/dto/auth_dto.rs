use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::{User, UserRole};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupPayload {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub full_name: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginPayload {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user_id: i64,
    pub user_name: String,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            email: value.email,
            full_name: value.full_name,
            role: value.role,
        }
    }
}
