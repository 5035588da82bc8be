pub mod auth;
pub mod health;
pub mod jobs;
pub mod resume;
pub mod skills;

use crate::error::{Error, Result};
use crate::middleware::auth::Claims;
use crate::models::user::User;
use crate::AppState;

/// Resolves the bearer claims to a stored user. A token whose subject no
/// longer exists is treated the same as a bad token.
pub(crate) async fn current_user(state: &AppState, claims: &Claims) -> Result<User> {
    state
        .user_service
        .find_by_email(&claims.sub)
        .await?
        .ok_or_else(|| Error::Unauthorized("Could not validate credentials".to_string()))
}

pub(crate) fn ensure_recruiter(claims: &Claims) -> Result<()> {
    let role = claims.role.clone().unwrap_or_default();
    if !role.eq_ignore_ascii_case("recruiter") {
        return Err(Error::Forbidden("Recruiter role required".to_string()));
    }
    Ok(())
}
