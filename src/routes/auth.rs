use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    config::get_config,
    dto::auth_dto::{LoginPayload, SignupPayload, TokenResponse, UserResponse},
    error::{Error, Result},
    utils::{crypto, token},
    AppState,
};

#[axum::debug_handler]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    if state
        .user_service
        .find_by_email(&payload.email)
        .await?
        .is_some()
    {
        return Err(Error::Conflict("Email already registered".to_string()));
    }

    let password_hash = crypto::hash_password(&payload.password)
        .map_err(|e| Error::Internal(format!("Failed to hash password: {}", e)))?;

    let user = state
        .user_service
        .create(
            &payload.email,
            &payload.full_name,
            &password_hash,
            payload.role.as_str(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    // One message for both unknown email and wrong password.
    let invalid = || Error::Unauthorized("Incorrect email or password".to_string());

    let user = state
        .user_service
        .find_by_email(&payload.email)
        .await?
        .ok_or_else(invalid)?;

    let ok = crypto::verify_password(&payload.password, &user.password_hash)
        .map_err(|e| Error::Internal(format!("Failed to verify password: {}", e)))?;
    if !ok {
        return Err(invalid());
    }

    let config = get_config();
    let access_token = token::create_access_token(
        &user.email,
        &user.role,
        &config.jwt_secret,
        config.access_token_expire_minutes,
    )?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
        user_id: user.id,
        user_name: user.full_name,
        role: user.role,
    }))
}
