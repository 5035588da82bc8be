use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use serde_json::json;
use validator::Validate;

use crate::{
    dto::skill_dto::{CreateSkillPayload, SkillResponse},
    error::{Error, Result},
    middleware::auth::Claims,
    AppState,
};

#[axum::debug_handler]
pub async fn list_skills(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let user = super::current_user(&state, &claims).await?;
    let skills = state.skill_service.list_for_user(user.id).await?;
    let body: Vec<SkillResponse> = skills.into_iter().map(Into::into).collect();
    Ok(Json(body))
}

#[axum::debug_handler]
pub async fn create_skill(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateSkillPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = super::current_user(&state, &claims).await?;
    let skill = state.skill_service.create(user.id, payload).await?;
    Ok((StatusCode::CREATED, Json(SkillResponse::from(skill))))
}

#[axum::debug_handler]
pub async fn delete_skill(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse> {
    let user = super::current_user(&state, &claims).await?;
    let deleted = state.skill_service.delete_by_name(user.id, &name).await?;
    if !deleted {
        return Err(Error::NotFound("Skill not found".to_string()));
    }
    Ok(Json(json!({ "message": "Skill deleted" })))
}
