use std::collections::HashSet;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::job_dto::{CreateJobPayload, JobResponse, UpdateJobPayload},
    error::Result,
    middleware::auth::Claims,
    services::match_service::{MatchService, RECOMMENDATION_MIN_SCORE},
    AppState,
};

async fn scored_jobs(
    state: &AppState,
    claims: &Claims,
    min_score: i32,
) -> Result<Vec<JobResponse>> {
    let user = super::current_user(state, claims).await?;
    let skills = state.skill_service.list_for_user(user.id).await?;
    let skill_names: HashSet<String> = skills.into_iter().map(|s| s.name).collect();

    let jobs = state.job_service.list_all().await?;
    let ranked = MatchService::rank(jobs, &skill_names, min_score);
    Ok(ranked.into_iter().map(Into::into).collect())
}

#[utoipa::path(
    get,
    path = "/api/v1/jobs",
    responses(
        (status = 200, description = "Every job scored against the caller's skills", body = Json<Vec<JobResponse>>),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn list_jobs(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let body = scored_jobs(&state, &claims, 0).await?;
    Ok(Json(body))
}

#[utoipa::path(
    get,
    path = "/api/v1/jobs/recommendations",
    responses(
        (status = 200, description = "Jobs matching at least half of the caller's skills", body = Json<Vec<JobResponse>>),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn recommend_jobs(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let body = scored_jobs(&state, &claims, RECOMMENDATION_MIN_SCORE).await?;
    Ok(Json(body))
}

#[utoipa::path(
    get,
    path = "/api/v1/jobs/{id}",
    params(
        ("id" = i64, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job found", body = Json<JobResponse>),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let job = state.job_service.get_by_id(id).await?;
    Ok(Json(JobResponse::from(job)))
}

#[utoipa::path(
    post,
    path = "/api/v1/jobs",
    request_body = CreateJobPayload,
    responses(
        (status = 201, description = "Job created", body = Json<JobResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Caller is not a recruiter")
    )
)]
#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateJobPayload>,
) -> Result<impl IntoResponse> {
    super::ensure_recruiter(&claims)?;
    payload.validate()?;
    let job = state.job_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(JobResponse::from(job))))
}

#[utoipa::path(
    patch,
    path = "/api/v1/jobs/{id}",
    params(
        ("id" = i64, Path, description = "Job ID")
    ),
    request_body = UpdateJobPayload,
    responses(
        (status = 200, description = "Job updated", body = Json<JobResponse>),
        (status = 403, description = "Caller is not a recruiter"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn update_job(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateJobPayload>,
) -> Result<impl IntoResponse> {
    super::ensure_recruiter(&claims)?;
    payload.validate()?;
    let job = state.job_service.update(id, payload).await?;
    Ok(Json(JobResponse::from(job)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/jobs/{id}",
    params(
        ("id" = i64, Path, description = "Job ID")
    ),
    responses(
        (status = 204, description = "Job deleted"),
        (status = 403, description = "Caller is not a recruiter"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_job(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    super::ensure_recruiter(&claims)?;
    state.job_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
