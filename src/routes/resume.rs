use axum::{
    extract::Multipart,
    response::{IntoResponse, Json},
};
use bytes::Bytes;

use crate::{
    error::{Error, Result},
    services::{extract_service::ExtractService, resume_service::ResumeService},
};

#[utoipa::path(
    post,
    path = "/api/v1/resume/analyze",
    responses(
        (status = 200, description = "Heuristic analysis of the uploaded resume"),
        (status = 400, description = "Missing file or unreadable text"),
        (status = 415, description = "Not a PDF or DOCX upload"),
        (status = 422, description = "File could not be parsed")
    )
)]
#[axum::debug_handler]
pub async fn analyze_resume(mut multipart: Multipart) -> Result<impl IntoResponse> {
    let mut filename = String::new();
    let mut data = Bytes::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to read multipart field: {}", e);
        Error::BadRequest(e.to_string())
    })? {
        if field.name() == Some("file") {
            filename = field.file_name().unwrap_or_default().to_string();
            data = field.bytes().await.map_err(|e| {
                tracing::error!("Failed to read resume bytes: {}", e);
                Error::BadRequest("Failed to read file upload".to_string())
            })?;
        }
    }

    if data.is_empty() {
        return Err(Error::BadRequest("Resume file is required".to_string()));
    }

    let text = ExtractService::extract_text(&data, &filename)?;
    let analysis = ResumeService::analyze(&text)?;
    Ok(Json(analysis))
}
