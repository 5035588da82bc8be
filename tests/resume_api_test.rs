use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::post,
    Router,
};
use serde_json::Value as JsonValue;
use std::io::Cursor;
use tower::ServiceExt;

const BOUNDARY: &str = "X-TEST-BOUNDARY";

fn app() -> Router {
    Router::new().route(
        "/api/v1/resume/analyze",
        post(skillmatch_backend::routes::resume::analyze_resume),
    )
}

fn multipart_body(filename: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn upload_request(filename: &str, bytes: &[u8]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/resume/analyze")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(filename, bytes)))
        .unwrap()
}

fn docx_bytes(lines: &[&str]) -> Vec<u8> {
    use docx_rs::{Docx, Paragraph, Run};

    let mut docx = Docx::new();
    for line in lines {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*line)));
    }
    let mut buf = Cursor::new(Vec::new());
    docx.build().pack(&mut buf).expect("pack docx");
    buf.into_inner()
}

#[tokio::test]
async fn unsupported_extension_is_rejected() {
    let resp = app()
        .oneshot(upload_request("resume.txt", b"just some plain text"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json: JsonValue = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"].as_str(), Some("Invalid format. Use PDF or DOCX."));
}

#[tokio::test]
async fn corrupt_pdf_is_rejected_as_unparseable() {
    let resp = app()
        .oneshot(upload_request("resume.pdf", b"this is not a pdf"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn missing_file_field_is_a_bad_request() {
    let body = format!("--{}--\r\n", BOUNDARY);
    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/resume/analyze")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap();

    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn short_resume_is_rejected_after_extraction() {
    let bytes = docx_bytes(&["Too short"]);
    let resp = app().oneshot(upload_request("resume.docx", &bytes)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json: JsonValue = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json["error"].as_str(),
        Some("Resume content is too short or unreadable.")
    );
}

#[tokio::test]
async fn docx_upload_returns_full_analysis() {
    let bytes = docx_bytes(&[
        "Developed a React and AWS pipeline with Docker.",
        "Managed and Led delivery for SQL and Python teams.",
    ]);
    let resp = app().oneshot(upload_request("resume.docx", &bytes)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json: JsonValue = serde_json::from_slice(&body).unwrap();

    // React, AWS, Docker, SQL, Python -> 100; Developed, Managed, Led -> 80.
    assert_eq!(json["keywordOptimization"].as_i64(), Some(100));
    assert_eq!(json["impactScore"].as_i64(), Some(80));
    assert_eq!(json["formatting"].as_i64(), Some(60));
    assert_eq!(json["overallScore"].as_i64(), Some(80));
    assert_eq!(json["atsCompatibility"].as_i64(), Some(85));

    let present: Vec<&str> = json["keywords"]["present"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(present, vec!["Python", "React", "AWS", "Docker", "SQL"]);

    let sections = json["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 3);
    assert_eq!(sections[0]["section"].as_str(), Some("Contact Information"));
    assert_eq!(sections[0]["score"].as_i64(), Some(100));

    let strengths = json["strengths"].as_array().unwrap();
    assert_eq!(strengths.len(), 1);
    assert_eq!(strengths[0]["title"].as_str(), Some("Strong Technical Base"));
}
