use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::utils::token::decode_access_token;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub role: Option<String>,
}

fn unauthorized(code: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({"error": code}))).into_response()
}

fn bearer_claims(req: &Request) -> Result<Claims, Response> {
    let Some(auth_header) = req.headers().get(axum::http::header::AUTHORIZATION) else {
        return Err(unauthorized("missing_authorization"));
    };
    let Ok(auth_str) = auth_header.to_str() else {
        return Err(unauthorized("bad_authorization"));
    };
    let Some(token) = auth_str.strip_prefix("Bearer ") else {
        return Err(unauthorized("unsupported_scheme"));
    };

    let config = crate::config::get_config();
    decode_access_token(token, &config.jwt_secret).map_err(|_| unauthorized("invalid_token"))
}

/// Requires a valid bearer token and stashes its claims in request
/// extensions for handlers to pick up.
pub async fn require_bearer_auth(mut req: Request, next: Next) -> Response {
    match bearer_claims(&req) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(resp) => resp,
    }
}
