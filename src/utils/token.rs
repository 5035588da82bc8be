use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::error::{Error, Result};
use crate::middleware::auth::Claims;

/// Issues an HS256 bearer token for the given subject. The secret and
/// lifetime are injected by the caller; nothing here reads global state.
pub fn create_access_token(
    email: &str,
    role: &str,
    secret: &str,
    expire_minutes: i64,
) -> Result<String> {
    let expires_at = Utc::now() + Duration::minutes(expire_minutes);
    let claims = Claims {
        sub: email.to_string(),
        exp: expires_at.timestamp() as usize,
        role: Some(role.to_string()),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Error::Internal(format!("Failed to sign access token: {}", e)))
}

pub fn decode_access_token(token: &str, secret: &str) -> Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| Error::Unauthorized("Could not validate credentials".to_string()))
}
