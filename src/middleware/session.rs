use axum::{extract::FromRequestParts, http::header};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Claims carried by the externally issued session token. This service only
/// verifies; it never mints tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub name: String,
    pub exp: usize,
}

#[derive(Debug, Clone)]
pub struct SessionUser {
    pub subject: String,
    pub name: String,
}

impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = AppError;
    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AppError::Forbidden)?;

        let auth_str = auth_header.to_str().map_err(|_| AppError::Forbidden)?;

        if !auth_str.starts_with("Bearer ") {
            return Err(AppError::Forbidden);
        }
        let token = auth_str.trim_start_matches("Bearer ").trim();

        let secret = std::env::var("SESSION_SECRET")
            .map_err(|_| AppError::Internal(anyhow::anyhow!("SESSION_SECRET is not set")))?;

        let decoded = decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| AppError::Forbidden)?;

        Ok(SessionUser {
            subject: decoded.claims.sub,
            name: decoded.claims.name,
        })
    }
}
