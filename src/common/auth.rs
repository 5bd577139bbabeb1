use crate::common::errors::ApiError;
use crate::common::state::AppState;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Cost factor for bcrypt password hashes
const BCRYPT_COST: u32 = 12;

/// Token lifetime (the front end re-authenticates daily)
const TOKEN_VALIDITY_HOURS: i64 = 24;

/// JWT claims issued at login. Field names match the tokens the dashboard
/// front end already stores, so existing sessions keep working.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: i32,
    pub email: String,
    pub tipo: String,
    pub exp: usize,
}

pub fn create_token(
    user_id: i32,
    email: &str,
    tipo: &str,
    secret: &str,
) -> Result<String, ApiError> {
    let expiry = Utc::now() + Duration::hours(TOKEN_VALIDITY_HOURS);
    let claims = Claims {
        user_id,
        email: email.to_string(),
        tipo: tipo.to_string(),
        exp: usize::try_from(expiry.timestamp())
            .map_err(|e| ApiError::internal("Error interno del servidor", e.to_string()))?,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::internal("Error interno del servidor", e.to_string()))
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, ApiError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| ApiError::unauthorized("Token inválido"))
}

pub fn hash_password(password: &str) -> Result<String, ApiError> {
    bcrypt::hash(password, BCRYPT_COST)
        .map_err(|e| ApiError::internal("Error interno del servidor", e.to_string()))
}

pub fn verify_password(password: &str, password_hash: &str) -> bool {
    bcrypt::verify(password, password_hash).unwrap_or(false)
}

/// Extracts and validates the bearer token on protected routes.
pub struct AuthUser(pub Claims);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        let Some(token) = token else {
            return Err(ApiError::unauthorized("Token de acceso requerido"));
        };

        let claims = verify_token(token, &state.config.jwt_secret)?;
        Ok(AuthUser(claims))
    }
}
