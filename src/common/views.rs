use super::models::{ApiInfo, HealthResponse};
use crate::common::errors::ApiError;
use crate::common::state::AppState;
use axum::{Json, extract::State};
use chrono::{SecondsFormat, Utc};
use utoipa_axum::{router::OpenApiRouter, routes};

pub fn router(state: &AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(get_api_info))
        .routes(routes!(health))
        .with_state(state.clone())
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = OK, description = "API name, version and endpoint catalogue", body = ApiInfo)
    )
)]
pub async fn get_api_info() -> Json<ApiInfo> {
    Json(ApiInfo::new())
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = OK, description = "Database connection is healthy", body = HealthResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Database unreachable")
    )
)]
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    state
        .db
        .ping()
        .await
        .map_err(|e| ApiError::db(e, "Error conectando a la base de datos"))?;

    Ok(Json(HealthResponse {
        success: true,
        message: "Conexión a la base de datos exitosa".to_string(),
        database: state.config.db_name.clone(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}
