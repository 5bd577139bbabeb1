use crate::common::errors::ApiError;
use crate::common::state::AppState;
use crate::robots::models::DEFAULT_ROBOT_UUID;
use axum::{Json, extract::State};
use chrono::SecondsFormat;
use serde::Deserialize;
use serde_json::{Value, json};
use utoipa::ToSchema;
use utoipa_axum::{router::OpenApiRouter, routes};
use uuid::Uuid;

pub fn router(state: &AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(generate_reading))
        .with_state(state.clone())
}

#[derive(Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Robot to attribute the record to. Falls back to the default robot.
    #[serde(rename = "robotUuid")]
    pub robot_uuid: Option<Uuid>,
}

/// Insert one synthetic sensor record across all sensor tables.
#[utoipa::path(
    post,
    path = "/generate",
    request_body(content = GenerateRequest, description = "Optional target robot"),
    responses(
        (status = OK, description = "Record generated", body = Value),
        (status = INTERNAL_SERVER_ERROR, description = "Insert failed")
    )
)]
pub async fn generate_reading(
    State(state): State<AppState>,
    body: Option<Json<GenerateRequest>>,
) -> Result<Json<Value>, ApiError> {
    let robot_uuid = body
        .and_then(|Json(request)| request.robot_uuid)
        .unwrap_or(DEFAULT_ROBOT_UUID);

    let sample = super::services::generate_sample(&state.db, robot_uuid)
        .await
        .map_err(|err| ApiError::db(err, "Error generando nuevo registro"))?;

    Ok(Json(json!({
        "success": true,
        "message": "Nuevo registro de sensores generado exitosamente",
        "data": {
            "robotUuid": sample.robot_uuid,
            "timestamp": sample.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            "sensores": {
                "temperatura": format!("{}°C", sample.temperatura),
                "presion": format!("{} hPa", sample.presion),
                "humedad": format!("{}%", sample.humedad),
                "co2": format!("{} ppm", sample.co2),
                "lux": format!("{} lux", sample.lux),
                "indice_uv": sample.indice_uv.to_string(),
                "humedad_suelo": sample.humedad_suelo,
                "temperatura_suelo": format!("{}°C", sample.temperatura_suelo),
                "ubicacion": format!("{}, {}", sample.latitud, sample.longitud),
            },
        },
    })))
}
