use crate::common::errors::{ApiError, ApiResult};
use crate::common::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{SecondsFormat, Utc};
use serde_json::{Value, json};
use utoipa_axum::{router::OpenApiRouter, routes};
use uuid::Uuid;

use crate::services::agronomy;
use crate::services::models::SensorSnapshot;
use crate::services::report_templates;

use super::services::fetch_recent_sensor_averages;

/// Days of history the report and analysis endpoints look back over.
const LOOKBACK_DAYS: i64 = 7;

pub fn router(state: &AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(weekly_forecast))
        .routes(routes!(robot_analysis))
        .with_state(state.clone())
}

/// Weekly markdown report rendered from the last seven days of readings.
#[utoipa::path(
    get,
    path = "/forecast",
    responses(
        (status = OK, description = "Generated report plus the averages that fed it", body = Value),
        (status = BAD_REQUEST, description = "No sensor data in the lookback window")
    )
)]
pub async fn weekly_forecast(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let summary = fetch_recent_sensor_averages(&state.db, None, LOOKBACK_DAYS)
        .await
        .map_err(|err| ApiError::db(err, "Error generando informe"))?
        .ok_or_else(|| ApiError::validation("No hay suficientes datos para generar el informe"))?;

    let now = Utc::now();
    Ok(Json(json!({
        "success": true,
        "data": {
            "report": report_templates::weekly_report(&summary, now),
            "sensorData": summary,
            "generatedAt": now.to_rfc3339_opts(SecondsFormat::Millis, true),
            "model": report_templates::REPORT_MODEL,
        }
    })))
}

/// Full structured agronomy analysis for one robot.
///
/// Robots with no recent readings are analysed against the default snapshot,
/// so the endpoint only fails on a database error.
#[utoipa::path(
    get,
    path = "/analysis/{robot_uuid}",
    params(("robot_uuid" = Uuid, Path, description = "Robot identifier")),
    responses((status = OK, description = "Structured analysis document", body = Value))
)]
pub async fn robot_analysis(
    State(state): State<AppState>,
    Path(robot_uuid): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    let summary = fetch_recent_sensor_averages(&state.db, Some(robot_uuid), LOOKBACK_DAYS)
        .await
        .map_err(|err| ApiError::db(err, "Error interno del servidor durante el análisis de IA"))?;

    let snapshot = summary
        .as_ref()
        .map_or_else(SensorSnapshot::default, SensorSnapshot::from);
    let analysis = agronomy::generate_analysis(&snapshot, &robot_uuid.to_string(), Utc::now());

    Ok(Json(json!({
        "success": true,
        "data": analysis,
        "message": "Análisis de IA completado exitosamente",
    })))
}
