use crate::common::errors::{ApiError, ApiResult};
use crate::common::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use serde::Deserialize;
use serde_json::{Value, json};
use utoipa::{IntoParams, ToSchema};
use utoipa_axum::{router::OpenApiRouter, routes};
use uuid::Uuid;

use super::models::{ActiveModel, Column, Entity};

pub fn router(state: &AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(create_report))
        .routes(routes!(get_reports_by_robot))
        .routes(routes!(get_report_by_id))
        .with_state(state.clone())
}

#[derive(Default, Deserialize, ToSchema)]
pub struct CreateReportRequest {
    #[serde(rename = "robotUuid")]
    pub robot_uuid: Option<Uuid>,
    #[serde(rename = "reporteMd")]
    pub reporte_md: Option<String>,
    /// Report date, defaults to today.
    pub fecha: Option<chrono::NaiveDate>,
}

/// Store a generated report for a robot.
#[utoipa::path(
    post,
    path = "",
    request_body = CreateReportRequest,
    responses(
        (status = CREATED, description = "Report stored", body = Value),
        (status = BAD_REQUEST, description = "Missing fields")
    )
)]
pub async fn create_report(
    State(state): State<AppState>,
    body: Option<Json<CreateReportRequest>>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let request = body.map(|Json(request)| request).unwrap_or_default();

    let (Some(robot_uuid), Some(reporte_md)) = (
        request.robot_uuid,
        request.reporte_md.filter(|md| !md.is_empty()),
    ) else {
        return Err(ApiError::validation("robotUuid y reporteMd son requeridos"));
    };

    let now = Utc::now();
    let report = ActiveModel {
        robot_uuid: Set(robot_uuid),
        fecha: Set(request.fecha.unwrap_or_else(|| now.date_naive())),
        reporte_md: Set(reporte_md),
        timestamp: Set(now),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .map_err(|err| ApiError::db(err, "Error al guardar reporte"))?;

    Ok((
        StatusCode::CREATED,
        Json(json!({"success": true, "id": report.id})),
    ))
}

#[derive(Deserialize, IntoParams)]
pub struct ReportListQuery {
    /// Maximum number of reports to return (newest first).
    pub limit: Option<u64>,
}

/// List a robot's reports, newest first.
#[utoipa::path(
    get,
    path = "/{robot_uuid}",
    params(
        ("robot_uuid" = Uuid, Path, description = "Robot identifier"),
        ReportListQuery
    ),
    responses((status = OK, description = "Reports for the robot", body = Value))
)]
pub async fn get_reports_by_robot(
    State(state): State<AppState>,
    Path(robot_uuid): Path<Uuid>,
    Query(query): Query<ReportListQuery>,
) -> ApiResult<Json<Value>> {
    let reports = Entity::find()
        .filter(Column::RobotUuid.eq(robot_uuid))
        .order_by_desc(Column::Timestamp)
        .limit(query.limit.unwrap_or(10))
        .all(&state.db)
        .await
        .map_err(|err| ApiError::db(err, "Error al obtener reportes"))?;

    Ok(Json(json!({"success": true, "reports": reports})))
}

/// Fetch one report by its numeric id.
#[utoipa::path(
    get,
    path = "/id/{id}",
    params(("id" = i32, Path, description = "Report id")),
    responses(
        (status = OK, description = "The report", body = Value),
        (status = NOT_FOUND, description = "No such report")
    )
)]
pub async fn get_report_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Value>> {
    let report = Entity::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(|err| ApiError::db(err, "Error al obtener reporte"))?;

    let Some(report) = report else {
        return Err(ApiError::not_found("Reporte no encontrado"));
    };

    Ok(Json(json!({"success": true, "report": report})))
}
