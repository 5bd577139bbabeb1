use crate::common::errors::{ApiError, ApiResult};
use crate::common::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{Duration, NaiveTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use serde::Deserialize;
use serde_json::{Value, json};
use utoipa::IntoParams;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::readings::air::models as air;
use crate::readings::atmosphere::models as atmosphere;
use crate::readings::light::models as light;
use crate::readings::models as lecturas;
use crate::readings::soil::models as soil;
use crate::robots::models as robots;
use crate::robots::models::RobotStatus;

use super::services::minute_series;

pub fn router(state: &AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(overview))
        .routes(routes!(sensor_series))
        .routes(routes!(current_values))
        .routes(routes!(robot_stats))
        .with_state(state.clone())
}

/// System-wide counters for the dashboard header.
#[utoipa::path(
    get,
    path = "/overview",
    responses((status = OK, description = "Robot and reading totals", body = Value))
)]
pub async fn overview(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let err = |err: DbErr| ApiError::db(err, "Error obteniendo métricas generales");
    let db = &state.db;

    let total_robots = robots::Entity::find().count(db).await.map_err(err)?;
    let active_robots = robots::Entity::find()
        .filter(robots::Column::Estado.eq(RobotStatus::Activo))
        .count(db)
        .await
        .map_err(err)?;
    let total_readings = lecturas::Entity::find().count(db).await.map_err(err)?;

    let midnight = Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc();
    let today_readings = lecturas::Entity::find()
        .filter(lecturas::Column::CreatedAt.gte(midnight))
        .count(db)
        .await
        .map_err(err)?;

    let last_reading = lecturas::Entity::find()
        .order_by_desc(lecturas::Column::CreatedAt)
        .one(db)
        .await
        .map_err(err)?
        .map(|reading| reading.created_at);

    Ok(Json(json!({
        "success": true,
        "data": {
            "totalRobots": total_robots,
            "activeRobots": active_robots,
            "totalReadings": total_readings,
            "todayReadings": today_readings,
            "lastReading": last_reading,
            "uptime": state.started_at.elapsed().as_secs(),
        }
    })))
}

#[derive(Deserialize, IntoParams)]
pub struct SensorSeriesQuery {
    /// Lookback window in hours, 24 when omitted.
    pub hours: Option<i64>,
}

/// Minute-averaged chart series for each sensor table.
#[utoipa::path(
    get,
    path = "/sensors",
    params(SensorSeriesQuery),
    responses((status = OK, description = "Chart series per sensor", body = Value))
)]
pub async fn sensor_series(
    State(state): State<AppState>,
    Query(query): Query<SensorSeriesQuery>,
) -> ApiResult<Json<Value>> {
    let err = |err: DbErr| ApiError::db(err, "Error obteniendo datos de sensores");
    let cutoff = Utc::now() - Duration::hours(query.hours.unwrap_or(24));

    let temperature = minute_series(
        atmosphere::Entity::find()
            .filter(atmosphere::Column::Timestamp.gte(cutoff))
            .all(&state.db)
            .await
            .map_err(err)?
            .iter()
            .map(|row| {
                (
                    row.timestamp,
                    row.temperatura_celsius.and_then(|d| d.to_f64()),
                    row.presion_hpa.and_then(|d| d.to_f64()),
                )
            })
            .collect(),
        "temperature",
        "pressure",
    );

    let humidity = minute_series(
        air::Entity::find()
            .filter(air::Column::Timestamp.gte(cutoff))
            .all(&state.db)
            .await
            .map_err(err)?
            .iter()
            .map(|row| {
                (
                    row.timestamp,
                    row.humedad_pct.and_then(|d| d.to_f64()),
                    row.co2_ppm.and_then(|d| d.to_f64()),
                )
            })
            .collect(),
        "humidity",
        "co2",
    );

    let light = minute_series(
        light::Entity::find()
            .filter(light::Column::Timestamp.gte(cutoff))
            .all(&state.db)
            .await
            .map_err(err)?
            .iter()
            .map(|row| {
                (
                    row.timestamp,
                    row.lux.and_then(|d| d.to_f64()),
                    row.indice_uv.and_then(|d| d.to_f64()),
                )
            })
            .collect(),
        "light",
        "uv",
    );

    let soil = minute_series(
        soil::Entity::find()
            .filter(soil::Column::Timestamp.gte(cutoff))
            .all(&state.db)
            .await
            .map_err(err)?
            .iter()
            .map(|row| {
                (
                    row.timestamp,
                    row.humedad_suelo.map(f64::from),
                    row.temperatura_suelo_celsius.and_then(|d| d.to_f64()),
                )
            })
            .collect(),
        "soilMoisture",
        "soilTemp",
    );

    Ok(Json(json!({
        "success": true,
        "data": {
            "temperature": temperature,
            "humidity": humidity,
            "light": light,
            "soil": soil,
        }
    })))
}

/// Latest row of each sensor table, `null` where nothing has been recorded.
#[utoipa::path(
    get,
    path = "/current",
    responses((status = OK, description = "Most recent value per sensor", body = Value))
)]
pub async fn current_values(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let err = |err: DbErr| ApiError::db(err, "Error obteniendo valores actuales");
    let db = &state.db;

    let atmosphere_last = atmosphere::Entity::find()
        .order_by_desc(atmosphere::Column::Timestamp)
        .one(db)
        .await
        .map_err(err)?;
    let air_last = air::Entity::find()
        .order_by_desc(air::Column::Timestamp)
        .one(db)
        .await
        .map_err(err)?;
    let light_last = light::Entity::find()
        .order_by_desc(light::Column::Timestamp)
        .one(db)
        .await
        .map_err(err)?;
    let soil_last = soil::Entity::find()
        .order_by_desc(soil::Column::Timestamp)
        .one(db)
        .await
        .map_err(err)?;

    Ok(Json(json!({
        "success": true,
        "data": {
            "temperature": atmosphere_last.map(|row| json!({
                "temperatura_celsius": row.temperatura_celsius,
                "presion_hpa": row.presion_hpa,
                "timestamp": row.timestamp,
            })),
            "humidity": air_last.map(|row| json!({
                "humedad_pct": row.humedad_pct,
                "co2_ppm": row.co2_ppm,
                "temperatura_celsius": row.temperatura_celsius,
                "timestamp": row.timestamp,
            })),
            "light": light_last.map(|row| json!({
                "lux": row.lux,
                "indice_uv": row.indice_uv,
                "timestamp": row.timestamp,
            })),
            "soil": soil_last.map(|row| json!({
                "humedad_suelo": row.humedad_suelo,
                "temperatura_suelo_celsius": row.temperatura_suelo_celsius,
                "timestamp": row.timestamp,
            })),
        }
    })))
}

/// Reading totals per robot, busiest first. Robots without readings appear
/// with a zero count.
#[utoipa::path(
    get,
    path = "/robots",
    responses((status = OK, description = "Per-robot reading statistics", body = Value))
)]
pub async fn robot_stats(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let err = |err: DbErr| ApiError::db(err, "Error obteniendo estadísticas de robots");
    let now = Utc::now();

    let all_robots = robots::Entity::find().all(&state.db).await.map_err(err)?;

    let mut stats = Vec::with_capacity(all_robots.len());
    for robot in all_robots {
        let total_readings = lecturas::Entity::find()
            .filter(lecturas::Column::RobotUuid.eq(robot.uuid))
            .count(&state.db)
            .await
            .map_err(err)?;
        let last_reading = lecturas::Entity::find()
            .filter(lecturas::Column::RobotUuid.eq(robot.uuid))
            .order_by_desc(lecturas::Column::Timestamp)
            .one(&state.db)
            .await
            .map_err(err)?
            .map(|reading| reading.timestamp);

        stats.push((robot, total_readings, last_reading));
    }

    stats.sort_by(|a, b| b.1.cmp(&a.1));

    let data: Vec<Value> = stats
        .into_iter()
        .map(|(robot, total_readings, last_reading)| {
            json!({
                "nombre": robot.nombre,
                "uuid": robot.uuid,
                "estado": robot.estado,
                "total_readings": total_readings,
                "last_reading": last_reading,
                "minutes_since_last": last_reading.map(|ts| (now - ts).num_minutes()),
            })
        })
        .collect();

    Ok(Json(json!({"success": true, "data": data})))
}
