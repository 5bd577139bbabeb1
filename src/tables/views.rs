use crate::common::errors::{ApiError, ApiResult};
use crate::common::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{SecondsFormat, Utc};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QuerySelect};
use serde::Serialize;
use serde_json::{Value, json};
use utoipa_axum::{router::OpenApiRouter, routes};

/// Data tables reachable through the introspection endpoints. Names arrive as
/// path parameters, so lookups go through this registry instead of splicing
/// identifiers into SQL.
const TABLE_NAMES: [&str; 8] = [
    "robots",
    "lecturas",
    "sensor_bmp390",
    "sensor_scd30",
    "sensor_ltr390",
    "sensor_suelo",
    "usuarios",
    "reportes",
];

/// Row cap per table in introspection payloads.
const ROW_LIMIT: u64 = 100;

pub fn router(state: &AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(list_tables))
        .routes(routes!(table_detail))
        .routes(routes!(dashboard))
        .with_state(state.clone())
}

fn column(
    name: &str,
    data_type: &str,
    nullable: bool,
    default: Option<&str>,
    key: &str,
    extra: &str,
) -> Value {
    json!({
        "COLUMN_NAME": name,
        "DATA_TYPE": data_type,
        "IS_NULLABLE": if nullable { "YES" } else { "NO" },
        "COLUMN_DEFAULT": default,
        "COLUMN_KEY": key,
        "EXTRA": extra,
    })
}

/// Column metadata in the shape the dashboard's schema browser renders,
/// mirroring what the migrations create.
#[allow(clippy::too_many_lines)]
fn table_columns(table: &str) -> Vec<Value> {
    match table {
        "robots" => vec![
            column("id", "int", false, None, "PRI", "auto_increment"),
            column("nombre", "varchar", false, None, "", ""),
            column("uuid", "uuid", false, None, "UNI", ""),
            column("estado", "varchar", false, Some("activo"), "", ""),
            column(
                "created_at",
                "timestamp",
                false,
                Some("CURRENT_TIMESTAMP"),
                "",
                "",
            ),
        ],
        "lecturas" => vec![
            column("id", "int", false, None, "PRI", "auto_increment"),
            column("robot_uuid", "uuid", false, None, "MUL", ""),
            column("timestamp", "timestamp", false, None, "MUL", ""),
            column("latitud", "decimal", true, None, "", ""),
            column("longitud", "decimal", true, None, "", ""),
            column(
                "created_at",
                "timestamp",
                false,
                Some("CURRENT_TIMESTAMP"),
                "",
                "",
            ),
        ],
        "sensor_bmp390" => vec![
            column("id", "int", false, None, "PRI", "auto_increment"),
            column("lectura_id", "int", false, None, "MUL", ""),
            column("robot_uuid", "uuid", false, None, "", ""),
            column("timestamp", "timestamp", false, None, "MUL", ""),
            column("temperatura_celsius", "decimal", true, None, "", ""),
            column("presion_hpa", "decimal", true, None, "", ""),
        ],
        "sensor_scd30" => vec![
            column("id", "int", false, None, "PRI", "auto_increment"),
            column("lectura_id", "int", false, None, "MUL", ""),
            column("robot_uuid", "uuid", false, None, "", ""),
            column("timestamp", "timestamp", false, None, "MUL", ""),
            column("humedad_pct", "decimal", true, None, "", ""),
            column("co2_ppm", "decimal", true, None, "", ""),
            column("temperatura_celsius", "decimal", true, None, "", ""),
        ],
        "sensor_ltr390" => vec![
            column("id", "int", false, None, "PRI", "auto_increment"),
            column("lectura_id", "int", false, None, "MUL", ""),
            column("robot_uuid", "uuid", false, None, "", ""),
            column("timestamp", "timestamp", false, None, "MUL", ""),
            column("lux", "decimal", true, None, "", ""),
            column("indice_uv", "decimal", true, None, "", ""),
        ],
        "sensor_suelo" => vec![
            column("id", "int", false, None, "PRI", "auto_increment"),
            column("lectura_id", "int", false, None, "MUL", ""),
            column("robot_uuid", "uuid", false, None, "", ""),
            column("timestamp", "timestamp", false, None, "MUL", ""),
            column("humedad_suelo", "int", true, None, "", ""),
            column("temperatura_suelo_celsius", "decimal", true, None, "", ""),
        ],
        "usuarios" => vec![
            column("id", "int", false, None, "PRI", "auto_increment"),
            column("nombre", "varchar", false, None, "", ""),
            column("email", "varchar", false, None, "UNI", ""),
            column("password_hash", "varchar", false, None, "", ""),
            column("telefono", "varchar", true, None, "", ""),
            column("ubicacion", "varchar", true, None, "", ""),
            column("tipo", "varchar", false, Some("usuario"), "", ""),
            column("estado", "varchar", false, Some("activo"), "", ""),
            column("ultima_actividad", "timestamp", true, None, "", ""),
            column("ai_model", "varchar", true, None, "", ""),
            column(
                "created_at",
                "timestamp",
                false,
                Some("CURRENT_TIMESTAMP"),
                "",
                "",
            ),
        ],
        "reportes" => vec![
            column("id", "int", false, None, "PRI", "auto_increment"),
            column("robot_uuid", "uuid", false, None, "MUL", ""),
            column("fecha", "date", false, None, "", ""),
            column("reporte_md", "text", false, None, "", ""),
            column(
                "timestamp",
                "timestamp",
                false,
                Some("CURRENT_TIMESTAMP"),
                "MUL",
                "",
            ),
            column(
                "created_at",
                "timestamp",
                false,
                Some("CURRENT_TIMESTAMP"),
                "",
                "",
            ),
        ],
        _ => Vec::new(),
    }
}

/// First `ROW_LIMIT` rows plus the total count for one entity. Rows pass
/// through the model's serde so columns like `password_hash` stay hidden.
async fn fetch<E>(db: &DatabaseConnection) -> Result<(Vec<Value>, u64), DbErr>
where
    E: EntityTrait,
    E::Model: Serialize + Sync + 'static,
{
    let total = E::find().count(db).await?;
    let rows = E::find().limit(ROW_LIMIT).all(db).await?;
    let data = rows
        .into_iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| DbErr::Custom(err.to_string()))?;
    Ok((data, total))
}

/// Full introspection payload for one table, `None` when the name is not in
/// the registry.
async fn table_info(db: &DatabaseConnection, table: &str) -> Result<Option<Value>, DbErr> {
    let (data, total) = match table {
        "robots" => fetch::<crate::robots::models::Entity>(db).await?,
        "lecturas" => fetch::<crate::readings::models::Entity>(db).await?,
        "sensor_bmp390" => fetch::<crate::readings::atmosphere::models::Entity>(db).await?,
        "sensor_scd30" => fetch::<crate::readings::air::models::Entity>(db).await?,
        "sensor_ltr390" => fetch::<crate::readings::light::models::Entity>(db).await?,
        "sensor_suelo" => fetch::<crate::readings::soil::models::Entity>(db).await?,
        "usuarios" => fetch::<crate::users::models::Entity>(db).await?,
        "reportes" => fetch::<crate::reports::models::Entity>(db).await?,
        _ => return Ok(None),
    };

    Ok(Some(json!({
        "name": table,
        "columns": table_columns(table),
        "data": data,
        "totalRecords": total,
    })))
}

/// Names of the data tables the dashboard may browse.
#[utoipa::path(
    get,
    path = "/tables",
    responses((status = OK, description = "Known table names", body = Value))
)]
pub async fn list_tables() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "Tablas obtenidas exitosamente",
        "data": TABLE_NAMES,
        "count": TABLE_NAMES.len(),
    }))
}

/// Column metadata plus the first rows of one table.
#[utoipa::path(
    get,
    path = "/tables/{table_name}",
    params(("table_name" = String, Path, description = "Table to inspect")),
    responses(
        (status = OK, description = "Table contents", body = Value),
        (status = NOT_FOUND, description = "Unknown table name")
    )
)]
pub async fn table_detail(
    State(state): State<AppState>,
    Path(table_name): Path<String>,
) -> ApiResult<Json<Value>> {
    let info = table_info(&state.db, &table_name)
        .await
        .map_err(|err| {
            ApiError::db(
                err,
                format!("Error obteniendo información de la tabla {table_name}"),
            )
        })?
        .ok_or_else(|| ApiError::not_found(format!("Tabla {table_name} no encontrada")))?;

    Ok(Json(json!({
        "success": true,
        "message": format!("Información de la tabla {table_name} obtenida exitosamente"),
        "data": info,
    })))
}

/// Every table's contents in one payload. A table that fails to load degrades
/// to an empty entry carrying the error instead of failing the response.
#[utoipa::path(
    get,
    path = "/dashboard",
    responses((status = OK, description = "All tables with their rows", body = Value))
)]
pub async fn dashboard(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let mut tables = Vec::with_capacity(TABLE_NAMES.len());
    for name in TABLE_NAMES {
        let entry = match table_info(&state.db, name).await {
            Ok(Some(info)) => info,
            Ok(None) => continue,
            Err(err) => {
                tracing::error!("Error procesando tabla {name}: {err}");
                json!({
                    "name": name,
                    "error": err.to_string(),
                    "columns": [],
                    "data": [],
                    "totalRecords": 0,
                })
            }
        };
        tables.push(entry);
    }

    Ok(Json(json!({
        "success": true,
        "message": "Dashboard generado exitosamente",
        "data": {
            "tables": tables,
            "summary": {
                "totalTables": TABLE_NAMES.len(),
                "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            },
        },
    })))
}
