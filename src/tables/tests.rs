use crate::common::test_helpers::{
    ReadingFixture, extract_response_body, insert_reading, register_test_user,
};
use crate::config::test_helpers::setup_test_app_with_db;
use crate::robots::models::DEFAULT_ROBOT_UUID;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

async fn get(app: &axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    extract_response_body(response).await
}

#[tokio::test]
async fn test_tables_lists_the_fixed_registry() {
    let (app, _db) = setup_test_app_with_db().await;

    let (status, body) = get(&app, "/api/tables").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], "Tablas obtenidas exitosamente");
    assert_eq!(body["count"], json!(8));

    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|name| name.as_str().unwrap())
        .collect();
    assert!(names.contains(&"robots"));
    assert!(names.contains(&"lecturas"));
    assert!(names.contains(&"sensor_suelo"));
    assert!(names.contains(&"reportes"));
}

#[tokio::test]
async fn test_table_detail_returns_columns_rows_and_count() {
    let (app, db) = setup_test_app_with_db().await;
    insert_reading(&db, DEFAULT_ROBOT_UUID, &ReadingFixture::default()).await;

    let (status, body) = get(&app, "/api/tables/lecturas").await;
    assert_eq!(status, StatusCode::OK, "Table detail failed: {body:?}");
    assert_eq!(
        body["message"],
        "Información de la tabla lecturas obtenida exitosamente"
    );

    let info = &body["data"];
    assert_eq!(info["name"], "lecturas");
    assert_eq!(info["totalRecords"], json!(1));

    let rows = info["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["robot_uuid"], DEFAULT_ROBOT_UUID.to_string());

    let columns = info["columns"].as_array().unwrap();
    assert_eq!(columns[0]["COLUMN_NAME"], "id");
    assert_eq!(columns[0]["COLUMN_KEY"], "PRI");
    assert!(
        columns
            .iter()
            .any(|col| col["COLUMN_NAME"] == "robot_uuid" && col["COLUMN_KEY"] == "MUL")
    );
}

#[tokio::test]
async fn test_table_detail_rejects_unknown_names() {
    let (app, _db) = setup_test_app_with_db().await;

    let (status, body) = get(&app, "/api/tables/informacion_secreta").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], "Tabla informacion_secreta no encontrada");
}

#[tokio::test]
async fn test_usuarios_rows_never_carry_password_hashes() {
    let (app, _db) = setup_test_app_with_db().await;
    register_test_user(&app, "Ana", "ana@agrotico.cr", "siembra-2025").await;

    let (status, body) = get(&app, "/api/tables/usuarios").await;
    assert_eq!(status, StatusCode::OK, "Table detail failed: {body:?}");

    let rows = body["data"]["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["email"], "ana@agrotico.cr");
    assert!(rows[0].get("password_hash").is_none());
}

#[tokio::test]
async fn test_dashboard_snapshots_every_table() {
    let (app, db) = setup_test_app_with_db().await;
    insert_reading(&db, DEFAULT_ROBOT_UUID, &ReadingFixture::default()).await;

    let (status, body) = get(&app, "/api/dashboard").await;
    assert_eq!(status, StatusCode::OK, "Dashboard failed: {body:?}");
    assert_eq!(body["message"], "Dashboard generado exitosamente");

    let data = &body["data"];
    assert_eq!(data["summary"]["totalTables"], json!(8));
    assert!(data["summary"]["timestamp"].as_str().unwrap().ends_with('Z'));

    let tables = data["tables"].as_array().unwrap();
    assert_eq!(tables.len(), 8);
    assert!(tables.iter().all(|t| t.get("error").is_none()));

    let lecturas = tables.iter().find(|t| t["name"] == "lecturas").unwrap();
    assert_eq!(lecturas["totalRecords"], json!(1));
    let robots = tables.iter().find(|t| t["name"] == "robots").unwrap();
    assert_eq!(robots["totalRecords"], json!(1));
}
