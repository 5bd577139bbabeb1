use crate::common::test_helpers::{extract_response_body, insert_robot};
use crate::config::test_helpers::setup_test_app_with_db;
use crate::robots::models::DEFAULT_ROBOT_UUID;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::EntityTrait;
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

#[tokio::test]
async fn test_generate_populates_reading_and_all_sensor_tables() {
    let (app, db) = setup_test_app_with_db().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/registros/generate")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let (status, body) = extract_response_body(response).await;
    assert_eq!(status, StatusCode::OK, "Generate failed: {body:?}");
    assert_eq!(body["success"], json!(true));
    assert_eq!(
        body["message"],
        "Nuevo registro de sensores generado exitosamente"
    );
    assert_eq!(body["data"]["robotUuid"], DEFAULT_ROBOT_UUID.to_string());

    let sensores = &body["data"]["sensores"];
    assert!(sensores["temperatura"].as_str().unwrap().ends_with("°C"));
    assert!(sensores["presion"].as_str().unwrap().ends_with(" hPa"));
    assert!(sensores["humedad"].as_str().unwrap().ends_with('%'));
    assert!(sensores["co2"].as_str().unwrap().ends_with(" ppm"));
    assert!(sensores["lux"].as_str().unwrap().ends_with(" lux"));
    assert!(sensores["humedad_suelo"].is_i64());
    assert!(sensores["ubicacion"].as_str().unwrap().contains(", "));

    let lecturas = crate::readings::models::Entity::find().all(&db).await.unwrap();
    assert_eq!(lecturas.len(), 1);
    assert_eq!(lecturas[0].robot_uuid, DEFAULT_ROBOT_UUID);

    let bmp390 = crate::readings::atmosphere::models::Entity::find()
        .all(&db)
        .await
        .unwrap();
    assert_eq!(bmp390.len(), 1);
    assert_eq!(bmp390[0].lectura_id, lecturas[0].id);

    assert_eq!(
        crate::readings::air::models::Entity::find()
            .all(&db)
            .await
            .unwrap()
            .len(),
        1
    );
    assert_eq!(
        crate::readings::light::models::Entity::find()
            .all(&db)
            .await
            .unwrap()
            .len(),
        1
    );
    assert_eq!(
        crate::readings::soil::models::Entity::find()
            .all(&db)
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn test_generate_accepts_an_explicit_robot_uuid() {
    let (app, db) = setup_test_app_with_db().await;

    let other_robot = Uuid::new_v4();
    insert_robot(&db, "AgroBot 02", other_robot).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/registros/generate")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({"robotUuid": other_robot}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    let (status, body) = extract_response_body(response).await;
    assert_eq!(status, StatusCode::OK, "Generate failed: {body:?}");
    assert_eq!(body["data"]["robotUuid"], other_robot.to_string());

    let lecturas = crate::readings::models::Entity::find().all(&db).await.unwrap();
    assert_eq!(lecturas.len(), 1);
    assert_eq!(lecturas[0].robot_uuid, other_robot);
}

#[tokio::test]
async fn test_generate_fails_for_an_unregistered_robot() {
    let (app, _db) = setup_test_app_with_db().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/registros/generate")
                .header("content-type", "application/json")
                .body(Body::from(json!({"robotUuid": Uuid::new_v4()}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let (status, body) = extract_response_body(response).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], "Error generando nuevo registro");
}

#[tokio::test]
async fn test_generated_values_follow_hardware_ranges() {
    let (_app, db) = setup_test_app_with_db().await;

    for _ in 0..10 {
        let sample = crate::readings::services::generate_sample(&db, DEFAULT_ROBOT_UUID)
            .await
            .unwrap();

        assert!(sample.temperatura >= Decimal::from(20) && sample.temperatura <= Decimal::from(35));
        assert!(sample.presion >= Decimal::from(850) && sample.presion <= Decimal::from(950));
        assert!(sample.humedad >= Decimal::from(40) && sample.humedad <= Decimal::from(80));
        assert!(sample.co2 >= Decimal::from(200) && sample.co2 <= Decimal::from(400));
        assert!(sample.lux >= Decimal::ZERO && sample.lux <= Decimal::from(1000));
        assert!(sample.indice_uv >= Decimal::ZERO && sample.indice_uv <= Decimal::from(11));
        assert!((200..600).contains(&sample.humedad_suelo));
        assert!(
            sample.temperatura_suelo >= Decimal::from(15)
                && sample.temperatura_suelo <= Decimal::from(35)
        );
        assert!(sample.latitud >= Decimal::from(9) && sample.latitud <= Decimal::from(11));
        assert!(sample.longitud >= Decimal::from(-84) && sample.longitud <= Decimal::from(-82));

        let now = Utc::now();
        assert!(sample.timestamp <= now);
        assert!(sample.timestamp >= now - Duration::hours(1) - Duration::seconds(5));
    }
}
