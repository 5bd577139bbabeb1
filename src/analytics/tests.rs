use crate::common::test_helpers::{
    ReadingFixture, extract_response_body, insert_reading, insert_robot,
};
use crate::config::test_helpers::setup_test_app_with_db;
use crate::robots::models::DEFAULT_ROBOT_UUID;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Duration, Timelike, Utc};
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

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
async fn test_overview_on_a_fresh_database() {
    let (app, _db) = setup_test_app_with_db().await;

    let (status, body) = get(&app, "/api/analytics/overview").await;
    assert_eq!(status, StatusCode::OK, "Overview failed: {body:?}");
    assert_eq!(body["success"], json!(true));

    let data = &body["data"];
    assert_eq!(data["totalRobots"], json!(1));
    assert_eq!(data["activeRobots"], json!(1));
    assert_eq!(data["totalReadings"], json!(0));
    assert_eq!(data["todayReadings"], json!(0));
    assert!(data["lastReading"].is_null());
    assert!(data["uptime"].is_u64());
}

#[tokio::test]
async fn test_overview_splits_today_from_the_total() {
    let (app, db) = setup_test_app_with_db().await;

    for _ in 0..2 {
        insert_reading(&db, DEFAULT_ROBOT_UUID, &ReadingFixture::default()).await;
    }
    let stale = ReadingFixture {
        timestamp: Utc::now() - Duration::days(3),
        ..ReadingFixture::default()
    };
    insert_reading(&db, DEFAULT_ROBOT_UUID, &stale).await;

    let (status, body) = get(&app, "/api/analytics/overview").await;
    assert_eq!(status, StatusCode::OK, "Overview failed: {body:?}");

    let data = &body["data"];
    assert_eq!(data["totalReadings"], json!(3));
    assert_eq!(data["todayReadings"], json!(2));
    assert!(data["lastReading"].is_string());
}

#[tokio::test]
async fn test_sensor_series_averages_rows_sharing_a_minute() {
    let (app, db) = setup_test_app_with_db().await;

    let base = (Utc::now() - Duration::hours(1))
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap();
    let next_minute = base + Duration::minutes(1);

    for (timestamp, temperatura) in [(base, 20.0), (next_minute, 20.0), (next_minute, 30.0)] {
        let fixture = ReadingFixture {
            timestamp,
            temperatura,
            ..ReadingFixture::default()
        };
        insert_reading(&db, DEFAULT_ROBOT_UUID, &fixture).await;
    }
    // Outside the default 24 hour window.
    let old = ReadingFixture {
        timestamp: Utc::now() - Duration::hours(48),
        temperatura: 99.0,
        ..ReadingFixture::default()
    };
    insert_reading(&db, DEFAULT_ROBOT_UUID, &old).await;

    let (status, body) = get(&app, "/api/analytics/sensors").await;
    assert_eq!(status, StatusCode::OK, "Sensor series failed: {body:?}");

    let temperature = body["data"]["temperature"].as_array().unwrap();
    assert_eq!(temperature.len(), 2);
    assert_eq!(temperature[0]["time"], base.format("%H:%M").to_string());
    assert!((temperature[0]["temperature"].as_f64().unwrap() - 20.0).abs() < 1e-9);
    assert_eq!(
        temperature[1]["time"],
        next_minute.format("%H:%M").to_string()
    );
    assert!((temperature[1]["temperature"].as_f64().unwrap() - 25.0).abs() < 1e-9);
    assert!((temperature[1]["pressure"].as_f64().unwrap() - 870.0).abs() < 1e-9);

    let soil = body["data"]["soil"].as_array().unwrap();
    assert_eq!(soil.len(), 2);
    assert!((soil[0]["soilMoisture"].as_f64().unwrap() - 300.0).abs() < 1e-9);

    // Widening the window brings the old reading back.
    let (_, wide) = get(&app, "/api/analytics/sensors?hours=72").await;
    assert_eq!(wide["data"]["temperature"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_current_values_returns_the_latest_row_per_sensor() {
    let (app, db) = setup_test_app_with_db().await;

    let (status, body) = get(&app, "/api/analytics/current").await;
    assert_eq!(status, StatusCode::OK);
    for key in ["temperature", "humidity", "light", "soil"] {
        assert!(body["data"][key].is_null(), "{key} should start out null");
    }

    let older = ReadingFixture {
        timestamp: Utc::now() - Duration::hours(1),
        temperatura: 20.0,
        ..ReadingFixture::default()
    };
    insert_reading(&db, DEFAULT_ROBOT_UUID, &older).await;
    let newer = ReadingFixture {
        temperatura: 30.0,
        ..ReadingFixture::default()
    };
    insert_reading(&db, DEFAULT_ROBOT_UUID, &newer).await;

    let (status, body) = get(&app, "/api/analytics/current").await;
    assert_eq!(status, StatusCode::OK, "Current values failed: {body:?}");

    let data = &body["data"];
    // Decimal columns serialize as strings; compare numerically since SQLite
    // does not preserve scale.
    let temperatura = data["temperature"]["temperatura_celsius"]
        .as_str()
        .unwrap()
        .parse::<f64>()
        .unwrap();
    assert!((temperatura - 30.0).abs() < 1e-9);
    let co2 = data["humidity"]["co2_ppm"]
        .as_str()
        .unwrap()
        .parse::<f64>()
        .unwrap();
    assert!((co2 - 300.0).abs() < 1e-9);
    let lux = data["light"]["lux"].as_str().unwrap().parse::<f64>().unwrap();
    assert!((lux - 500.0).abs() < 1e-9);
    assert_eq!(data["soil"]["humedad_suelo"].as_i64().unwrap(), 300);
    assert!(data["temperature"]["timestamp"].is_string());
}

#[tokio::test]
async fn test_robot_stats_orders_by_reading_count() {
    let (app, db) = setup_test_app_with_db().await;

    let robot_b = Uuid::new_v4();
    let robot_c = Uuid::new_v4();
    insert_robot(&db, "AgroBot 02", robot_b).await;
    insert_robot(&db, "AgroBot 03", robot_c).await;

    for _ in 0..3 {
        insert_reading(&db, DEFAULT_ROBOT_UUID, &ReadingFixture::default()).await;
    }
    insert_reading(&db, robot_b, &ReadingFixture::default()).await;

    let (status, body) = get(&app, "/api/analytics/robots").await;
    assert_eq!(status, StatusCode::OK, "Robot stats failed: {body:?}");

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);

    assert_eq!(data[0]["uuid"], DEFAULT_ROBOT_UUID.to_string());
    assert_eq!(data[0]["nombre"], "AgroBot 01");
    assert_eq!(data[0]["estado"], "activo");
    assert_eq!(data[0]["total_readings"], json!(3));
    assert!(data[0]["minutes_since_last"].is_i64());

    assert_eq!(data[1]["uuid"], robot_b.to_string());
    assert_eq!(data[1]["total_readings"], json!(1));

    assert_eq!(data[2]["uuid"], robot_c.to_string());
    assert_eq!(data[2]["total_readings"], json!(0));
    assert!(data[2]["last_reading"].is_null());
    assert!(data[2]["minutes_since_last"].is_null());
}
