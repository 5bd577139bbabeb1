/// Shared helpers for the integration test suite.
///
/// Fixtures write through the same entity layer the handlers use so that
/// values (uuids in particular) round-trip identically on SQLite.
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

/// Extract response body as JSON for testing
pub async fn extract_response_body(response: axum::response::Response) -> (StatusCode, Value) {
    use axum::body::to_bytes;

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let body: Value = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        let raw_text = String::from_utf8_lossy(&bytes);
        json!({"error": raw_text})
    });
    (status, body)
}

/// Register a user through the public endpoint and return the response data.
pub async fn register_test_user(
    app: &axum::Router,
    nombre: &str,
    email: &str,
    password: &str,
) -> Value {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/register")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "nombre": nombre,
                        "email": email,
                        "password": password,
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    let (status, body) = extract_response_body(response).await;
    assert_eq!(
        status,
        StatusCode::CREATED,
        "Failed to register test user: {body:?}"
    );
    body["data"].clone()
}

/// Log a registered user in and return the bearer token.
pub async fn login_test_user(app: &axum::Router, email: &str, password: &str) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({"email": email, "password": password}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    let (status, body) = extract_response_body(response).await;
    assert_eq!(status, StatusCode::OK, "Failed to log in: {body:?}");
    body["data"]["token"]
        .as_str()
        .expect("Login response carried no token")
        .to_string()
}

/// Deterministic sensor values for one reading, insertable without going
/// through the random generator endpoint.
#[derive(Clone)]
pub struct ReadingFixture {
    pub timestamp: DateTime<Utc>,
    pub temperatura: f64,
    pub presion: f64,
    pub humedad: f64,
    pub co2: f64,
    pub lux: f64,
    pub indice_uv: f64,
    pub humedad_suelo: i32,
    pub temperatura_suelo: f64,
}

impl Default for ReadingFixture {
    fn default() -> Self {
        ReadingFixture {
            timestamp: Utc::now(),
            temperatura: 25.0,
            presion: 870.0,
            humedad: 60.0,
            co2: 300.0,
            lux: 500.0,
            indice_uv: 5.0,
            humedad_suelo: 300,
            temperatura_suelo: 22.0,
        }
    }
}

fn two_places(value: f64) -> Decimal {
    Decimal::new((value * 100.0).round() as i64, 2)
}

/// Insert one reading plus its four sensor rows and return the reading id.
pub async fn insert_reading(
    db: &DatabaseConnection,
    robot_uuid: Uuid,
    fixture: &ReadingFixture,
) -> i32 {
    let lectura = crate::readings::models::ActiveModel {
        robot_uuid: Set(robot_uuid),
        timestamp: Set(fixture.timestamp),
        latitud: Set(Some(Decimal::new(9_500_000, 6))),
        longitud: Set(Some(Decimal::new(-83_500_000, 6))),
        created_at: Set(fixture.timestamp),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert reading fixture");

    crate::readings::atmosphere::models::ActiveModel {
        lectura_id: Set(lectura.id),
        robot_uuid: Set(robot_uuid),
        timestamp: Set(fixture.timestamp),
        temperatura_celsius: Set(Some(two_places(fixture.temperatura))),
        presion_hpa: Set(Some(two_places(fixture.presion))),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert bmp390 fixture");

    crate::readings::air::models::ActiveModel {
        lectura_id: Set(lectura.id),
        robot_uuid: Set(robot_uuid),
        timestamp: Set(fixture.timestamp),
        humedad_pct: Set(Some(two_places(fixture.humedad))),
        co2_ppm: Set(Some(two_places(fixture.co2))),
        temperatura_celsius: Set(Some(two_places(fixture.temperatura))),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert scd30 fixture");

    crate::readings::light::models::ActiveModel {
        lectura_id: Set(lectura.id),
        robot_uuid: Set(robot_uuid),
        timestamp: Set(fixture.timestamp),
        lux: Set(Some(two_places(fixture.lux))),
        indice_uv: Set(Some(two_places(fixture.indice_uv))),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert ltr390 fixture");

    crate::readings::soil::models::ActiveModel {
        lectura_id: Set(lectura.id),
        robot_uuid: Set(robot_uuid),
        timestamp: Set(fixture.timestamp),
        humedad_suelo: Set(Some(fixture.humedad_suelo)),
        temperatura_suelo_celsius: Set(Some(two_places(fixture.temperatura_suelo))),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert soil fixture");

    lectura.id
}

/// Insert a robot row directly, for tests that need more than the default.
pub async fn insert_robot(db: &DatabaseConnection, nombre: &str, uuid: Uuid) {
    crate::robots::models::ActiveModel {
        nombre: Set(nombre.to_string()),
        uuid: Set(uuid),
        estado: Set(crate::robots::models::RobotStatus::Activo),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert robot fixture");
}
