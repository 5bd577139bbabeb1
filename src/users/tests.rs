use crate::common::auth::hash_password;
use crate::common::test_helpers::{extract_response_body, login_test_user, register_test_user};
use crate::config::test_helpers::setup_test_app_with_db;
use crate::users::models::{ActiveModel, Entity, UserRole, UserStatus};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_register_login_and_profile_flow() {
    let (app, _db) = setup_test_app_with_db().await;

    let data = register_test_user(&app, "Ana Rojas", "ana@agrotico.cr", "segura123").await;
    assert_eq!(data["nombre"], "Ana Rojas");
    assert_eq!(data["tipo"], "usuario");
    assert_eq!(data["estado"], "activo");

    let token = login_test_user(&app, "ana@agrotico.cr", "segura123").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/auth/profile")
                .header("authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let (status, body) = extract_response_body(response).await;
    assert_eq!(status, StatusCode::OK, "Profile failed: {body:?}");
    assert_eq!(body["data"]["email"], "ana@agrotico.cr");
    assert_eq!(body["data"]["tipo"], "usuario");
    // login stamped the last activity
    assert!(!body["data"]["ultima_actividad"].is_null());
}

#[tokio::test]
async fn test_register_rejects_missing_fields_and_duplicates() {
    let (app, _db) = setup_test_app_with_db().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/register")
                .header("content-type", "application/json")
                .body(Body::from(json!({"nombre": "Sin Correo"}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = extract_response_body(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Nombre, email y contraseña son requeridos");

    register_test_user(&app, "Ana Rojas", "ana@agrotico.cr", "segura123").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/register")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "nombre": "Otra Ana",
                        "email": "ana@agrotico.cr",
                        "password": "otra123",
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = extract_response_body(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "El usuario ya existe");
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let (app, _db) = setup_test_app_with_db().await;

    register_test_user(&app, "Ana Rojas", "ana@agrotico.cr", "segura123").await;

    for (email, password) in [
        ("ana@agrotico.cr", "incorrecta"),
        ("nadie@agrotico.cr", "segura123"),
    ] {
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
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Credenciales inválidas");
    }

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header("content-type", "application/json")
                .body(Body::from(json!({"email": "ana@agrotico.cr"}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = extract_response_body(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email y contraseña son requeridos");
}

#[tokio::test]
async fn test_login_rejects_inactive_users() {
    let (app, db) = setup_test_app_with_db().await;

    ActiveModel {
        nombre: Set("Usuario Suspendido".to_string()),
        email: Set("suspendido@agrotico.cr".to_string()),
        password_hash: Set(hash_password("segura123").unwrap()),
        tipo: Set(UserRole::Usuario),
        estado: Set(UserStatus::Inactivo),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({"email": "suspendido@agrotico.cr", "password": "segura123"})
                        .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = extract_response_body(response).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Usuario inactivo");
}

#[tokio::test]
async fn test_profile_requires_a_valid_token() {
    let (app, _db) = setup_test_app_with_db().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/auth/profile")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = extract_response_body(response).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Token de acceso requerido");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/auth/profile")
                .header("authorization", "Bearer not-a-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = extract_response_body(response).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Token inválido");
}

#[tokio::test]
async fn test_logout_always_succeeds() {
    let (app, db) = setup_test_app_with_db().await;

    register_test_user(&app, "Ana Rojas", "ana@agrotico.cr", "segura123").await;
    let token = login_test_user(&app, "ana@agrotico.cr", "segura123").await;

    for auth_header in [None, Some("Bearer basura".to_string())] {
        let mut builder = Request::builder().method("POST").uri("/api/auth/logout");
        if let Some(header) = auth_header {
            builder = builder.header("authorization", header);
        }
        let response = app
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let (status, body) = extract_response_body(response).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Logout exitoso");
    }

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/logout")
                .header("authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, _body) = extract_response_body(response).await;
    assert_eq!(status, StatusCode::OK);

    let user = crate::users::services::find_by_email(&db, "ana@agrotico.cr")
        .await
        .unwrap()
        .unwrap();
    assert!(user.ultima_actividad.is_some());
}

#[tokio::test]
async fn test_settings_update_profile_password_and_ai_model() {
    let (app, db) = setup_test_app_with_db().await;

    register_test_user(&app, "Ana Rojas", "ana@agrotico.cr", "segura123").await;
    let token = login_test_user(&app, "ana@agrotico.cr", "segura123").await;

    // Rename and change email
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/users/profile")
                .header("authorization", format!("Bearer {token}"))
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({"nombre": "Ana Rojas Mora", "email": "ana.mora@agrotico.cr"})
                        .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = extract_response_body(response).await;
    assert_eq!(status, StatusCode::OK, "Update profile failed: {body:?}");
    assert_eq!(body["message"], "Perfil actualizado exitosamente.");

    // Wrong current password is rejected
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/users/password")
                .header("authorization", format!("Bearer {token}"))
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({"oldPassword": "incorrecta", "newPassword": "nueva123"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = extract_response_body(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Contraseña actual incorrecta.");

    // Correct current password goes through, old one stops working
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/users/password")
                .header("authorization", format!("Bearer {token}"))
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({"oldPassword": "segura123", "newPassword": "nueva123"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = extract_response_body(response).await;
    assert_eq!(status, StatusCode::OK, "Change password failed: {body:?}");

    let _fresh_token = login_test_user(&app, "ana.mora@agrotico.cr", "nueva123").await;

    // AI model preference persists
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/users/ai-model")
                .header("authorization", format!("Bearer {token}"))
                .header("content-type", "application/json")
                .body(Body::from(json!({"aiModel": "deepseek-chat"}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = extract_response_body(response).await;
    assert_eq!(status, StatusCode::OK, "Save AI model failed: {body:?}");

    let user = Entity::find()
        .one(&db)
        .await
        .unwrap()
        .expect("User should exist");
    assert_eq!(user.nombre, "Ana Rojas Mora");
    assert_eq!(user.ai_model.as_deref(), Some("deepseek-chat"));
}
