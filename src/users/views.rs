use crate::common::auth::{self, AuthUser};
use crate::common::errors::{ApiError, ApiResult};
use crate::common::state::AppState;
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
};
use sea_orm::{ActiveEnum, ActiveModelTrait, EntityTrait, Set};
use serde::Deserialize;
use serde_json::{Value, json};
use utoipa::ToSchema;
use utoipa_axum::{router::OpenApiRouter, routes};

use super::models::{ActiveModel, Entity, UserRole, UserStatus};

/// Session endpoints, mounted under `/api/auth`.
pub fn auth_router(state: &AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(register))
        .routes(routes!(login))
        .routes(routes!(profile))
        .routes(routes!(logout))
        .with_state(state.clone())
}

/// Account settings endpoints, mounted under `/api/users`.
pub fn settings_router(state: &AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(update_profile))
        .routes(routes!(change_password))
        .routes(routes!(save_ai_model))
        .with_state(state.clone())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[derive(Default, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub telefono: Option<String>,
    pub ubicacion: Option<String>,
}

/// Create a new user account.
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = CREATED, description = "User registered", body = Value),
        (status = BAD_REQUEST, description = "Missing fields or duplicate email")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    body: Option<Json<RegisterRequest>>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let request = body.map(|Json(request)| request).unwrap_or_default();

    let (Some(nombre), Some(email), Some(password)) = (
        non_empty(request.nombre),
        non_empty(request.email),
        non_empty(request.password),
    ) else {
        return Err(ApiError::validation(
            "Nombre, email y contraseña son requeridos",
        ));
    };

    if super::services::find_by_email(&state.db, &email)
        .await?
        .is_some()
    {
        return Err(ApiError::validation("El usuario ya existe"));
    }

    let password_hash = auth::hash_password(&password)?;

    let user = ActiveModel {
        nombre: Set(nombre),
        email: Set(email),
        password_hash: Set(password_hash),
        telefono: Set(non_empty(request.telefono)),
        ubicacion: Set(non_empty(request.ubicacion)),
        tipo: Set(UserRole::Usuario),
        estado: Set(UserStatus::Activo),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Usuario registrado exitosamente",
            "data": {
                "id": user.id,
                "nombre": user.nombre,
                "email": user.email,
                "tipo": user.tipo,
                "estado": user.estado,
            },
        })),
    ))
}

#[derive(Default, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Exchange credentials for a bearer token.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = OK, description = "Token issued", body = Value),
        (status = UNAUTHORIZED, description = "Bad credentials or inactive user")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    body: Option<Json<LoginRequest>>,
) -> ApiResult<Json<Value>> {
    let request = body.map(|Json(request)| request).unwrap_or_default();

    let (Some(email), Some(password)) = (non_empty(request.email), non_empty(request.password))
    else {
        return Err(ApiError::validation("Email y contraseña son requeridos"));
    };

    let Some(user) = super::services::find_by_email(&state.db, &email).await? else {
        return Err(ApiError::unauthorized("Credenciales inválidas"));
    };

    if !auth::verify_password(&password, &user.password_hash) {
        return Err(ApiError::unauthorized("Credenciales inválidas"));
    }

    if user.estado != UserStatus::Activo {
        return Err(ApiError::unauthorized("Usuario inactivo"));
    }

    super::services::touch_last_activity(&state.db, user.id).await?;

    let token = auth::create_token(
        user.id,
        &user.email,
        &user.tipo.to_value(),
        &state.config.jwt_secret,
    )?;

    Ok(Json(json!({
        "success": true,
        "message": "Login exitoso",
        "data": {
            "token": token,
            "user": {
                "id": user.id,
                "nombre": user.nombre,
                "email": user.email,
                "tipo": user.tipo,
                "estado": user.estado,
            },
        },
    })))
}

/// Return the authenticated user's public profile.
#[utoipa::path(
    get,
    path = "/profile",
    responses(
        (status = OK, description = "Profile data", body = Value),
        (status = UNAUTHORIZED, description = "Missing or invalid token"),
        (status = NOT_FOUND, description = "User no longer exists")
    )
)]
pub async fn profile(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> ApiResult<Json<Value>> {
    let Some(user) = Entity::find_by_id(claims.user_id).one(&state.db).await? else {
        return Err(ApiError::not_found("Usuario no encontrado"));
    };

    Ok(Json(json!({
        "success": true,
        "data": {
            "id": user.id,
            "nombre": user.nombre,
            "email": user.email,
            "tipo": user.tipo,
            "estado": user.estado,
            "ultima_actividad": user.ultima_actividad,
        },
    })))
}

/// Close the session. Always succeeds, even with a stale token; a valid one
/// stamps the user's last activity on the way out.
#[utoipa::path(
    post,
    path = "/logout",
    responses((status = OK, description = "Session closed", body = Value))
)]
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Json<Value> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    if let Some(token) = token {
        if let Ok(claims) = auth::verify_token(token, &state.config.jwt_secret) {
            if let Err(err) =
                super::services::touch_last_activity(&state.db, claims.user_id).await
            {
                tracing::warn!("Failed to stamp last activity at logout: {err}");
            }
        }
    }

    Json(json!({"success": true, "message": "Logout exitoso"}))
}

#[derive(Default, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub nombre: Option<String>,
    pub email: Option<String>,
}

/// Update the authenticated user's name and email.
#[utoipa::path(
    put,
    path = "/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = OK, description = "Profile updated", body = Value),
        (status = UNAUTHORIZED, description = "Missing or invalid token")
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    body: Option<Json<UpdateProfileRequest>>,
) -> ApiResult<Json<Value>> {
    let request = body.map(|Json(request)| request).unwrap_or_default();

    let (Some(nombre), Some(email)) = (non_empty(request.nombre), non_empty(request.email)) else {
        return Err(ApiError::validation("Nombre y email son requeridos"));
    };

    super::services::set_profile_fields(&state.db, claims.user_id, &nombre, &email)
        .await
        .map_err(|err| ApiError::db(err, "Error al actualizar el perfil."))?;

    Ok(Json(json!({
        "success": true,
        "message": "Perfil actualizado exitosamente.",
    })))
}

#[derive(Default, Deserialize, ToSchema)]
pub struct ChangePasswordRequest {
    #[serde(rename = "oldPassword")]
    pub old_password: Option<String>,
    #[serde(rename = "newPassword")]
    pub new_password: Option<String>,
}

/// Change the authenticated user's password after checking the current one.
#[utoipa::path(
    put,
    path = "/password",
    request_body = ChangePasswordRequest,
    responses(
        (status = OK, description = "Password changed", body = Value),
        (status = BAD_REQUEST, description = "Wrong current password"),
        (status = NOT_FOUND, description = "User no longer exists")
    )
)]
pub async fn change_password(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    body: Option<Json<ChangePasswordRequest>>,
) -> ApiResult<Json<Value>> {
    let request = body.map(|Json(request)| request).unwrap_or_default();

    let (Some(old_password), Some(new_password)) = (
        non_empty(request.old_password),
        non_empty(request.new_password),
    ) else {
        return Err(ApiError::validation(
            "Contraseña actual y nueva son requeridas",
        ));
    };

    let Some(user) = Entity::find_by_id(claims.user_id)
        .one(&state.db)
        .await
        .map_err(|err| ApiError::db(err, "Error al cambiar la contraseña."))?
    else {
        return Err(ApiError::not_found("Usuario no encontrado."));
    };

    if !auth::verify_password(&old_password, &user.password_hash) {
        return Err(ApiError::validation("Contraseña actual incorrecta."));
    }

    let password_hash = auth::hash_password(&new_password)?;
    super::services::set_password_hash(&state.db, user.id, &password_hash)
        .await
        .map_err(|err| ApiError::db(err, "Error al cambiar la contraseña."))?;

    Ok(Json(json!({
        "success": true,
        "message": "Contraseña actualizada exitosamente.",
    })))
}

#[derive(Default, Deserialize, ToSchema)]
pub struct AiModelRequest {
    #[serde(rename = "aiModel")]
    pub ai_model: Option<String>,
}

/// Store the user's preferred AI model for report generation.
#[utoipa::path(
    put,
    path = "/ai-model",
    request_body = AiModelRequest,
    responses(
        (status = OK, description = "Preference saved", body = Value),
        (status = UNAUTHORIZED, description = "Missing or invalid token")
    )
)]
pub async fn save_ai_model(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    body: Option<Json<AiModelRequest>>,
) -> ApiResult<Json<Value>> {
    let request = body.map(|Json(request)| request).unwrap_or_default();

    let Some(ai_model) = non_empty(request.ai_model) else {
        return Err(ApiError::validation("Modelo de IA requerido"));
    };

    super::services::set_ai_model(&state.db, claims.user_id, &ai_model)
        .await
        .map_err(|err| ApiError::db(err, "Error al guardar preferencias de IA."))?;

    Ok(Json(json!({
        "success": true,
        "message": "Preferencias de IA guardadas exitosamente.",
    })))
}
