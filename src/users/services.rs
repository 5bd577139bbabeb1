use super::models::{Column, Entity, Model};
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<Model>, DbErr> {
    Entity::find().filter(Column::Email.eq(email)).one(db).await
}

/// Stamp `ultima_actividad` with the current time. Touching a user that no
/// longer exists is a no-op.
pub async fn touch_last_activity(db: &DatabaseConnection, user_id: i32) -> Result<(), DbErr> {
    Entity::update_many()
        .col_expr(Column::UltimaActividad, Expr::value(Some(Utc::now())))
        .filter(Column::Id.eq(user_id))
        .exec(db)
        .await?;
    Ok(())
}

pub async fn set_profile_fields(
    db: &DatabaseConnection,
    user_id: i32,
    nombre: &str,
    email: &str,
) -> Result<(), DbErr> {
    Entity::update_many()
        .col_expr(Column::Nombre, Expr::value(nombre))
        .col_expr(Column::Email, Expr::value(email))
        .filter(Column::Id.eq(user_id))
        .exec(db)
        .await?;
    Ok(())
}

pub async fn set_password_hash(
    db: &DatabaseConnection,
    user_id: i32,
    password_hash: &str,
) -> Result<(), DbErr> {
    Entity::update_many()
        .col_expr(Column::PasswordHash, Expr::value(password_hash))
        .filter(Column::Id.eq(user_id))
        .exec(db)
        .await?;
    Ok(())
}

pub async fn set_ai_model(
    db: &DatabaseConnection,
    user_id: i32,
    ai_model: &str,
) -> Result<(), DbErr> {
    Entity::update_many()
        .col_expr(Column::AiModel, Expr::value(Some(ai_model.to_string())))
        .filter(Column::Id.eq(user_id))
        .exec(db)
        .await?;
    Ok(())
}
