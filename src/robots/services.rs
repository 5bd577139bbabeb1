use super::models::{ActiveModel, Column, DEFAULT_ROBOT_UUID, Entity, RobotStatus};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};

/// Provision the default robot if this database has never seen one.
///
/// Robots are normally registered out-of-band, but the synthetic record
/// generator falls back to a well-known UUID that has to resolve on a fresh
/// deployment.
pub async fn ensure_default_robot(db: &DatabaseConnection) -> Result<(), DbErr> {
    let existing = Entity::find()
        .filter(Column::Uuid.eq(DEFAULT_ROBOT_UUID))
        .one(db)
        .await?;

    if existing.is_none() {
        ActiveModel {
            nombre: Set("AgroBot 01".to_string()),
            uuid: Set(DEFAULT_ROBOT_UUID),
            estado: Set(RobotStatus::Activo),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        tracing::info!("Provisioned default robot {DEFAULT_ROBOT_UUID}");
    }

    Ok(())
}
