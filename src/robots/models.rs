use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::{Uuid, uuid};

/// Robot every deployment ships with; the synthetic record generator targets
/// it when no explicit robot UUID is given.
pub const DEFAULT_ROBOT_UUID: Uuid = uuid!("f7e6de09-0d83-45e2-9d1b-a4dc4aa1c8cc");

#[derive(
    Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, ToSchema, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum RobotStatus {
    #[sea_orm(string_value = "activo")]
    Activo,
    #[sea_orm(string_value = "inactivo")]
    Inactivo,
    #[sea_orm(string_value = "mantenimiento")]
    Mantenimiento,
    #[sea_orm(string_value = "error")]
    Error,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "robots")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    #[sea_orm(unique)]
    pub uuid: Uuid,
    pub estado: RobotStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::readings::models::Entity")]
    Readings,
    #[sea_orm(has_many = "crate::reports::models::Entity")]
    Reports,
}

impl Related<crate::readings::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Readings.def()
    }
}

impl Related<crate::reports::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reports.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
