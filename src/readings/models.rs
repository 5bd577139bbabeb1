use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Parent row for one sampling event; the four sensor tables hang off it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lecturas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub robot_uuid: Uuid,
    pub timestamp: DateTime<Utc>,
    #[sea_orm(column_type = "Decimal(Some((10, 6)))", nullable)]
    pub latitud: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((10, 6)))", nullable)]
    pub longitud: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::robots::models::Entity",
        from = "Column::RobotUuid",
        to = "crate::robots::models::Column::Uuid"
    )]
    Robot,
    #[sea_orm(has_many = "super::atmosphere::models::Entity")]
    Atmosphere,
    #[sea_orm(has_many = "super::air::models::Entity")]
    Air,
    #[sea_orm(has_many = "super::light::models::Entity")]
    Light,
    #[sea_orm(has_many = "super::soil::models::Entity")]
    Soil,
}

impl Related<crate::robots::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Robot.def()
    }
}

impl Related<super::atmosphere::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Atmosphere.def()
    }
}

impl Related<super::air::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Air.def()
    }
}

impl Related<super::light::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Light.def()
    }
}

impl Related<super::soil::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Soil.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
