use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Soil probe: raw moisture (ADC counts) and soil temperature.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sensor_suelo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub lectura_id: i32,
    pub robot_uuid: Uuid,
    pub timestamp: DateTime<Utc>,
    pub humedad_suelo: Option<i32>,
    #[sea_orm(column_type = "Decimal(Some((8, 2)))", nullable)]
    pub temperatura_suelo_celsius: Option<Decimal>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::readings::models::Entity",
        from = "Column::LecturaId",
        to = "crate::readings::models::Column::Id"
    )]
    Reading,
}

impl Related<crate::readings::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reading.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
