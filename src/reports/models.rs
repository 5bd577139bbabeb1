use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generated agronomy report, stored as markdown. Rows are append-only.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reportes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub robot_uuid: Uuid,
    pub fecha: Date,
    #[sea_orm(column_type = "Text")]
    pub reporte_md: String,
    pub timestamp: DateTime<Utc>,
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
}

impl Related<crate::robots::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Robot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
