use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    #[allow(clippy::too_many_lines)]
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ============ LECTURAS INDEXES ============
        manager
            .create_index(
                Index::create()
                    .name("idx_lecturas_robot_uuid")
                    .table(Lecturas::Table)
                    .col(Lecturas::RobotUuid)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lecturas_timestamp")
                    .table(Lecturas::Table)
                    .col(Lecturas::Timestamp)
                    .to_owned(),
            )
            .await?;

        // ============ SENSOR TABLE INDEXES ============
        // The analytics endpoints aggregate over time windows, so each sensor
        // table gets a timestamp index plus the parent-reading lookup.
        manager
            .create_index(
                Index::create()
                    .name("idx_sensor_bmp390_timestamp")
                    .table(SensorBmp390::Table)
                    .col(SensorBmp390::Timestamp)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sensor_bmp390_lectura_id")
                    .table(SensorBmp390::Table)
                    .col(SensorBmp390::LecturaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sensor_scd30_timestamp")
                    .table(SensorScd30::Table)
                    .col(SensorScd30::Timestamp)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sensor_scd30_lectura_id")
                    .table(SensorScd30::Table)
                    .col(SensorScd30::LecturaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sensor_ltr390_timestamp")
                    .table(SensorLtr390::Table)
                    .col(SensorLtr390::Timestamp)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sensor_ltr390_lectura_id")
                    .table(SensorLtr390::Table)
                    .col(SensorLtr390::LecturaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sensor_suelo_timestamp")
                    .table(SensorSuelo::Table)
                    .col(SensorSuelo::Timestamp)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sensor_suelo_lectura_id")
                    .table(SensorSuelo::Table)
                    .col(SensorSuelo::LecturaId)
                    .to_owned(),
            )
            .await?;

        // ============ REPORTES INDEXES ============
        manager
            .create_index(
                Index::create()
                    .name("idx_reportes_robot_uuid")
                    .table(Reportes::Table)
                    .col(Reportes::RobotUuid)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reportes_timestamp")
                    .table(Reportes::Table)
                    .col(Reportes::Timestamp)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_lecturas_robot_uuid")
                    .table(Lecturas::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_lecturas_timestamp")
                    .table(Lecturas::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_sensor_bmp390_timestamp")
                    .table(SensorBmp390::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_sensor_bmp390_lectura_id")
                    .table(SensorBmp390::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_sensor_scd30_timestamp")
                    .table(SensorScd30::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_sensor_scd30_lectura_id")
                    .table(SensorScd30::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_sensor_ltr390_timestamp")
                    .table(SensorLtr390::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_sensor_ltr390_lectura_id")
                    .table(SensorLtr390::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_sensor_suelo_timestamp")
                    .table(SensorSuelo::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_sensor_suelo_lectura_id")
                    .table(SensorSuelo::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_reportes_robot_uuid")
                    .table(Reportes::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_reportes_timestamp")
                    .table(Reportes::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Lecturas {
    Table,
    RobotUuid,
    Timestamp,
}

#[derive(DeriveIden)]
enum SensorBmp390 {
    Table,
    LecturaId,
    Timestamp,
}

#[derive(DeriveIden)]
enum SensorScd30 {
    Table,
    LecturaId,
    Timestamp,
}

#[derive(DeriveIden)]
enum SensorLtr390 {
    Table,
    LecturaId,
    Timestamp,
}

#[derive(DeriveIden)]
enum SensorSuelo {
    Table,
    LecturaId,
    Timestamp,
}

#[derive(DeriveIden)]
enum Reportes {
    Table,
    RobotUuid,
    Timestamp,
}
