use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    #[allow(clippy::too_many_lines)]
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create robots table. Robots are provisioned out-of-band and referenced
        // by UUID from every other table, so the UUID carries a unique key.
        manager
            .create_table(
                Table::create()
                    .table(Robots::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Robots::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Robots::Nombre).string().not_null())
                    .col(ColumnDef::new(Robots::Uuid).uuid().not_null().unique_key())
                    .col(
                        ColumnDef::new(Robots::Estado)
                            .string()
                            .not_null()
                            .default("activo"),
                    )
                    .col(
                        ColumnDef::new(Robots::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create lecturas table (one row per sampling event)
        manager
            .create_table(
                Table::create()
                    .table(Lecturas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Lecturas::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Lecturas::RobotUuid).uuid().not_null())
                    .col(
                        ColumnDef::new(Lecturas::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Lecturas::Latitud).decimal_len(10, 6))
                    .col(ColumnDef::new(Lecturas::Longitud).decimal_len(10, 6))
                    .col(
                        ColumnDef::new(Lecturas::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lecturas_robot_uuid")
                            .from(Lecturas::Table, Lecturas::RobotUuid)
                            .to(Robots::Table, Robots::Uuid)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Create sensor_bmp390 table (atmospheric: temperature + pressure)
        manager
            .create_table(
                Table::create()
                    .table(SensorBmp390::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SensorBmp390::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SensorBmp390::LecturaId).integer().not_null())
                    .col(ColumnDef::new(SensorBmp390::RobotUuid).uuid().not_null())
                    .col(
                        ColumnDef::new(SensorBmp390::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SensorBmp390::TemperaturaCelsius).decimal_len(8, 2))
                    .col(ColumnDef::new(SensorBmp390::PresionHpa).decimal_len(8, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sensor_bmp390_lectura_id")
                            .from(SensorBmp390::Table, SensorBmp390::LecturaId)
                            .to(Lecturas::Table, Lecturas::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Create sensor_scd30 table (air: humidity + CO2 + redundant temperature)
        manager
            .create_table(
                Table::create()
                    .table(SensorScd30::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SensorScd30::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SensorScd30::LecturaId).integer().not_null())
                    .col(ColumnDef::new(SensorScd30::RobotUuid).uuid().not_null())
                    .col(
                        ColumnDef::new(SensorScd30::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SensorScd30::HumedadPct).decimal_len(8, 2))
                    .col(ColumnDef::new(SensorScd30::Co2Ppm).decimal_len(8, 2))
                    .col(ColumnDef::new(SensorScd30::TemperaturaCelsius).decimal_len(8, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sensor_scd30_lectura_id")
                            .from(SensorScd30::Table, SensorScd30::LecturaId)
                            .to(Lecturas::Table, Lecturas::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Create sensor_ltr390 table (light: lux + UV index)
        manager
            .create_table(
                Table::create()
                    .table(SensorLtr390::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SensorLtr390::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SensorLtr390::LecturaId).integer().not_null())
                    .col(ColumnDef::new(SensorLtr390::RobotUuid).uuid().not_null())
                    .col(
                        ColumnDef::new(SensorLtr390::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SensorLtr390::Lux).decimal_len(10, 2))
                    .col(ColumnDef::new(SensorLtr390::IndiceUv).decimal_len(8, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sensor_ltr390_lectura_id")
                            .from(SensorLtr390::Table, SensorLtr390::LecturaId)
                            .to(Lecturas::Table, Lecturas::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Create sensor_suelo table (soil: raw moisture + temperature)
        manager
            .create_table(
                Table::create()
                    .table(SensorSuelo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SensorSuelo::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SensorSuelo::LecturaId).integer().not_null())
                    .col(ColumnDef::new(SensorSuelo::RobotUuid).uuid().not_null())
                    .col(
                        ColumnDef::new(SensorSuelo::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SensorSuelo::HumedadSuelo).integer())
                    .col(ColumnDef::new(SensorSuelo::TemperaturaSueloCelsius).decimal_len(8, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sensor_suelo_lectura_id")
                            .from(SensorSuelo::Table, SensorSuelo::LecturaId)
                            .to(Lecturas::Table, Lecturas::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Create usuarios table
        manager
            .create_table(
                Table::create()
                    .table(Usuarios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Usuarios::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Usuarios::Nombre).string().not_null())
                    .col(
                        ColumnDef::new(Usuarios::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Usuarios::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Usuarios::Telefono).string())
                    .col(ColumnDef::new(Usuarios::Ubicacion).string())
                    .col(
                        ColumnDef::new(Usuarios::Tipo)
                            .string()
                            .not_null()
                            .default("usuario"),
                    )
                    .col(
                        ColumnDef::new(Usuarios::Estado)
                            .string()
                            .not_null()
                            .default("activo"),
                    )
                    .col(ColumnDef::new(Usuarios::UltimaActividad).timestamp_with_time_zone())
                    .col(ColumnDef::new(Usuarios::AiModel).string())
                    .col(
                        ColumnDef::new(Usuarios::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create reportes table (append-only markdown analysis reports)
        manager
            .create_table(
                Table::create()
                    .table(Reportes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reportes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reportes::RobotUuid).uuid().not_null())
                    .col(ColumnDef::new(Reportes::Fecha).date().not_null())
                    .col(ColumnDef::new(Reportes::ReporteMd).text().not_null())
                    .col(
                        ColumnDef::new(Reportes::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Reportes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reportes_robot_uuid")
                            .from(Reportes::Table, Reportes::RobotUuid)
                            .to(Robots::Table, Robots::Uuid)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop children before parents to respect foreign keys
        manager
            .drop_table(Table::drop().table(Reportes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SensorSuelo::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SensorLtr390::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SensorScd30::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SensorBmp390::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Lecturas::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Usuarios::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Robots::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Robots {
    Table,
    Id,
    Nombre,
    Uuid,
    Estado,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Lecturas {
    Table,
    Id,
    RobotUuid,
    Timestamp,
    Latitud,
    Longitud,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SensorBmp390 {
    Table,
    Id,
    LecturaId,
    RobotUuid,
    Timestamp,
    TemperaturaCelsius,
    PresionHpa,
}

#[derive(DeriveIden)]
enum SensorScd30 {
    Table,
    Id,
    LecturaId,
    RobotUuid,
    Timestamp,
    HumedadPct,
    Co2Ppm,
    TemperaturaCelsius,
}

#[derive(DeriveIden)]
enum SensorLtr390 {
    Table,
    Id,
    LecturaId,
    RobotUuid,
    Timestamp,
    Lux,
    IndiceUv,
}

#[derive(DeriveIden)]
enum SensorSuelo {
    Table,
    Id,
    LecturaId,
    RobotUuid,
    Timestamp,
    HumedadSuelo,
    TemperaturaSueloCelsius,
}

#[derive(DeriveIden)]
enum Usuarios {
    Table,
    Id,
    Nombre,
    Email,
    PasswordHash,
    Telefono,
    Ubicacion,
    Tipo,
    Estado,
    UltimaActividad,
    AiModel,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Reportes {
    Table,
    Id,
    RobotUuid,
    Fecha,
    ReporteMd,
    Timestamp,
    CreatedAt,
}
