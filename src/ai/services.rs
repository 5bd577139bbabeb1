//! Aggregate queries feeding the AI endpoints.

use chrono::{Duration, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, QueryResult, Statement};
use uuid::Uuid;

use crate::services::models::SensorSummary;

// Daily averages across the four sensor tables, newest day first. Joining by
// calendar date repeats rows, but per-day averages are unaffected and only
// days present in all four tables survive, which keeps partially ingested
// days out of the summary. The `$N` placeholders bind positionally on both
// Postgres and SQLite.
const DAILY_AVERAGES_SQL: &str = r"
    SELECT
        CAST(AVG(sb.temperatura_celsius) AS DOUBLE PRECISION) AS avg_temp,
        CAST(AVG(sb.presion_hpa) AS DOUBLE PRECISION) AS avg_pressure,
        CAST(AVG(sc.humedad_pct) AS DOUBLE PRECISION) AS avg_humidity,
        CAST(AVG(sc.co2_ppm) AS DOUBLE PRECISION) AS avg_co2,
        CAST(AVG(sl.lux) AS DOUBLE PRECISION) AS avg_light,
        CAST(AVG(sl.indice_uv) AS DOUBLE PRECISION) AS avg_uv,
        CAST(AVG(ss.humedad_suelo) AS DOUBLE PRECISION) AS avg_soil_moisture,
        CAST(AVG(ss.temperatura_suelo_celsius) AS DOUBLE PRECISION) AS avg_soil_temp,
        DATE(sb.timestamp) AS fecha
    FROM sensor_bmp390 sb
    JOIN sensor_scd30 sc ON DATE(sb.timestamp) = DATE(sc.timestamp)
    JOIN sensor_ltr390 sl ON DATE(sb.timestamp) = DATE(sl.timestamp)
    JOIN sensor_suelo ss ON DATE(sb.timestamp) = DATE(ss.timestamp)
    WHERE sb.timestamp >= $1
    GROUP BY DATE(sb.timestamp)
    ORDER BY fecha DESC
    LIMIT $2
";

const ROBOT_DAILY_AVERAGES_SQL: &str = r"
    SELECT
        CAST(AVG(sb.temperatura_celsius) AS DOUBLE PRECISION) AS avg_temp,
        CAST(AVG(sb.presion_hpa) AS DOUBLE PRECISION) AS avg_pressure,
        CAST(AVG(sc.humedad_pct) AS DOUBLE PRECISION) AS avg_humidity,
        CAST(AVG(sc.co2_ppm) AS DOUBLE PRECISION) AS avg_co2,
        CAST(AVG(sl.lux) AS DOUBLE PRECISION) AS avg_light,
        CAST(AVG(sl.indice_uv) AS DOUBLE PRECISION) AS avg_uv,
        CAST(AVG(ss.humedad_suelo) AS DOUBLE PRECISION) AS avg_soil_moisture,
        CAST(AVG(ss.temperatura_suelo_celsius) AS DOUBLE PRECISION) AS avg_soil_temp,
        DATE(sb.timestamp) AS fecha
    FROM sensor_bmp390 sb
    JOIN sensor_scd30 sc ON DATE(sb.timestamp) = DATE(sc.timestamp)
    JOIN sensor_ltr390 sl ON DATE(sb.timestamp) = DATE(sl.timestamp)
    JOIN sensor_suelo ss ON DATE(sb.timestamp) = DATE(ss.timestamp)
    WHERE sb.timestamp >= $1
      AND sb.robot_uuid = $2
      AND sc.robot_uuid = $2
      AND sl.robot_uuid = $2
      AND ss.robot_uuid = $2
    GROUP BY DATE(sb.timestamp)
    ORDER BY fecha DESC
    LIMIT $3
";

/// Averages the daily sensor averages over the lookback window, optionally
/// restricted to one robot. Returns `None` when the window holds no data.
pub async fn fetch_recent_sensor_averages(
    db: &DatabaseConnection,
    robot_uuid: Option<Uuid>,
    lookback_days: i64,
) -> Result<Option<SensorSummary>, DbErr> {
    let cutoff = Utc::now() - Duration::days(lookback_days);

    let statement = match robot_uuid {
        Some(uuid) => Statement::from_sql_and_values(
            db.get_database_backend(),
            ROBOT_DAILY_AVERAGES_SQL,
            vec![cutoff.into(), uuid.into(), lookback_days.into()],
        ),
        None => Statement::from_sql_and_values(
            db.get_database_backend(),
            DAILY_AVERAGES_SQL,
            vec![cutoff.into(), lookback_days.into()],
        ),
    };

    let days = db.query_all(statement).await?;
    if days.is_empty() {
        return Ok(None);
    }

    let mut temp = 0.0;
    let mut pressure = 0.0;
    let mut humidity = 0.0;
    let mut co2 = 0.0;
    let mut light = 0.0;
    let mut uv = 0.0;
    let mut soil_moisture = 0.0;
    let mut soil_temp = 0.0;
    for day in &days {
        temp += column(day, "avg_temp")?;
        pressure += column(day, "avg_pressure")?;
        humidity += column(day, "avg_humidity")?;
        co2 += column(day, "avg_co2")?;
        light += column(day, "avg_light")?;
        uv += column(day, "avg_uv")?;
        soil_moisture += column(day, "avg_soil_moisture")?;
        soil_temp += column(day, "avg_soil_temp")?;
    }

    let count = days.len() as f64;
    Ok(Some(SensorSummary {
        temperatura_promedio: temp / count,
        humedad_promedio: humidity / count,
        presion_promedio: pressure / count,
        co2_promedio: co2 / count,
        luz_promedio: light / count,
        uv_promedio: uv / count,
        humedad_suelo_promedio: soil_moisture / count,
        temperatura_suelo_promedio: soil_temp / count,
        dias_analizados: days.len() as i64,
    }))
}

/// A day where every reading of a column is NULL averages to NULL; the
/// summary treats that as zero rather than dropping the day.
fn column(row: &QueryResult, name: &str) -> Result<f64, DbErr> {
    Ok(row.try_get::<Option<f64>>("", name)?.unwrap_or(0.0))
}
