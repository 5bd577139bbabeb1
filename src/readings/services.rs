use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set, TransactionTrait};
use uuid::Uuid;

/// One synthetic sampling event after insertion, with the values that were
/// written to each sensor table.
pub struct GeneratedSample {
    pub lectura_id: i32,
    pub robot_uuid: Uuid,
    pub timestamp: DateTime<Utc>,
    pub temperatura: Decimal,
    pub presion: Decimal,
    pub humedad: Decimal,
    pub co2: Decimal,
    pub lux: Decimal,
    pub indice_uv: Decimal,
    pub humedad_suelo: i32,
    pub temperatura_suelo: Decimal,
    pub latitud: Decimal,
    pub longitud: Decimal,
}

fn scaled(value: f64, places: u32) -> Decimal {
    let factor = 10f64.powi(places.try_into().unwrap_or(0));
    Decimal::new((value * factor).round() as i64, places)
}

/// Generate one plausible field sample for `robot_uuid` and persist it across
/// the reading row and all four sensor tables in a single transaction.
///
/// Values follow the hardware's nominal ranges (e.g. 20-35 C ambient, 850-950
/// hPa, 200-600 raw soil counts) and the coordinates land inside Costa Rica.
/// The timestamp is randomised within the past hour so repeated calls build up
/// a spread-out series instead of a single burst.
pub async fn generate_sample(
    db: &DatabaseConnection,
    robot_uuid: Uuid,
) -> Result<GeneratedSample, DbErr> {
    let now = Utc::now();

    // ThreadRng is !Send, so it must go out of scope before the first await
    // for the returned future to stay Send (drop() alone does not end the
    // generator capture).
    let (
        timestamp,
        temperatura,
        presion,
        humedad,
        co2,
        lux,
        indice_uv,
        humedad_suelo,
        temperatura_suelo,
        latitud,
        longitud,
    ) = {
        let mut rng = rand::rng();

        let offset_ms = (rng.random::<f64>() * 3_600_000.0) as i64;
        let timestamp = now - Duration::milliseconds(offset_ms);

        let temperatura = scaled(20.0 + rng.random::<f64>() * 15.0, 2);
        let presion = scaled(850.0 + rng.random::<f64>() * 100.0, 2);
        let humedad = scaled(40.0 + rng.random::<f64>() * 40.0, 2);
        let co2 = scaled(200.0 + rng.random::<f64>() * 200.0, 2);
        let lux = scaled(rng.random::<f64>() * 1000.0, 2);
        let indice_uv = scaled(rng.random::<f64>() * 11.0, 2);
        let humedad_suelo = (200.0 + rng.random::<f64>() * 400.0).floor() as i32;
        let temperatura_suelo = scaled(15.0 + rng.random::<f64>() * 20.0, 2);
        let latitud = scaled(9.0 + rng.random::<f64>() * 2.0, 6);
        let longitud = scaled(-84.0 + rng.random::<f64>() * 2.0, 6);

        (
            timestamp,
            temperatura,
            presion,
            humedad,
            co2,
            lux,
            indice_uv,
            humedad_suelo,
            temperatura_suelo,
            latitud,
            longitud,
        )
    };

    let txn = db.begin().await?;

    let lectura = super::models::ActiveModel {
        robot_uuid: Set(robot_uuid),
        timestamp: Set(timestamp),
        latitud: Set(Some(latitud)),
        longitud: Set(Some(longitud)),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    super::atmosphere::models::ActiveModel {
        lectura_id: Set(lectura.id),
        robot_uuid: Set(robot_uuid),
        timestamp: Set(timestamp),
        temperatura_celsius: Set(Some(temperatura)),
        presion_hpa: Set(Some(presion)),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    super::air::models::ActiveModel {
        lectura_id: Set(lectura.id),
        robot_uuid: Set(robot_uuid),
        timestamp: Set(timestamp),
        humedad_pct: Set(Some(humedad)),
        co2_ppm: Set(Some(co2)),
        temperatura_celsius: Set(Some(temperatura)),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    super::light::models::ActiveModel {
        lectura_id: Set(lectura.id),
        robot_uuid: Set(robot_uuid),
        timestamp: Set(timestamp),
        lux: Set(Some(lux)),
        indice_uv: Set(Some(indice_uv)),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    super::soil::models::ActiveModel {
        lectura_id: Set(lectura.id),
        robot_uuid: Set(robot_uuid),
        timestamp: Set(timestamp),
        humedad_suelo: Set(Some(humedad_suelo)),
        temperatura_suelo_celsius: Set(Some(temperatura_suelo)),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    Ok(GeneratedSample {
        lectura_id: lectura.id,
        robot_uuid,
        timestamp,
        temperatura,
        presion,
        humedad,
        co2,
        lux,
        indice_uv,
        humedad_suelo,
        temperatura_suelo,
        latitud,
        longitud,
    })
}
