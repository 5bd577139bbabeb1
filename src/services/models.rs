use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Daily-average sensor summary over the report lookback window. Field names
/// follow the wire format the dashboard consumes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SensorSummary {
    pub temperatura_promedio: f64,
    pub humedad_promedio: f64,
    pub presion_promedio: f64,
    pub co2_promedio: f64,
    pub luz_promedio: f64,
    pub uv_promedio: f64,
    pub humedad_suelo_promedio: f64,
    pub temperatura_suelo_promedio: f64,
    /// Number of distinct days that contributed data.
    pub dias_analizados: i64,
}

/// Sensor state consumed by the analysis generator. Missing readings are
/// represented by the defaults, never by an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct SensorSnapshot {
    pub temperature_celsius: f64,
    pub humidity_pct: f64,
    pub soil_moisture_raw: f64,
    pub light_lux: f64,
    pub co2_ppm: f64,
    pub pressure_hpa: f64,
    pub uv_index: f64,
    pub soil_temperature_celsius: f64,
}

impl Default for SensorSnapshot {
    fn default() -> Self {
        SensorSnapshot {
            temperature_celsius: 25.0,
            humidity_pct: 60.0,
            soil_moisture_raw: 300.0,
            light_lux: 500.0,
            co2_ppm: 300.0,
            pressure_hpa: 850.0,
            uv_index: 5.0,
            soil_temperature_celsius: 22.0,
        }
    }
}

impl From<&SensorSummary> for SensorSnapshot {
    /// Rounds the averages to display precision before they are interpolated
    /// into analysis text (two decimals, soil moisture to a whole number).
    fn from(summary: &SensorSummary) -> Self {
        SensorSnapshot {
            temperature_celsius: round2(summary.temperatura_promedio),
            humidity_pct: round2(summary.humedad_promedio),
            soil_moisture_raw: summary.humedad_suelo_promedio.round(),
            light_lux: round2(summary.luz_promedio),
            co2_ppm: round2(summary.co2_promedio),
            pressure_hpa: round2(summary.presion_promedio),
            uv_index: round2(summary.uv_promedio),
            soil_temperature_celsius: round2(summary.temperatura_suelo_promedio),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
