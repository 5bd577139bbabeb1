//! Crop yield heuristics shared by the dashboard and the analysis generator.
//!
//! Every function here is pure arithmetic over its inputs; missing or unknown
//! values degrade to defaults rather than erroring.

/// Points lost per degree Celsius away from the crop's optimum.
const TEMPERATURE_SENSITIVITY: f64 = 5.0;
/// Points lost per millimetre of precipitation away from the crop's optimum.
const PRECIPITATION_SENSITIVITY: f64 = 3.0;

/// Optimal growing conditions for a crop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimalConditions {
    pub temperature: f64,
    pub precipitation: f64,
}

/// Optimal (temperature °C, precipitation mm) per supported crop. Unknown
/// labels fall back to the default entry.
pub fn optimal_conditions(crop_type: &str) -> OptimalConditions {
    let (temperature, precipitation) = match crop_type {
        "cafe" => (22.0, 8.0),
        "maiz" => (24.0, 10.0),
        "arroz" => (26.0, 15.0),
        "platano" => (27.0, 12.0),
        "papa" => (18.0, 7.0),
        "tomate" => (24.0, 6.0),
        "cacao" => (25.0, 14.0),
        "caña" => (28.0, 9.0),
        "frijol" => (23.0, 8.0),
        "yuca" => (26.0, 10.0),
        "piña" => (27.0, 11.0),
        "mango" => (30.0, 5.0),
        "aguacate" => (24.0, 9.0),
        "cebolla" => (22.0, 6.0),
        "lechuga" => (18.0, 5.0),
        "zanahoria" => (19.0, 6.0),
        "sandía" => (29.0, 8.0),
        "melón" => (28.0, 7.0),
        "repollo" => (20.0, 6.0),
        _ => (24.0, 10.0),
    };

    OptimalConditions {
        temperature,
        precipitation,
    }
}

/// Yield impact in [0, 100] for growing `crop_type` under the given
/// temperature (°C) and precipitation (mm).
///
/// Each degree away from the optimum costs 5 points and each millimetre costs
/// 3; both components floor at zero and the result is their mean.
pub fn calculate_yield_impact(temperature: f64, precipitation: f64, crop_type: &str) -> f64 {
    let optimal = optimal_conditions(crop_type);

    let temp_diff = (temperature - optimal.temperature).abs();
    let temp_impact = (100.0 - temp_diff * TEMPERATURE_SENSITIVITY).max(0.0);

    let precip_diff = (precipitation - optimal.precipitation).abs();
    let precip_impact = (100.0 - precip_diff * PRECIPITATION_SENSITIVITY).max(0.0);

    (temp_impact + precip_impact) / 2.0
}

/// Deterministic pseudo-random value in [0, 1) derived from `seed` and
/// `index`. The same pair always yields the same value, which keeps the
/// decorative variation in generated forecasts reproducible.
pub fn seeded_random(seed: f64, index: f64) -> f64 {
    let x = (seed + index * 2.5).sin() * 10000.0;
    x - x.floor()
}
