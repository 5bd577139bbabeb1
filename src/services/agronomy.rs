//! Deterministic agronomy analysis derived from a sensor snapshot.
//!
//! The output mimics a hosted language-model response so the dashboard can
//! render it unchanged, but every field comes from fixed formulas over the
//! snapshot. That keeps the endpoint available when no external model is
//! reachable and makes the results reproducible for a given input and clock.

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::models::SensorSnapshot;

/// Label reported in the `modelo_ia` field of every generated analysis.
pub const MODEL_LABEL: &str = "AgroTico AI v3.1 con DeepSeek (Análisis Dinámico)";

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Costa Rican growing season, derived from the calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Wet,
    Dry,
}

impl Season {
    /// May through November is the rainy season, the rest of the year is dry.
    pub fn from_month(month: u32) -> Self {
        if (5..=11).contains(&month) {
            Season::Wet
        } else {
            Season::Dry
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Season::Wet => "Temporada lluviosa",
            Season::Dry => "Temporada seca",
        }
    }
}

/// Estimated soil chemistry and structure.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SoilConditions {
    pub ph_estimado: f64,
    pub materia_organica: f64,
    pub textura: String,
    pub drenaje: String,
    pub nitrogeno: i32,
    pub fosforo: i32,
    pub potasio: i32,
}

/// Climate projection for one horizon.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClimateWindow {
    pub temperatura_promedio: f64,
    pub precipitacion_esperada: String,
    pub humedad_relativa: i32,
    pub dias_lluvia: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClimateOutlook {
    pub proximos_30_dias: ClimateWindow,
    pub proximos_90_dias: ClimateWindow,
    pub proximos_180_dias: ClimateWindow,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CropRecommendation {
    pub nombre: String,
    pub epoca_siembra: String,
    pub probabilidad_exito: i32,
    pub razon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SixMonthPlan {
    pub mes_1: String,
    pub mes_2: String,
    pub mes_3: String,
    pub mes_4: String,
    pub mes_5: String,
    pub mes_6: String,
}

/// Complete analysis document returned by the AI endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AiAnalysis {
    pub id: String,
    pub robot_id: String,
    pub fecha_analisis: String,
    pub modelo_ia: String,
    pub confianza_analisis: i32,
    pub analisis_general: String,
    pub condiciones_terreno: SoilConditions,
    pub predicciones_climaticas: ClimateOutlook,
    pub cultivos_recomendados: Vec<CropRecommendation>,
    pub plan_seis_meses: SixMonthPlan,
    pub factores_riesgo: Vec<String>,
    pub oportunidades_optimizacion: Vec<String>,
}

/// Builds the full analysis for one robot from its latest sensor snapshot.
///
/// The clock is passed in so the season, timestamps and id are testable.
pub fn generate_analysis(
    snapshot: &SensorSnapshot,
    robot_id: &str,
    now: DateTime<Utc>,
) -> AiAnalysis {
    let season = Season::from_month(now.month());
    let crops = crop_recommendations(snapshot, season);
    let plan = six_month_plan(
        season,
        &crops,
        snapshot.temperature_celsius,
        snapshot.humidity_pct,
    );

    AiAnalysis {
        id: analysis_id(now),
        robot_id: robot_id.to_owned(),
        fecha_analisis: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        modelo_ia: MODEL_LABEL.to_owned(),
        confianza_analisis: analysis_confidence(snapshot),
        analisis_general: general_analysis(snapshot, season, now),
        condiciones_terreno: soil_conditions(snapshot),
        predicciones_climaticas: ClimateOutlook {
            proximos_30_dias: climate_window(snapshot, season, 30),
            proximos_90_dias: climate_window(snapshot, season, 90),
            proximos_180_dias: climate_window(snapshot, season, 180),
        },
        cultivos_recomendados: crops,
        plan_seis_meses: plan,
        factores_riesgo: risk_factors(snapshot, season),
        oportunidades_optimizacion: optimization_opportunities(snapshot),
    }
}

/// Unique id in the form `analysis-{epoch_millis}-{9 base36 chars}`.
fn analysis_id(now: DateTime<Utc>) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..9)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect();
    format!("analysis-{}-{}", now.timestamp_millis(), suffix)
}

/// Confidence score in [60, 95]. Each plausible reading adds points, and a
/// snapshot close to the nominal baseline adds a stability bonus.
fn analysis_confidence(snapshot: &SensorSnapshot) -> i32 {
    let mut quality = 70;

    if snapshot.temperature_celsius > 0.0 && snapshot.temperature_celsius < 50.0 {
        quality += 5;
    }
    if snapshot.humidity_pct > 0.0 && snapshot.humidity_pct < 100.0 {
        quality += 5;
    }
    if snapshot.soil_moisture_raw > 0.0 && snapshot.soil_moisture_raw < 1000.0 {
        quality += 5;
    }
    if snapshot.light_lux > 0.0 && snapshot.light_lux < 2000.0 {
        quality += 5;
    }
    if snapshot.co2_ppm > 0.0 && snapshot.co2_ppm < 1000.0 {
        quality += 5;
    }

    let variability = (snapshot.temperature_celsius - 25.0).abs()
        + (snapshot.humidity_pct - 60.0).abs()
        + (snapshot.soil_moisture_raw - 400.0).abs();
    if variability < 50.0 {
        quality += 10;
    } else if variability < 100.0 {
        quality += 5;
    }

    quality.clamp(60, 95)
}

fn general_analysis(snapshot: &SensorSnapshot, season: Season, now: DateTime<Utc>) -> String {
    let temp = snapshot.temperature_celsius;
    let humidity = snapshot.humidity_pct;

    let stamp = now.format("%-d/%-m/%Y, %H:%M:%S");
    let warmth = if temp > 28.0 {
        "cálidas"
    } else if temp < 20.0 {
        "frías"
    } else {
        "templadas"
    };
    let moisture = if humidity > 70.0 {
        "alta"
    } else if humidity < 50.0 {
        "baja"
    } else {
        "moderada"
    };
    let light_note = if snapshot.light_lux < 300.0 {
        "Poca luz solar detectada."
    } else if snapshot.light_lux > 800.0 {
        "Excelente exposición solar."
    } else {
        "Buena exposición solar."
    };
    let co2_note = if snapshot.co2_ppm > 400.0 {
        "Niveles de CO2 elevados."
    } else {
        "Niveles de CO2 normales."
    };
    let pressure_note = if snapshot.pressure_hpa > 900.0 {
        "Presión atmosférica alta."
    } else {
        "Presión atmosférica normal."
    };
    let uv_note = if snapshot.uv_index > 8.0 {
        "Índice UV alto - precaución."
    } else {
        "Índice UV moderado."
    };
    let soil_note = if snapshot.soil_temperature_celsius < 20.0 {
        "Suelo frío detectado."
    } else {
        "Temperatura del suelo adecuada."
    };

    format!(
        "Análisis basado en datos de sensores en tiempo real ({stamp}). {season} en Costa Rica. \
         Condiciones {warmth} con humedad {moisture}. {light_note} {co2_note} {pressure_note} \
         {uv_note} {soil_note}",
        season = season.label(),
    )
}

fn soil_conditions(snapshot: &SensorSnapshot) -> SoilConditions {
    let soil_moisture = snapshot.soil_moisture_raw;
    let temp = snapshot.temperature_celsius;
    let humidity = snapshot.humidity_pct;
    let soil_temp = snapshot.soil_temperature_celsius;
    let co2 = snapshot.co2_ppm;

    SoilConditions {
        ph_estimado: estimate_ph(soil_moisture, temp, co2),
        materia_organica: estimate_organic_matter(soil_moisture, humidity, soil_temp),
        textura: soil_texture(soil_moisture, snapshot.pressure_hpa),
        drenaje: drainage(soil_moisture, humidity, snapshot.pressure_hpa),
        nitrogeno: estimate_nitrogen(soil_moisture, temp, co2),
        fosforo: estimate_phosphorus(soil_moisture, humidity, soil_temp),
        potasio: estimate_potassium(soil_moisture, temp, snapshot.light_lux),
    }
}

fn estimate_ph(soil_moisture: f64, temp: f64, co2: f64) -> f64 {
    let estimate =
        6.0 + (soil_moisture - 400.0) / 1000.0 + (temp - 25.0) / 100.0 + (co2 - 350.0) / 1000.0;
    (estimate * 10.0).round() / 10.0
}

fn estimate_organic_matter(soil_moisture: f64, humidity: f64, soil_temp: f64) -> f64 {
    let estimate =
        2.5 + (soil_moisture - 400.0) / 2000.0 + (humidity - 60.0) / 200.0 + (soil_temp - 22.0) / 100.0;
    (estimate * 10.0).round() / 10.0
}

/// Atmospheric pressure nudges the moisture reading before bucketing it.
fn adjusted_soil_moisture(soil_moisture: f64, pressure: f64) -> f64 {
    let pressure_factor = if pressure > 900.0 { 0.1 } else { -0.1 };
    soil_moisture + pressure_factor * 50.0
}

fn soil_texture(soil_moisture: f64, pressure: f64) -> String {
    let adjusted = adjusted_soil_moisture(soil_moisture, pressure);
    let texture = if adjusted < 250.0 {
        "Arenosa"
    } else if adjusted < 400.0 {
        "Franco-arenosa"
    } else if adjusted < 550.0 {
        "Franco-arcillosa"
    } else {
        "Arcillosa"
    };
    texture.to_owned()
}

fn drainage(soil_moisture: f64, humidity: f64, pressure: f64) -> String {
    let adjusted = adjusted_soil_moisture(soil_moisture, pressure);
    let drainage = if adjusted > 500.0 && humidity > 70.0 {
        "Regular"
    } else if adjusted < 300.0 {
        "Excelente"
    } else {
        "Bueno"
    };
    drainage.to_owned()
}

// Nutrient estimates are capped per nutrient and floored at zero, since a
// negative concentration is meaningless on the dashboard.

fn estimate_nitrogen(soil_moisture: f64, temp: f64, co2: f64) -> i32 {
    let estimate =
        30.0 + (soil_moisture - 400.0) / 20.0 + (temp - 25.0) / 2.0 + (co2 - 350.0) / 50.0;
    (estimate.round() as i32).clamp(0, 60)
}

fn estimate_phosphorus(soil_moisture: f64, humidity: f64, soil_temp: f64) -> i32 {
    let estimate =
        25.0 + (soil_moisture - 400.0) / 30.0 + (humidity - 60.0) / 10.0 + (soil_temp - 22.0) / 5.0;
    (estimate.round() as i32).clamp(0, 50)
}

fn estimate_potassium(soil_moisture: f64, temp: f64, light: f64) -> i32 {
    let estimate =
        35.0 + (soil_moisture - 400.0) / 25.0 + (temp - 25.0) / 3.0 + (light - 500.0) / 100.0;
    (estimate.round() as i32).clamp(0, 55)
}

fn climate_window(snapshot: &SensorSnapshot, season: Season, days: i32) -> ClimateWindow {
    ClimateWindow {
        temperatura_promedio: predict_temperature(snapshot.temperature_celsius, days, season),
        precipitacion_esperada: predict_precipitation(season, days, snapshot.humidity_pct),
        humedad_relativa: predict_humidity(snapshot.humidity_pct, days, season),
        dias_lluvia: predict_rainy_days(season, days, snapshot.pressure_hpa),
    }
}

fn predict_temperature(current: f64, days: i32, season: Season) -> f64 {
    let seasonal = match season {
        Season::Wet => 0.5,
        Season::Dry => -0.5,
    };
    let variation = (f64::from(days) / 30.0).sin() * 3.0 + seasonal;
    ((current + variation) * 10.0).round() / 10.0
}

fn predict_precipitation(season: Season, days: i32, humidity: f64) -> String {
    let humidity_factor = if humidity > 70.0 {
        1.2
    } else if humidity < 50.0 {
        0.8
    } else {
        1.0
    };
    let (base_min, base_max) = match season {
        Season::Wet => (150 + days / 10 * 20, 200 + days / 10 * 30),
        Season::Dry => (50 + days / 20 * 10, 100 + days / 20 * 15),
    };
    format!(
        "{}-{}mm",
        (f64::from(base_min) * humidity_factor).round() as i64,
        (f64::from(base_max) * humidity_factor).round() as i64,
    )
}

fn predict_humidity(current: f64, days: i32, season: Season) -> i32 {
    let seasonal = match season {
        Season::Wet => 5.0,
        Season::Dry => -5.0,
    };
    let variation = (f64::from(days) / 45.0).sin() * 10.0 + seasonal;
    (current + variation).round() as i32
}

fn predict_rainy_days(season: Season, days: i32, pressure: f64) -> i32 {
    let pressure_factor = if pressure > 950.0 { 0.1 } else { -0.1 };
    let rate = match season {
        Season::Wet => 0.4 + pressure_factor,
        Season::Dry => 0.15 + pressure_factor,
    };
    (f64::from(days) * rate).floor() as i32
}

/// Candidate crops for the season, scored against current conditions and
/// sorted by descending probability of success.
fn crop_recommendations(snapshot: &SensorSnapshot, season: Season) -> Vec<CropRecommendation> {
    let temp = snapshot.temperature_celsius;
    let humidity = snapshot.humidity_pct;
    let soil_moisture = snapshot.soil_moisture_raw;
    let light = snapshot.light_lux;
    let co2 = snapshot.co2_ppm;
    let soil_temp = snapshot.soil_temperature_celsius;

    let temp_factor: f64 = if temp > 25.0 && temp < 35.0 {
        1.1
    } else if temp < 20.0 || temp > 40.0 {
        0.8
    } else {
        1.0
    };
    let humidity_factor: f64 = if humidity > 40.0 && humidity < 80.0 {
        1.1
    } else if humidity < 30.0 || humidity > 90.0 {
        0.8
    } else {
        1.0
    };
    let soil_factor: f64 = if soil_moisture > 200.0 && soil_moisture < 600.0 {
        1.1
    } else if soil_moisture < 100.0 || soil_moisture > 800.0 {
        0.8
    } else {
        1.0
    };
    let light_factor: f64 = if light > 300.0 && light < 1000.0 {
        1.1
    } else if light < 200.0 || light > 1500.0 {
        0.8
    } else {
        1.0
    };

    let mut crops = Vec::new();

    match season {
        Season::Wet => {
            crops.push(CropRecommendation {
                nombre: "Arroz".to_owned(),
                epoca_siembra: "Mayo-Julio".to_owned(),
                probabilidad_exito: (95.0 * temp_factor * humidity_factor * soil_factor).round()
                    as i32,
                razon: format!(
                    "Ideal para temporada lluviosa. Condiciones actuales: Temp {temp}°C, \
                     Humedad {humidity}%, Suelo {soil_moisture}%"
                ),
            });
            crops.push(CropRecommendation {
                nombre: "Yuca".to_owned(),
                epoca_siembra: "Mayo-Agosto".to_owned(),
                probabilidad_exito: (90.0 * temp_factor * soil_factor).round() as i32,
                razon: format!("Tolerante a lluvias intensas. Suelo húmedo detectado ({soil_moisture}%)"),
            });
            crops.push(CropRecommendation {
                nombre: "Plátano".to_owned(),
                epoca_siembra: "Todo el año".to_owned(),
                probabilidad_exito: (88.0 * temp_factor * humidity_factor).round() as i32,
                razon: format!("Cultivo perenne. Condiciones: {temp}°C, {humidity}% humedad"),
            });
        }
        Season::Dry => {
            crops.push(CropRecommendation {
                nombre: "Tomate".to_owned(),
                epoca_siembra: "Diciembre-Febrero".to_owned(),
                probabilidad_exito: (85.0 * temp_factor * light_factor).round() as i32,
                razon: format!("Ideal para temporada seca. Luz: {light} lux, Temp: {temp}°C"),
            });
            crops.push(CropRecommendation {
                nombre: "Pimiento".to_owned(),
                epoca_siembra: "Enero-Marzo".to_owned(),
                probabilidad_exito: (80.0 * temp_factor * humidity_factor).round() as i32,
                razon: format!("Tolerante a sequía. Humedad actual: {humidity}%"),
            });
            crops.push(CropRecommendation {
                nombre: "Lechuga".to_owned(),
                epoca_siembra: "Todo el año".to_owned(),
                probabilidad_exito: (90.0 * temp_factor * humidity_factor * light_factor).round()
                    as i32,
                razon: format!(
                    "Ciclo corto. Condiciones óptimas: {temp}°C, {humidity}%, {light} lux"
                ),
            });
        }
    }

    crops.push(CropRecommendation {
        nombre: "Frijoles".to_owned(),
        epoca_siembra: "Todo el año".to_owned(),
        probabilidad_exito: (85.0 * temp_factor * soil_factor).round() as i32,
        razon: format!(
            "Fijador de nitrógeno. Suelo: {soil_moisture}%, Temp suelo: {soil_temp}°C"
        ),
    });

    if co2 > 400.0 {
        crops.push(CropRecommendation {
            nombre: "Espinaca".to_owned(),
            epoca_siembra: "Todo el año".to_owned(),
            probabilidad_exito: (75.0 * temp_factor * light_factor).round() as i32,
            razon: format!("Se beneficia del CO2 elevado ({co2} ppm)"),
        });
    }
    if light > 800.0 {
        crops.push(CropRecommendation {
            nombre: "Pepino".to_owned(),
            epoca_siembra: match season {
                Season::Wet => "Mayo-Julio",
                Season::Dry => "Diciembre-Febrero",
            }
            .to_owned(),
            probabilidad_exito: (82.0 * temp_factor * humidity_factor).round() as i32,
            razon: format!("Excelente luz disponible ({light} lux)"),
        });
    }

    crops.sort_by(|a, b| b.probabilidad_exito.cmp(&a.probabilidad_exito));
    crops
}

/// One advisory rule: whether it applies to a snapshot and the message it
/// contributes when it does. Rules are evaluated in table order and matched
/// messages collected, so each rule stays testable on its own.
type AdvisoryRule = (
    fn(&SensorSnapshot) -> bool,
    fn(&SensorSnapshot) -> String,
);

const RISK_RULES: [AdvisoryRule; 9] = [
    (
        |s| s.temperature_celsius > 32.0,
        |s| {
            format!(
                "Temperaturas extremas ({}°C) pueden afectar la floración y causar estrés térmico",
                s.temperature_celsius
            )
        },
    ),
    (
        |s| s.temperature_celsius < 15.0,
        |s| {
            format!(
                "Temperaturas bajas ({}°C) pueden retrasar el crecimiento de las plantas",
                s.temperature_celsius
            )
        },
    ),
    (
        |s| s.humidity_pct > 80.0,
        |s| {
            format!(
                "Alta humedad ({}%) favorece el desarrollo de hongos y enfermedades",
                s.humidity_pct
            )
        },
    ),
    (
        |s| s.humidity_pct < 40.0,
        |s| {
            format!(
                "Baja humedad ({}%) puede causar estrés hídrico en las plantas",
                s.humidity_pct
            )
        },
    ),
    (
        |s| s.soil_moisture_raw > 500.0,
        |s| {
            format!(
                "Exceso de humedad en el suelo ({}%) puede causar pudrición de raíces",
                s.soil_moisture_raw
            )
        },
    ),
    (
        |s| s.soil_moisture_raw < 200.0,
        |s| format!("Suelo muy seco ({}%) requiere riego inmediato", s.soil_moisture_raw),
    ),
    (
        |s| s.co2_ppm > 500.0,
        |s| {
            format!(
                "Niveles altos de CO2 ({} ppm) pueden indicar problemas de ventilación",
                s.co2_ppm
            )
        },
    ),
    (
        |s| s.pressure_hpa > 950.0,
        |s| {
            format!(
                "Alta presión atmosférica ({} hPa) puede indicar cambios climáticos",
                s.pressure_hpa
            )
        },
    ),
    (
        |s| s.uv_index > 8.0,
        |s| {
            format!(
                "Índice UV alto ({}) requiere protección adicional para las plantas",
                s.uv_index
            )
        },
    ),
];

/// Conditional suggestions first, then standing advice that always applies.
const OPTIMIZATION_RULES: [AdvisoryRule; 12] = [
    (
        |s| s.light_lux < 400.0,
        |s| {
            format!(
                "Considerar poda de árboles para aumentar la exposición solar (actual: {} lux)",
                s.light_lux
            )
        },
    ),
    (
        |s| s.soil_moisture_raw < 300.0,
        |s| {
            format!(
                "Implementar sistema de riego por goteo para optimizar el uso del agua \
                 (humedad suelo: {}%)",
                s.soil_moisture_raw
            )
        },
    ),
    (
        |s| s.humidity_pct > 70.0,
        |s| {
            format!(
                "Mejorar ventilación para reducir la humedad relativa (actual: {}%)",
                s.humidity_pct
            )
        },
    ),
    (
        |s| s.temperature_celsius > 30.0,
        |s| {
            format!(
                "Usar cobertura vegetal para reducir la temperatura del suelo (actual: {}°C)",
                s.temperature_celsius
            )
        },
    ),
    (
        |s| s.co2_ppm > 400.0,
        |s| {
            format!(
                "Mejorar ventilación para reducir niveles de CO2 (actual: {} ppm)",
                s.co2_ppm
            )
        },
    ),
    (
        |s| s.pressure_hpa > 950.0,
        |s| {
            format!(
                "Monitorear cambios climáticos debido a alta presión ({} hPa)",
                s.pressure_hpa
            )
        },
    ),
    (
        |s| s.light_lux > 800.0,
        |s| {
            format!(
                "Aprovechar la excelente exposición solar ({} lux) para cultivos que \
                 requieren mucha luz",
                s.light_lux
            )
        },
    ),
    (
        |_| true,
        |_| "Aplicar compost orgánico para mejorar la estructura del suelo".to_owned(),
    ),
    (
        |_| true,
        |_| "Implementar rotación de cultivos para mantener la fertilidad".to_owned(),
    ),
    (
        |_| true,
        |_| "Usar sensores IoT para monitoreo en tiempo real".to_owned(),
    ),
    (
        |_| true,
        |s| format!("Ajustar riego según humedad del suelo ({}%)", s.soil_moisture_raw),
    ),
    (
        |_| true,
        |s| {
            format!(
                "Optimizar ventilación según temperatura ({}°C) y humedad ({}%)",
                s.temperature_celsius, s.humidity_pct
            )
        },
    ),
];

fn collect_rules(rules: &[AdvisoryRule], snapshot: &SensorSnapshot) -> Vec<String> {
    rules
        .iter()
        .filter(|(applies, _)| applies(snapshot))
        .map(|(_, message)| message(snapshot))
        .collect()
}

fn risk_factors(snapshot: &SensorSnapshot, season: Season) -> Vec<String> {
    let mut risks = collect_rules(&RISK_RULES, snapshot);

    risks.push(
        match season {
            Season::Wet => "Lluvias intensas pueden causar erosión del suelo y encharcamiento",
            Season::Dry => "Sequía prolongada puede afectar el crecimiento y requerir riego adicional",
        }
        .to_owned(),
    );

    risks
}

fn optimization_opportunities(snapshot: &SensorSnapshot) -> Vec<String> {
    collect_rules(&OPTIMIZATION_RULES, snapshot)
}

fn six_month_plan(
    season: Season,
    crops: &[CropRecommendation],
    temp: f64,
    humidity: f64,
) -> SixMonthPlan {
    let top_crops = crops
        .iter()
        .take(3)
        .map(|c| c.nombre.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    match season {
        Season::Wet => SixMonthPlan {
            mes_1: format!(
                "Preparación del suelo y siembra de {top_crops} (condiciones: {temp}°C, {humidity}%)"
            ),
            mes_2: "Control de malezas y aplicación de fertilizantes según análisis del suelo"
                .to_owned(),
            mes_3: "Monitoreo intensivo de plagas y enfermedades por alta humedad".to_owned(),
            mes_4: "Primera cosecha de cultivos de ciclo corto y evaluación de rendimiento"
                .to_owned(),
            mes_5: "Preparación para transición a temporada seca con cultivos tolerantes"
                .to_owned(),
            mes_6: "Siembra de cultivos tolerantes a sequía y planificación de riego".to_owned(),
        },
        Season::Dry => SixMonthPlan {
            mes_1: format!(
                "Preparación del suelo y siembra de {top_crops} con sistema de riego \
                 ({temp}°C, {humidity}%)"
            ),
            mes_2: "Instalación y optimización de sistema de riego por goteo".to_owned(),
            mes_3: "Control de plagas y aplicación de fertilizantes según necesidades".to_owned(),
            mes_4: "Primera cosecha de lechuga y cultivos de ciclo corto".to_owned(),
            mes_5: "Siembra de segunda cosecha y monitoreo de humedad del suelo".to_owned(),
            mes_6: "Preparación para transición a temporada lluviosa y planificación".to_owned(),
        },
    }
}
