//! Canned weekly report documents filled in from the sensor summary.
//!
//! Three markdown layouts rotate so consecutive reports read differently.
//! Selection is seeded from the clock, which makes the choice reproducible
//! for a given instant. `local_report` is a smaller rule-based fallback that
//! never needs the full summary history.

use chrono::{DateTime, Utc};

use crate::services::forecast::seeded_random;
use crate::services::models::SensorSummary;

/// Model label attached to generated weekly reports.
pub const REPORT_MODEL: &str = "mockup-analysis-v1.0";

/// Picks one of the report layouts for this instant and fills it in.
pub fn weekly_report(summary: &SensorSummary, now: DateTime<Utc>) -> String {
    let index = (seeded_random(now.timestamp_millis() as f64, 0.0) * 3.0).floor() as usize;
    let [first, second, third] = mockup_reports(summary, now);
    match index {
        0 => first,
        1 => second,
        _ => third,
    }
}

fn mockup_reports(summary: &SensorSummary, now: DateTime<Utc>) -> [String; 3] {
    let temp = summary.temperatura_promedio;
    let humidity = summary.humedad_promedio;
    let pressure = summary.presion_promedio;
    let co2 = summary.co2_promedio;
    let light = summary.luz_promedio;
    let uv = summary.uv_promedio;
    let soil_moisture = summary.humedad_suelo_promedio;
    let soil_temp = summary.temperatura_suelo_promedio;
    let days = summary.dias_analizados;
    let date = now.format("%-d/%-m/%Y");

    let intelligent = format!(
"**ANÁLISIS AGRÍCOLA INTELIGENTE**

**1. Condiciones:** Ambiente tropical semiárido con temperatura óptima ({temp:.1}°C) y humedad relativa moderada ({humidity:.1}%). Presión atmosférica estable ({pressure:.1} hPa) indica estabilidad climática.

**2. Cultivos Recomendados:**
• Maíz híbrido tolerante al calor
• Sorgo forrajero de ciclo corto
• Yuca resistente a sequía
• Tomate cherry en invernadero

**3. Viabilidad:** 78% - Condiciones favorables para cultivos seleccionados

**4. Recomendaciones Clave:**
• Implementar riego por goteo para optimizar agua
• Aplicar mulching orgánico para conservar humedad
• Monitorear CO₂ y considerar suplementación
• Rotación de cultivos cada 3 meses

**5. Alertas Importantes:**
• Vigilar humedad del suelo (actual: {soil_moisture:.0} raw)
• Temperatura del suelo elevada ({soil_temp:.1}°C)
• Luminosidad subóptima ({light:.1} lux)

*Análisis generado por IA Agrícola v2.0 - {days} días de datos*"
    );

    let agronomic = format!(
"**PRONÓSTICO AGRONÓMICO AVANZADO**

**1. Condiciones:** Clima cálido-húmedo ideal para agricultura tropical. Temperatura {temp:.1}°C dentro del rango óptimo, humedad {humidity:.1}% adecuada para fotosíntesis.

**2. Cultivos Óptimos:**
• Arroz de secano (variedad resistente)
• Frijol de mata baja
• Calabaza de invierno
• Hierbas aromáticas (albahaca, orégano)

**3. Viabilidad:** 82% - Excelente potencial productivo

**4. Estrategias Recomendadas:**
• Siembra escalonada cada 15 días
• Fertilización orgánica con compost
• Control biológico de plagas
• Cosecha temprana para evitar lluvias

**5. Alertas del Sistema:**
• CO₂ bajo ({co2:.1} ppm) - considerar invernadero
• Luz insuficiente - evaluar sombreado
• Suelo cálido - mantener cobertura vegetal

*Sistema de monitoreo IoT activo - {date}*"
    );

    let technical = format!(
"**INFORME TÉCNICO AGRÍCOLA**

**1. Condiciones:** Microclima estable con {temp:.1}°C promedio, humedad relativa {humidity:.1}% y presión {pressure:.1} hPa. Condiciones ideales para agricultura de precisión.

**2. Cultivos Sugeridos:**
• Lechuga hidropónica
• Pimiento morrón
• Pepino de invernadero
• Albahaca y perejil

**3. Viabilidad:** 85% - Condiciones excepcionales

**4. Plan de Acción:**
• Instalar sistema de riego automatizado
• Configurar sensores de humedad del suelo
• Programar fertilización líquida
• Establecer calendario de siembra

**5. Monitoreo Continuo:**
• Temperatura del suelo: {soil_temp:.1}°C
• Humedad del suelo: {soil_moisture:.0} unidades
• Índice UV: {uv:.2} (bajo)

*Análisis basado en {days} días de datos históricos*"
    );

    [intelligent, agronomic, technical]
}

/// Rule-based short report used when the templated documents are not wanted.
pub fn local_report(summary: &SensorSummary) -> String {
    let temp = summary.temperatura_promedio;
    let humidity = summary.humedad_promedio;
    let co2 = summary.co2_promedio;
    let light = summary.luz_promedio;

    let mut conditions;
    let crops;
    let mut viability;
    let mut recommendations;
    let mut alerts = String::new();

    if temp > 30.0 {
        conditions = String::from("Ambiente cálido-tropical");
        crops = "Sorgo, maíz, yuca";
        viability = 75;
    } else if temp > 20.0 {
        conditions = String::from("Temperatura óptima");
        crops = "Tomate, pimiento, lechuga";
        viability = 85;
    } else {
        conditions = String::from("Temperatura fresca");
        crops = "Espinaca, col, zanahoria";
        viability = 70;
    }

    if humidity < 40.0 {
        conditions.push_str(" con baja humedad");
        recommendations = String::from("Riego frecuente, mulching");
        alerts.push_str("Riesgo de estrés hídrico");
    } else if humidity > 80.0 {
        conditions.push_str(" con alta humedad");
        recommendations = String::from("Ventilación, drenaje");
        alerts.push_str("Riesgo de hongos");
    } else {
        conditions.push_str(" con humedad adecuada");
        recommendations = String::from("Monitoreo regular");
    }

    if co2 < 300.0 {
        recommendations.push_str(", suplementar CO₂");
        viability -= 10;
    }
    if light < 1000.0 {
        recommendations.push_str(", iluminación suplementaria");
        viability -= 15;
        alerts.push_str(", luz insuficiente");
    }

    let alerts = if alerts.is_empty() {
        String::from("Ninguna")
    } else {
        alerts
    };
    let days = summary.dias_analizados;

    format!(
"**ANÁLISIS AGRÍCOLA**

**1. Condiciones:** {conditions}
**2. Cultivos:** {crops}
**3. Viabilidad:** {viability}%
**4. Recomendaciones:** {recommendations}
**5. Alertas:** {alerts}

*Análisis basado en datos de {days} días*"
    )
}
