// farmkit/src/views.rs
//
// Derived views: pure reducers from the current records to chart-ready data.
// Recomputed on every draw; inputs are small enough that nothing is cached.

use serde::Serialize;

use crate::theme::{risk_color, Rgb};
use crate::types::{Crop, IoTReading, RiskAssessment, RiskLevel};

/// Mean health score across all crops; an empty list averages to 0.0
pub fn average_health(crops: &[Crop]) -> f64 {
    if crops.is_empty() {
        return 0.0;
    }
    let total: u32 = crops.iter().map(|c| c.health_score as u32).sum();
    total as f64 / crops.len() as f64
}

/// Average health as shown on the stat card, one decimal with ties
/// rounded up (88.25 shows as 88.3)
pub fn average_health_display(crops: &[Crop]) -> String {
    let tenths = (average_health(crops) * 10.0).round() / 10.0;
    format!("{:.1}", tenths)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSlice {
    pub level: RiskLevel,
    pub count: usize,
    pub color: Rgb,
}

/// Tally of risk factors per bucket, Low → High, empty buckets omitted
pub fn risk_counts(assessment: &RiskAssessment) -> Vec<RiskSlice> {
    RiskLevel::ALL
        .iter()
        .filter_map(|level| {
            let count = assessment.factors.iter().filter(|f| f.risk == *level).count();
            (count > 0).then(|| RiskSlice {
                level: *level,
                count,
                color: risk_color(*level),
            })
        })
        .collect()
}

pub fn high_risk_count(assessment: &RiskAssessment) -> usize {
    assessment
        .factors
        .iter()
        .filter(|f| f.risk == RiskLevel::High)
        .count()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarAxis {
    pub name: &'static str,
    pub value: f64,
    pub full_mark: f64,
}

impl RadarAxis {
    /// Value as a fraction of the axis, clamped to [0, 1]
    pub fn ratio(&self) -> f64 {
        (self.value / self.full_mark).clamp(0.0, 1.0)
    }
}

pub fn latest_reading(readings: &[IoTReading]) -> Option<&IoTReading> {
    readings.last()
}

/// Nutrient radar from the newest reading; all axes read zero without one
pub fn nutrient_radar(readings: &[IoTReading]) -> Vec<RadarAxis> {
    let latest = latest_reading(readings);
    let value = |f: fn(&IoTReading) -> f64| latest.map(f).unwrap_or(0.0);

    vec![
        RadarAxis { name: "Nitrogen", value: value(|r| r.nitrogen as f64), full_mark: 35.0 },
        RadarAxis { name: "Phosphorus", value: value(|r| r.phosphorus as f64), full_mark: 25.0 },
        RadarAxis { name: "Potassium", value: value(|r| r.potassium as f64), full_mark: 35.0 },
        RadarAxis { name: "pH", value: value(|r| r.ph), full_mark: 9.0 },
        RadarAxis { name: "Light", value: value(|r| r.light as f64), full_mark: 1000.0 },
        RadarAxis { name: "Soil Moisture", value: value(|r| r.soil_moisture as f64), full_mark: 100.0 },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendRow {
    pub date: String,
    pub overall: u32,
    pub weather: u32,
    pub pest: u32,
    pub water: u32,
}

/// The stored 30-day risk trend, reshaped for the line chart
pub fn trend_series(assessment: &RiskAssessment) -> Vec<TrendRow> {
    assessment
        .trends
        .iter()
        .map(|t| TrendRow {
            date: t.date.clone(),
            overall: t.risk,
            weather: t.weather,
            pest: t.pest,
            water: t.water,
        })
        .collect()
}

pub fn crop_health_bars(crops: &[Crop]) -> Vec<(String, u8)> {
    crops.iter().map(|c| (c.name.clone(), c.health_score)).collect()
}

/// "Mary Agronomist" -> "MA"; empty names render as "??"
pub fn initials(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    if initials.is_empty() {
        "??".to_string()
    } else {
        initials
    }
}
