use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sky condition shared by current weather and forecasts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Sunny,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
    Cloudy,
    Rain,
    #[serde(rename = "Light Rain")]
    LightRain,
    #[serde(rename = "Heavy Rain")]
    HeavyRain,
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::PartlyCloudy => "Partly Cloudy",
            Condition::Cloudy => "Cloudy",
            Condition::Rain => "Rain",
            Condition::LightRain => "Light Rain",
            Condition::HeavyRain => "Heavy Rain",
        }
    }

    pub fn is_rain(&self) -> bool {
        matches!(self, Condition::Rain | Condition::LightRain | Condition::HeavyRain)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub location: String,
    pub coordinates: Coordinates,
    pub temperature: i32,
    pub condition: Condition,
    pub humidity: u32,
    pub wind: u32,
    pub wind_direction: String,
    pub pressure: u32,
    pub uv_index: u32,
    pub rainfall: u32,
    pub visibility: u32,
    pub dew_point: i32,
    pub sunrise: String,
    pub sunset: String,
    pub forecast: Vec<DailyForecast>,
    pub hourly_forecast: Vec<HourlyForecast>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    pub day: String,
    pub date: String,
    pub temp: i32,
    pub temp_min: i32,
    pub temp_max: i32,
    pub condition: Condition,
    /// Chance of rain in percent
    pub rain: u32,
    pub humidity: u32,
    pub wind: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub hour: String,
    pub temp: i32,
    pub condition: Condition,
    pub rain: u32,
}

/// One soil / air sensor sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IoTReading {
    pub time: String,
    pub timestamp: DateTime<Utc>,
    pub soil_moisture: u32,
    pub soil_temp: i32,
    pub air_temp: i32,
    pub humidity: u32,
    #[serde(rename = "pH")]
    pub ph: f64,
    pub light: u32,
    pub nitrogen: u32,
    pub phosphorus: u32,
    pub potassium: u32,
}

/// Qualitative Low / Medium / High bucket used by risks, pests and diseases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrients {
    #[serde(rename = "N")]
    pub n: u32,
    #[serde(rename = "P")]
    pub p: u32,
    #[serde(rename = "K")]
    pub k: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    pub id: u32,
    pub name: String,
    pub variety: String,
    pub stage: String,
    pub health_score: u8,
    pub planted_date: String,
    pub expected_harvest: String,
    /// Hectares; crops added without an area leave it unset
    pub area: Option<f64>,
    #[serde(rename = "yield")]
    pub yield_estimate: Option<String>,
    pub issues: Vec<String>,
    pub last_watered: String,
    pub next_action: Option<String>,
    pub soil_moisture: u32,
    #[serde(rename = "pH")]
    pub ph: f64,
    pub nutrients: Nutrients,
    pub growth_rate: u32,
    pub pest_activity: RiskLevel,
    pub disease_risk: RiskLevel,
    pub irrigation: Option<String>,
    pub last_fertilized: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    #[serde(rename = "type")]
    pub kind: String,
    pub risk: RiskLevel,
    pub score: u8,
    pub description: String,
    pub recommendations: Vec<String>,
    pub impact: RiskLevel,
    pub probability: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskTrendPoint {
    pub date: String,
    pub risk: u32,
    pub weather: u32,
    pub pest: u32,
    pub market: u32,
    pub water: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub overall_risk: RiskLevel,
    pub risk_score: u8,
    pub factors: Vec<RiskFactor>,
    pub trends: Vec<RiskTrendPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Critical => "CRITICAL",
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiRecommendation {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub impact: String,
    /// Percent
    pub confidence: u8,
    pub expected_benefit: String,
    pub implementation: String,
    pub category: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    Scheduled,
    Cancelled,
}

impl ActivityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityStatus::Completed => "Completed",
            ActivityStatus::InProgress => "In Progress",
            ActivityStatus::Scheduled => "Scheduled",
            ActivityStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u32,
    pub date: String,
    pub time: String,
    pub action: String,
    pub crop: String,
    pub status: ActivityStatus,
    pub details: String,
    pub cost: u32,
    pub user: String,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Farmer,
    Agronomist,
    Admin,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Farmer => "Farmer",
            Role::Agronomist => "Agronomist",
            Role::Admin => "Admin",
        }
    }

    /// Cycle through the selectable roles
    pub fn next(&self) -> Role {
        match self {
            Role::Farmer => Role::Agronomist,
            Role::Agronomist => Role::Admin,
            Role::Admin => Role::Farmer,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: u32,
    pub name: String,
    pub role: Role,
    pub email: String,
}

/// The operator using the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub role: Role,
    pub email: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            role: Role::Farmer,
            email: "john.d@farm.com".to_string(),
        }
    }
}
