// farmkit/src/mock.rs
//
// Mock data generators for the farm dashboard
//
// Every field is an independent uniform draw inside a fixed range; nothing is
// correlated and nothing evolves from the previous snapshot.

use chrono::{Duration, Local, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{
    ActivityStatus, AiRecommendation, Condition, Coordinates, Crop, DailyForecast, HistoryEntry,
    HourlyForecast, IoTReading, Nutrients, Priority, RiskAssessment, RiskFactor, RiskLevel,
    RiskTrendPoint, Role, TeamMember, WeatherSnapshot,
};

pub const IOT_READING_COUNT: usize = 20;
pub const FORECAST_DAYS: usize = 7;
pub const HOURLY_ENTRIES: usize = 24;
pub const TREND_DAYS: usize = 30;
pub const HISTORY_ENTRIES: usize = 50;

pub const GREETING: &str =
    "Hello! I'm your AI agricultural assistant. How can I help you optimize your farm today?";

/// Canned assistant replies, picked uniformly regardless of what was asked
pub const CHAT_RESPONSES: [&str; 5] = [
    "Based on your soil moisture data, I recommend reducing irrigation by 15% for the next 3 days.",
    "The weather forecast shows rain in 2 days. Consider adjusting your fertilizer application schedule.",
    "Your cotton crop shows signs of pest activity. I suggest implementing integrated pest management.",
    "Soil pH levels are optimal for your current crops. Continue with the existing nutrient program.",
    "Market prices for paddy are expected to rise next week. Consider timing your harvest accordingly.",
];

const CURRENT_CONDITIONS: [Condition; 5] = [
    Condition::Sunny,
    Condition::PartlyCloudy,
    Condition::Cloudy,
    Condition::LightRain,
    Condition::HeavyRain,
];

const HOURLY_CONDITIONS: [Condition; 3] = [Condition::Sunny, Condition::Cloudy, Condition::Rain];

const HISTORY_ACTIONS: [&str; 7] = [
    "Irrigation",
    "Fertilizer Application",
    "Pest Control",
    "Soil Testing",
    "Harvesting",
    "Planting",
    "Pruning",
];

const HISTORY_CROPS: [&str; 6] = ["Paddy Rice", "Cotton", "Sugarcane", "Groundnut", "Tomato", "Maize"];

const HISTORY_STATUSES: [ActivityStatus; 4] = [
    ActivityStatus::Completed,
    ActivityStatus::InProgress,
    ActivityStatus::Scheduled,
    ActivityStatus::Cancelled,
];

const HISTORY_USERS: [&str; 3] = ["John Farmer", "Mary Agronomist", "System Auto"];

const HISTORY_NOTES: [&str; 4] = [
    "Weather conditions optimal",
    "Soil moisture adequate",
    "No issues reported",
    "Equipment working normally",
];

pub struct MockDataGenerator {
    rng: StdRng,
}

impl MockDataGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for tests and reproducible demos
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// `base + U(0, width)` rounded to the nearest integer
    fn spread(&mut self, base: f64, width: f64) -> i32 {
        (base + self.rng.gen::<f64>() * width).round() as i32
    }

    fn spread_u(&mut self, base: f64, width: f64) -> u32 {
        self.spread(base, width).max(0) as u32
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.gen_range(0..items.len())]
    }

    /// Fresh weather for `location`; the coordinates stay fixed
    pub fn weather(&mut self, location: &str) -> WeatherSnapshot {
        let today = Local::now();

        let forecast = (0..FORECAST_DAYS)
            .map(|i| {
                let day = today + Duration::days(i as i64);
                DailyForecast {
                    day: day.format("%a").to_string(),
                    date: day.format("%b %-d").to_string(),
                    temp: self.spread(28.0, 8.0),
                    temp_min: self.spread(24.0, 4.0),
                    temp_max: self.spread(32.0, 6.0),
                    condition: self.pick(&CURRENT_CONDITIONS[..4]),
                    rain: self.spread_u(0.0, 80.0),
                    humidity: self.spread_u(60.0, 25.0),
                    wind: self.spread_u(8.0, 12.0),
                }
            })
            .collect();

        let hourly_forecast = (0..HOURLY_ENTRIES)
            .map(|i| HourlyForecast {
                hour: format!("{:02}:00", i),
                temp: self.spread(26.0, 8.0),
                condition: self.pick(&HOURLY_CONDITIONS),
                rain: self.spread_u(0.0, 60.0),
            })
            .collect();

        WeatherSnapshot {
            location: location.to_string(),
            coordinates: Coordinates {
                lat: 13.0827,
                lng: 80.2707,
            },
            temperature: self.spread(28.0, 8.0),
            condition: self.pick(&CURRENT_CONDITIONS),
            humidity: self.spread_u(60.0, 25.0),
            wind: self.spread_u(8.0, 12.0),
            wind_direction: "SW".to_string(),
            pressure: self.spread_u(1010.0, 20.0),
            uv_index: self.spread_u(3.0, 8.0),
            rainfall: self.spread_u(0.0, 15.0),
            visibility: self.spread_u(8.0, 7.0),
            dew_point: self.spread(22.0, 6.0),
            sunrise: "06:15 AM".to_string(),
            sunset: "06:45 PM".to_string(),
            forecast,
            hourly_forecast,
        }
    }

    /// Hourly readings for the trailing window, oldest first, newest at "now"
    pub fn iot_readings(&mut self) -> Vec<IoTReading> {
        let now = Utc::now();

        (0..IOT_READING_COUNT)
            .map(|i| IoTReading {
                time: format!("{:02}:00", i + 4),
                timestamp: now - Duration::hours((IOT_READING_COUNT - 1 - i) as i64),
                soil_moisture: self.spread_u(45.0, 30.0),
                soil_temp: self.spread(24.0, 8.0),
                air_temp: self.spread(28.0, 8.0),
                humidity: self.spread_u(60.0, 25.0),
                ph: ((6.2 + self.rng.gen::<f64>() * 1.6) * 10.0).round() / 10.0,
                light: self.spread_u(300.0, 700.0),
                nitrogen: self.spread_u(15.0, 20.0),
                phosphorus: self.spread_u(8.0, 15.0),
                potassium: self.spread_u(20.0, 25.0),
            })
            .collect()
    }

    pub fn risk_assessment(&mut self) -> RiskAssessment {
        let today = Local::now();

        let trends = (0..TREND_DAYS)
            .map(|i| {
                let date = today - Duration::days((TREND_DAYS - 1 - i) as i64);
                RiskTrendPoint {
                    date: date.format("%-m/%-d/%Y").to_string(),
                    risk: self.spread_u(40.0, 40.0),
                    weather: self.spread_u(20.0, 30.0),
                    pest: self.spread_u(30.0, 50.0),
                    market: self.spread_u(35.0, 30.0),
                    water: self.spread_u(50.0, 35.0),
                }
            })
            .collect();

        RiskAssessment {
            overall_risk: RiskLevel::Medium,
            risk_score: 65,
            factors: seed_risk_factors(),
            trends,
        }
    }

    /// Activity log, newest first, one entry per day
    pub fn history(&mut self) -> Vec<HistoryEntry> {
        let now = Local::now();

        (0..HISTORY_ENTRIES)
            .map(|i| {
                let at = now - Duration::days(i as i64);
                HistoryEntry {
                    id: i as u32 + 1,
                    date: at.format("%-m/%-d/%Y").to_string(),
                    time: at.format("%-I:%M:%S %p").to_string(),
                    action: self.pick(&HISTORY_ACTIONS).to_string(),
                    crop: self.pick(&HISTORY_CROPS).to_string(),
                    status: self.pick(&HISTORY_STATUSES),
                    details: format!("Applied to {} acres", self.spread(1.0, 5.0)),
                    cost: self.spread_u(500.0, 5000.0),
                    user: self.pick(&HISTORY_USERS).to_string(),
                    notes: self.pick(&HISTORY_NOTES).to_string(),
                }
            })
            .collect()
    }

    pub fn chat_reply(&mut self) -> &'static str {
        self.pick(&CHAT_RESPONSES)
    }

    pub fn crops(&mut self) -> Vec<Crop> {
        seed_crops()
    }

    pub fn ai_recommendations(&mut self) -> Vec<AiRecommendation> {
        seed_recommendations()
    }

    pub fn team(&mut self) -> Vec<TeamMember> {
        seed_team()
    }
}

impl Default for MockDataGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn seed_crops() -> Vec<Crop> {
    use RiskLevel::*;

    vec![
        Crop {
            id: 1,
            name: "Paddy Rice".to_string(),
            variety: "IR64".to_string(),
            stage: "Tillering".to_string(),
            health_score: 92,
            planted_date: "2024-08-15".to_string(),
            expected_harvest: "2024-12-10".to_string(),
            area: Some(5.2),
            yield_estimate: Some("4.5 tons/hectare".to_string()),
            issues: strings(&["Low nitrogen levels in sector B"]),
            last_watered: "2024-09-17".to_string(),
            next_action: Some("Fertilizer application".to_string()),
            soil_moisture: 78,
            ph: 6.8,
            nutrients: Nutrients { n: 18, p: 12, k: 24 },
            growth_rate: 85,
            pest_activity: Low,
            disease_risk: Medium,
            irrigation: Some("Automated".to_string()),
            last_fertilized: "2024-09-10".to_string(),
        },
        Crop {
            id: 2,
            name: "Cotton".to_string(),
            variety: "BT Cotton".to_string(),
            stage: "Flowering".to_string(),
            health_score: 87,
            planted_date: "2024-07-20".to_string(),
            expected_harvest: "2024-11-25".to_string(),
            area: Some(3.8),
            yield_estimate: Some("2.8 tons/hectare".to_string()),
            issues: strings(&["Pink bollworm detected in sector A", "Leaf curl virus symptoms"]),
            last_watered: "2024-09-16".to_string(),
            next_action: Some("Pest control spray".to_string()),
            soil_moisture: 65,
            ph: 7.2,
            nutrients: Nutrients { n: 22, p: 15, k: 28 },
            growth_rate: 78,
            pest_activity: High,
            disease_risk: High,
            irrigation: Some("Drip system".to_string()),
            last_fertilized: "2024-09-05".to_string(),
        },
        Crop {
            id: 3,
            name: "Sugarcane".to_string(),
            variety: "Co 86032".to_string(),
            stage: "Grand Growth".to_string(),
            health_score: 95,
            planted_date: "2024-02-10".to_string(),
            expected_harvest: "2025-01-15".to_string(),
            area: Some(8.5),
            yield_estimate: Some("85 tons/hectare".to_string()),
            issues: Vec::new(),
            last_watered: "2024-09-18".to_string(),
            next_action: Some("Regular monitoring".to_string()),
            soil_moisture: 82,
            ph: 6.5,
            nutrients: Nutrients { n: 25, p: 18, k: 32 },
            growth_rate: 92,
            pest_activity: Low,
            disease_risk: Low,
            irrigation: Some("Flood irrigation".to_string()),
            last_fertilized: "2024-09-12".to_string(),
        },
        Crop {
            id: 4,
            name: "Groundnut".to_string(),
            variety: "TMV 7".to_string(),
            stage: "Pod Development".to_string(),
            health_score: 78,
            planted_date: "2024-08-01".to_string(),
            expected_harvest: "2024-11-30".to_string(),
            area: Some(2.1),
            yield_estimate: Some("2.2 tons/hectare".to_string()),
            issues: strings(&["Leaf spot disease in sector C", "Iron deficiency"]),
            last_watered: "2024-09-15".to_string(),
            next_action: Some("Fungicide treatment".to_string()),
            soil_moisture: 58,
            ph: 6.9,
            nutrients: Nutrients { n: 16, p: 20, k: 22 },
            growth_rate: 72,
            pest_activity: Medium,
            disease_risk: High,
            irrigation: Some("Sprinkler".to_string()),
            last_fertilized: "2024-09-08".to_string(),
        },
        Crop {
            id: 5,
            name: "Tomato".to_string(),
            variety: "Hybrid F1".to_string(),
            stage: "Fruiting".to_string(),
            health_score: 89,
            planted_date: "2024-07-15".to_string(),
            expected_harvest: "2024-10-30".to_string(),
            area: Some(1.5),
            yield_estimate: Some("45 tons/hectare".to_string()),
            issues: strings(&["Early blight symptoms"]),
            last_watered: "2024-09-18".to_string(),
            next_action: Some("Harvest preparation".to_string()),
            soil_moisture: 72,
            ph: 6.3,
            nutrients: Nutrients { n: 28, p: 24, k: 35 },
            growth_rate: 88,
            pest_activity: Medium,
            disease_risk: Medium,
            irrigation: Some("Drip system".to_string()),
            last_fertilized: "2024-09-14".to_string(),
        },
        Crop {
            id: 6,
            name: "Maize".to_string(),
            variety: "Pioneer 3394".to_string(),
            stage: "Silking".to_string(),
            health_score: 91,
            planted_date: "2024-06-20".to_string(),
            expected_harvest: "2024-10-15".to_string(),
            area: Some(4.2),
            yield_estimate: Some("9.8 tons/hectare".to_string()),
            issues: Vec::new(),
            last_watered: "2024-09-17".to_string(),
            next_action: Some("Pest monitoring".to_string()),
            soil_moisture: 75,
            ph: 6.7,
            nutrients: Nutrients { n: 30, p: 16, k: 26 },
            growth_rate: 89,
            pest_activity: Low,
            disease_risk: Low,
            irrigation: Some("Center pivot".to_string()),
            last_fertilized: "2024-09-11".to_string(),
        },
    ]
}

fn factor(
    kind: &str,
    risk: RiskLevel,
    score: u8,
    description: &str,
    recommendations: &[&str],
    impact: RiskLevel,
    probability: RiskLevel,
) -> RiskFactor {
    RiskFactor {
        kind: kind.to_string(),
        risk,
        score,
        description: description.to_string(),
        recommendations: strings(recommendations),
        impact,
        probability,
    }
}

fn seed_risk_factors() -> Vec<RiskFactor> {
    use RiskLevel::*;

    vec![
        factor(
            "Weather Conditions", Low, 25,
            "Favorable weather conditions expected for next 7 days",
            &["Continue regular irrigation", "Monitor for sudden weather changes"],
            Low, Low,
        ),
        factor(
            "Pest & Disease", High, 85,
            "Pink bollworm detected in cotton fields, leaf spot in groundnut",
            &[
                "Apply targeted pesticide spray",
                "Increase monitoring frequency",
                "Consider resistant varieties for next season",
            ],
            High, High,
        ),
        factor(
            "Market Prices", Medium, 55,
            "Cotton prices showing volatility, paddy prices stable",
            &["Monitor market trends daily", "Consider forward contracts for cotton"],
            Medium, Medium,
        ),
        factor(
            "Water Availability", High, 78,
            "Reservoir levels 15% below normal, groundwater stress detected",
            &[
                "Implement water-saving techniques",
                "Priority irrigation for high-value crops",
                "Install moisture sensors",
            ],
            High, Medium,
        ),
        factor(
            "Soil Health", Low, 30,
            "Soil nutrient levels within optimal range for most crops",
            &["Continue current fertilization schedule", "Regular soil testing"],
            Low, Low,
        ),
        factor(
            "Equipment Status", Medium, 45,
            "Irrigation pump #2 showing performance issues",
            &["Schedule pump maintenance", "Keep backup equipment ready"],
            Medium, Medium,
        ),
    ]
}

fn seed_recommendations() -> Vec<AiRecommendation> {
    vec![
        AiRecommendation {
            id: 1,
            kind: "irrigation".to_string(),
            priority: Priority::High,
            title: "Optimize Irrigation Schedule".to_string(),
            description: "Based on weather forecast and soil moisture data, reduce irrigation by 20% for the next 3 days.".to_string(),
            impact: "Water savings: 15,000L, Cost reduction: ₹2,500".to_string(),
            confidence: 95,
            expected_benefit: "High".to_string(),
            implementation: "Immediate".to_string(),
            category: "Resource Management".to_string(),
        },
        AiRecommendation {
            id: 2,
            kind: "disease".to_string(),
            priority: Priority::Critical,
            title: "Disease Prevention Action Required".to_string(),
            description: "Early blight symptoms detected in tomato crop. Apply copper-based fungicide within 48 hours.".to_string(),
            impact: "Prevent 30-40% yield loss, Save ₹45,000 potential damage".to_string(),
            confidence: 88,
            expected_benefit: "Very High".to_string(),
            implementation: "Within 48 hours".to_string(),
            category: "Crop Protection".to_string(),
        },
        AiRecommendation {
            id: 3,
            kind: "fertilizer".to_string(),
            priority: Priority::Medium,
            title: "Nutrient Management Adjustment".to_string(),
            description: "Soil analysis shows nitrogen deficiency in paddy fields. Apply urea fertilizer at 50kg/hectare.".to_string(),
            impact: "Increase yield by 15-20%, Additional revenue: ₹18,000".to_string(),
            confidence: 92,
            expected_benefit: "High".to_string(),
            implementation: "Within 1 week".to_string(),
            category: "Nutrition Management".to_string(),
        },
        AiRecommendation {
            id: 4,
            kind: "pest".to_string(),
            priority: Priority::High,
            title: "Integrated Pest Management".to_string(),
            description: "Pink bollworm activity increasing. Deploy pheromone traps and schedule biocontrol release.".to_string(),
            impact: "Reduce chemical pesticide use by 40%, Cost savings: ₹8,000".to_string(),
            confidence: 85,
            expected_benefit: "High".to_string(),
            implementation: "Within 3 days".to_string(),
            category: "Pest Control".to_string(),
        },
        AiRecommendation {
            id: 5,
            kind: "harvest".to_string(),
            priority: Priority::Medium,
            title: "Harvest Timing Optimization".to_string(),
            description: "Tomato crop will reach optimal maturity in 12-14 days. Prepare harvesting equipment and labor.".to_string(),
            impact: "Maximize quality and market value, Premium pricing opportunity".to_string(),
            confidence: 90,
            expected_benefit: "Medium".to_string(),
            implementation: "Next 2 weeks".to_string(),
            category: "Harvest Planning".to_string(),
        },
    ]
}

fn seed_team() -> Vec<TeamMember> {
    [
        ("John Doe", Role::Farmer, "john.d@farm.com"),
        ("Mary Agronomist", Role::Agronomist, "mary.a@agri.org"),
        ("System Auto", Role::Admin, "system@agritech.com"),
    ]
    .iter()
    .enumerate()
    .map(|(i, (name, role, email))| TeamMember {
        id: i as u32 + 1,
        name: name.to_string(),
        role: *role,
        email: email.to_string(),
    })
    .collect()
}
