// farmkit/src/shell.rs
//
// Dashboard shell state: active tab, theme, overlays and every record set.
// All mutation goes through the methods below and either replaces a whole
// collection or appends to it.

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::config::FarmConfig;
use crate::mock::{MockDataGenerator, GREETING};
use crate::types::{
    AiRecommendation, ChatMessage, Crop, HistoryEntry, IoTReading, Nutrients, RiskAssessment,
    RiskLevel, Role, Sender, TeamMember, UserProfile, WeatherSnapshot,
};
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Overview,
    Weather,
    Crops,
    Risks,
    Assistant,
    Emergency,
    History,
    Reports,
    Map,
    Team,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 11] = [
        Tab::Overview,
        Tab::Weather,
        Tab::Crops,
        Tab::Risks,
        Tab::Assistant,
        Tab::Emergency,
        Tab::History,
        Tab::Reports,
        Tab::Map,
        Tab::Team,
        Tab::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Dashboard",
            Tab::Weather => "Weather",
            Tab::Crops => "Crop Status",
            Tab::Risks => "Risk Assessment",
            Tab::Assistant => "AI Assistant",
            Tab::Emergency => "Emergency",
            Tab::History => "History",
            Tab::Reports => "Reports",
            Tab::Map => "Farm Map",
            Tab::Team => "Team",
            Tab::Settings => "Settings",
        }
    }

    pub fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Raw add-crop form input; only name and variety are required
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CropForm {
    pub name: String,
    pub variety: String,
    pub stage: String,
    pub area: String,
    pub expected_harvest: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberForm {
    pub name: String,
    pub role: Role,
    pub email: String,
}

/// Modal overlays; at most one is visible
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    /// Cosmetic confirmation only, nothing leaves the process
    Sos { raised_at: DateTime<Local> },
    AddCrop(CropForm),
    AddMember(MemberForm),
}

pub struct Dashboard {
    // UI state
    pub active_tab: Tab,
    pub theme: Theme,
    pub sidebar_open: bool,
    pub online: bool,
    pub overlay: Option<Overlay>,

    // Live data, replaced on every refresh
    pub weather: WeatherSnapshot,
    pub iot_readings: Vec<IoTReading>,
    pub last_refresh: DateTime<Local>,
    pub refresh_count: u64,

    // Session data
    pub crops: Vec<Crop>,
    pub risk: RiskAssessment,
    pub recommendations: Vec<AiRecommendation>,
    pub history: Vec<HistoryEntry>,
    pub team: Vec<TeamMember>,
    pub profile: UserProfile,
    pub farm: FarmConfig,

    // Chat
    pub chat: Vec<ChatMessage>,
    pub chat_input: String,
    next_chat_id: u64,
}

impl Dashboard {
    pub fn new(generator: &mut MockDataGenerator, farm: FarmConfig) -> Self {
        let weather = generator.weather(&farm.location);
        let mut dashboard = Self {
            active_tab: Tab::Overview,
            theme: Theme::Light,
            sidebar_open: true,
            online: true,
            overlay: None,
            weather,
            iot_readings: generator.iot_readings(),
            last_refresh: Local::now(),
            refresh_count: 0,
            crops: generator.crops(),
            risk: generator.risk_assessment(),
            recommendations: generator.ai_recommendations(),
            history: generator.history(),
            team: generator.team(),
            profile: UserProfile::default(),
            farm,
            chat: Vec::new(),
            chat_input: String::new(),
            next_chat_id: 1,
        };
        dashboard.push_message(Sender::Assistant, GREETING.to_string());
        dashboard
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            debug!("Switching tab: {} -> {}", self.active_tab.label(), tab.label());
            self.active_tab = tab;
        }
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.active_tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.select_tab(self.active_tab.prev());
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        debug!("Theme set to {:?}", self.theme);
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Replace weather and IoT data wholesale with fresh snapshots
    pub fn refresh_live_data(&mut self, generator: &mut MockDataGenerator) {
        self.weather = generator.weather(&self.farm.location);
        self.iot_readings = generator.iot_readings();
        self.last_refresh = Local::now();
        self.refresh_count += 1;
        debug!(
            "Live data refreshed (#{}): {}°C, {} readings",
            self.refresh_count,
            self.weather.temperature,
            self.iot_readings.len()
        );
    }

    /// Append a crop from form input. Blank name or variety is a silent no-op.
    pub fn add_crop(&mut self, form: &CropForm) -> Option<u32> {
        let name = form.name.trim();
        let variety = form.variety.trim();
        if name.is_empty() || variety.is_empty() {
            return None;
        }

        let id = self.crops.len() as u32 + 1;
        let today = Local::now().format("%-m/%-d/%Y").to_string();

        self.crops.push(Crop {
            id,
            name: name.to_string(),
            variety: variety.to_string(),
            stage: form.stage.trim().to_string(),
            health_score: 100,
            planted_date: today.clone(),
            expected_harvest: form.expected_harvest.trim().to_string(),
            area: form.area.trim().parse().ok(),
            yield_estimate: None,
            issues: Vec::new(),
            last_watered: today.clone(),
            next_action: None,
            soil_moisture: 75,
            ph: 6.8,
            nutrients: Nutrients { n: 20, p: 15, k: 25 },
            growth_rate: 90,
            pest_activity: RiskLevel::Low,
            disease_risk: RiskLevel::Low,
            irrigation: None,
            last_fertilized: today,
        });

        info!("Crop added: #{} {} ({})", id, name, variety);
        Some(id)
    }

    /// Append a team member. Blank name or email is a silent no-op.
    pub fn add_team_member(&mut self, form: &MemberForm) -> Option<u32> {
        let name = form.name.trim();
        let email = form.email.trim();
        if name.is_empty() || email.is_empty() {
            return None;
        }

        let id = self.team.len() as u32 + 1;
        self.team.push(TeamMember {
            id,
            name: name.to_string(),
            role: form.role,
            email: email.to_string(),
        });

        info!("Team member added: #{} {} ({})", id, name, form.role);
        Some(id)
    }

    pub fn update_profile(&mut self, name: &str, role: Role) {
        self.profile = UserProfile {
            name: name.trim().to_string(),
            role,
            ..self.profile.clone()
        };
        info!("Profile updated: {} ({})", self.profile.name, self.profile.role);
    }

    /// Move the chat input into the transcript as a user message.
    ///
    /// Returns false (and leaves the transcript untouched) for blank input.
    /// The caller is responsible for scheduling the assistant's reply.
    pub fn submit_chat(&mut self) -> bool {
        if self.chat_input.trim().is_empty() {
            return false;
        }

        let text = std::mem::take(&mut self.chat_input);
        self.push_message(Sender::User, text);
        true
    }

    pub fn push_assistant_reply(&mut self, text: &str) {
        self.push_message(Sender::Assistant, text.to_string());
    }

    fn push_message(&mut self, sender: Sender, text: String) {
        self.chat.push(ChatMessage {
            id: self.next_chat_id,
            sender,
            text,
            timestamp: Local::now(),
        });
        self.next_chat_id += 1;
    }

    pub fn raise_sos(&mut self) {
        warn!("Emergency SOS requested (overlay only, no alert is transmitted)");
        self.overlay = Some(Overlay::Sos {
            raised_at: Local::now(),
        });
    }

    pub fn open_add_crop(&mut self) {
        self.overlay = Some(Overlay::AddCrop(CropForm::default()));
    }

    pub fn open_add_member(&mut self) {
        self.overlay = Some(Overlay::AddMember(MemberForm::default()));
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    /// Submit whichever form overlay is open; the overlay closes only when
    /// the submission was accepted.
    pub fn submit_overlay(&mut self) -> bool {
        let accepted = match &self.overlay {
            Some(Overlay::AddCrop(form)) => {
                let form = form.clone();
                self.add_crop(&form).is_some()
            }
            Some(Overlay::AddMember(form)) => {
                let form = form.clone();
                self.add_team_member(&form).is_some()
            }
            Some(Overlay::Sos { .. }) => true,
            None => false,
        };

        if accepted {
            self.overlay = None;
        }
        accepted
    }

    /// Most recent activity first
    pub fn recent_history(&self, limit: usize) -> &[HistoryEntry] {
        &self.history[..limit.min(self.history.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> Dashboard {
        let mut generator = MockDataGenerator::seeded(17);
        Dashboard::new(&mut generator, FarmConfig::default())
    }

    fn wheat() -> CropForm {
        CropForm {
            name: "Wheat".to_string(),
            variety: "HD2967".to_string(),
            ..CropForm::default()
        }
    }

    #[test]
    fn test_initial_state() {
        let d = dashboard();

        assert_eq!(d.active_tab, Tab::Overview);
        assert_eq!(d.theme, Theme::Light);
        assert!(d.sidebar_open);
        assert!(d.overlay.is_none());
        assert_eq!(d.crops.len(), 6);
        assert_eq!(d.team.len(), 3);
        assert_eq!(d.chat.len(), 1);
        assert_eq!(d.chat[0].sender, Sender::Assistant);
    }

    #[test]
    fn test_tab_navigation_wraps() {
        let mut d = dashboard();

        d.prev_tab();
        assert_eq!(d.active_tab, Tab::Settings);
        d.next_tab();
        assert_eq!(d.active_tab, Tab::Overview);

        // Every tab is reachable from every tab
        for from in Tab::ALL {
            for to in Tab::ALL {
                d.select_tab(from);
                d.select_tab(to);
                assert_eq!(d.active_tab, to);
            }
        }
    }

    #[test]
    fn test_add_crop_with_required_fields() {
        let mut d = dashboard();
        let before = d.crops.len();

        let id = d.add_crop(&wheat());

        assert_eq!(id, Some(before as u32 + 1));
        assert_eq!(d.crops.len(), before + 1);
        let crop = d.crops.last().unwrap();
        assert_eq!(crop.name, "Wheat");
        assert_eq!(crop.variety, "HD2967");
        assert_eq!(crop.health_score, 100);
        assert!(crop.issues.is_empty());
        assert_eq!(crop.area, None);
        assert_eq!(crop.nutrients, Nutrients { n: 20, p: 15, k: 25 });
    }

    #[test]
    fn test_add_crop_parses_optional_fields() {
        let mut d = dashboard();
        let form = CropForm {
            stage: "Sowing".to_string(),
            area: "2.5".to_string(),
            expected_harvest: "2025-03-01".to_string(),
            ..wheat()
        };

        d.add_crop(&form);

        let crop = d.crops.last().unwrap();
        assert_eq!(crop.stage, "Sowing");
        assert_eq!(crop.area, Some(2.5));
        assert_eq!(crop.expected_harvest, "2025-03-01");
    }

    #[test]
    fn test_add_crop_without_name_is_noop() {
        let mut d = dashboard();
        let before = d.crops.clone();

        assert_eq!(d.add_crop(&CropForm { name: String::new(), ..wheat() }), None);
        assert_eq!(d.add_crop(&CropForm { variety: "  ".to_string(), ..wheat() }), None);
        assert_eq!(d.crops, before);
    }

    #[test]
    fn test_add_team_member() {
        let mut d = dashboard();

        let form = MemberForm {
            name: "Ravi Kumar".to_string(),
            role: Role::Agronomist,
            email: "ravi@farm.com".to_string(),
        };
        assert_eq!(d.add_team_member(&form), Some(4));
        assert_eq!(d.team.last().unwrap().role, Role::Agronomist);

        let blank_email = MemberForm {
            email: String::new(),
            ..form
        };
        assert_eq!(d.add_team_member(&blank_email), None);
        assert_eq!(d.team.len(), 4);
    }

    #[test]
    fn test_submit_chat() {
        let mut d = dashboard();
        d.chat_input = "test".to_string();

        assert!(d.submit_chat());
        assert_eq!(d.chat.len(), 2);
        assert_eq!(d.chat[1].sender, Sender::User);
        assert_eq!(d.chat[1].text, "test");
        assert!(d.chat_input.is_empty());
        assert!(d.chat[1].id > d.chat[0].id);
    }

    #[test]
    fn test_blank_chat_is_ignored() {
        let mut d = dashboard();
        d.chat_input = "   ".to_string();

        assert!(!d.submit_chat());
        assert_eq!(d.chat.len(), 1);
    }

    #[test]
    fn test_weather_follows_configured_location() {
        let mut generator = MockDataGenerator::seeded(29);
        let farm = FarmConfig {
            location: "Pune, Maharashtra".to_string(),
            ..FarmConfig::default()
        };
        let mut d = Dashboard::new(&mut generator, farm);
        assert_eq!(d.weather.location, "Pune, Maharashtra");

        d.refresh_live_data(&mut generator);
        assert_eq!(d.weather.location, d.farm.location);
    }

    #[test]
    fn test_refresh_replaces_live_data() {
        let mut generator = MockDataGenerator::seeded(23);
        let mut d = Dashboard::new(&mut generator, FarmConfig::default());
        let crops = d.crops.clone();
        let readings = d.iot_readings.clone();

        d.refresh_live_data(&mut generator);

        assert_eq!(d.refresh_count, 1);
        assert_ne!(d.iot_readings, readings);
        assert_eq!(d.iot_readings.len(), readings.len());
        // Session data is untouched
        assert_eq!(d.crops, crops);
    }

    #[test]
    fn test_overlay_submission() {
        let mut d = dashboard();

        d.open_add_crop();
        assert!(!d.submit_overlay());
        assert!(matches!(d.overlay, Some(Overlay::AddCrop(_))));

        if let Some(Overlay::AddCrop(form)) = d.overlay.as_mut() {
            *form = wheat();
        }
        assert!(d.submit_overlay());
        assert!(d.overlay.is_none());
        assert_eq!(d.crops.len(), 7);
    }

    #[test]
    fn test_sos_is_cosmetic() {
        let mut d = dashboard();
        let chat = d.chat.len();

        d.raise_sos();
        assert!(matches!(d.overlay, Some(Overlay::Sos { .. })));
        assert_eq!(d.chat.len(), chat);

        d.close_overlay();
        assert!(d.overlay.is_none());
    }

    #[test]
    fn test_update_profile_keeps_email() {
        let mut d = dashboard();

        d.update_profile("Asha Devi", Role::Admin);
        assert_eq!(d.profile.name, "Asha Devi");
        assert_eq!(d.profile.role, Role::Admin);
        assert_eq!(d.profile.email, "john.d@farm.com");
    }

    #[test]
    fn test_recent_history() {
        let d = dashboard();

        assert_eq!(d.recent_history(15).len(), 15);
        assert_eq!(d.recent_history(15)[0].id, 1);
        assert_eq!(d.recent_history(500).len(), d.history.len());
    }
}
