// farmkit/src/theme.rs
//
// Light / dark palettes and the status color buckets shared by all panels

use serde::{Deserialize, Serialize};

use crate::types::{ActivityStatus, Priority, RiskLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn hex(value: u32) -> Self {
        Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }
}

pub const GREEN: Rgb = Rgb::hex(0x10b981);
pub const AMBER: Rgb = Rgb::hex(0xeab308);
pub const RED: Rgb = Rgb::hex(0xef4444);
pub const GRAY: Rgb = Rgb::hex(0x6b7280);
pub const INDIGO: Rgb = Rgb::hex(0x4f46e5);
pub const BLUE: Rgb = Rgb::hex(0x3b82f6);
pub const ONLINE: Rgb = Rgb::hex(0x22c55e);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }
}

/// Static colors applied uniformly across every panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub text: Rgb,
    pub heading: Rgb,
    pub muted: Rgb,
    pub card: Rgb,
    pub border: Rgb,
    pub accent: Rgb,
    pub chat_user_bg: Rgb,
    pub chat_user_text: Rgb,
    pub chat_assistant_bg: Rgb,
    pub chat_assistant_text: Rgb,
    pub risk_low_bg: Rgb,
    pub risk_medium_bg: Rgb,
    pub risk_high_bg: Rgb,
}

pub const LIGHT: Palette = Palette {
    background: Rgb::hex(0xf9fafb),
    text: Rgb::hex(0x1f2937),
    heading: Rgb::hex(0x1f2937),
    muted: Rgb::hex(0x6b7280),
    card: Rgb::hex(0xffffff),
    border: Rgb::hex(0xe5e7eb),
    accent: INDIGO,
    chat_user_bg: INDIGO,
    chat_user_text: Rgb::hex(0xffffff),
    chat_assistant_bg: Rgb::hex(0xe5e7eb),
    chat_assistant_text: Rgb::hex(0x1f2937),
    risk_low_bg: Rgb::hex(0xecfdf5),
    risk_medium_bg: Rgb::hex(0xfffbe5),
    risk_high_bg: Rgb::hex(0xfee2e2),
};

pub const DARK: Palette = Palette {
    background: Rgb::hex(0x0f172a),
    text: Rgb::hex(0xe2e8f0),
    heading: Rgb::hex(0xffffff),
    muted: Rgb::hex(0x9ca3af),
    card: Rgb::hex(0x1e293b),
    border: Rgb::hex(0x334155),
    accent: INDIGO,
    chat_user_bg: INDIGO,
    chat_user_text: Rgb::hex(0xffffff),
    chat_assistant_bg: Rgb::hex(0x334155),
    chat_assistant_text: Rgb::hex(0xd1d5db),
    risk_low_bg: Rgb::hex(0x042f2e),
    risk_medium_bg: Rgb::hex(0x422006),
    risk_high_bg: Rgb::hex(0x450a0a),
};

impl Palette {
    pub fn risk_background(&self, risk: RiskLevel) -> Rgb {
        match risk {
            RiskLevel::Low => self.risk_low_bg,
            RiskLevel::Medium => self.risk_medium_bg,
            RiskLevel::High => self.risk_high_bg,
        }
    }
}

pub fn health_color(score: u8) -> Rgb {
    if score > 90 {
        GREEN
    } else if score > 75 {
        AMBER
    } else {
        RED
    }
}

pub fn risk_color(risk: RiskLevel) -> Rgb {
    match risk {
        RiskLevel::Low => GREEN,
        RiskLevel::Medium => AMBER,
        RiskLevel::High => RED,
    }
}

pub fn priority_color(priority: Priority) -> Rgb {
    match priority {
        Priority::Critical => RED,
        Priority::High => AMBER,
        Priority::Medium => GREEN,
    }
}

pub fn status_color(status: ActivityStatus) -> Rgb {
    match status {
        ActivityStatus::Completed => GREEN,
        ActivityStatus::InProgress => AMBER,
        ActivityStatus::Cancelled => RED,
        ActivityStatus::Scheduled => GRAY,
    }
}
