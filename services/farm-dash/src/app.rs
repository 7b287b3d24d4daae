// services/farm-dash/src/app.rs
//
// TUI-side state wrapped around the farm session: input mode, the settings
// draft, the status line and scroll position.

use std::path::PathBuf;

use farmkit::shell::Overlay;
use farmkit::types::Role;
use farmkit::{Session, Tab};
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys navigate tabs and trigger actions
    Normal,
    /// Keys edit the chat input line
    Chat,
    /// Keys edit the open form overlay; `field` is the focused input
    Form { field: usize },
    /// Keys edit the settings profile draft
    Profile { field: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDraft {
    pub name: String,
    pub role: Role,
}

pub struct App {
    pub session: Session,
    pub mode: InputMode,
    pub profile_draft: Option<ProfileDraft>,
    pub status: Option<String>,
    pub scroll_offset: usize,
    pub export_dir: PathBuf,
    pub last_export: Option<PathBuf>,
    pub should_quit: bool,
}

pub const CROP_FORM_FIELDS: [&str; 5] = ["Name*", "Variety*", "Stage", "Area (ha)", "Expected Harvest"];
pub const MEMBER_FORM_FIELDS: [&str; 3] = ["Name*", "Role", "Email*"];
pub const PROFILE_FIELDS: [&str; 2] = ["Name", "Role"];

/// Index of the role selector in the member form
pub const MEMBER_ROLE_FIELD: usize = 1;

impl App {
    pub fn new(session: Session, export_dir: PathBuf) -> Self {
        Self {
            session,
            mode: InputMode::Normal,
            profile_draft: None,
            status: None,
            scroll_offset: 0,
            export_dir,
            last_export: None,
            should_quit: false,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_offset < self.scroll_limit() {
            self.scroll_offset += 1;
        }
    }

    /// Furthest item offset the active panel can scroll to; panels without
    /// a scrolling list stay at zero
    pub fn scroll_limit(&self) -> usize {
        let dashboard = &self.session.dashboard;
        let items = match dashboard.active_tab {
            Tab::Crops => dashboard.crops.len(),
            Tab::Risks => dashboard.risk.factors.len(),
            Tab::Assistant => dashboard.recommendations.len(),
            _ => 0,
        };
        items.saturating_sub(1)
    }

    pub fn export(&mut self) {
        match self.session.export(&self.export_dir) {
            Ok(path) => {
                self.set_status(format!("Exported to {}", path.display()));
                self.last_export = Some(path);
            }
            Err(e) => {
                error!("Export failed: {}", e);
                self.set_status(format!("Export failed: {}", e));
            }
        }
    }

    pub fn begin_profile_edit(&mut self) {
        let profile = &self.session.dashboard.profile;
        self.profile_draft = Some(ProfileDraft {
            name: profile.name.clone(),
            role: profile.role,
        });
        self.mode = InputMode::Profile { field: 0 };
    }

    pub fn save_profile(&mut self) {
        if let Some(draft) = self.profile_draft.take() {
            self.session.dashboard.update_profile(&draft.name, draft.role);
            self.set_status("Profile saved");
        }
        self.mode = InputMode::Normal;
    }

    pub fn cancel_profile_edit(&mut self) {
        self.profile_draft = None;
        self.mode = InputMode::Normal;
    }

    pub fn open_crop_form(&mut self) {
        self.session.dashboard.open_add_crop();
        self.mode = InputMode::Form { field: 0 };
    }

    pub fn open_member_form(&mut self) {
        self.session.dashboard.open_add_member();
        self.mode = InputMode::Form { field: 0 };
    }

    /// Submit the open form. Incomplete forms stay open without comment.
    pub fn submit_form(&mut self) {
        if self.session.dashboard.submit_overlay() {
            info!("Form accepted");
            self.mode = InputMode::Normal;
        }
    }

    pub fn close_overlay(&mut self) {
        self.session.dashboard.close_overlay();
        self.mode = InputMode::Normal;
    }

    /// Number of inputs in the open form overlay
    pub fn form_len(&self) -> usize {
        match &self.session.dashboard.overlay {
            Some(Overlay::AddCrop(_)) => CROP_FORM_FIELDS.len(),
            Some(Overlay::AddMember(_)) => MEMBER_FORM_FIELDS.len(),
            _ => 0,
        }
    }

    /// Text buffer behind a form input; `None` for non-text inputs
    pub fn form_text_mut(&mut self, field: usize) -> Option<&mut String> {
        match self.session.dashboard.overlay.as_mut()? {
            Overlay::AddCrop(form) => match field {
                0 => Some(&mut form.name),
                1 => Some(&mut form.variety),
                2 => Some(&mut form.stage),
                3 => Some(&mut form.area),
                4 => Some(&mut form.expected_harvest),
                _ => None,
            },
            Overlay::AddMember(form) => match field {
                0 => Some(&mut form.name),
                2 => Some(&mut form.email),
                _ => None,
            },
            Overlay::Sos { .. } => None,
        }
    }

    pub fn cycle_member_role(&mut self) {
        if let Some(Overlay::AddMember(form)) = self.session.dashboard.overlay.as_mut() {
            form.role = form.role.next();
        }
    }
}
