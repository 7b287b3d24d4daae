// services/farm-dash/src/handlers.rs
//
// Keyboard dispatch. Each key press is applied to completion before the
// next event is read.

use crossterm::event::{KeyCode, KeyEvent};
use farmkit::shell::Overlay;
use farmkit::Tab;

use crate::app::{App, InputMode, MEMBER_ROLE_FIELD, PROFILE_FIELDS};

/// Digit / dash shortcuts for the eleven tabs, in sidebar order
const TAB_KEYS: [char; 11] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '0', '-'];

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match app.mode {
        InputMode::Normal => handle_normal(app, key.code),
        InputMode::Chat => handle_chat(app, key.code),
        InputMode::Form { field } => handle_form(app, key.code, field),
        InputMode::Profile { field } => handle_profile(app, key.code, field),
    }
}

fn handle_normal(app: &mut App, code: KeyCode) {
    // An open SOS overlay swallows everything but dismissal
    if matches!(app.session.dashboard.overlay, Some(Overlay::Sos { .. })) {
        if matches!(code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            app.close_overlay();
        }
        return;
    }

    let tab = app.session.dashboard.active_tab;
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab | KeyCode::Right => switch_tab(app, tab.next()),
        KeyCode::BackTab | KeyCode::Left => switch_tab(app, tab.prev()),
        KeyCode::Char(c) if TAB_KEYS.contains(&c) => {
            if let Some(i) = TAB_KEYS.iter().position(|k| *k == c) {
                switch_tab(app, Tab::ALL[i]);
            }
        }
        KeyCode::Char('t') => app.session.dashboard.toggle_theme(),
        KeyCode::Char('b') => app.session.dashboard.toggle_sidebar(),
        KeyCode::Char('s') => app.session.dashboard.raise_sos(),
        KeyCode::Char('e') => app.export(),
        KeyCode::Char('a') => match tab {
            Tab::Crops => app.open_crop_form(),
            Tab::Team => app.open_member_form(),
            _ => {}
        },
        KeyCode::Char('i') | KeyCode::Enter => match tab {
            Tab::Assistant => {
                app.clear_status();
                app.mode = InputMode::Chat;
            }
            Tab::Settings => app.begin_profile_edit(),
            Tab::Reports => app.export(),
            Tab::Emergency => app.session.dashboard.raise_sos(),
            _ => {}
        },
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        _ => {}
    }
}

fn switch_tab(app: &mut App, tab: Tab) {
    app.session.dashboard.select_tab(tab);
    app.scroll_offset = 0;
}

fn handle_chat(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.mode = InputMode::Normal,
        KeyCode::Enter => {
            app.session.send_chat();
        }
        KeyCode::Backspace => {
            app.session.dashboard.chat_input.pop();
        }
        KeyCode::Char(c) => app.session.dashboard.chat_input.push(c),
        _ => {}
    }
}

fn handle_form(app: &mut App, code: KeyCode, field: usize) {
    let len = app.form_len();
    if len == 0 {
        app.mode = InputMode::Normal;
        return;
    }

    let is_role_field = matches!(app.session.dashboard.overlay, Some(Overlay::AddMember(_)))
        && field == MEMBER_ROLE_FIELD;

    match code {
        KeyCode::Esc => app.close_overlay(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::Down => app.mode = InputMode::Form { field: (field + 1) % len },
        KeyCode::BackTab | KeyCode::Up => {
            app.mode = InputMode::Form { field: (field + len - 1) % len }
        }
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if is_role_field => {
            app.cycle_member_role()
        }
        KeyCode::Backspace => {
            if let Some(text) = app.form_text_mut(field) {
                text.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(text) = app.form_text_mut(field) {
                text.push(c);
            }
        }
        _ => {}
    }
}

fn handle_profile(app: &mut App, code: KeyCode, field: usize) {
    let len = PROFILE_FIELDS.len();

    match code {
        KeyCode::Esc => app.cancel_profile_edit(),
        KeyCode::Enter => app.save_profile(),
        KeyCode::Tab | KeyCode::Down => app.mode = InputMode::Profile { field: (field + 1) % len },
        KeyCode::BackTab | KeyCode::Up => {
            app.mode = InputMode::Profile { field: (field + len - 1) % len }
        }
        _ => {
            let Some(draft) = app.profile_draft.as_mut() else {
                app.mode = InputMode::Normal;
                return;
            };
            match code {
                KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if field == 1 => {
                    draft.role = draft.role.next()
                }
                KeyCode::Backspace if field == 0 => {
                    draft.name.pop();
                }
                KeyCode::Char(c) if field == 0 => draft.name.push(c),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use farmkit::mock::MockDataGenerator;
    use farmkit::theme::Theme;
    use farmkit::types::{Role, Sender};
    use farmkit::{DashboardConfig, Session};
    use std::time::Duration;

    fn app() -> App {
        let session = Session::with_generator(&DashboardConfig::default(), MockDataGenerator::seeded(3));
        App::new(session, std::env::temp_dir())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_scroll_stops_at_last_item() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        let crops = app.session.dashboard.crops.len();

        for _ in 0..crops + 5 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.scroll_offset, crops - 1);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.scroll_offset, crops - 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scroll_ignored_on_fixed_panels() {
        let mut app = app();

        for tab in [Tab::Overview, Tab::History, Tab::Team] {
            app.session.dashboard.select_tab(tab);
            press(&mut app, KeyCode::Down);
            assert_eq!(app.scroll_offset, 0, "{:?}", tab);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_tab_shortcuts() {
        let mut app = app();

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.session.dashboard.active_tab, Tab::Crops);
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.session.dashboard.active_tab, Tab::Settings);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.session.dashboard.active_tab, Tab::Overview);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.session.dashboard.active_tab, Tab::Settings);
    }

    #[tokio::test(start_paused = true)]
    async fn test_theme_toggle_round_trip() {
        let mut app = app();

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.session.dashboard.theme, Theme::Dark);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.session.dashboard.theme, Theme::Light);
    }

    #[tokio::test(start_paused = true)]
    async fn test_chat_typing_and_reply() {
        let mut app = app();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.mode, InputMode::Chat);

        // 'q' is text while chatting, not quit
        type_text(&mut app, "quick test");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.dashboard.chat_input, "quick tes");
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Enter);
        let last = app.session.dashboard.chat.last().unwrap();
        assert_eq!(last.sender, Sender::User);
        assert_eq!(last.text, "quick tes");

        tokio::time::sleep(Duration::from_millis(1_100)).await;
        app.session.drain_events();
        assert_eq!(app.session.dashboard.chat.last().unwrap().sender, Sender::Assistant);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, InputMode::Normal);
    }

    #[tokio::test(start_paused = true)]
    async fn test_add_crop_form() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.mode, InputMode::Form { field: 0 });

        // Missing variety: stays open, nothing added
        type_text(&mut app, "Wheat");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.dashboard.crops.len(), 6);
        assert!(app.session.dashboard.overlay.is_some());

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "HD2967");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, InputMode::Normal);
        assert!(app.session.dashboard.overlay.is_none());
        let crop = app.session.dashboard.crops.last().unwrap();
        assert_eq!((crop.id, crop.name.as_str(), crop.variety.as_str()), (7, "Wheat", "HD2967"));
        assert_eq!(crop.health_score, 100);
    }

    #[tokio::test(start_paused = true)]
    async fn test_add_member_form_cycles_role() {
        let mut app = app();
        press(&mut app, KeyCode::Char('0'));
        press(&mut app, KeyCode::Char('a'));

        type_text(&mut app, "Ravi");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "ravi@farm.com");
        press(&mut app, KeyCode::Enter);

        let member = app.session.dashboard.team.last().unwrap();
        assert_eq!(member.name, "Ravi");
        assert_eq!(member.role, Role::Agronomist);
        assert_eq!(member.id, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_form_escape_discards() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Millet");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.mode, InputMode::Normal);
        assert!(app.session.dashboard.overlay.is_none());
        assert_eq!(app.session.dashboard.crops.len(), 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_profile_edit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, InputMode::Profile { field: 0 });

        for _ in 0.."John Doe".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "Asha");
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.dashboard.profile.name, "Asha");
        assert_eq!(app.session.dashboard.profile.role, Role::Admin);
        assert_eq!(app.mode, InputMode::Normal);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sos_overlay_blocks_navigation() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        assert!(matches!(app.session.dashboard.overlay, Some(Overlay::Sos { .. })));

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.session.dashboard.active_tab, Tab::Overview);

        press(&mut app, KeyCode::Esc);
        assert!(app.session.dashboard.overlay.is_none());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_export_sets_status() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::with_generator(&DashboardConfig::default(), MockDataGenerator::seeded(3));
        let mut app = App::new(session, dir.path().to_path_buf());

        press(&mut app, KeyCode::Char('e'));

        let path = app.last_export.clone().unwrap();
        assert!(path.starts_with(dir.path()));
        assert!(path.exists());
        assert!(app.status.as_deref().unwrap().starts_with("Exported to"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_export_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::with_generator(&DashboardConfig::default(), MockDataGenerator::seeded(3));
        let mut app = App::new(session, dir.path().join("missing").join("nested"));

        press(&mut app, KeyCode::Char('e'));

        assert!(app.last_export.is_none());
        assert!(app.status.as_deref().unwrap().starts_with("Export failed"));
    }
}
