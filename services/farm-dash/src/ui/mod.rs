// services/farm-dash/src/ui/mod.rs
//
// Root layout: sidebar, header, the active tab's panel, key help footer
// and whichever overlay is open.

use farmkit::shell::{CropForm, MemberForm, Overlay};
use farmkit::theme::{Palette, INDIGO, ONLINE, RED};
use farmkit::{views, Tab};
use ratatui::{prelude::*, widgets::*};

use crate::app::{App, InputMode, CROP_FORM_FIELDS, MEMBER_FORM_FIELDS, MEMBER_ROLE_FIELD};

mod assistant;
mod components;
mod crops;
mod emergency;
mod history;
mod overview;
mod reports;
mod risk;
mod settings;
mod team;
mod weather;

use components::color;

const SIDEBAR_WIDTH: u16 = 30;
const SIDEBAR_COMPACT_WIDTH: u16 = 7;

pub fn draw(frame: &mut Frame, app: &App) {
    let dashboard = &app.session.dashboard;
    let palette = dashboard.theme.palette();
    let area = frame.area();

    // Background
    frame.render_widget(
        Block::default().style(Style::default().bg(color(palette.background)).fg(color(palette.text))),
        area,
    );

    let sidebar_width = if dashboard.sidebar_open {
        SIDEBAR_WIDTH
    } else {
        SIDEBAR_COMPACT_WIDTH
    };
    let [sidebar, main] =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(20)]).areas(area);

    let [header, content, footer] = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(5),    // Active panel
        Constraint::Length(2), // Footer
    ])
    .areas(main);

    draw_sidebar(frame, sidebar, app, &palette);
    draw_header(frame, header, app, &palette);
    draw_panel(frame, content, app, &palette);
    draw_footer(frame, footer, app, &palette);

    if let Some(overlay) = &dashboard.overlay {
        draw_overlay(frame, area, overlay, app, &palette);
    }
}

fn draw_panel(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let area = area.inner(Margin {
        horizontal: 1,
        vertical: 0,
    });

    match app.session.dashboard.active_tab {
        Tab::Overview => overview::draw(frame, area, app, palette),
        Tab::Weather => weather::draw(frame, area, app, palette),
        Tab::Crops => crops::draw(frame, area, app, palette),
        Tab::Risks => risk::draw(frame, area, app, palette),
        Tab::Assistant => assistant::draw(frame, area, app, palette),
        Tab::Emergency => emergency::draw(frame, area, app, palette),
        Tab::History => history::draw(frame, area, app, palette),
        Tab::Reports => reports::draw_reports(frame, area, app, palette),
        Tab::Map => reports::draw_map(frame, area, palette),
        Tab::Team => team::draw(frame, area, app, palette),
        Tab::Settings => settings::draw(frame, area, app, palette),
    }
}

fn sidebar_badge(app: &App, tab: Tab) -> Option<String> {
    let dashboard = &app.session.dashboard;
    match tab {
        Tab::Crops => Some(dashboard.crops.len().to_string()),
        Tab::Risks => Some(views::high_risk_count(&dashboard.risk).to_string()),
        Tab::Assistant => Some("NEW".to_string()),
        _ => None,
    }
}

fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let dashboard = &app.session.dashboard;
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(color(palette.border)))
        .style(Style::default().bg(color(palette.card)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let online_color = color(if dashboard.online { ONLINE } else { RED });

    if !dashboard.sidebar_open {
        // Compact: shortcut keys only
        let mut lines = vec![Line::from(Span::styled("●", Style::default().fg(online_color))), Line::from("")];
        for (i, tab) in Tab::ALL.iter().enumerate() {
            let style = if *tab == dashboard.active_tab {
                Style::default().fg(Color::White).bg(color(palette.accent)).bold()
            } else {
                Style::default().fg(color(palette.muted))
            };
            lines.push(Line::from(Span::styled(format!(" {} ", tab_key(i)), style)));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("SOS", Style::default().fg(Color::White).bg(color(RED)).bold())));
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
        return;
    }

    let [brand, nav, stats, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(Tab::ALL.len() as u16 + 1),
        Constraint::Length(7),
        Constraint::Min(3),
    ])
    .areas(inner);

    let status = if dashboard.online { "Connected" } else { "Offline" };
    let brand_text = vec![
        Line::from(Span::styled(
            " AgriTech Pro",
            Style::default().fg(color(palette.accent)).bold(),
        )),
        Line::from(vec![
            Span::styled(" ● ", Style::default().fg(online_color)),
            Span::styled(status, Style::default().fg(online_color)),
        ]),
    ];
    frame.render_widget(Paragraph::new(brand_text), brand);

    let items: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let active = *tab == dashboard.active_tab;
            let style = if active {
                Style::default().fg(Color::White).bg(color(palette.accent)).bold()
            } else {
                Style::default().fg(color(palette.text))
            };
            let mut spans = vec![
                Span::styled(format!(" {} ", tab_key(i)), Style::default().fg(color(palette.muted))),
                Span::styled(format!(" {:<18}", tab.label()), style),
            ];
            if let Some(badge) = sidebar_badge(app, *tab) {
                spans.push(Span::styled(
                    format!(" {} ", badge),
                    Style::default().fg(color(palette.accent)).bold(),
                ));
            }
            Line::from(spans)
        })
        .collect();
    frame.render_widget(Paragraph::new(items), nav);

    let total_area: f64 = dashboard.crops.iter().filter_map(|c| c.area).sum();
    let pending = dashboard.crops.iter().filter(|c| c.next_action.is_some()).count();
    let quick_stats = vec![
        components::field_line("Total Area", format!("{:.1} ha", total_area), palette),
        components::field_line("Active Crops", format!("{} varieties", dashboard.crops.len()), palette),
        components::field_line(
            "Avg Health",
            format!("{}%", views::average_health_display(&dashboard.crops)),
            palette,
        ),
        components::field_line("Pending Actions", format!("{} tasks", pending), palette),
    ];
    frame.render_widget(
        Paragraph::new(quick_stats).block(components::card("Quick Stats", palette)),
        stats,
    );

    let profile = &dashboard.profile;
    let footer_text = vec![
        Line::from(Span::styled(
            " [S] SOS ",
            Style::default().fg(Color::White).bg(color(RED)).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!(" {} ", views::initials(&profile.name)),
                Style::default().fg(Color::White).bg(color(INDIGO)).bold(),
            ),
            Span::styled(format!(" {} ", profile.name), Style::default().fg(color(palette.text)).bold()),
            Span::styled(profile.role.label(), Style::default().fg(color(palette.muted))),
        ]),
    ];
    frame.render_widget(Paragraph::new(footer_text), footer);
}

fn tab_key(index: usize) -> char {
    match index {
        0..=8 => char::from(b'1' + index as u8),
        9 => '0',
        _ => '-',
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let dashboard = &app.session.dashboard;
    let profile = &dashboard.profile;

    let [title, right] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(48)]).areas(area);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(color(palette.border)));

    let mut heading = vec![Span::styled(
        format!(" {}", dashboard.active_tab.label()),
        Style::default().fg(color(palette.heading)).bold(),
    )];
    if let Some(status) = &app.status {
        heading.push(Span::raw("  "));
        heading.push(Span::styled(status.clone(), Style::default().fg(color(palette.accent))));
    }
    frame.render_widget(Paragraph::new(Line::from(heading)).block(block.clone()), title);

    let user = Line::from(vec![
        Span::styled(
            format!("updated {} ", dashboard.last_refresh.format("%H:%M:%S")),
            Style::default().fg(color(palette.muted)),
        ),
        Span::styled(format!("{} ", profile.name), Style::default().fg(color(palette.text)).bold()),
        Span::styled(
            format!(" {} ", views::initials(&profile.name)),
            Style::default().fg(Color::White).bg(color(INDIGO)).bold(),
        ),
    ]);
    frame.render_widget(Paragraph::new(user).alignment(Alignment::Right).block(block), right);
}

fn key_hint(key: &str, label: &str, palette: &Palette) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            format!(" [{}] ", key),
            Style::default().fg(color(palette.card)).bg(color(palette.muted)),
        ),
        Span::styled(format!(" {}  ", label), Style::default().fg(color(palette.muted))),
    ]
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let hints: &[(&str, &str)] = match app.mode {
        InputMode::Chat => &[("ENTER", "Send"), ("ESC", "Done")],
        InputMode::Form { .. } | InputMode::Profile { .. } => &[
            ("TAB", "Next field"),
            ("SPACE", "Cycle role"),
            ("ENTER", "Save"),
            ("ESC", "Cancel"),
        ],
        InputMode::Normal => match app.session.dashboard.active_tab {
            Tab::Crops | Tab::Team => &[
                ("A", "Add"),
                ("TAB", "Next tab"),
                ("T", "Theme"),
                ("E", "Export"),
                ("Q", "Quit"),
            ],
            Tab::Assistant => &[("I", "Chat"), ("TAB", "Next tab"), ("T", "Theme"), ("Q", "Quit")],
            Tab::Settings => &[("I", "Edit profile"), ("T", "Theme"), ("B", "Sidebar"), ("Q", "Quit")],
            _ => &[
                ("TAB", "Next tab"),
                ("1-0,-", "Jump"),
                ("T", "Theme"),
                ("B", "Sidebar"),
                ("E", "Export"),
                ("S", "SOS"),
                ("Q", "Quit"),
            ],
        },
    };

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, label)| key_hint(key, label, palette))
        .collect();

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(color(palette.border))),
    );
    frame.render_widget(footer, area);
}

fn draw_overlay(frame: &mut Frame, area: Rect, overlay: &Overlay, app: &App, palette: &Palette) {
    let focused = match app.mode {
        InputMode::Form { field } => Some(field),
        _ => None,
    };

    match overlay {
        Overlay::Sos { raised_at } => {
            let inner = components::modal(frame, area, "Emergency SOS", 60, 9, palette);
            let text = vec![
                Line::from(Span::styled(
                    "An emergency alert has been sent to your contacts and emergency services.",
                    Style::default().fg(color(RED)).bold(),
                )),
                Line::from(""),
                components::field_line("Location", app.session.dashboard.farm.location.clone(), palette),
                components::field_line("Time", raised_at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(), palette),
                Line::from(""),
                Line::from(Span::styled("[ESC] Close", Style::default().fg(color(palette.muted)))),
            ];
            frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), inner);
        }
        Overlay::AddCrop(form) => {
            let inner = components::modal(frame, area, "Add New Crop", 56, 10, palette);
            frame.render_widget(Paragraph::new(crop_form_lines(form, focused, palette)), inner);
        }
        Overlay::AddMember(form) => {
            let inner = components::modal(frame, area, "Add New Team Member", 56, 8, palette);
            frame.render_widget(Paragraph::new(member_form_lines(form, focused, palette)), inner);
        }
    }
}

fn input_line(label: &str, value: &str, focused: bool, palette: &Palette) -> Line<'static> {
    let value_style = if focused {
        Style::default().fg(color(palette.heading)).bg(color(palette.background)).bold()
    } else {
        Style::default().fg(color(palette.text))
    };
    let cursor = if focused { "_" } else { "" };

    Line::from(vec![
        Span::styled(format!("{:<18}", label), Style::default().fg(color(palette.muted))),
        Span::styled(format!("{}{}", value, cursor), value_style),
    ])
}

fn crop_form_lines(form: &CropForm, focused: Option<usize>, palette: &Palette) -> Vec<Line<'static>> {
    let values = [
        &form.name,
        &form.variety,
        &form.stage,
        &form.area,
        &form.expected_harvest,
    ];

    let mut lines: Vec<Line> = CROP_FORM_FIELDS
        .iter()
        .zip(values)
        .enumerate()
        .map(|(i, (label, value))| input_line(label, value, focused == Some(i), palette))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "* required   [ENTER] Add Crop",
        Style::default().fg(color(palette.muted)),
    )));
    lines
}

fn member_form_lines(form: &MemberForm, focused: Option<usize>, palette: &Palette) -> Vec<Line<'static>> {
    let role = format!("< {} >", form.role.label());
    let values = [form.name.as_str(), role.as_str(), form.email.as_str()];

    let mut lines: Vec<Line> = MEMBER_FORM_FIELDS
        .iter()
        .zip(values)
        .enumerate()
        .map(|(i, (label, value))| {
            // The role selector has no text cursor
            let focused = focused == Some(i);
            if i == MEMBER_ROLE_FIELD && focused {
                Line::from(vec![
                    Span::styled(format!("{:<18}", label), Style::default().fg(color(palette.muted))),
                    Span::styled(value.to_string(), Style::default().fg(color(palette.accent)).bold()),
                ])
            } else {
                input_line(label, value, focused, palette)
            }
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "* required   [ENTER] Add Member",
        Style::default().fg(color(palette.muted)),
    )));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use farmkit::mock::MockDataGenerator;
    use farmkit::{DashboardConfig, Session};
    use ratatui::backend::TestBackend;

    fn app() -> App {
        let session = Session::with_generator(&DashboardConfig::default(), MockDataGenerator::seeded(11));
        App::new(session, std::env::temp_dir())
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    /// A title only the tab's own panel draws
    fn panel_marker(app: &App, tab: Tab) -> String {
        match tab {
            Tab::Overview => "Real-time IoT Sensor Data".to_string(),
            Tab::Weather => "7-Day Forecast".to_string(),
            Tab::Crops => "Crop Health Overview".to_string(),
            Tab::Risks => "30-Day Risk Trend".to_string(),
            Tab::Assistant => "AI Recommendations".to_string(),
            Tab::Emergency => "Emergency Response System".to_string(),
            Tab::History => "Activity Log".to_string(),
            Tab::Reports => "Yield & Production Report".to_string(),
            Tab::Map => "Interactive Farm Map".to_string(),
            Tab::Team => format!("Team Members ({})", app.session.dashboard.team.len()),
            Tab::Settings => "User Profile".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_tab_renders_in_both_themes() {
        let mut app = app();

        for theme_pass in 0..2 {
            for tab in Tab::ALL {
                app.session.dashboard.select_tab(tab);
                let screen = render(&app, 140, 48);

                for other in Tab::ALL {
                    let marker = panel_marker(&app, other);
                    assert_eq!(
                        screen.contains(&marker),
                        other == tab,
                        "pass {} on {:?}: marker {:?}",
                        theme_pass,
                        tab,
                        marker
                    );
                }
            }
            app.session.dashboard.toggle_theme();
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_small_terminal_does_not_panic() {
        let mut app = app();

        for tab in Tab::ALL {
            app.session.dashboard.select_tab(tab);
            render(&app, 40, 12);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_compact_sidebar() {
        let mut app = app();
        app.session.dashboard.toggle_sidebar();

        let screen = render(&app, 120, 40);
        assert!(!screen.contains("Quick Stats"));
        assert!(screen.contains("SOS"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sos_overlay_shows_location() {
        let mut app = app();
        app.session.dashboard.raise_sos();

        let screen = render(&app, 120, 40);
        assert!(screen.contains("Emergency SOS"));
        assert!(screen.contains("Chennai, Tamil Nadu"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_form_overlays_render() {
        let mut app = app();
        app.session.dashboard.select_tab(Tab::Crops);
        app.open_crop_form();
        assert!(render(&app, 120, 40).contains("Add New Crop"));

        app.close_overlay();
        app.session.dashboard.select_tab(Tab::Team);
        app.open_member_form();
        let screen = render(&app, 120, 40);
        assert!(screen.contains("Add New Team Member"));
        assert!(screen.contains("< Farmer >"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_status_line_in_header() {
        let mut app = app();
        app.set_status("Profile saved");

        assert!(render(&app, 120, 40).contains("Profile saved"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_settings_shows_profile_draft() {
        let mut app = app();
        app.session.dashboard.select_tab(Tab::Settings);
        app.begin_profile_edit();
        if let Some(draft) = app.profile_draft.as_mut() {
            draft.name = "Asha Rao".to_string();
        }

        let screen = render(&app, 140, 48);
        assert!(screen.contains("Asha Rao_"));
        assert!(screen.contains("< Farmer >"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_assistant_shows_greeting_and_input() {
        let mut app = app();
        app.session.dashboard.select_tab(Tab::Assistant);
        app.mode = InputMode::Chat;
        app.session.dashboard.chat_input = "irrigation?".to_string();

        let screen = render(&app, 140, 48);
        assert!(screen.contains("Hello!"));
        assert!(screen.contains("irrigation?_"));
    }

    #[test]
    fn test_tab_keys_follow_sidebar_order() {
        let keys: String = (0..Tab::ALL.len()).map(tab_key).collect();
        assert_eq!(keys, "1234567890-");
    }
}
