// services/farm-dash/src/ui/settings.rs
//
// Profile editor and display preferences. While editing, the draft held by
// the app is shown instead of the saved profile.

use farmkit::theme::Palette;
use ratatui::{prelude::*, widgets::*};

use super::components::{self, color, field_line};
use crate::app::{App, InputMode, PROFILE_FIELDS};

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let [title, profile, preferences] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(8),
        Constraint::Min(6),
    ])
    .areas(area);

    components::section_title(
        frame,
        title,
        "Settings",
        "Manage your profile and dashboard preferences",
        palette,
    );
    draw_profile(frame, profile, app, palette);
    draw_preferences(frame, preferences, app, palette);
}

fn draw_profile(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let profile = &app.session.dashboard.profile;
    let muted = Style::default().fg(color(palette.muted));

    let (lines, editing) = match (&app.profile_draft, app.mode) {
        (Some(draft), InputMode::Profile { field }) => {
            let values = [draft.name.clone(), format!("< {} >", draft.role.label())];
            let mut lines: Vec<Line> = PROFILE_FIELDS
                .iter()
                .zip(values)
                .enumerate()
                .map(|(i, (label, value))| {
                    let focused = i == field;
                    let style = if focused {
                        Style::default().fg(color(palette.heading)).bg(color(palette.background)).bold()
                    } else {
                        Style::default().fg(color(palette.text))
                    };
                    let cursor = if focused && i == 0 { "_" } else { "" };
                    Line::from(vec![
                        Span::styled(format!("{:<10}", label), muted),
                        Span::styled(format!("{}{}", value, cursor), style),
                    ])
                })
                .collect();
            lines.push(field_line("Email", profile.email.clone(), palette));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "[TAB] Next field  [SPACE] Cycle role  [ENTER] Save  [ESC] Cancel",
                muted,
            )));
            (lines, true)
        }
        _ => (
            vec![
                field_line("Name", profile.name.clone(), palette),
                field_line("Role", profile.role.label(), palette),
                field_line("Email", profile.email.clone(), palette),
                Line::from(""),
                Line::from(Span::styled("[I] Edit profile", muted)),
            ],
            false,
        ),
    };

    let mut block = components::card("User Profile", palette);
    if editing {
        block = block.border_style(Style::default().fg(color(palette.accent)));
    }
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_preferences(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let dashboard = &app.session.dashboard;
    let muted = Style::default().fg(color(palette.muted));
    let theme = if dashboard.theme.is_dark() { "Dark" } else { "Light" };
    let sidebar = if dashboard.sidebar_open { "Expanded" } else { "Compact" };

    let lines = vec![
        Line::from(vec![
            Span::styled("Theme       ", muted),
            Span::styled(theme, Style::default().fg(color(palette.accent)).bold()),
            Span::styled("   [T] toggle", muted),
        ]),
        Line::from(vec![
            Span::styled("Sidebar     ", muted),
            Span::styled(sidebar, Style::default().fg(color(palette.text))),
            Span::styled("   [B] toggle", muted),
        ]),
        field_line("Farm", dashboard.farm.farm_id.clone(), palette),
        field_line(
            "Live data",
            format!(
                "{} refreshes, last at {}",
                dashboard.refresh_count,
                dashboard.last_refresh.format("%H:%M:%S")
            ),
            palette,
        ),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(components::card("Preferences", palette)),
        area,
    );
}
