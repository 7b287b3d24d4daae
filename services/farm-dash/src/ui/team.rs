// services/farm-dash/src/ui/team.rs

use farmkit::theme::{Palette, Rgb, BLUE, GREEN, RED};
use farmkit::types::Role;
use farmkit::views;
use ratatui::{prelude::*, widgets::*};

use super::components::{self, color};
use crate::app::App;

fn role_color(role: Role) -> Rgb {
    match role {
        Role::Admin => RED,
        Role::Agronomist => GREEN,
        Role::Farmer => BLUE,
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let team = &app.session.dashboard.team;
    let [title, roster] = Layout::vertical([Constraint::Length(3), Constraint::Min(4)]).areas(area);

    components::section_title(
        frame,
        title,
        "Team & User Management",
        "Manage farm users, roles, and access permissions  [A] Add member",
        palette,
    );

    let rows: Vec<Row> = team
        .iter()
        .map(|member| {
            Row::new(vec![
                Cell::from(Span::styled(
                    format!(" {:^4} ", views::initials(&member.name)),
                    Style::default().fg(Color::White).bg(color(role_color(member.role))).bold(),
                )),
                Cell::from(Span::styled(
                    member.name.clone(),
                    Style::default().fg(color(palette.heading)).bold(),
                )),
                Cell::from(Span::styled(
                    member.role.label(),
                    Style::default().fg(color(role_color(member.role))),
                )),
                Cell::from(Span::styled(member.email.clone(), Style::default().fg(color(palette.muted)))),
            ])
            .bottom_margin(1)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(7),
            Constraint::Length(24),
            Constraint::Length(12),
            Constraint::Min(10),
        ],
    )
    .column_spacing(2)
    .block(components::card(&format!("Team Members ({})", team.len()), palette));

    frame.render_widget(table, roster);
}
