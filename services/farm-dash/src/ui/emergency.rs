// services/farm-dash/src/ui/emergency.rs

use farmkit::theme::{Palette, RED};
use ratatui::{prelude::*, widgets::*};

use super::components::{self, color};
use crate::app::App;

/// (role, name, how to reach them)
const CONTACTS: [(&str, &str, &str); 2] = [
    ("Farm Manager", "Jane Doe", "+91 98765 43210"),
    ("Local Agronomist", "Dr. Smith", "dr.smith@agri.org"),
];

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let [title, body] = Layout::vertical([Constraint::Length(3), Constraint::Min(6)]).areas(area);

    components::section_title(
        frame,
        title,
        "Emergency Response System",
        "Quick access to emergency protocols and contact information",
        palette,
    );

    let [sos, contacts] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(body);

    let sos_text = vec![
        Line::from(Span::styled(
            "In a critical situation, raise an SOS to alert farm managers and emergency \
             services with your current location.",
            Style::default().fg(color(palette.muted)),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  [S] SEND EMERGENCY SOS  ",
            Style::default().fg(Color::White).bg(color(RED)).bold(),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        components::field_line("Location", app.session.dashboard.farm.location.clone(), palette),
    ];
    frame.render_widget(
        Paragraph::new(sos_text)
            .wrap(Wrap { trim: true })
            .block(components::card("Emergency SOS", palette)),
        sos,
    );

    let mut contact_lines = Vec::new();
    for (role, name, reach) in CONTACTS {
        contact_lines.push(Line::from(Span::styled(
            format!("{}: {}", role, name),
            Style::default().fg(color(palette.heading)).bold(),
        )));
        contact_lines.push(Line::from(Span::styled(reach, Style::default().fg(color(palette.muted)))));
        contact_lines.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(contact_lines).block(components::card("Emergency Contacts", palette)),
        contacts,
    );
}
