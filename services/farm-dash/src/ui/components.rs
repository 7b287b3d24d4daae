// services/farm-dash/src/ui/components.rs
//
// Shared rendering pieces: card shell, stat card, section title and the
// modal overlay. All of them take the active palette and hold no state.

use farmkit::theme::{Palette, Rgb};
use ratatui::{layout::Flex, prelude::*, widgets::*};

pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Rounded, titled block every panel section sits in
pub fn card(title: &str, palette: &Palette) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(color(palette.heading)).bold(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color(palette.border)))
        .style(Style::default().bg(color(palette.card)).fg(color(palette.text)))
}

pub fn stat_card(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    caption: &str,
    value_color: Color,
    palette: &Palette,
) {
    let block = card(label, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = vec![
        Line::from(Span::styled(value.to_string(), Style::default().fg(value_color).bold())),
        Line::from(Span::styled(
            caption.to_string(),
            Style::default().fg(color(palette.muted)),
        )),
    ];

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

/// Heading line plus a muted subtitle. Needs two rows.
pub fn section_title(frame: &mut Frame, area: Rect, title: &str, subtitle: &str, palette: &Palette) {
    let text = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(color(palette.heading)).bold(),
        )),
        Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(color(palette.muted)),
        )),
    ];

    frame.render_widget(Paragraph::new(text), area);
}

/// `label: value` row used by detail lists
pub fn field_line(label: &str, value: impl Into<String>, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(color(palette.muted))),
        Span::styled(value.into(), Style::default().fg(color(palette.text))),
    ])
}

/// Rect of at most `width` x `height` centered inside `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Clear a centered region, draw the modal frame and return its inner area
pub fn modal(frame: &mut Frame, area: Rect, title: &str, width: u16, height: u16, palette: &Palette) -> Rect {
    let region = centered(area, width, height);
    frame.render_widget(Clear, region);

    let block = card(title, palette)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(color(palette.accent)));
    let inner = block.inner(region);
    frame.render_widget(block, region);

    inner.inner(Margin {
        horizontal: 1,
        vertical: 0,
    })
}
