// services/farm-dash/src/ui/reports.rs
//
// Reports (export action plus yield summary) and the static farm map.

use farmkit::export::EXPORT_READINGS;
use farmkit::theme::{Palette, GREEN};
use ratatui::{prelude::*, widgets::*};

use super::components::{self, color, field_line};
use crate::app::App;

pub fn draw_reports(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let dashboard = &app.session.dashboard;
    let [title, export, yields] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(8),
        Constraint::Min(5),
    ])
    .areas(area);

    components::section_title(
        frame,
        title,
        "Reports & Analytics",
        "Generate detailed reports and download farm data",
        palette,
    );

    let last_export = app
        .last_export
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "none this session".to_string());

    let export_text = vec![
        Line::from(Span::styled(
            format!(
                "Exports weather, {} crops, the risk assessment and the last {} sensor readings as JSON.",
                dashboard.crops.len(),
                EXPORT_READINGS
            ),
            Style::default().fg(color(palette.muted)),
        )),
        Line::from(""),
        field_line("Directory", app.export_dir.display().to_string(), palette),
        field_line("Last export", last_export, palette),
        Line::from(""),
        Line::from(Span::styled(
            " [E] Export Data ",
            Style::default().fg(Color::White).bg(color(palette.accent)).bold(),
        )),
    ];
    frame.render_widget(
        Paragraph::new(export_text)
            .wrap(Wrap { trim: true })
            .block(components::card("Report Generation", palette)),
        export,
    );

    let rows: Vec<Row> = dashboard
        .crops
        .iter()
        .map(|crop| {
            Row::new(vec![
                Cell::from(crop.name.clone()),
                Cell::from(crop.area.map(|a| format!("{:.1} ha", a)).unwrap_or_else(|| "-".to_string())),
                Cell::from(Span::styled(
                    crop.yield_estimate.clone().unwrap_or_else(|| "pending".to_string()),
                    Style::default().fg(color(GREEN)),
                )),
                Cell::from(crop.expected_harvest.clone()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Length(9),
            Constraint::Length(20),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(vec!["CROP", "AREA", "EXPECTED YIELD", "HARVEST"])
            .style(Style::default().fg(color(palette.heading)).bold())
            .bottom_margin(1),
    )
    .block(components::card("Yield & Production Report", palette));

    frame.render_widget(table, yields);
}

pub fn draw_map(frame: &mut Frame, area: Rect, palette: &Palette) {
    let [title, map] = Layout::vertical([Constraint::Length(3), Constraint::Min(5)]).areas(area);

    components::section_title(
        frame,
        title,
        "Farm Map & GIS",
        "View your farm layout, sensor locations, and crop distribution",
        palette,
    );

    let block = components::card("Interactive Farm Map", palette);
    let inner = block.inner(map);
    frame.render_widget(block, map);

    let placeholder = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Map integration placeholder: sensor markers and crop sectors would be drawn here.",
            Style::default().fg(color(palette.muted)),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(color(palette.border)).add_modifier(Modifier::DIM)),
    );
    frame.render_widget(placeholder, inner);
}
