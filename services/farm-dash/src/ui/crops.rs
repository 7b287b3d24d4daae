// services/farm-dash/src/ui/crops.rs
//
// Crop health chart and the per-crop status table. New crops come in
// through the add-crop overlay drawn by the root layout.

use farmkit::theme::{health_color, risk_color, Palette};
use farmkit::views;
use ratatui::{prelude::*, widgets::*};

use super::components::{self, color};
use crate::app::App;

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let [title, chart, table] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(10),
        Constraint::Min(5),
    ])
    .areas(area);

    components::section_title(
        frame,
        title,
        "Crop Status",
        "Health, growth stage and upcoming work for every planted crop  [A] Add crop",
        palette,
    );
    draw_health_chart(frame, chart, app, palette);
    draw_crop_table(frame, table, app, palette);
}

fn draw_health_chart(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let bars: Vec<Bar> = views::crop_health_bars(&app.session.dashboard.crops)
        .into_iter()
        .map(|(name, score)| {
            Bar::default()
                .value(score as u64)
                .label(Line::from(name))
                .style(Style::default().fg(color(health_color(score))))
        })
        .collect();

    let chart = BarChart::default()
        .block(components::card("Crop Health Overview", palette))
        .bar_width(10)
        .bar_gap(2)
        .max(100)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

fn draw_crop_table(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let crops = &app.session.dashboard.crops;
    let heading = Style::default().fg(color(palette.heading)).bold();
    let muted = Style::default().fg(color(palette.muted));

    let rows: Vec<Row> = crops
        .iter()
        .skip(app.scroll_offset)
        .map(|crop| {
            let issues = if crop.issues.is_empty() {
                Span::styled("none", muted)
            } else {
                Span::raw(crop.issues.join("; "))
            };
            let area = crop.area.map(|a| format!("{:.1} ha", a)).unwrap_or_else(|| "-".to_string());

            Row::new(vec![
                Cell::from(Span::styled(crop.name.clone(), Style::default().bold())),
                Cell::from(crop.variety.clone()),
                Cell::from(crop.stage.clone()),
                Cell::from(Span::styled(
                    format!("{}%", crop.health_score),
                    Style::default().fg(color(health_color(crop.health_score))).bold(),
                )),
                Cell::from(area),
                Cell::from(Span::styled(
                    crop.pest_activity.label(),
                    Style::default().fg(color(risk_color(crop.pest_activity))),
                )),
                Cell::from(crop.expected_harvest.clone()),
                Cell::from(crop.next_action.clone().unwrap_or_else(|| "-".to_string())),
                Cell::from(issues),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(11),
            Constraint::Length(16),
            Constraint::Length(7),
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Length(11),
            Constraint::Length(24),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(vec![
            "CROP", "VARIETY", "STAGE", "HEALTH", "AREA", "PESTS", "HARVEST", "NEXT ACTION", "ISSUES",
        ])
        .style(heading)
        .bottom_margin(1),
    )
    .block(components::card(&format!("Crops ({})", crops.len()), palette));

    frame.render_widget(table, area);
}
