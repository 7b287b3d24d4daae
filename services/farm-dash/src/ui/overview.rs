// services/farm-dash/src/ui/overview.rs
//
// Landing panel: headline numbers, the sensor trend, risk distribution
// and the nutrient profile of the newest reading.

use farmkit::theme::{health_color, Palette, AMBER, BLUE, GREEN, RED};
use farmkit::views;
use ratatui::{prelude::*, symbols::Marker, widgets::*};

use super::components::{self, color};
use crate::app::App;

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let [stats, charts, nutrients] = Layout::vertical([
        Constraint::Length(4), // Stat cards
        Constraint::Min(8),    // IoT trend + risk distribution
        Constraint::Length(8), // Nutrient profile
    ])
    .areas(area);

    draw_stats(frame, stats, app, palette);

    let [trend, distribution] =
        Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]).areas(charts);
    draw_iot_trend(frame, trend, app, palette);
    draw_risk_distribution(frame, distribution, app, palette);
    draw_nutrients(frame, nutrients, app, palette);
}

fn draw_stats(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let dashboard = &app.session.dashboard;
    let chunks = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

    components::stat_card(
        frame,
        chunks[0],
        "Temperature",
        &format!("{}°C", dashboard.weather.temperature),
        dashboard.weather.condition.label(),
        color(AMBER),
        palette,
    );

    let average = views::average_health(&dashboard.crops);
    components::stat_card(
        frame,
        chunks[1],
        "Crop Health",
        &format!("{}%", views::average_health_display(&dashboard.crops)),
        &format!("{} crops", dashboard.crops.len()),
        color(health_color(average.round() as u8)),
        palette,
    );

    let moisture = views::latest_reading(&dashboard.iot_readings)
        .map(|r| format!("{}%", r.soil_moisture))
        .unwrap_or_else(|| "--".to_string());
    components::stat_card(
        frame,
        chunks[2],
        "Soil Moisture",
        &moisture,
        "latest sensor",
        color(BLUE),
        palette,
    );

    let high = views::high_risk_count(&dashboard.risk);
    components::stat_card(
        frame,
        chunks[3],
        "High Risks",
        &high.to_string(),
        &format!("of {} factors", dashboard.risk.factors.len()),
        color(if high > 0 { RED } else { GREEN }),
        palette,
    );
}

fn draw_iot_trend(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let readings = &app.session.dashboard.iot_readings;

    let series = |f: fn(&farmkit::types::IoTReading) -> f64| -> Vec<(f64, f64)> {
        readings.iter().enumerate().map(|(i, r)| (i as f64, f(r))).collect()
    };
    let moisture = series(|r| r.soil_moisture as f64);
    let air_temp = series(|r| r.air_temp as f64);
    let humidity = series(|r| r.humidity as f64);

    let datasets = vec![
        Dataset::default()
            .name("Soil moisture %")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(color(BLUE)))
            .data(&moisture),
        Dataset::default()
            .name("Air temp °C")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(color(AMBER)))
            .data(&air_temp),
        Dataset::default()
            .name("Humidity %")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(color(GREEN)))
            .data(&humidity),
    ];

    let first = readings.first().map(|r| r.time.clone()).unwrap_or_default();
    let last = readings.last().map(|r| r.time.clone()).unwrap_or_default();
    let muted = Style::default().fg(color(palette.muted));

    let chart = Chart::new(datasets)
        .block(components::card("Real-time IoT Sensor Data", palette))
        .x_axis(
            Axis::default()
                .style(muted)
                .bounds([0.0, readings.len().saturating_sub(1).max(1) as f64])
                .labels(vec![first, last]),
        )
        .y_axis(
            Axis::default()
                .style(muted)
                .bounds([0.0, 100.0])
                .labels(vec!["0", "50", "100"]),
        );

    frame.render_widget(chart, area);
}

fn draw_risk_distribution(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let slices = views::risk_counts(&app.session.dashboard.risk);

    let bars: Vec<Bar> = slices
        .iter()
        .map(|slice| {
            Bar::default()
                .value(slice.count as u64)
                .label(Line::from(slice.level.label()))
                .style(Style::default().fg(color(slice.color)))
                .value_style(Style::default().fg(color(palette.card)).bg(color(slice.color)).bold())
        })
        .collect();

    let chart = BarChart::default()
        .block(components::card("Risk Distribution", palette))
        .bar_width(8)
        .bar_gap(2)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

fn draw_nutrients(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let axes = views::nutrient_radar(&app.session.dashboard.iot_readings);

    let block = components::card("Soil Nutrient Profile", palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical(vec![Constraint::Length(1); axes.len()]).split(inner);
    for (axis, row) in axes.iter().zip(rows.iter()) {
        let [label, gauge] =
            Layout::horizontal([Constraint::Length(15), Constraint::Min(5)]).areas(*row);

        frame.render_widget(
            Paragraph::new(Span::styled(axis.name, Style::default().fg(color(palette.muted)))),
            label,
        );
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(color(GREEN)).bg(color(palette.background)))
                .ratio(axis.ratio())
                .label(format!("{} / {}", axis.value, axis.full_mark)),
            gauge,
        );
    }
}
