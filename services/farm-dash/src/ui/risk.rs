// services/farm-dash/src/ui/risk.rs

use farmkit::theme::{risk_color, Palette, Rgb, AMBER, BLUE, GREEN, RED};
use farmkit::views::{self, TrendRow};
use ratatui::{prelude::*, symbols::Marker, widgets::*};

use super::components::{self, color};
use crate::app::App;

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let [header, trend, factors] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(14),
        Constraint::Min(6),
    ])
    .areas(area);

    draw_header(frame, header, app, palette);
    draw_trend(frame, trend, app, palette);
    draw_factors(frame, factors, app, palette);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let risk = &app.session.dashboard.risk;
    let level = risk_color(risk.overall_risk);

    let line = Line::from(vec![
        Span::styled("Overall Risk: ", Style::default().fg(color(palette.muted))),
        Span::styled(
            format!(" {} ", risk.overall_risk.label()),
            Style::default()
                .fg(color(level))
                .bg(color(palette.risk_background(risk.overall_risk)))
                .bold(),
        ),
        Span::raw("   "),
        Span::styled("Risk Score: ", Style::default().fg(color(palette.muted))),
        Span::styled(format!("{}/100", risk.risk_score), Style::default().fg(color(level)).bold()),
        Span::raw("   "),
        Span::styled(
            format!("{} high-risk factors", views::high_risk_count(risk)),
            Style::default().fg(color(palette.text)),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(components::card("Risk Assessment", palette)),
        area,
    );
}

fn points(rows: &[TrendRow], value: fn(&TrendRow) -> u32) -> Vec<(f64, f64)> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| (i as f64, value(row) as f64))
        .collect()
}

fn trend_line<'a>(name: &'static str, data: &'a [(f64, f64)], rgb: Rgb) -> Dataset<'a> {
    Dataset::default()
        .name(name)
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color(rgb)))
        .data(data)
}

fn draw_trend(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let rows = views::trend_series(&app.session.dashboard.risk);

    let overall = points(&rows, |r| r.overall);
    let weather = points(&rows, |r| r.weather);
    let pest = points(&rows, |r| r.pest);
    let water = points(&rows, |r| r.water);

    let datasets = vec![
        trend_line("Overall", &overall, RED),
        trend_line("Weather", &weather, BLUE),
        trend_line("Pest", &pest, AMBER),
        trend_line("Water", &water, GREEN),
    ];

    let first = rows.first().map(|r| r.date.clone()).unwrap_or_default();
    let last = rows.last().map(|r| r.date.clone()).unwrap_or_default();
    let muted = Style::default().fg(color(palette.muted));

    let chart = Chart::new(datasets)
        .block(components::card("30-Day Risk Trend", palette))
        .x_axis(
            Axis::default()
                .style(muted)
                .bounds([0.0, rows.len().saturating_sub(1).max(1) as f64])
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

fn draw_factors(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let factors = &app.session.dashboard.risk.factors;
    let muted = Style::default().fg(color(palette.muted));

    let mut lines = Vec::new();
    for factor in factors.iter().skip(app.scroll_offset) {
        lines.push(Line::from(vec![
            Span::styled(factor.kind.clone(), Style::default().fg(color(palette.heading)).bold()),
            Span::raw("  "),
            Span::styled(
                format!(" {} ", factor.risk.label()),
                Style::default()
                    .fg(color(risk_color(factor.risk)))
                    .bg(color(palette.risk_background(factor.risk))),
            ),
            Span::styled(format!("  score {}", factor.score), muted),
            Span::styled(
                format!("  impact {} / probability {}", factor.impact, factor.probability),
                muted,
            ),
        ]));
        lines.push(Line::from(Span::raw(factor.description.clone())));
        for recommendation in &factor.recommendations {
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(color(GREEN))),
                Span::raw(recommendation.clone()),
            ]));
        }
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(components::card("Risk Factors", palette))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
