// services/farm-dash/src/ui/weather.rs

use farmkit::theme::{Palette, AMBER, BLUE};
use ratatui::{prelude::*, widgets::*};

use super::components::{self, color, field_line};
use crate::app::App;

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let [current, forecast, hourly] = Layout::vertical([
        Constraint::Length(8),
        Constraint::Length(11),
        Constraint::Min(6),
    ])
    .areas(area);

    draw_current(frame, current, app, palette);
    draw_forecast(frame, forecast, app, palette);
    draw_hourly(frame, hourly, app, palette);
}

fn draw_current(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let weather = &app.session.dashboard.weather;

    let block = components::card("Current Conditions", palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [headline, left, right] = Layout::horizontal([
        Constraint::Length(30),
        Constraint::Percentage(50),
        Constraint::Percentage(50),
    ])
    .areas(inner);

    let headline_text = vec![
        Line::from(Span::styled(
            format!("{}°C", weather.temperature),
            Style::default().fg(color(AMBER)).bold(),
        )),
        Line::from(Span::styled(
            weather.condition.label(),
            Style::default().fg(color(palette.heading)),
        )),
        Line::from(Span::styled(
            weather.location.clone(),
            Style::default().fg(color(palette.muted)),
        )),
        Line::from(Span::styled(
            format!("{:.4}, {:.4}", weather.coordinates.lat, weather.coordinates.lng),
            Style::default().fg(color(palette.muted)),
        )),
    ];
    frame.render_widget(Paragraph::new(headline_text), headline);

    let left_text = vec![
        field_line("Humidity", format!("{}%", weather.humidity), palette),
        field_line("Wind", format!("{} km/h {}", weather.wind, weather.wind_direction), palette),
        field_line("Pressure", format!("{} hPa", weather.pressure), palette),
        field_line("UV Index", weather.uv_index.to_string(), palette),
    ];
    frame.render_widget(Paragraph::new(left_text), left);

    let right_text = vec![
        field_line("Rainfall", format!("{} mm", weather.rainfall), palette),
        field_line("Visibility", format!("{} km", weather.visibility), palette),
        field_line("Dew Point", format!("{}°C", weather.dew_point), palette),
        field_line("Sun", format!("{} / {}", weather.sunrise, weather.sunset), palette),
    ];
    frame.render_widget(Paragraph::new(right_text), right);
}

fn draw_forecast(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let forecast = &app.session.dashboard.weather.forecast;
    let heading = Style::default().fg(color(palette.heading)).bold();

    let rows: Vec<Row> = forecast
        .iter()
        .map(|day| {
            Row::new(vec![
                Cell::from(day.day.clone()),
                Cell::from(day.date.clone()),
                Cell::from(day.condition.label()),
                Cell::from(Span::styled(format!("{}°", day.temp), Style::default().fg(color(AMBER)))),
                Cell::from(format!("{}° / {}°", day.temp_min, day.temp_max)),
                Cell::from(Span::styled(format!("{}%", day.rain), Style::default().fg(color(BLUE)))),
                Cell::from(format!("{}%", day.humidity)),
                Cell::from(format!("{} km/h", day.wind)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Length(14),
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Length(6),
            Constraint::Length(9),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(vec!["DAY", "DATE", "CONDITION", "TEMP", "MIN/MAX", "RAIN", "HUMIDITY", "WIND"])
            .style(heading)
            .bottom_margin(1),
    )
    .block(components::card("7-Day Forecast", palette));

    frame.render_widget(table, area);
}

fn draw_hourly(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let hourly = &app.session.dashboard.weather.hourly_forecast;

    let bars: Vec<Bar> = hourly
        .iter()
        .map(|h| {
            let style = if h.condition.is_rain() {
                Style::default().fg(color(BLUE))
            } else {
                Style::default().fg(color(AMBER))
            };
            Bar::default()
                .value(h.temp.max(0) as u64)
                .label(Line::from(h.hour.get(..2).unwrap_or(h.hour.as_str()).to_string()))
                .style(style)
        })
        .collect();

    let chart = BarChart::default()
        .block(components::card("Hourly Temperature (°C, blue = rain)", palette))
        .bar_width(3)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
