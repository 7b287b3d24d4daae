// services/farm-dash/src/ui/history.rs

use farmkit::theme::{status_color, Palette};
use ratatui::{prelude::*, widgets::*};

use super::components::{self, color};
use crate::app::App;

/// Rows shown in the activity log
pub const HISTORY_ROWS: usize = 15;

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let [title, log] = Layout::vertical([Constraint::Length(3), Constraint::Min(5)]).areas(area);

    components::section_title(
        frame,
        title,
        "Farm Activity History",
        "Review and track all past actions and events on your farm",
        palette,
    );

    let heading = Style::default().fg(color(palette.heading)).bold();
    let muted = Style::default().fg(color(palette.muted));

    let rows: Vec<Row> = app
        .session
        .dashboard
        .recent_history(HISTORY_ROWS)
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(Span::styled(format!("{} {}", entry.date, entry.time), muted)),
                Cell::from(entry.action.clone()),
                Cell::from(entry.crop.clone()),
                Cell::from(Span::styled(
                    entry.status.label(),
                    Style::default().fg(color(status_color(entry.status))).bold(),
                )),
                Cell::from(format!("₹{}", entry.cost)),
                Cell::from(entry.user.clone()),
                Cell::from(entry.details.clone()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(23),
            Constraint::Length(22),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(14),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(vec!["DATE", "ACTION", "CROP", "STATUS", "COST", "BY", "DETAILS"])
            .style(heading)
            .bottom_margin(1),
    )
    .block(components::card("Activity Log", palette));

    frame.render_widget(table, log);
}
