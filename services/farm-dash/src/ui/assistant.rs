// services/farm-dash/src/ui/assistant.rs
//
// Recommendation list beside the chat transcript. The transcript is
// bottom-anchored: the newest message is always visible.

use farmkit::theme::{priority_color, Palette};
use farmkit::types::{ChatMessage, Sender};
use ratatui::{prelude::*, widgets::*};

use super::components::{self, color};
use crate::app::{App, InputMode};

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let [recommendations, chat] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(area);

    draw_recommendations(frame, recommendations, app, palette);

    let [transcript, input] = Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).areas(chat);
    draw_transcript(frame, transcript, app, palette);
    draw_input(frame, input, app, palette);
}

fn draw_recommendations(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let muted = Style::default().fg(color(palette.muted));
    let mut lines = Vec::new();

    for rec in app.session.dashboard.recommendations.iter().skip(app.scroll_offset) {
        let tint = color(priority_color(rec.priority));
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", rec.priority.label()), Style::default().fg(tint).bold()),
            Span::styled(rec.title.clone(), Style::default().fg(color(palette.heading)).bold()),
        ]));
        lines.push(Line::from(Span::raw(rec.description.clone())));
        lines.push(Line::from(vec![
            Span::styled(format!("{} | {}% confidence | ", rec.category, rec.confidence), muted),
            Span::styled(rec.expected_benefit.clone(), Style::default().fg(tint)),
        ]));
        lines.push(Line::from(Span::styled(format!("Impact: {}", rec.impact), muted)));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(components::card("AI Recommendations", palette))
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn draw_transcript(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let dashboard = &app.session.dashboard;
    let block = components::card(&format!("Chat ({} messages)", dashboard.chat.len()), palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Bubbles take at most three quarters of the transcript width
    let bubble_width = (inner.width * 3 / 4).max(10).min(inner.width);

    // Newest first, stacked upwards from the bottom edge
    let mut bottom = inner.bottom();
    for message in dashboard.chat.iter().rev() {
        if bottom <= inner.y {
            break;
        }
        bottom = draw_message(frame, inner, bottom, bubble_width, message, palette);
    }
}

/// Draws one message whose spacer row ends at `bottom` and returns the
/// first row it occupies. A message cut off at the top keeps its tail.
fn draw_message(
    frame: &mut Frame,
    inner: Rect,
    bottom: u16,
    bubble_width: u16,
    message: &ChatMessage,
    palette: &Palette,
) -> u16 {
    let (who, bg, fg, alignment) = match message.sender {
        Sender::User => ("You", palette.chat_user_bg, palette.chat_user_text, Alignment::Right),
        Sender::Assistant => (
            "Assistant",
            palette.chat_assistant_bg,
            palette.chat_assistant_text,
            Alignment::Left,
        ),
    };

    let text = Paragraph::new(message.text.clone())
        .style(Style::default().fg(color(fg)))
        .wrap(Wrap { trim: true });
    let text_height = text
        .line_count(bubble_width.saturating_sub(2).max(1))
        .min(u16::MAX as usize) as u16;

    let text_bottom = bottom.saturating_sub(1);
    let text_top = text_bottom.saturating_sub(text_height).max(inner.y);
    let x = match alignment {
        Alignment::Right => inner.right() - bubble_width,
        _ => inner.x,
    };
    let bubble = Rect::new(x, text_top, bubble_width, text_bottom - text_top);

    if bubble.height > 0 {
        let hidden = text_height - bubble.height;
        frame.render_widget(Block::new().style(Style::default().bg(color(bg))), bubble);
        frame.render_widget(
            text.scroll((hidden, 0)),
            bubble.inner(Margin {
                horizontal: 1,
                vertical: 0,
            }),
        );
    }

    if text_top <= inner.y {
        return inner.y;
    }
    let header = Rect::new(inner.x, text_top - 1, inner.width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{} {}", who, message.timestamp.format("%H:%M")),
            Style::default().fg(color(palette.muted)),
        ))
        .alignment(alignment),
        header,
    );
    header.y
}

fn draw_input(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let editing = app.mode == InputMode::Chat;
    let input = &app.session.dashboard.chat_input;

    let (text, style) = if editing {
        (format!("{}_", input), Style::default().fg(color(palette.text)))
    } else if input.is_empty() {
        (
            "Press [I] to ask about crops, weather or pests".to_string(),
            Style::default().fg(color(palette.muted)),
        )
    } else {
        (input.clone(), Style::default().fg(color(palette.muted)))
    };

    let mut block = components::card("Message", palette);
    if editing {
        block = block.border_style(Style::default().fg(color(palette.accent)));
    }

    frame.render_widget(Paragraph::new(Span::styled(text, style)).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use farmkit::mock::MockDataGenerator;
    use farmkit::{DashboardConfig, Session};
    use ratatui::backend::TestBackend;

    fn app_with_chat(texts: &[(Sender, &str)]) -> App {
        let session = Session::with_generator(&DashboardConfig::default(), MockDataGenerator::seeded(3));
        let mut app = App::new(session, std::env::temp_dir());
        app.session.dashboard.chat = texts
            .iter()
            .enumerate()
            .map(|(i, (sender, text))| ChatMessage {
                id: i as u64 + 1,
                sender: *sender,
                text: text.to_string(),
                timestamp: Local::now(),
            })
            .collect();
        app
    }

    fn transcript_rows(app: &App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| draw_transcript(frame, frame.area(), app, &app.session.dashboard.theme.palette()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_long_message_wraps_inside_bubble() {
        let app = app_with_chat(&[(Sender::Assistant, "check soil moisture before the next irrigation cycle")]);

        let rows = transcript_rows(&app, 30, 12);

        // 28 inner columns, 21 wide bubble, 19 wide text
        assert!(rows.iter().any(|r| r.contains("check soil moisture")));
        assert!(rows.iter().any(|r| r.contains("irrigation cycle")));
        assert!(rows.iter().any(|r| r.contains("Assistant")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_newest_message_stays_visible() {
        let app = app_with_chat(&[
            (Sender::Assistant, "first"),
            (Sender::User, "second"),
            (Sender::Assistant, "third"),
            (Sender::User, "latest question"),
        ]);

        let screen = transcript_rows(&app, 40, 8).concat();

        // Border plus six rows: only the last two messages fit
        assert!(screen.contains("latest question"));
        assert!(screen.contains("third"));
        assert!(!screen.contains("first"));
    }
}
