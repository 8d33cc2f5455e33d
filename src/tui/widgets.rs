//! Rendering helpers for log lines, roster entries, and toasts

use crate::session::{Message, MessageKind, Notification};
use crate::tui::{classification_color, notice_color, Theme};
use chrono::Local;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph},
};

/// Characters substituted into glitched messages
const GLITCH_GLYPHS: [char; 4] = ['█', '▓', '▒', '░'];

/// Corrupt a line of text the way the entities like it
///
/// Substitution is keyed on character position so a glitched message
/// renders the same way every frame.
pub fn glitch_text(text: &str) -> String {
    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            if ch != ' ' && i % 7 == 3 {
                GLITCH_GLYPHS[i % GLITCH_GLYPHS.len()]
            } else {
                ch
            }
        })
        .collect()
}

/// Render one log message as styled lines
pub fn message_lines<'a>(message: &'a Message, theme: &Theme) -> Vec<Line<'a>> {
    let timestamp = message
        .timestamp
        .with_timezone(&Local)
        .format("%H:%M:%S")
        .to_string();

    let sender_style = match message.kind {
        MessageKind::User => Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        MessageKind::System => Style::default().fg(theme.dim),
        MessageKind::Entity => Style::default().fg(theme.entity).add_modifier(Modifier::BOLD),
    };
    let text_style = if message.glitched {
        Style::default().fg(theme.fg).add_modifier(Modifier::RAPID_BLINK)
    } else {
        Style::default().fg(theme.fg)
    };

    let mut header = vec![
        Span::styled(format!("[{}] ", timestamp), Style::default().fg(theme.dim)),
        Span::styled(format!("{}: ", message.sender), sender_style),
    ];
    if let Some(classification) = &message.classification {
        header.push(Span::styled(
            format!("[{}] ", classification),
            Style::default().fg(classification_color(classification)),
        ));
    }

    let mut lines = vec![Line::from(header)];
    for raw in message.text.split('\n') {
        let rendered = if message.glitched {
            glitch_text(raw)
        } else {
            raw.to_string()
        };
        lines.push(Line::from(Span::styled(format!("  {}", rendered), text_style)));
    }
    lines
}

/// Render a roster entry
pub fn roster_item<'a>(name: &str, status: &str, theme: &Theme) -> ListItem<'a> {
    ListItem::new(Line::from(vec![
        Span::styled(format!("{:<18}", name), Style::default().fg(theme.fg)),
        Span::styled(status.to_string(), Style::default().fg(theme.dim)),
    ]))
}

/// Render a notification toast
pub fn notification_widget<'a>(notification: &Notification, theme: &Theme) -> Paragraph<'a> {
    let color = notice_color(notification.kind);
    Paragraph::new(Line::from(Span::styled(
        notification.text.clone(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(theme.bg)),
    )
}
