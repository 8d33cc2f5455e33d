//! Main application state and rendering

use crate::content::{DOSSIER_ENTRIES, DOSSIER_TITLE, DOSSIER_WARNING, GLYPH_CIPHER};
use crate::session::Session;
use crate::tui::{
    create_content_layout, create_main_layout, create_sidebar_layout, styled_block, widgets,
    Theme, HELP_TEXT, SMALL_LOGO,
};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::time::{Duration, Instant};

/// Sections the sidebar navigates between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Chat,
    Evidence,
    Coordinates,
    Symbols,
    Classified,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Chat,
        Section::Evidence,
        Section::Coordinates,
        Section::Symbols,
        Section::Classified,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Chat => "CHAT",
            Section::Evidence => "EVIDENCE",
            Section::Coordinates => "COORDINATES",
            Section::Symbols => "SYMBOLS",
            Section::Classified => "CLASSIFIED",
        }
    }

    fn next(self) -> Self {
        let index = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// What the input bar feeds in this section
    fn input_target(self) -> InputTarget {
        match self {
            Section::Chat => InputTarget::Message,
            Section::Evidence => InputTarget::Message,
            Section::Coordinates => InputTarget::Coordinates,
            Section::Symbols => InputTarget::Symbols,
            Section::Classified => InputTarget::AccessCode,
        }
    }
}

/// Where committed input goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTarget {
    Message,
    Username,
    Coordinates,
    Symbols,
    AccessCode,
}

impl InputTarget {
    fn prompt(self) -> &'static str {
        match self {
            InputTarget::Message => "MESSAGE (/help for commands)",
            InputTarget::Username => "IDENTIFY YOURSELF",
            InputTarget::Coordinates => "COORDINATES <lat> <lon>",
            InputTarget::Symbols => "SYMBOL PATTERN",
            InputTarget::AccessCode => "ACCESS CODE",
        }
    }
}

/// Input mode for the bottom bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing(InputTarget),
}

/// Application state
pub struct App {
    pub session: Session,
    pub theme: Theme,
    pub running: bool,
    pub show_help: bool,
    pub section: Section,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub input_history: Vec<String>,
    pub message_scroll: u16,
    pub evidence_state: ListState,
    started: Instant,
}

impl App {
    pub fn new() -> Self {
        let mut evidence_state = ListState::default();
        evidence_state.select(Some(0));

        Self {
            session: Session::new(),
            theme: Theme::default(),
            running: true,
            show_help: false,
            section: Section::Chat,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            input_history: Vec::new(),
            message_scroll: 0,
            evidence_state,
            started: Instant::now(),
        }
    }

    /// Advance the session's virtual clock; called once per UI loop
    pub fn on_tick(&mut self) {
        self.session.tick(self.started.elapsed());
    }

    /// Handle keyboard input
    pub fn handle_input(&mut self) -> std::io::Result<bool> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(true);
                }

                // Editing mode captures almost everything
                if let InputMode::Editing(target) = self.input_mode {
                    match key.code {
                        KeyCode::Enter => {
                            self.commit_input(target);
                            self.input_mode = InputMode::Normal;
                        }
                        KeyCode::Esc => {
                            self.input_buffer.clear();
                            self.input_mode = InputMode::Normal;
                        }
                        KeyCode::Backspace => {
                            self.input_buffer.pop();
                        }
                        KeyCode::Char(c) => {
                            self.input_buffer.push(c);
                        }
                        _ => {}
                    }
                    return Ok(true);
                }

                // Normal mode
                match key.code {
                    KeyCode::Char('q') => {
                        self.session.shutdown();
                        self.running = false;
                        return Ok(false);
                    }
                    KeyCode::Char('?') => {
                        self.show_help = !self.show_help;
                    }
                    KeyCode::Esc => {
                        self.show_help = false;
                    }
                    KeyCode::Tab => {
                        self.section = self.section.next();
                        self.message_scroll = 0;
                    }
                    KeyCode::Char(c @ '1'..='5') => {
                        let index = c as usize - '1' as usize;
                        self.section = Section::ALL[index];
                        self.message_scroll = 0;
                    }
                    KeyCode::Char('u') => {
                        self.input_buffer.clear();
                        self.input_mode = InputMode::Editing(InputTarget::Username);
                    }
                    KeyCode::Char('x') if self.section == Section::Chat => {
                        self.session.clear_log();
                        self.message_scroll = 0;
                    }
                    KeyCode::Enter if self.section == Section::Evidence => {
                        if let Some(index) = self.evidence_state.selected() {
                            // Selection is bounded by the list; ignore a stale index
                            let _ = self.session.open_evidence(index);
                        }
                    }
                    KeyCode::Enter => {
                        self.input_buffer.clear();
                        self.input_mode = InputMode::Editing(self.section.input_target());
                    }
                    KeyCode::Up => self.navigate_up(),
                    KeyCode::Down => self.navigate_down(),
                    _ => {}
                }
            }
        }
        Ok(true)
    }

    fn navigate_up(&mut self) {
        if self.section == Section::Evidence {
            let selected = self.evidence_state.selected().unwrap_or(0);
            self.evidence_state.select(Some(selected.saturating_sub(1)));
        } else {
            self.message_scroll = self.message_scroll.saturating_add(1);
        }
    }

    fn navigate_down(&mut self) {
        if self.section == Section::Evidence {
            let selected = self.evidence_state.selected().unwrap_or(0);
            let last = self.session.evidence.len().saturating_sub(1);
            self.evidence_state.select(Some((selected + 1).min(last)));
        } else {
            self.message_scroll = self.message_scroll.saturating_sub(1);
        }
    }

    /// Route committed input into the session
    fn commit_input(&mut self, target: InputTarget) {
        let input = std::mem::take(&mut self.input_buffer);
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return;
        }
        self.input_history.push(trimmed.to_string());

        match target {
            InputTarget::Message => self.session.submit(trimmed),
            InputTarget::Username => self.session.set_username(trimmed),
            InputTarget::Coordinates => {
                let mut parts = trimmed.split_whitespace();
                let lat = parts.next().unwrap_or("");
                let lon = parts.next().unwrap_or("");
                self.session.track_location(lat, lon);
            }
            InputTarget::Symbols => self.session.decode_symbols(trimmed),
            InputTarget::AccessCode => self.session.attempt_access(trimmed),
        }
        self.message_scroll = 0;
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    pub fn render(&mut self, frame: &mut Frame) {
        let areas = create_main_layout(frame.area());
        self.render_header(frame, areas[0]);

        let content = create_content_layout(areas[1]);
        self.render_sidebar(frame, content[0]);
        match self.section {
            Section::Chat => self.render_chat(frame, content[1]),
            Section::Evidence => self.render_evidence(frame, content[1]),
            Section::Coordinates => self.render_coordinates(frame, content[1]),
            Section::Symbols => self.render_symbols(frame, content[1]),
            Section::Classified => self.render_classified(frame, content[1]),
        }

        self.render_input_bar(frame, areas[2]);
        self.render_notifications(frame, frame.area());
        if self.show_help {
            self.render_help(frame, frame.area());
        }
    }

    fn border_style(&self) -> Style {
        if self.session.is_disturbed() || self.session.is_glitching() {
            Style::default().fg(self.theme.alert).add_modifier(Modifier::RAPID_BLINK)
        } else {
            Style::default().fg(self.theme.border)
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let status_color = if self.session.proxied {
            self.theme.alert
        } else {
            self.theme.success
        };
        let title = if self.session.is_glitching() {
            widgets::glitch_text(SMALL_LOGO)
        } else {
            SMALL_LOGO.to_string()
        };

        let line = Line::from(vec![
            Span::styled(
                title,
                Style::default().fg(self.theme.header).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(self.session.clock.clone(), Style::default().fg(self.theme.dim)),
            Span::raw("  "),
            Span::styled(
                format!("{} OBSERVERS", self.session.observer_count),
                Style::default().fg(self.theme.warning),
            ),
            Span::raw("  "),
            Span::styled(
                self.session.connection_status(),
                Style::default().fg(status_color).add_modifier(Modifier::BOLD),
            ),
        ]);

        let header = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(styled_block("", &self.theme).border_style(self.border_style()));
        frame.render_widget(header, area);
    }

    fn render_sidebar(&self, frame: &mut Frame, area: Rect) {
        let parts = create_sidebar_layout(area);

        let nav_items: Vec<ListItem> = Section::ALL
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let style = if *section == self.section {
                    Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(self.theme.fg)
                };
                ListItem::new(Span::styled(format!("{} {}", i + 1, section.title()), style))
            })
            .collect();
        let nav = List::new(nav_items)
            .block(styled_block("SECTIONS", &self.theme).border_style(self.border_style()));
        frame.render_widget(nav, parts[0]);

        let roster_items: Vec<ListItem> = self
            .session
            .roster()
            .into_iter()
            .map(|(name, status)| widgets::roster_item(&name, &status, &self.theme))
            .collect();
        let roster = List::new(roster_items)
            .block(styled_block("OBSERVERS", &self.theme).border_style(self.border_style()));
        frame.render_widget(roster, parts[1]);
    }

    fn render_chat(&self, frame: &mut Frame, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        for message in &self.session.messages {
            lines.extend(widgets::message_lines(message, &self.theme));
        }

        // Stick to the bottom, offset by the scroll position
        let visible = area.height.saturating_sub(2);
        let total = lines.len() as u16;
        let bottom = total.saturating_sub(visible);
        let offset = bottom.saturating_sub(self.message_scroll);

        let log = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((offset, 0))
            .block(styled_block("TRANSMISSION LOG", &self.theme).border_style(self.border_style()));
        frame.render_widget(log, area);
    }

    fn render_evidence(&mut self, frame: &mut Frame, area: Rect) {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(6)])
            .split(area);

        let items: Vec<ListItem> = self
            .session
            .evidence
            .iter()
            .map(|file| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{} {:<20}", file.kind.icon(), file.name),
                        Style::default().fg(self.theme.fg),
                    ),
                    Span::styled(
                        format!("{:<10}", file.status.to_string()),
                        Style::default().fg(self.theme.warning),
                    ),
                    Span::styled(
                        format!("[{}]", file.classification),
                        Style::default().fg(crate::tui::classification_color(&file.classification)),
                    ),
                ]))
            })
            .collect();
        let list = List::new(items)
            .highlight_style(Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ")
            .block(styled_block("EVIDENCE ARCHIVE", &self.theme).border_style(self.border_style()));
        frame.render_stateful_widget(list, parts[0], &mut self.evidence_state);

        let detail = self
            .evidence_state
            .selected()
            .and_then(|i| self.session.evidence.get(i))
            .map(|file| file.description.clone())
            .unwrap_or_default();
        let details = Paragraph::new(detail)
            .wrap(Wrap { trim: false })
            .block(styled_block("DETAILS", &self.theme).border_style(self.border_style()));
        frame.render_widget(details, parts[1]);
    }

    fn render_coordinates(&self, frame: &mut Frame, area: Rect) {
        let parts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let fixes: Vec<Line> = self
            .session
            .coordinates
            .iter()
            .map(|fix| {
                Line::from(Span::styled(
                    format!(
                        "{}  {}, {}",
                        fix.logged_at.format("%H:%M:%S"),
                        fix.lat,
                        fix.lon
                    ),
                    Style::default().fg(self.theme.fg),
                ))
            })
            .collect();
        let log = Paragraph::new(fixes)
            .block(styled_block("SURVEILLANCE GRID", &self.theme).border_style(self.border_style()));
        frame.render_widget(log, parts[0]);

        let report_lines: Vec<Line> = match &self.session.location_report {
            Some(report) => report
                .iter()
                .map(|line| {
                    Line::from(Span::styled(
                        line.clone(),
                        Style::default().fg(self.theme.warning),
                    ))
                })
                .collect(),
            None => vec![Line::from(Span::styled(
                "Press Enter and submit <lat> <lon> to analyze a location.",
                Style::default().fg(self.theme.dim),
            ))],
        };
        let report = Paragraph::new(report_lines)
            .wrap(Wrap { trim: false })
            .block(styled_block("LOCATION ANALYSIS", &self.theme).border_style(self.border_style()));
        frame.render_widget(report, parts[1]);
    }

    fn render_symbols(&self, frame: &mut Frame, area: Rect) {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(5)])
            .split(area);

        let legend: Vec<Line> = GLYPH_CIPHER
            .iter()
            .map(|(glyph, word)| {
                Line::from(vec![
                    Span::styled(format!("  {}  ", glyph), Style::default().fg(self.theme.accent)),
                    Span::styled(*word, Style::default().fg(self.theme.dim)),
                ])
            })
            .collect();
        let key = Paragraph::new(legend)
            .block(styled_block("KNOWN GLYPHS", &self.theme).border_style(self.border_style()));
        frame.render_widget(key, parts[0]);

        let output: Vec<Line> = match &self.session.decoder_report {
            Some(report) => report
                .iter()
                .map(|line| {
                    Line::from(Span::styled(
                        line.clone(),
                        Style::default()
                            .fg(self.theme.warning)
                            .add_modifier(Modifier::BOLD),
                    ))
                })
                .collect(),
            None => vec![Line::from(Span::styled(
                "Press Enter and paste a symbol pattern to decode it.",
                Style::default().fg(self.theme.dim),
            ))],
        };
        let decoder = Paragraph::new(output)
            .wrap(Wrap { trim: false })
            .block(styled_block("DECODER OUTPUT", &self.theme).border_style(self.border_style()));
        frame.render_widget(decoder, parts[1]);
    }

    fn render_classified(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = if self.session.classified_unlocked {
            let mut lines = vec![
                Line::from(Span::styled(
                    "⚠ CLASSIFIED ACCESS GRANTED ⚠",
                    Style::default().fg(self.theme.alert).add_modifier(Modifier::BOLD),
                )),
                Line::default(),
                Line::from(Span::styled(
                    DOSSIER_TITLE,
                    Style::default().fg(self.theme.header).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "CLASSIFIED DOCUMENTATION:",
                    Style::default().fg(self.theme.dim),
                )),
            ];
            for entry in DOSSIER_ENTRIES {
                lines.push(Line::from(Span::styled(
                    format!("  • {}", entry),
                    Style::default().fg(self.theme.fg),
                )));
            }
            lines.push(Line::default());
            for warning in DOSSIER_WARNING {
                lines.push(Line::from(Span::styled(
                    warning,
                    Style::default().fg(self.theme.alert),
                )));
            }
            lines
        } else {
            vec![
                Line::from(Span::styled(
                    "RESTRICTED SECTION",
                    Style::default().fg(self.theme.alert).add_modifier(Modifier::BOLD),
                )),
                Line::default(),
                Line::from(Span::styled(
                    "Press Enter and submit an access code.",
                    Style::default().fg(self.theme.dim),
                )),
                Line::from(Span::styled(
                    format!("FAILED ATTEMPTS: {}", self.session.failed_access_attempts),
                    Style::default().fg(self.theme.warning),
                )),
            ]
        };

        let panel = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(styled_block("CLASSIFIED", &self.theme).border_style(self.border_style()));
        frame.render_widget(panel, area);
    }

    fn render_input_bar(&self, frame: &mut Frame, area: Rect) {
        let (prompt, text, style) = match self.input_mode {
            InputMode::Editing(target) => (
                target.prompt(),
                format!("{}█", self.input_buffer),
                Style::default().fg(self.theme.accent),
            ),
            InputMode::Normal => (
                "READY",
                "Press Enter to type, Tab to switch sections, ? for help".to_string(),
                Style::default().fg(self.theme.dim),
            ),
        };

        let bar = Paragraph::new(Line::from(Span::styled(text, style)))
            .block(styled_block(prompt, &self.theme).border_style(self.border_style()));
        frame.render_widget(bar, area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        for (i, notification) in self.session.notifications.iter().take(4).enumerate() {
            let width = (notification.text.len() as u16 + 4).min(area.width);
            let rect = Rect {
                x: area.width.saturating_sub(width + 1),
                y: 1 + (i as u16) * 3,
                width,
                height: 3,
            };
            frame.render_widget(Clear, rect);
            frame.render_widget(
                widgets::notification_widget(notification, &self.theme),
                rect,
            );
        }
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let width = 67.min(area.width);
        let height = 18.min(area.height);
        let rect = Rect {
            x: (area.width.saturating_sub(width)) / 2,
            y: (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };
        frame.render_widget(Clear, rect);
        let help = Paragraph::new(HELP_TEXT)
            .style(Style::default().fg(self.theme.fg))
            .alignment(Alignment::Center);
        frame.render_widget(help, rect);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_cycle_in_order() {
        let mut section = Section::Chat;
        for expected in [
            Section::Evidence,
            Section::Coordinates,
            Section::Symbols,
            Section::Classified,
            Section::Chat,
        ] {
            section = section.next();
            assert_eq!(section, expected);
        }
    }

    #[test]
    fn committed_chat_input_reaches_the_session() {
        let mut app = App::new();
        app.input_buffer = "/encrypt HELLO".to_string();
        app.commit_input(InputTarget::Message);
        assert!(app
            .session
            .messages
            .iter()
            .any(|m| m.text == "ENCRYPTED: =8ETMVES"));
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.input_history.last().map(String::as_str), Some("/encrypt HELLO"));
    }

    #[test]
    fn committed_access_code_hits_the_gate() {
        let mut app = App::new();
        app.input_buffer = "wrong code".to_string();
        app.commit_input(InputTarget::AccessCode);
        // The gate sees the whole trimmed input, not just the first token
        assert_eq!(app.session.failed_access_attempts, 1);
    }

    #[test]
    fn coordinate_input_splits_into_lat_lon() {
        let mut app = App::new();
        app.input_buffer = " 48.85  2.35 ".to_string();
        app.commit_input(InputTarget::Coordinates);
        assert!(app
            .session
            .messages
            .iter()
            .any(|m| m.text == "TRACKING COORDINATES: 48.85, 2.35"));
    }
}
