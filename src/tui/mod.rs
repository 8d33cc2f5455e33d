//! Terminal User Interface
//!
//! Renders the fiction with ratatui: scrolling log, section panels,
//! roster sidebar, notification toasts, and the transient disturbance
//! effects the session toggles.

pub mod app;
pub mod widgets;

pub use app::App;

use crate::content::Classification;
use crate::session::NoticeKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Color scheme for the terminal
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub alert: Color,
    pub success: Color,
    pub warning: Color,
    pub info: Color,
    pub border: Color,
    pub header: Color,
    pub entity: Color,
    pub dim: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            accent: Color::Green,
            alert: Color::Red,
            success: Color::Green,
            warning: Color::Yellow,
            info: Color::Blue,
            border: Color::DarkGray,
            header: Color::Magenta,
            entity: Color::Red,
            dim: Color::Gray,
        }
    }
}

/// Get color for a classification label
pub fn classification_color(classification: &Classification) -> Color {
    match classification {
        Classification::Unclassified => Color::Gray,
        Classification::Confidential => Color::Blue,
        Classification::Secret => Color::Yellow,
        Classification::TopSecret => Color::Magenta,
        Classification::Warning => Color::Yellow,
        Classification::Error => Color::Red,
        Classification::Alert => Color::Red,
        Classification::Critical => Color::Magenta,
    }
}

/// Get color for a notification kind
pub fn notice_color(kind: NoticeKind) -> Color {
    match kind {
        NoticeKind::Info => Color::Blue,
        NoticeKind::Success => Color::Green,
        NoticeKind::Warning => Color::Yellow,
        NoticeKind::Error => Color::Red,
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// ASCII art logo
pub const LOGO: &str = r#"
╔════════════════════════════════════════════════════════════════╗
║                                                                ║
║    ██████╗ ██████╗ ██╗     ██╗     ███████╗ ██████╗████████╗   ║
║   ██╔════╝██╔═══██╗██║     ██║     ██╔════╝██╔════╝╚══██╔══╝   ║
║   ██║     ██║   ██║██║     ██║     █████╗  ██║        ██║      ║
║   ██║     ██║   ██║██║     ██║     ██╔══╝  ██║        ██║      ║
║   ╚██████╗╚██████╔╝███████╗███████╗███████╗╚██████╗   ██║      ║
║    ╚═════╝ ╚═════╝ ╚══════╝╚══════╝╚══════╝ ╚═════╝   ╚═╝      ║
║                                                                ║
║              C O L L E C T I V E   U N C O N S C I O U S       ║
║                      T E R M I N A L                           ║
║                                                                ║
║                 HE IS ALREADY LISTENING                        ║
╚════════════════════════════════════════════════════════════════╝
"#;

/// Smaller logo for header
pub const SMALL_LOGO: &str = " COLLECTIVE UNCONSCIOUS TERMINAL ";

/// Help text
pub const HELP_TEXT: &str = r#"
╔═══════════════════════════════════════════════════════════════╗
║                       CONTROLS                                ║
╠═══════════════════════════════════════════════════════════════╣
║  Tab   Next section        1-5  Jump to section               ║
║  Enter Type into section   Esc  Stop typing / close help      ║
║  ↑/↓   Scroll / select     ?    Toggle this help              ║
║  u     Identify yourself   x    Clear the log (chat)          ║
║  q     Disconnect                                             ║
╠═══════════════════════════════════════════════════════════════╣
║                       SECTIONS                                ║
╠═══════════════════════════════════════════════════════════════╣
║  1 CHAT         talk; /help lists the commands                ║
║  2 EVIDENCE     browse the archive, Enter opens a file        ║
║  3 COORDINATES  type "lat lon" to track a location            ║
║  4 SYMBOLS      paste glyphs for the decoder                  ║
║  5 CLASSIFIED   enter an access code                          ║
╚═══════════════════════════════════════════════════════════════╝
"#;

/// Create the main layout: header, content, input bar
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),   // Header
            Constraint::Min(10),     // Main content
            Constraint::Length(3),   // Input bar
        ])
        .split(area)
        .to_vec()
}

/// Create the content layout: sidebar + main area
pub fn create_content_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),  // Sidebar: nav + roster
            Constraint::Percentage(75),  // Active section
        ])
        .split(area)
        .to_vec()
}

/// Split the sidebar into navigation and roster
pub fn create_sidebar_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),   // Navigation
            Constraint::Min(5),      // Roster
        ])
        .split(area)
        .to_vec()
}
