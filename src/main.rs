//! Collective Unconscious Terminal
//!
//! A themed ARG console that fabricates entities, events, and classified
//! files. Everything it tells you is canned; it is telling you anyway.

use collective_terminal::tui::{App, LOGO};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    init_tracing();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new();

    // Main loop
    while app.running {
        app.on_tick();

        // Draw
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        // Handle input
        if !app.handle_input()? {
            break;
        }
    }

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    println!("{}", LOGO);
    println!("  CONNECTION TERMINATED");
    println!("  The terminal is closed. The watching is not.");

    Ok(())
}

/// Route tracing to a side file when COLLECTIVE_LOG is set; the TUI owns
/// stdout, so there is nowhere else for it to go.
fn init_tracing() {
    let Ok(path) = std::env::var("COLLECTIVE_LOG") else {
        return;
    };
    let Ok(file) = std::fs::File::create(path) else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("collective_terminal=debug")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
}
