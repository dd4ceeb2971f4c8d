//! UI module - terminal lifecycle and rendering entry points.

mod input;
mod render;
mod theme;
mod views;
mod widgets;

pub(crate) use input::handle_input;
pub(crate) use render::render_frame;

use crate::app::App;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, backend::TestBackend};
use std::io::{self, Stdout};

/// Type alias for our terminal
pub(crate) type Term = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub(crate) fn init_terminal() -> io::Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal mode
pub(crate) fn restore_terminal(terminal: &mut Term) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Render one frame to a plain string (snapshot mode, no colors).
pub(crate) fn render_snapshot(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("snapshot terminal");

    terminal
        .draw(|frame| render_frame(frame, app))
        .expect("snapshot frame");

    let buffer = terminal.backend().buffer();
    let mut output = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            output.push_str(buffer[(x, y)].symbol());
        }
        output.push('\n');
    }
    output
}
