use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use regression::{configs::PlaygroundConfig, render::SeriesStore, session::Session};

use crate::ui::{draw, layout};

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
    }
}

/// Runs the playground until the user quits.
///
/// # Errors
/// Returns an error if the configuration is invalid or terminal setup or rendering fails.
pub fn run(config: &PlaygroundConfig) -> Result<()> {
    let mut session = Session::new(config, SeriesStore::new())?;
    let ([x_low, x_high], [y_low, y_high]) = session.normalizer().display_bounds();

    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut plot = Rect::default();
    let mut dirty = true;

    loop {
        if dirty {
            terminal.draw(|f| plot = draw::draw(f, &session))?;
            dirty = false;
        }

        if !event::poll(Duration::from_millis(120))? {
            continue;
        }

        match event::read()? {
            Event::Key(k) if k.kind == KeyEventKind::Press => {
                if matches!(k.code, KeyCode::Char('q') | KeyCode::Esc) {
                    break;
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let Some((x, y)) =
                    layout::cell_to_display(plot, column, row, [x_low, x_high], [y_low, y_high])
                else {
                    continue;
                };

                debug!(x = x, y = y; "click on canvas");

                let redraws = session.renderer().redraws();
                session.point_added(x, y);
                dirty = session.renderer().redraws() != redraws;
            }
            Event::Resize(..) => dirty = true,
            _ => {}
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
