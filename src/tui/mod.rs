//! Terminal UI for Strictly Minimax

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, BoardGeometry, Pointer, move_cursor};
pub use ui::draw;

use crate::config::GameConfig;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

/// Runs the interactive game until the player quits.
#[instrument(skip(config))]
pub fn run_tui(config: &GameConfig) -> Result<()> {
    info!("Starting Strictly Minimax TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            return Err(e.into());
        }
    };

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

/// Draw, block on the next event, apply it.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while app.is_running() {
        let mut geometry = None;
        terminal.draw(|frame| geometry = Some(draw(frame, app)))?;

        let action = match event::read()? {
            Event::Key(key) => Action::from_key(key),
            Event::Mouse(mouse) => Pointer::from_mouse(&mouse)
                .zip(geometry)
                .and_then(|(pointer, geometry)| Action::from_pointer(pointer, &geometry)),
            other => {
                debug!(event = ?other, "Event ignored");
                None
            }
        };

        if let Some(action) = action {
            app.handle(action);
        }
    }
    Ok(())
}
