//! Full-screen terminal front end.

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tictactoe::GameController;
use tracing::{debug, error, info, instrument};

use crate::app::App;
use crate::input::{Action, action_for};
use crate::ui;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs a restore action when dropped, so early returns leave the terminal
/// usable.
struct RestoreOnDrop<F: FnMut()>(F);

impl<F: FnMut()> Drop for RestoreOnDrop<F> {
    fn drop(&mut self) {
        (self.0)();
    }
}

fn restore_terminal() {
    debug!("Restoring terminal");
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run_tui(game: GameController) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let _guard = RestoreOnDrop(restore_terminal);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")?;

    let res = run_app(&mut terminal, App::new(game));

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

fn run_app(terminal: &mut Term, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match action_for(key.code, app.cursor()) {
            Action::Quit => {
                info!("User quit");
                return Ok(());
            }
            Action::Restart => app.restart(),
            Action::PlaceAtCursor => app.play_cursor(),
            Action::Place(index) => app.play(index),
            Action::MoveCursor(position) => app.set_cursor(position),
            Action::None => {}
        }
    }
}
