// gitfolio: a terminal portfolio viewer.
// Renders static biographical tabs and a Projects showcase populated from
// the GitHub REST API by a background worker.

mod app;
mod cache;
mod content;
mod error;
mod github;
mod prefs;
mod showcase;
mod state;
mod ui;
mod worker;

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tokio::sync::mpsc::unbounded_channel;

use app::App;

#[tokio::main]
async fn main() -> io::Result<()> {
    let prefs_path = prefs::prefs_path();
    let preferences = prefs_path
        .as_deref()
        .map(prefs::load)
        .unwrap_or_default();

    let (event_tx, mut event_rx) = unbounded_channel();
    let (command_tx, command_rx) = unbounded_channel();
    worker::spawn(event_tx, command_rx);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(preferences, prefs_path, command_tx);
    let result = app.run(&mut terminal, &mut event_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
