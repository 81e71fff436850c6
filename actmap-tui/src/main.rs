//! TUI entrypoint: renders a feed-forward network as a live heat map,
//! polling an externally published activation document.
//! Controls: [p] Pause/Resume polling, [r] Reload topology, [q] Quit

mod app;
mod config;
mod shapes;
mod source;
mod ui;

use anyhow::{Context as _, Result};
use app::App;
use config::Config;
use source::FileSource;
use tracing::info;
use ui::draw;

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event as CEvent, KeyCode},
    execute, terminal,
};
use ratatui::{backend::CrosstermBackend, Terminal};

fn restore_terminal() -> Result<()> {
    terminal::disable_raw_mode()?;
    // Leave alternate screen and show cursor
    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// The terminal owns stdout, so logs go to a file (or nowhere).
fn init_logging(path: Option<&Path>) -> Result<()> {
    if let Some(path) = path {
        let file =
            File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::from_env_and_args();
    init_logging(config.log_path.as_deref())?;

    // Topology load happens before any terminal state changes, so a fatal
    // topology error prints normally and nothing is ever partially drawn.
    let source = FileSource::new(config.topology_path.clone(), config.activations_path.clone());
    let mut app = App::new(source, config.policy)?;
    info!(layers = ?app.topology.layers(), policy = %app.policy, "view initialized");

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Ensure terminal is restored on panic
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));

    // The repaint tick doubles as the polling cadence primitive: chained
    // polling fetches once per tick, interval polling keeps its own clock.
    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    // Event loop
    loop {
        draw(&mut terminal, &mut app)?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::from_millis(0));

        if event::poll(timeout)? {
            if let CEvent::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => break,
                    KeyCode::Char('p') => app.toggle_paused(),
                    KeyCode::Char('r') => app.reload_topology(),
                    _ => {}
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick(Instant::now());
            last_tick = Instant::now();
        }
    }

    // Cleanup
    restore_terminal()?;
    Ok(())
}
