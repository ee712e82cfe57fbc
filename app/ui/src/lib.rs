//! Genre-picker frontend for the movie recommendation service.
//!
//! Wires the configuration, API clients, and enrichment pipeline into the
//! view state machine, and drives the terminal render/event loop.

pub mod action;
pub mod app;
pub mod config;
pub mod enrich;
pub mod event;
pub mod fetch;
pub mod genre;
pub mod render;
pub mod theme;
pub mod title;

use std::io::{self, Stdout};
use std::sync::Arc;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

pub use app::App;
pub use config::Config;

use crate::action::Action;
use crate::enrich::{BackdropSource, Enricher, TmdbBackdrops};
use crate::fetch::Loader;
use crate::theme::Theme;

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Build the app from configuration and drive it until the user quits.
pub async fn run(config: Config) -> Result<(), UiError> {
    let http = reqwest::Client::builder().build()?;

    if config.recs_api_url.is_none() {
        tracing::warn!("RECS_API_URL is not set; confirming a genre will fail until it is");
    }
    let recs = recs::RecsClient::new(http.clone(), config.recs_api_url.clone());

    let backdrops = match &config.tmdb_api_token {
        Some(token) => Some(Arc::new(TmdbBackdrops::new(tmdb::TmdbClient::new(
            http,
            token.clone(),
        ))) as Arc<dyn BackdropSource>),
        None => {
            tracing::warn!("TMDB_API_TOKEN is not set; backdrops fall back to the placeholder");
            None
        }
    };

    let loader = Arc::new(Loader::new(Arc::new(recs), Enricher::new(backdrops)));
    let mut app = App::new(loader);

    let mut terminal = setup_terminal()?;
    let result = run_loop(&mut terminal, &mut app).await;
    let restored = restore_terminal(&mut terminal);

    result?;
    restored
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, UiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Restore the terminal; called even when the loop errors.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<(), UiError> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<(), UiError> {
    let theme = Theme::default();
    let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, mut events) = mpsc::unbounded_channel();
    let reader = event::spawn_reader(event_tx);

    loop {
        terminal.draw(|frame| render::render(app, &theme, frame))?;

        tokio::select! {
            maybe_event = events.recv() => match maybe_event {
                Some(ev) => app.handle_event(ev, &tx),
                None => break,
            },
            maybe_action = rx.recv() => match maybe_action {
                Some(action) => app.apply(action, &tx),
                None => break,
            },
        }

        if app.should_quit() {
            break;
        }
    }

    // Dropping the receiver tears the event subscription down with the
    // loop; the reader notices within one poll interval.
    drop(events);
    let _ = reader.await;
    Ok(())
}
