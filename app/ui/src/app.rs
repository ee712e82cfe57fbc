//! The page-level view state machine.
//!
//! Three screens driven by [`Action`]s: browse the genre grid, confirm the
//! choice, and a results grid once the recommendation cycle completes. The
//! machine is re-enterable indefinitely; there is no terminal state.

use std::sync::Arc;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;
use crate::enrich::Movie;
use crate::fetch::Loader;
use crate::genre::{genre_by_id, Genre, GENRES};

/// Columns in the browse and results grids.
pub const GRID_COLUMNS: usize = 3;

/// Which screen is on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Browsing,
    Confirming,
    /// Request in flight. Rendered as the confirmation screen with a busy
    /// indicator; confirm input is ignored until the cycle completes.
    Loading,
    Results,
}

pub struct App {
    screen: Screen,
    /// At most one genre selected; selecting another replaces it.
    selected: Option<&'static str>,
    /// Browse-grid cursor, index into [`GENRES`].
    cursor: usize,
    movies: Vec<Movie>,
    /// Focused entry on the results grid.
    focused: usize,
    /// First visible results row; also drives the header style.
    scroll: usize,
    /// Rows that fit the results viewport; refreshed on render.
    viewport_rows: usize,
    should_quit: bool,
    loader: Arc<Loader>,
}

impl App {
    pub fn new(loader: Arc<Loader>) -> Self {
        Self {
            screen: Screen::Browsing,
            selected: None,
            cursor: 0,
            movies: Vec::new(),
            focused: 0,
            scroll: 0,
            viewport_rows: 1,
            should_quit: false,
            loader,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    pub fn selected_genre(&self) -> Option<&'static Genre> {
        self.selected.and_then(genre_by_id)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Whether the results grid is scrolled off the top. The header
    /// switches to its solid style while this holds.
    pub fn is_scrolled(&self) -> bool {
        self.scroll > 0
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Record how many grid rows the results viewport can show, keeping
    /// the focused entry visible.
    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = rows.max(1);
        self.scroll_to_focus();
    }

    /// Translate a terminal event and apply the resulting action.
    pub fn handle_event(&mut self, event: Event, tx: &UnboundedSender<Action>) {
        if let Some(action) = self.action_for(event) {
            self.apply(action, tx);
        }
    }

    fn action_for(&self, event: Event) -> Option<Action> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.action_for_key(key),
            Event::Mouse(mouse) => self.action_for_mouse(mouse),
            _ => None,
        }
    }

    fn action_for_key(&self, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Quit);
        }
        match self.screen {
            Screen::Browsing => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                KeyCode::Left | KeyCode::Char('h') => Some(Action::CursorLeft),
                KeyCode::Right | KeyCode::Char('l') => Some(Action::CursorRight),
                KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
                KeyCode::Char(' ') => Some(Action::ToggleGenre(self.cursor)),
                KeyCode::Enter => Some(Action::Advance),
                _ => None,
            },
            Screen::Confirming => match key.code {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(Action::Back),
                KeyCode::Enter | KeyCode::Char('y') => Some(Action::Confirm),
                KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            },
            Screen::Loading => match key.code {
                KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            },
            Screen::Results => match key.code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Esc | KeyCode::Char('b') => Some(Action::BrowseMore),
                KeyCode::Up | KeyCode::Char('k') => Some(Action::FocusUp),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::FocusDown),
                KeyCode::Left | KeyCode::Char('h') => Some(Action::FocusLeft),
                KeyCode::Right | KeyCode::Char('l') => Some(Action::FocusRight),
                _ => None,
            },
        }
    }

    fn action_for_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        if self.screen != Screen::Results {
            return None;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::FocusUp),
            MouseEventKind::ScrollDown => Some(Action::FocusDown),
            _ => None,
        }
    }

    /// Apply an action. Completion actions arriving for a state the
    /// machine already left (a stale fetch) are dropped.
    pub fn apply(&mut self, action: Action, tx: &UnboundedSender<Action>) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::CursorLeft => self.move_cursor(-1, 0),
            Action::CursorRight => self.move_cursor(1, 0),
            Action::CursorUp => self.move_cursor(0, -1),
            Action::CursorDown => self.move_cursor(0, 1),
            Action::ToggleGenre(index) => self.toggle_genre(index),
            Action::Advance => {
                if self.screen == Screen::Browsing && self.selected.is_some() {
                    self.screen = Screen::Confirming;
                }
            }
            Action::Back => {
                if self.screen == Screen::Confirming {
                    self.screen = Screen::Browsing;
                }
            }
            Action::Confirm => self.confirm(tx),
            Action::Loaded(movies) => {
                if self.screen == Screen::Loading {
                    self.focused = 0;
                    self.scroll = 0;
                    // An empty batch falls back to browsing; the results
                    // screen only ever shows a populated list.
                    self.screen = if movies.is_empty() {
                        Screen::Browsing
                    } else {
                        Screen::Results
                    };
                    self.movies = movies;
                }
            }
            Action::LoadFailed => {
                if self.screen == Screen::Loading {
                    self.screen = Screen::Confirming;
                }
            }
            Action::FocusLeft => self.move_focus(-1),
            Action::FocusRight => self.move_focus(1),
            Action::FocusUp => self.move_focus(-(GRID_COLUMNS as isize)),
            Action::FocusDown => self.move_focus(GRID_COLUMNS as isize),
            Action::BrowseMore => {
                if self.screen == Screen::Results {
                    self.movies.clear();
                    self.selected = None;
                    self.focused = 0;
                    self.scroll = 0;
                    self.screen = Screen::Browsing;
                }
            }
        }
    }

    fn move_cursor(&mut self, dx: isize, dy: isize) {
        if self.screen != Screen::Browsing {
            return;
        }
        let col = (self.cursor % GRID_COLUMNS) as isize + dx;
        let row = (self.cursor / GRID_COLUMNS) as isize + dy;
        let rows = GENRES.len().div_ceil(GRID_COLUMNS) as isize;
        let col = col.clamp(0, GRID_COLUMNS as isize - 1);
        let row = row.clamp(0, rows - 1);
        let index = (row as usize) * GRID_COLUMNS + col as usize;
        if index < GENRES.len() {
            self.cursor = index;
        }
    }

    fn toggle_genre(&mut self, index: usize) {
        if self.screen != Screen::Browsing {
            return;
        }
        let Some(genre) = GENRES.get(index) else {
            return;
        };
        // Selecting a new genre replaces the previous one; re-selecting
        // the same genre clears it.
        self.selected = if self.selected == Some(genre.id) {
            None
        } else {
            Some(genre.id)
        };
    }

    fn confirm(&mut self, tx: &UnboundedSender<Action>) {
        if self.screen != Screen::Confirming {
            return;
        }
        let Some(genre) = self.selected else {
            return;
        };
        self.screen = Screen::Loading;

        let loader = Arc::clone(&self.loader);
        let tx = tx.clone();
        tokio::spawn(async move {
            match loader.load(genre).await {
                Ok(movies) => {
                    let _ = tx.send(Action::Loaded(movies));
                }
                Err(e) => {
                    tracing::error!("failed to fetch recommendations: {}", e);
                    let _ = tx.send(Action::LoadFailed);
                }
            }
        });
    }

    fn move_focus(&mut self, delta: isize) {
        if self.screen != Screen::Results || self.movies.is_empty() {
            return;
        }
        let last = (self.movies.len() - 1) as isize;
        self.focused = (self.focused as isize + delta).clamp(0, last) as usize;
        self.scroll_to_focus();
    }

    fn scroll_to_focus(&mut self) {
        let row = self.focused / GRID_COLUMNS;
        if row < self.scroll {
            self.scroll = row;
        } else if row >= self.scroll + self.viewport_rows {
            self.scroll = row + 1 - self.viewport_rows;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use recs::models::MovieRecord;
    use recs::RecsError;
    use tokio::sync::mpsc;

    use crate::enrich::{BackdropSource, Enricher};
    use crate::genre::PLACEHOLDER_IMAGE;

    struct FixedSource {
        records: Vec<MovieRecord>,
    }

    #[async_trait]
    impl crate::fetch::RecommendationSource for FixedSource {
        async fn recommend(
            &self,
            _genre: &str,
            _top_n: u32,
        ) -> Result<Vec<MovieRecord>, RecsError> {
            Ok(self.records.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl crate::fetch::RecommendationSource for FailingSource {
        async fn recommend(
            &self,
            _genre: &str,
            _top_n: u32,
        ) -> Result<Vec<MovieRecord>, RecsError> {
            Err(RecsError::Api {
                status_code: 503,
                message: "unavailable".to_string(),
            })
        }
    }

    struct SuffixSource;

    #[async_trait]
    impl BackdropSource for SuffixSource {
        async fn backdrop_url(&self, title: &str) -> Option<String> {
            Some(format!("https://image.tmdb.org/t/p/original/{}.jpg", title))
        }
    }

    fn app_with(source: impl crate::fetch::RecommendationSource + 'static) -> App {
        let loader = Loader::new(Arc::new(source), Enricher::new(None));
        App::new(Arc::new(loader))
    }

    fn record(title: &str) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            genres: "Action".to_string(),
        }
    }

    #[tokio::test]
    async fn test_selecting_second_genre_replaces_first() {
        let mut app = app_with(FixedSource { records: vec![] });
        let (tx, _rx) = mpsc::unbounded_channel();

        app.apply(Action::ToggleGenre(0), &tx);
        assert_eq!(app.selected(), Some("Action"));

        app.apply(Action::ToggleGenre(1), &tx);
        assert_eq!(app.selected(), Some("Comedy"));
    }

    #[tokio::test]
    async fn test_reselecting_genre_clears_selection() {
        let mut app = app_with(FixedSource { records: vec![] });
        let (tx, _rx) = mpsc::unbounded_channel();

        app.apply(Action::ToggleGenre(2), &tx);
        app.apply(Action::ToggleGenre(2), &tx);
        assert_eq!(app.selected(), None);
    }

    #[tokio::test]
    async fn test_advance_without_selection_is_noop() {
        let mut app = app_with(FixedSource { records: vec![] });
        let (tx, _rx) = mpsc::unbounded_channel();

        app.apply(Action::Advance, &tx);
        assert_eq!(app.screen(), Screen::Browsing);
    }

    #[tokio::test]
    async fn test_confirm_without_selection_is_noop() {
        let mut app = app_with(FixedSource { records: vec![] });
        let (tx, mut rx) = mpsc::unbounded_channel();

        app.apply(Action::Confirm, &tx);
        assert_eq!(app.screen(), Screen::Browsing);
        drop(tx);
        assert!(rx.recv().await.is_none(), "no fetch should have started");
    }

    #[tokio::test]
    async fn test_back_retains_selection() {
        let mut app = app_with(FixedSource { records: vec![] });
        let (tx, _rx) = mpsc::unbounded_channel();

        app.apply(Action::ToggleGenre(0), &tx);
        app.apply(Action::Advance, &tx);
        assert_eq!(app.screen(), Screen::Confirming);

        app.apply(Action::Back, &tx);
        assert_eq!(app.screen(), Screen::Browsing);
        assert_eq!(app.selected(), Some("Action"));
    }

    #[tokio::test]
    async fn test_failed_fetch_returns_to_confirming() {
        let mut app = app_with(FailingSource);
        let (tx, mut rx) = mpsc::unbounded_channel();

        app.apply(Action::ToggleGenre(0), &tx);
        app.apply(Action::Advance, &tx);
        app.apply(Action::Confirm, &tx);
        assert_eq!(app.screen(), Screen::Loading);

        let action = rx.recv().await.expect("completion action");
        assert!(matches!(action, Action::LoadFailed));
        app.apply(action, &tx);
        assert_eq!(app.screen(), Screen::Confirming);
        assert_eq!(app.selected(), Some("Action"));
    }

    #[tokio::test]
    async fn test_empty_batch_falls_back_to_browsing() {
        let mut app = app_with(FixedSource { records: vec![] });
        let (tx, mut rx) = mpsc::unbounded_channel();

        app.apply(Action::ToggleGenre(0), &tx);
        app.apply(Action::Advance, &tx);
        app.apply(Action::Confirm, &tx);
        let action = rx.recv().await.expect("completion action");
        app.apply(action, &tx);

        assert_eq!(app.screen(), Screen::Browsing);
        assert!(app.movies().is_empty());
        assert_eq!(app.selected(), Some("Action"));
    }

    #[tokio::test]
    async fn test_browse_more_resets_selection_and_results() {
        let mut app = app_with(FixedSource {
            records: vec![record("Heat (1995)")],
        });
        let (tx, mut rx) = mpsc::unbounded_channel();

        app.apply(Action::ToggleGenre(0), &tx);
        app.apply(Action::Advance, &tx);
        app.apply(Action::Confirm, &tx);
        let action = rx.recv().await.expect("completion action");
        app.apply(action, &tx);
        assert_eq!(app.screen(), Screen::Results);

        app.apply(Action::BrowseMore, &tx);
        assert_eq!(app.screen(), Screen::Browsing);
        assert_eq!(app.selected(), None);
        assert!(app.movies().is_empty());
    }

    #[tokio::test]
    async fn test_stale_completion_is_dropped() {
        let mut app = app_with(FixedSource { records: vec![] });
        let (tx, _rx) = mpsc::unbounded_channel();

        app.apply(
            Action::Loaded(vec![Movie {
                title: "Heat (1995)".to_string(),
                genres: "Action".to_string(),
                backdrop: None,
            }]),
            &tx,
        );
        assert_eq!(app.screen(), Screen::Browsing);
        assert!(app.movies().is_empty());
    }

    #[tokio::test]
    async fn test_end_to_end_two_results_enriched() {
        let source = FixedSource {
            records: vec![record("Inception (2010)"), record("Heat (1995)")],
        };
        let loader = Loader::new(
            Arc::new(source),
            Enricher::new(Some(Arc::new(SuffixSource))),
        );
        let mut app = App::new(Arc::new(loader));
        let (tx, mut rx) = mpsc::unbounded_channel();

        app.apply(Action::ToggleGenre(0), &tx);
        app.apply(Action::Advance, &tx);
        app.apply(Action::Confirm, &tx);
        assert_eq!(app.screen(), Screen::Loading);

        let action = rx.recv().await.expect("completion action");
        app.apply(action, &tx);

        assert_eq!(app.screen(), Screen::Results);
        assert_eq!(app.movies().len(), 2);
        // Lookups were keyed by the cleaned titles, independently per entry.
        assert_eq!(
            app.movies()[0].backdrop(),
            "https://image.tmdb.org/t/p/original/Inception.jpg"
        );
        assert_eq!(
            app.movies()[1].backdrop(),
            "https://image.tmdb.org/t/p/original/Heat.jpg"
        );
    }

    #[tokio::test]
    async fn test_empty_lookup_resolves_to_placeholder_end_to_end() {
        let source = FixedSource {
            records: vec![record("Unknown Film")],
        };
        let loader = Loader::new(Arc::new(source), Enricher::new(None));
        let mut app = App::new(Arc::new(loader));
        let (tx, mut rx) = mpsc::unbounded_channel();

        app.apply(Action::ToggleGenre(0), &tx);
        app.apply(Action::Advance, &tx);
        app.apply(Action::Confirm, &tx);
        let action = rx.recv().await.expect("completion action");
        app.apply(action, &tx);

        assert_eq!(app.movies()[0].backdrop(), PLACEHOLDER_IMAGE);
    }
}
