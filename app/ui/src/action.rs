//! Actions flowing through the app channel.
//!
//! Key and mouse events are translated into actions by the state machine;
//! background fetch tasks send completion actions over the same channel, so
//! every state mutation happens on the single UI control flow.

use crate::enrich::Movie;

#[derive(Debug, Clone)]
pub enum Action {
    /// Move the browse-grid cursor.
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    /// Toggle selection of the genre at the given catalog index.
    ToggleGenre(usize),
    /// Advance from browsing to the confirmation screen.
    Advance,
    /// Return from confirmation to browsing, keeping the selection.
    Back,
    /// Issue the recommendation request for the selected genre.
    Confirm,
    /// Background fetch finished; carries the enriched batch.
    Loaded(Vec<Movie>),
    /// Background fetch failed; the cause is already logged at the source.
    LoadFailed,
    /// Move focus on the results grid.
    FocusLeft,
    FocusRight,
    FocusUp,
    FocusDown,
    /// Clear results and selection, returning to browsing.
    BrowseMore,
    Quit,
}
