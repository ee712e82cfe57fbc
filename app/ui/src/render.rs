//! Rendering for the three screens.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, Screen, GRID_COLUMNS};
use crate::enrich::Movie;
use crate::genre::{Genre, GENRES};
use crate::theme::Theme;
use crate::title::{clean_title, extract_year};

const CARD_HEIGHT: u16 = 7;

pub fn render(app: &mut App, theme: &Theme, frame: &mut Frame) {
    let [header_area, content_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(app, theme, frame, header_area);
    match app.screen() {
        Screen::Browsing => render_browsing(app, theme, frame, content_area),
        Screen::Confirming => render_confirm(app, theme, frame, content_area, false),
        Screen::Loading => render_confirm(app, theme, frame, content_area, true),
        Screen::Results => render_results(app, theme, frame, content_area),
    }
    render_footer(app, theme, frame, footer_area);
}

fn render_header(app: &App, theme: &Theme, frame: &mut Frame, area: Rect) {
    let style = if app.is_scrolled() {
        theme.header_solid()
    } else {
        theme.header_plain()
    };
    let header = Line::from(vec![
        Span::styled(" ◆ REELPICK", theme.card_selected()),
        Span::raw("   Home"),
    ]);
    frame.render_widget(Paragraph::new(header).style(style), area);
}

fn render_browsing(app: &App, theme: &Theme, frame: &mut Frame, area: Rect) {
    let [prompt_area, grid_area, hint_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let prompt = Paragraph::new("What genre would you like to watch?")
        .style(theme.title())
        .alignment(Alignment::Center);
    frame.render_widget(prompt, prompt_area);

    let rows = GENRES.len().div_ceil(GRID_COLUMNS);
    let row_areas =
        Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(grid_area);
    for (row, row_area) in row_areas.iter().enumerate() {
        let col_areas = Layout::horizontal(vec![
            Constraint::Ratio(1, GRID_COLUMNS as u32);
            GRID_COLUMNS
        ])
        .split(*row_area);
        for (col, cell) in col_areas.iter().enumerate() {
            let index = row * GRID_COLUMNS + col;
            if let Some(genre) = GENRES.get(index) {
                render_genre_card(app, theme, frame, *cell, index, genre);
            }
        }
    }

    if app.selected().is_some() {
        let hint = Paragraph::new("Press Enter to continue")
            .style(theme.muted())
            .alignment(Alignment::Center);
        frame.render_widget(hint, hint_area);
    }
}

fn render_genre_card(
    app: &App,
    theme: &Theme,
    frame: &mut Frame,
    area: Rect,
    index: usize,
    genre: &Genre,
) {
    let selected = app.selected() == Some(genre.id);
    let border_style = if selected {
        theme.card_selected()
    } else if app.cursor() == index {
        theme.card_cursor()
    } else {
        theme.muted()
    };
    let marker = if selected { " ✓" } else { "" };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {}{} ", genre.name, marker));
    frame.render_widget(block, area);
}

fn render_confirm(app: &App, theme: &Theme, frame: &mut Frame, area: Rect, loading: bool) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Fill(1),
    ])
    .areas(area);

    let name = app.selected_genre().map(|genre| genre.name).unwrap_or("?");
    let status = if loading {
        Span::styled("Finding movies…", theme.muted())
    } else {
        Span::raw("[Enter] Find Movies    [b] Back")
    };
    let lines = vec![
        Line::from(Span::styled("Confirm Your Genre", theme.title())),
        Line::default(),
        Line::from(Span::styled(format!("  {}  ", name), theme.pill())),
        Line::default(),
        Line::from(status),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        middle,
    );
}

fn render_results(app: &mut App, theme: &Theme, frame: &mut Frame, area: Rect) {
    let [title_area, grid_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
    frame.render_widget(
        Paragraph::new("Top Picks For You").style(theme.title()),
        title_area,
    );

    let visible_rows = (grid_area.height / CARD_HEIGHT).max(1) as usize;
    app.set_viewport_rows(visible_rows);

    let total_rows = app.movies().len().div_ceil(GRID_COLUMNS);
    let first_row = app.scroll().min(total_rows.saturating_sub(1));
    let row_areas =
        Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows]).split(grid_area);
    for (slot, row_area) in row_areas.iter().enumerate() {
        let row = first_row + slot;
        if row >= total_rows {
            break;
        }
        let col_areas = Layout::horizontal(vec![
            Constraint::Ratio(1, GRID_COLUMNS as u32);
            GRID_COLUMNS
        ])
        .split(*row_area);
        for (col, cell) in col_areas.iter().enumerate() {
            let index = row * GRID_COLUMNS + col;
            if let Some(movie) = app.movies().get(index) {
                render_movie_card(app, theme, frame, *cell, index, movie);
            }
        }
    }
}

fn render_movie_card(
    app: &App,
    theme: &Theme,
    frame: &mut Frame,
    area: Rect,
    index: usize,
    movie: &Movie,
) {
    let focused = app.focused() == index;
    let block = Block::default().borders(Borders::ALL).border_style(if focused {
        theme.card_selected()
    } else {
        theme.muted()
    });

    let mut lines = vec![Line::from(Span::styled(
        clean_title(&movie.title),
        theme.title(),
    ))];
    if focused {
        if let Some(year) = extract_year(&movie.title) {
            lines.push(Line::from(Span::styled(format!("[{}]", year), theme.muted())));
        }
        lines.push(Line::from(format!("Genres: {}", movie.genres)));
        lines.push(Line::from(Span::styled(
            movie.backdrop().to_string(),
            theme.muted(),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn render_footer(app: &App, theme: &Theme, frame: &mut Frame, area: Rect) {
    let hints = match app.screen() {
        Screen::Browsing => "←↓↑→ move   Space select   Enter continue   q quit",
        Screen::Confirming => "Enter find movies   b back   q quit",
        Screen::Loading => "fetching recommendations…   q quit",
        Screen::Results => "←↓↑→ browse   b browse more genres   q quit",
    };
    frame.render_widget(Paragraph::new(hints).style(theme.muted()), area);
}
