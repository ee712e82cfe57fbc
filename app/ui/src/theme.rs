//! Styling shared by the screens.

use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Red,
            text: Color::White,
            muted: Color::DarkGray,
        }
    }
}

impl Theme {
    /// Header once the results grid is scrolled off the top.
    pub fn header_solid(&self) -> Style {
        Style::default()
            .bg(Color::Black)
            .fg(self.text)
            .add_modifier(Modifier::BOLD)
    }

    /// Header at the top of the page.
    pub fn header_plain(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn title(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn card_selected(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn card_cursor(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn pill(&self) -> Style {
        Style::default().fg(Color::White).bg(self.accent)
    }
}
