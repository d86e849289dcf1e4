use ratatui::style::{Color, Modifier, Style};

use regression::render::Series;

/// Neon-green theme, one accent per series.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Rgb(0, 0, 0);
    pub const FG_NEON: Color = Color::Rgb(57, 255, 20);
    pub const FG_DIM: Color = Color::Rgb(0, 190, 0);

    pub const ACCENT_CYAN: Color = Color::Rgb(0, 255, 255);
    pub const ACCENT_MAGENTA: Color = Color::Rgb(255, 0, 255);
    pub const ACCENT_YELLOW: Color = Color::Rgb(255, 255, 0);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG_NEON).bg(Self::BG)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::FG_NEON).bg(Self::BG)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::FG_NEON)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    pub fn series(series: Series) -> Style {
        let color = match series {
            Series::Linear => Self::ACCENT_CYAN,
            Series::Polynomial => Self::ACCENT_MAGENTA,
            Series::Data => Self::ACCENT_YELLOW,
        };

        Style::default().fg(color)
    }
}
