//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

/// Converts a view-layer RGB triple into a terminal color.
pub fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Dashboard color palette.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Reset;
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;

    pub const HEADER_BG: Color = Color::Blue;
    pub const HEADER_FG: Color = Color::White;

    pub const TAB_ACTIVE: Color = Color::Cyan;
    pub const TAB_INACTIVE: Color = Color::DarkGray;

    pub const ERROR: Color = Color::Red;
    pub const ACCENT: Color = Color::Cyan;

    // The styled table keeps the original dashboard's colorscale: a dark
    // purple header over alternating lavender and white rows.
    pub const TABLE_HEADER_BG: Color = Color::Rgb(77, 0, 76);
    pub const TABLE_ROW_ODD_BG: Color = Color::Rgb(242, 229, 255);
    pub const TABLE_ROW_EVEN_BG: Color = Color::Rgb(255, 255, 255);
    pub const TABLE_ROW_FG: Color = Color::Rgb(20, 20, 20);

    /// Landmass color on the map canvas.
    pub const MAP_LAND: Color = Color::Rgb(80, 80, 80);
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Active tab style.
    pub fn tab_active() -> Style {
        Style::default()
            .fg(Theme::TAB_ACTIVE)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive tab style.
    pub fn tab_inactive() -> Style {
        Style::default().fg(Theme::TAB_INACTIVE)
    }

    /// Dimmed text style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Section header style inside content panes.
    pub fn section_header() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// Error block style for charts that failed to prepare.
    pub fn error() -> Style {
        Style::default()
            .fg(Theme::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    /// Chart title style.
    pub fn chart_title() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }

    /// Axis label style.
    pub fn axis() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Help text style.
    pub fn help() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Help key style (highlighted keys in the footer line).
    pub fn help_key() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }

    /// Styled-table header row.
    pub fn styled_table_header() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Theme::TABLE_HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Styled-table data row; rows alternate lavender and white.
    pub fn styled_table_row(index: usize) -> Style {
        let bg = if index % 2 == 0 {
            Theme::TABLE_ROW_ODD_BG
        } else {
            Theme::TABLE_ROW_EVEN_BG
        };
        Style::default().fg(Theme::TABLE_ROW_FG).bg(bg)
    }
}
