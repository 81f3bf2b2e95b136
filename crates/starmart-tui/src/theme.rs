//! Brassline palette and semantic styling for the TUI.

use ratatui::style::{Color, Modifier, Style};

// ── Core Palette ──────────────────────────────────────────────────────

pub const BRASS: Color = Color::Rgb(222, 177, 90); // #deb15a
pub const VIRIDIAN: Color = Color::Rgb(88, 214, 170); // #58d6aa
pub const SIGNAL_ORANGE: Color = Color::Rgb(255, 145, 77); // #ff914d
pub const ICE_BLUE: Color = Color::Rgb(142, 210, 255); // #8ed2ff
pub const SUCCESS_GREEN: Color = Color::Rgb(110, 235, 131); // #6eeb83
pub const ERROR_RED: Color = Color::Rgb(255, 92, 92); // #ff5c5c

// ── Extended Palette ──────────────────────────────────────────────────

pub const DIM_WHITE: Color = Color::Rgb(200, 200, 190); // #c8c8be
pub const BORDER_GRAY: Color = Color::Rgb(110, 112, 98); // #6e7062
pub const BG_HIGHLIGHT: Color = Color::Rgb(44, 44, 36); // #2c2c24
pub const BG_DARK: Color = Color::Rgb(24, 24, 20); // #181814

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(BRASS).add_modifier(Modifier::BOLD)
}

/// Border for a focused panel.
pub fn border_focused() -> Style {
    Style::default().fg(VIRIDIAN)
}

/// Border for an unfocused panel.
pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Normal list row text.
pub fn list_row() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Selected / highlighted list row.
pub fn list_selected() -> Style {
    Style::default()
        .fg(VIRIDIAN)
        .bg(BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Price text in a listing row.
pub fn price_style() -> Style {
    Style::default().fg(BRASS)
}

/// Stock amount text in a listing row.
pub fn amount_style() -> Style {
    Style::default().fg(ICE_BLUE)
}

/// Active tab in the tab bar.
pub fn tab_active() -> Style {
    Style::default().fg(VIRIDIAN).add_modifier(Modifier::BOLD)
}

/// Inactive tab in the tab bar.
pub fn tab_inactive() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default().fg(BRASS).add_modifier(Modifier::BOLD)
}
