//! Hearthstone palette and semantic styling for the TUI.

use ratatui::style::{Color, Modifier, Style};

// ── Core Palette ──────────────────────────────────────────────────────

pub const TERRACOTTA: Color = Color::Rgb(224, 122, 95); // #e07a5f
pub const SEAFOAM: Color = Color::Rgb(129, 178, 154); // #81b29a
pub const SANDSTONE: Color = Color::Rgb(242, 204, 143); // #f2cc8f
pub const DEEP_TEAL: Color = Color::Rgb(61, 117, 118); // #3d7576
pub const ERROR_RED: Color = Color::Rgb(224, 79, 79); // #e04f4f

// ── Extended Palette ──────────────────────────────────────────────────

pub const PARCHMENT: Color = Color::Rgb(222, 217, 203); // #ded9cb
pub const BORDER_GRAY: Color = Color::Rgb(110, 112, 120); // #6e7078
pub const DIM_GRAY: Color = Color::Rgb(140, 140, 148); // #8c8c94
pub const BG_HIGHLIGHT: Color = Color::Rgb(48, 44, 40); // #302c28
pub const BG_DARK: Color = Color::Rgb(32, 30, 28); // #201e1c

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(SANDSTONE).add_modifier(Modifier::BOLD)
}

/// Border for a focused panel.
pub fn border_focused() -> Style {
    Style::default().fg(TERRACOTTA)
}

/// Border for an unfocused panel.
pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Listing/agent name inside a card.
pub fn card_title() -> Style {
    Style::default().fg(SANDSTONE).add_modifier(Modifier::BOLD)
}

/// Normal card body text.
pub fn card_text() -> Style {
    Style::default().fg(PARCHMENT)
}

/// Secondary text (descriptions, photo paths, dates).
pub fn muted() -> Style {
    Style::default().fg(DIM_GRAY)
}

/// Formatted price.
pub fn price_style() -> Style {
    Style::default().fg(SEAFOAM).add_modifier(Modifier::BOLD)
}

/// A tag chip.
pub fn tag_style() -> Style {
    Style::default().fg(DEEP_TEAL)
}

/// Inline region error ("Failed to load …").
pub fn error_style() -> Style {
    Style::default().fg(ERROR_RED)
}

/// "No results" / loading placeholder text.
pub fn empty_style() -> Style {
    Style::default().fg(DIM_GRAY).add_modifier(Modifier::ITALIC)
}

/// Active tab in the tab bar.
pub fn tab_active() -> Style {
    Style::default().fg(TERRACOTTA).add_modifier(Modifier::BOLD)
}

/// Inactive tab in the tab bar.
pub fn tab_inactive() -> Style {
    Style::default().fg(PARCHMENT)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default().fg(SANDSTONE).add_modifier(Modifier::BOLD)
}

/// Active filter value in the filter bar.
pub fn filter_value() -> Style {
    Style::default().fg(SEAFOAM)
}
