//! Detail popup — on-demand single-listing view.
//!
//! Opens immediately in a loading state while the fetch is in flight,
//! then swaps in the full rendering or an error line. Independent of the
//! listing store: the fetch goes straight to `api/houses/{id}`, so it
//! works for ids that never appeared in the cached full set.

use std::sync::Arc;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

use homeport_core::Listing;

use crate::theme;
use crate::widgets::listing_card;

/// Shown while the single-listing fetch is in flight.
pub const DETAIL_LOADING: &str = "Loading property details...";
/// Shown when the fetch failed (transport, bad payload, or not-found).
pub const DETAIL_FAILED: &str = "Failed to load property details";

#[derive(Debug, Default)]
enum DetailState {
    #[default]
    Loading,
    Ready(Arc<Listing>),
    Failed,
}

/// Popup state. Content updates apply even while hidden: a late response
/// from a dismissed popup lands here harmlessly, because every open
/// resets to `Loading` and re-fetches.
#[derive(Debug, Default)]
pub struct DetailOverlay {
    visible: bool,
    state: DetailState,
}

impl DetailOverlay {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the popup in its loading state. The caller spawns the fetch.
    pub fn open(&mut self) {
        self.visible = true;
        self.state = DetailState::Loading;
    }

    /// Hide the popup. Does not cancel an in-flight fetch.
    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn set_ready(&mut self, listing: Arc<Listing>) {
        self.state = DetailState::Ready(listing);
    }

    pub fn set_failed(&mut self) {
        self.state = DetailState::Failed;
    }

    /// The popup rectangle for a given frame area. Also used by the app
    /// to detect clicks outside the popup bounds (which dismiss it).
    pub fn popup_area(area: Rect) -> Rect {
        let width = 70u16.min(area.width.saturating_sub(4));
        let height = 24u16.min(area.height.saturating_sub(4));
        let x = (area.width.saturating_sub(width)) / 2;
        let y = (area.height.saturating_sub(height)) / 2;
        Rect::new(area.x + x, area.y + y, width, height)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if !self.visible {
            return;
        }

        let popup = Self::popup_area(area);
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            popup,
        );

        let block = Block::default()
            .title(" Property ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let mut lines = match &self.state {
            DetailState::Loading => {
                vec![Line::from(Span::styled(DETAIL_LOADING, theme::empty_style()))]
            }
            DetailState::Failed => {
                vec![Line::from(Span::styled(DETAIL_FAILED, theme::error_style()))]
            }
            DetailState::Ready(listing) => listing_card::detail_lines(listing),
        };

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Esc ", theme::key_hint_key()),
            Span::styled("close", theme::key_hint()),
        ]));

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn late_response_lands_in_hidden_state() {
        let mut overlay = DetailOverlay::default();
        overlay.open();
        overlay.close();

        // Fetch completes after dismissal — accepted, non-corrupting.
        overlay.set_failed();
        assert!(!overlay.is_visible());
        assert!(matches!(overlay.state, DetailState::Failed));

        // Re-opening always resets to loading before the re-fetch.
        overlay.open();
        assert!(overlay.is_visible());
        assert!(matches!(overlay.state, DetailState::Loading));
    }

    #[test]
    fn loading_and_failure_messages_differ() {
        assert_ne!(DETAIL_LOADING, DETAIL_FAILED);
    }

    #[test]
    fn popup_is_centered_within_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = DetailOverlay::popup_area(area);
        assert_eq!(popup.width, 70);
        assert_eq!(popup.height, 24);
        assert_eq!(popup.x, 15);
        assert_eq!(popup.y, 8);
    }
}
