//! Screen components and shared region-rendering helpers.

mod agents;
mod home;
mod listings;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::component::Component;
use crate::screen::ScreenId;
use crate::theme;

pub use agents::AgentsScreen;
pub use home::HomeScreen;
pub use listings::ListingsScreen;

/// One region of the page: loading until its fetch lands, then either
/// data or a failed marker. "No data yet" and "failed" are distinct
/// states with distinct renderings.
#[derive(Debug, Default)]
pub enum RegionState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed,
}

// Region messages. The empty-result and failed-fetch strings must never
// collapse into one; tests pin that.
pub const LOADING: &str = "Loading...";
pub const NO_LISTINGS: &str = "No properties found";
pub const LISTINGS_FAILED: &str = "Failed to load properties";
pub const TOP_LISTINGS_FAILED: &str = "Failed to load top properties";
pub const NO_AGENTS: &str = "No agents found";
pub const AGENTS_FAILED: &str = "Failed to load agents";

/// Instantiate all screens for the app's screen map.
pub fn create_screens() -> Vec<(ScreenId, Box<dyn Component>)> {
    vec![
        (ScreenId::Home, Box::new(HomeScreen::new())),
        (ScreenId::Listings, Box::new(ListingsScreen::new())),
        (ScreenId::Agents, Box::new(AgentsScreen::new())),
    ]
}

/// Render a centered single-line region message (loading, empty, error).
pub(crate) fn render_message(frame: &mut Frame, area: Rect, message: &str, style: ratatui::style::Style) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_owned(), style)).centered(),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Stack entity cards vertically from `first`, one bordered block per
/// card, highlighting the selected one. Stops when the area is full.
pub(crate) fn render_cards(
    frame: &mut Frame,
    area: Rect,
    cards: &[Vec<Line<'static>>],
    selected: usize,
    first: usize,
) {
    let mut y = area.y;
    for (idx, lines) in cards.iter().enumerate().skip(first) {
        #[allow(clippy::cast_possible_truncation)]
        let height = (lines.len() as u16).saturating_add(2);
        if y + height > area.y + area.height {
            break;
        }

        let card_area = Rect::new(area.x, y, area.width, height);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if idx == selected {
                theme::border_focused()
            } else {
                theme::border_default()
            });
        let inner = block.inner(card_area);
        frame.render_widget(block, card_area);
        frame.render_widget(Paragraph::new(lines.clone()), inner);

        y += height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_failed_messages_are_distinct() {
        assert_ne!(NO_LISTINGS, LISTINGS_FAILED);
        assert_ne!(NO_AGENTS, AGENTS_FAILED);
        assert_ne!(NO_LISTINGS, TOP_LISTINGS_FAILED);
        assert_ne!(LOADING, NO_LISTINGS);
        assert_ne!(LOADING, LISTINGS_FAILED);
    }

    #[test]
    fn create_screens_covers_every_screen_id() {
        let screens = create_screens();
        for id in ScreenId::ALL {
            assert!(screens.iter().any(|(sid, _)| *sid == id), "missing {id}");
        }
    }
}
