//! Home screen — featured (top) listings.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use homeport_core::Listing;

use crate::action::Action;
use crate::component::Component;
use crate::screens::{self, RegionState};
use crate::theme;
use crate::widgets::listing_card;

pub struct HomeScreen {
    focused: bool,
    listings: RegionState<Arc<Vec<Arc<Listing>>>>,
    selected: usize,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            listings: RegionState::Loading,
            selected: 0,
        }
    }

    fn count(&self) -> usize {
        match &self.listings {
            RegionState::Ready(listings) => listings.len(),
            _ => 0,
        }
    }

    fn selected_listing(&self) -> Option<&Arc<Listing>> {
        match &self.listings {
            RegionState::Ready(listings) => listings.get(self.selected),
            _ => None,
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let count = self.count();
        if count == 0 {
            return;
        }
        #[allow(clippy::cast_possible_wrap)]
        let next = (self.selected as isize + delta).clamp(0, count as isize - 1);
        #[allow(clippy::cast_sign_loss)]
        {
            self.selected = next as usize;
        }
    }
}

impl Component for HomeScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_selection(1);
                Ok(None)
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_selection(-1);
                Ok(None)
            }
            KeyCode::Char('g') => {
                self.selected = 0;
                Ok(None)
            }
            KeyCode::Char('G') => {
                self.selected = self.count().saturating_sub(1);
                Ok(None)
            }
            KeyCode::Enter => Ok(self
                .selected_listing()
                .map(|listing| Action::OpenListingDetail(listing.id))),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::TopListingsLoaded(listings) => {
                self.listings = RegionState::Ready(Arc::clone(listings));
                self.selected = self.selected.min(self.count().saturating_sub(1));
            }
            Action::TopListingsLoadFailed => {
                self.listings = RegionState::Failed;
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let title = format!(" Featured ({}) ", self.count());
        let block = Block::default()
            .title(title)
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::vertical([
            Constraint::Min(1),    // cards
            Constraint::Length(1), // hints
        ])
        .split(inner);

        match &self.listings {
            RegionState::Loading => {
                screens::render_message(frame, layout[0], screens::LOADING, theme::empty_style());
            }
            RegionState::Failed => {
                screens::render_message(
                    frame,
                    layout[0],
                    screens::TOP_LISTINGS_FAILED,
                    theme::error_style(),
                );
            }
            RegionState::Ready(listings) if listings.is_empty() => {
                screens::render_message(
                    frame,
                    layout[0],
                    screens::NO_LISTINGS,
                    theme::empty_style(),
                );
            }
            RegionState::Ready(listings) => {
                let cards: Vec<_> = listings
                    .iter()
                    .map(|l| listing_card::summary_lines(l))
                    .collect();
                screens::render_cards(
                    frame,
                    layout[0],
                    &cards,
                    self.selected,
                    self.selected.saturating_sub(1),
                );
            }
        }

        let hints = Line::from(vec![
            Span::styled("  j/k ", theme::key_hint_key()),
            Span::styled("navigate  ", theme::key_hint()),
            Span::styled("Enter ", theme::key_hint_key()),
            Span::styled("details", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), layout[1]);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}
