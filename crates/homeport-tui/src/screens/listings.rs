//! Listings screen — the full fetched set with category and price filters.
//!
//! Filter criteria live here and persist across repeated changes; the
//! filtered subset is recomputed synchronously from the in-memory full
//! set on every change, never by re-querying the API.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use homeport_core::{FilterCriteria, HouseType, ListingStore, PriceBracket};

use crate::action::Action;
use crate::component::Component;
use crate::screens::{self, RegionState};
use crate::theme;
use crate::widgets::listing_card;

pub struct ListingsScreen {
    focused: bool,
    store: RegionState<ListingStore>,
    criteria: FilterCriteria,
    house_types: Vec<HouseType>,
    house_types_failed: bool,
    selected: usize,
}

impl ListingsScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            store: RegionState::Loading,
            criteria: FilterCriteria::default(),
            house_types: Vec::new(),
            house_types_failed: false,
            selected: 0,
        }
    }

    fn filtered_count(&self) -> usize {
        match &self.store {
            RegionState::Ready(store) => store.filtered_count(),
            _ => 0,
        }
    }

    fn selected_id(&self) -> Option<i64> {
        match &self.store {
            RegionState::Ready(store) => store.filtered().get(self.selected).map(|l| l.id),
            _ => None,
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let count = self.filtered_count();
        if count == 0 {
            return;
        }
        #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
        {
            self.selected = (self.selected as isize + delta).clamp(0, count as isize - 1) as usize;
        }
    }

    /// Advance the category filter: unset → each known type → unset.
    fn cycle_type_filter(&mut self) {
        if self.house_types.is_empty() {
            return;
        }
        self.criteria.house_type = match self.criteria.house_type {
            None => Some(self.house_types[0].id),
            Some(current) => {
                let pos = self.house_types.iter().position(|t| t.id == current);
                match pos {
                    Some(i) if i + 1 < self.house_types.len() => {
                        Some(self.house_types[i + 1].id)
                    }
                    _ => None,
                }
            }
        };
        self.refilter();
    }

    /// Advance the price filter: unset → each bracket → unset.
    fn cycle_price_filter(&mut self) {
        self.criteria.price = match self.criteria.price {
            None => Some(PriceBracket::ALL[0]),
            Some(current) => {
                let pos = PriceBracket::ALL.iter().position(|&b| b == current);
                match pos {
                    Some(i) if i + 1 < PriceBracket::ALL.len() => Some(PriceBracket::ALL[i + 1]),
                    _ => None,
                }
            }
        };
        self.refilter();
    }

    fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.refilter();
    }

    /// Synchronous recomputation; replaces the subset wholesale.
    fn refilter(&mut self) {
        if let RegionState::Ready(store) = &mut self.store {
            store.apply(self.criteria);
        }
        self.selected = self.selected.min(self.filtered_count().saturating_sub(1));
    }

    fn type_filter_label(&self) -> String {
        if self.house_types_failed {
            return "types unavailable".into();
        }
        match self.criteria.house_type {
            None => "All types".into(),
            Some(id) => self
                .house_types
                .iter()
                .find(|t| t.id == id)
                .map_or_else(|| format!("type #{id}"), |t| t.name.clone()),
        }
    }

    fn price_filter_label(&self) -> &'static str {
        self.criteria.price.map_or("Any price", PriceBracket::label)
    }

    fn render_filter_bar(&self, frame: &mut Frame, area: Rect) {
        let shown = self.filtered_count();
        let total = match &self.store {
            RegionState::Ready(store) => store.total_count(),
            _ => 0,
        };

        let line = Line::from(vec![
            Span::styled(" Type: ", theme::key_hint()),
            Span::styled(format!("[{}]", self.type_filter_label()), theme::filter_value()),
            Span::styled("  Price: ", theme::key_hint()),
            Span::styled(format!("[{}]", self.price_filter_label()), theme::filter_value()),
            Span::styled(format!("  {shown}/{total} shown"), theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

impl Component for ListingsScreen {
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
                self.selected = self.filtered_count().saturating_sub(1);
                Ok(None)
            }
            KeyCode::Char('t') => Ok(Some(Action::CycleTypeFilter)),
            KeyCode::Char('p') => Ok(Some(Action::CyclePriceFilter)),
            KeyCode::Char('c') => Ok(Some(Action::ClearFilters)),
            KeyCode::Enter => Ok(self.selected_id().map(Action::OpenListingDetail)),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::ListingsLoaded(listings) => {
                let mut store = ListingStore::new();
                // The active criteria survive a load.
                store.set_all(Arc::clone(listings), self.criteria);
                self.store = RegionState::Ready(store);
                self.selected = self.selected.min(self.filtered_count().saturating_sub(1));
            }
            Action::ListingsLoadFailed => {
                self.store = RegionState::Failed;
            }
            Action::HouseTypesLoaded(types) => {
                self.house_types = types.as_ref().clone();
                self.house_types_failed = false;
            }
            Action::HouseTypesLoadFailed => {
                self.house_types_failed = true;
            }
            Action::CycleTypeFilter => self.cycle_type_filter(),
            Action::CyclePriceFilter => self.cycle_price_filter(),
            Action::ClearFilters => self.clear_filters(),
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let title = format!(" Listings ({}) ", self.filtered_count());
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
            Constraint::Length(1), // filter bar
            Constraint::Min(1),    // cards
            Constraint::Length(1), // hints
        ])
        .split(inner);

        self.render_filter_bar(frame, layout[0]);

        match &self.store {
            RegionState::Loading => {
                screens::render_message(frame, layout[1], screens::LOADING, theme::empty_style());
            }
            RegionState::Failed => {
                screens::render_message(
                    frame,
                    layout[1],
                    screens::LISTINGS_FAILED,
                    theme::error_style(),
                );
            }
            RegionState::Ready(store) if store.filtered().is_empty() => {
                screens::render_message(
                    frame,
                    layout[1],
                    screens::NO_LISTINGS,
                    theme::empty_style(),
                );
            }
            RegionState::Ready(store) => {
                let cards: Vec<_> = store
                    .filtered()
                    .iter()
                    .map(|l| listing_card::summary_lines(l))
                    .collect();
                screens::render_cards(
                    frame,
                    layout[1],
                    &cards,
                    self.selected,
                    self.selected.saturating_sub(1),
                );
            }
        }

        let hints = Line::from(vec![
            Span::styled("  j/k ", theme::key_hint_key()),
            Span::styled("navigate  ", theme::key_hint()),
            Span::styled("t ", theme::key_hint_key()),
            Span::styled("type  ", theme::key_hint()),
            Span::styled("p ", theme::key_hint_key()),
            Span::styled("price  ", theme::key_hint()),
            Span::styled("c ", theme::key_hint_key()),
            Span::styled("clear  ", theme::key_hint()),
            Span::styled("Enter ", theme::key_hint_key()),
            Span::styled("details", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), layout[2]);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}

#[cfg(test)]
mod tests {
    use homeport_core::Listing;
    use pretty_assertions::assert_eq;

    use super::*;

    fn listing(id: i64, house_type_id: i64, price: f64) -> Arc<Listing> {
        Arc::new(Listing {
            id,
            name: format!("Listing {id}"),
            description: String::new(),
            price,
            image_url: None,
            house_type_id,
            house_type: None,
            agent: None,
            tags: Vec::new(),
            created_at: None,
            updated_at: None,
        })
    }

    fn loaded_screen() -> ListingsScreen {
        let mut screen = ListingsScreen::new();
        screen
            .update(&Action::HouseTypesLoaded(Arc::new(vec![
                HouseType {
                    id: 1,
                    name: "Bungalow".into(),
                },
                HouseType {
                    id: 2,
                    name: "Ranch".into(),
                },
            ])))
            .unwrap();
        screen
            .update(&Action::ListingsLoaded(Arc::new(vec![
                listing(1, 1, 250_000.0),
                listing(2, 1, 700_000.0),
                listing(3, 2, 250_000.0),
                listing(4, 2, 1_500_000.0),
            ])))
            .unwrap();
        screen
    }

    fn shown_ids(screen: &ListingsScreen) -> Vec<i64> {
        match &screen.store {
            RegionState::Ready(store) => store.filtered().iter().map(|l| l.id).collect(),
            _ => Vec::new(),
        }
    }

    #[test]
    fn unfiltered_shows_everything() {
        let screen = loaded_screen();
        assert_eq!(shown_ids(&screen), vec![1, 2, 3, 4]);
    }

    #[test]
    fn type_filter_cycles_through_types_and_back_to_all() {
        let mut screen = loaded_screen();

        screen.update(&Action::CycleTypeFilter).unwrap();
        assert_eq!(shown_ids(&screen), vec![1, 2]);

        screen.update(&Action::CycleTypeFilter).unwrap();
        assert_eq!(shown_ids(&screen), vec![3, 4]);

        screen.update(&Action::CycleTypeFilter).unwrap();
        assert_eq!(shown_ids(&screen), vec![1, 2, 3, 4]);
    }

    #[test]
    fn combined_filters_intersect() {
        let mut screen = loaded_screen();

        screen.update(&Action::CycleTypeFilter).unwrap(); // Bungalow
        screen.update(&Action::CyclePriceFilter).unwrap(); // < 300k
        assert_eq!(shown_ids(&screen), vec![1]);

        screen.update(&Action::ClearFilters).unwrap();
        assert_eq!(shown_ids(&screen), vec![1, 2, 3, 4]);
    }

    #[test]
    fn criteria_survive_a_listings_load() {
        let mut screen = loaded_screen();
        screen.update(&Action::CyclePriceFilter).unwrap(); // < 300k
        assert_eq!(shown_ids(&screen), vec![1, 3]);

        screen
            .update(&Action::ListingsLoaded(Arc::new(vec![
                listing(5, 1, 100_000.0),
                listing(6, 1, 900_000.0),
            ])))
            .unwrap();
        assert_eq!(shown_ids(&screen), vec![5]);
    }

    #[test]
    fn selection_clamps_when_filter_narrows() {
        let mut screen = loaded_screen();
        screen
            .handle_key_event(KeyEvent::from(KeyCode::Char('G')))
            .unwrap();
        assert_eq!(screen.selected, 3);

        screen.update(&Action::CycleTypeFilter).unwrap();
        assert!(screen.selected < shown_ids(&screen).len());
    }

    #[test]
    fn failed_house_types_disable_type_cycling() {
        let mut screen = ListingsScreen::new();
        screen.update(&Action::HouseTypesLoadFailed).unwrap();
        screen
            .update(&Action::ListingsLoaded(Arc::new(vec![listing(
                1, 1, 100.0,
            )])))
            .unwrap();

        screen.update(&Action::CycleTypeFilter).unwrap();
        assert_eq!(screen.criteria.house_type, None);
        assert_eq!(screen.type_filter_label(), "types unavailable");
    }
}
