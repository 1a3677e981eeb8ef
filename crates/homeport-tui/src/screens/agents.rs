//! Agents screen — the full agent roster as portrait cards.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use homeport_core::Agent;

use crate::action::Action;
use crate::component::Component;
use crate::screens::{self, RegionState};
use crate::theme;
use crate::widgets::listing_card;

pub struct AgentsScreen {
    focused: bool,
    agents: RegionState<Arc<Vec<Arc<Agent>>>>,
    selected: usize,
}

impl AgentsScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            agents: RegionState::Loading,
            selected: 0,
        }
    }

    fn count(&self) -> usize {
        match &self.agents {
            RegionState::Ready(agents) => agents.len(),
            _ => 0,
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let count = self.count();
        if count == 0 {
            return;
        }
        #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
        {
            self.selected = (self.selected as isize + delta).clamp(0, count as isize - 1) as usize;
        }
    }
}

impl Component for AgentsScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.move_selection(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(-1),
            KeyCode::Char('g') => self.selected = 0,
            KeyCode::Char('G') => self.selected = self.count().saturating_sub(1),
            _ => {}
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::AgentsLoaded(agents) => {
                self.agents = RegionState::Ready(Arc::clone(agents));
                self.selected = self.selected.min(self.count().saturating_sub(1));
            }
            Action::AgentsLoadFailed => {
                self.agents = RegionState::Failed;
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let title = format!(" Agents ({}) ", self.count());
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

        let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

        match &self.agents {
            RegionState::Loading => {
                screens::render_message(frame, layout[0], screens::LOADING, theme::empty_style());
            }
            RegionState::Failed => {
                screens::render_message(
                    frame,
                    layout[0],
                    screens::AGENTS_FAILED,
                    theme::error_style(),
                );
            }
            RegionState::Ready(agents) if agents.is_empty() => {
                screens::render_message(frame, layout[0], screens::NO_AGENTS, theme::empty_style());
            }
            RegionState::Ready(agents) => {
                let cards: Vec<_> = agents.iter().map(|a| listing_card::agent_lines(a)).collect();
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
            Span::styled("navigate", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), layout[1]);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}
