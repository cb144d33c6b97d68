use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::catalog::{FruitOption, OPTIONS, label_of};
use crate::matcher::{OptionMatcher, RankedMatcher};

use super::state::SelectionState;
use super::types::{ChipView, ComboItemView, ComboKeyResult, ComboView, HitTarget};

/// Owns the combobox interaction state: query text, the filtered view of the
/// catalog, the active dropdown item, the open flag, and the selection.
///
/// The filtered view is derived state. It is recomputed whenever the query
/// changes and never stored anywhere else.
pub struct ComboManager {
    input: Input,
    selection: SelectionState,
    visible: Vec<usize>,
    active: usize,
    open: bool,
    matcher: Box<dyn OptionMatcher>,
    catalog: &'static [FruitOption],
}

impl Default for ComboManager {
    fn default() -> Self {
        Self::with_matcher(Box::new(RankedMatcher))
    }
}

impl ComboManager {
    pub fn with_matcher(matcher: Box<dyn OptionMatcher>) -> Self {
        let catalog = OPTIONS;
        let visible = matcher.select("", catalog);
        Self {
            input: Input::default(),
            selection: SelectionState::default(),
            visible,
            active: 0,
            open: false,
            matcher,
            catalog,
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn query(&self) -> &str {
        self.input.value()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ComboKeyResult {
        match key.code {
            KeyCode::Esc => {
                if self.open {
                    self.open = false;
                    return ComboKeyResult::redraw();
                }
                return ComboKeyResult::QuitRequested;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return ComboKeyResult::QuitRequested;
            }
            KeyCode::Up => return self.step_active(-1),
            KeyCode::Down => return self.step_active(1),
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return self.step_active(-1);
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return self.step_active(1);
            }
            KeyCode::Enter => return self.toggle_active(),
            KeyCode::Backspace if self.input.value().is_empty() => {
                // The guard: backspace only removes a chip once the filter
                // text has been fully deleted.
                return match self.selection.remove_last() {
                    Some(event) => ComboKeyResult::mutated(event),
                    None => ComboKeyResult::ignored(),
                };
            }
            _ => {}
        }

        let Some(change) = self.input.handle_event(&Event::Key(key)) else {
            return ComboKeyResult::ignored();
        };
        if change.value {
            self.open = true;
            self.refilter_to_top();
        }
        ComboKeyResult::Consumed {
            redraw: change.value || change.cursor,
            event: None,
        }
    }

    pub fn handle_mouse_target(&mut self, target: HitTarget) -> ComboKeyResult {
        match target {
            HitTarget::ChipClose(value) => match self.selection.remove_by_value(value) {
                Some(event) => ComboKeyResult::mutated(event),
                None => ComboKeyResult::ignored(),
            },
            HitTarget::Item(idx) => self.toggle_visible(idx),
            HitTarget::Anchor => {
                if self.open {
                    ComboKeyResult::ignored()
                } else {
                    self.open = true;
                    ComboKeyResult::redraw()
                }
            }
            HitTarget::Outside => {
                if self.open {
                    self.open = false;
                    ComboKeyResult::redraw()
                } else {
                    ComboKeyResult::ignored()
                }
            }
        }
    }

    pub fn view(&self, placeholder: &str) -> ComboView {
        let chips = self
            .selection
            .values()
            .iter()
            .map(|&value| ChipView {
                value,
                label: label_of(value).unwrap_or(value),
            })
            .collect();

        let items = self
            .visible
            .iter()
            .enumerate()
            .map(|(idx_in_visible, &catalog_idx)| {
                let option = &self.catalog[catalog_idx];
                ComboItemView {
                    label: option.label,
                    checked: self.selection.contains(option.value),
                    active: idx_in_visible == self.active,
                }
            })
            .collect();

        ComboView {
            input: self.input.value().to_string(),
            cursor: self.input.visual_cursor(),
            placeholder: placeholder.to_string(),
            chips,
            open: self.open,
            items,
            active_idx: self.active,
        }
    }

    fn step_active(&mut self, delta: i32) -> ComboKeyResult {
        if !self.open {
            self.open = true;
            return ComboKeyResult::redraw();
        }
        if self.visible.is_empty() {
            self.active = 0;
            return ComboKeyResult::ignored();
        }
        let last = self.visible.len() - 1;
        let next = if delta < 0 {
            self.active.saturating_sub(1)
        } else {
            (self.active + 1).min(last)
        };
        if next == self.active {
            return ComboKeyResult::ignored();
        }
        self.active = next;
        ComboKeyResult::redraw()
    }

    fn toggle_active(&mut self) -> ComboKeyResult {
        if !self.open {
            self.open = true;
            return ComboKeyResult::redraw();
        }
        self.toggle_visible(self.active)
    }

    /// Toggle selection of the item at `idx` in the visible list. The
    /// dropdown stays open so further values can be picked.
    fn toggle_visible(&mut self, idx: usize) -> ComboKeyResult {
        let Some(&catalog_idx) = self.visible.get(idx) else {
            return ComboKeyResult::ignored();
        };
        let value = self.catalog[catalog_idx].value;
        let event = self.selection.toggle(value);
        ComboKeyResult::mutated(event)
    }

    /// Recompute the visible set and put the active item back on the best
    /// match.
    fn refilter_to_top(&mut self) {
        self.visible = self.matcher.select(self.input.value(), self.catalog);
        self.active = 0;
    }
}
