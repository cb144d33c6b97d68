use crate::config::UiConfig;
use crate::event::SelectionEvent;

#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: String,
    pub last_event: Option<SelectionEvent>,
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Text above the combobox, from `[ui] label`.
    pub label: String,
    pub status: StatusState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            label: UiConfig::default().label,
            status: StatusState::default(),
        }
    }
}

impl AppState {
    pub fn note_selection(&mut self, event: SelectionEvent) {
        self.status.message = event.describe();
        self.status.last_event = Some(event);
    }
}

#[cfg(test)]
mod tests {
    use crate::event::SelectionEvent;

    use super::AppState;

    #[test]
    fn note_selection_updates_the_status_line() {
        let mut state = AppState::default();
        state.note_selection(SelectionEvent::Added("Grape"));
        assert_eq!(state.status.message, "selected Grape");
        assert_eq!(state.status.last_event, Some(SelectionEvent::Added("Grape")));
    }
}
