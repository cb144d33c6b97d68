mod interaction;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::config::Config;

pub(crate) fn test_app() -> App {
    App::with_config(Config::default())
}

pub(crate) fn key_event(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub(crate) fn type_query(app: &mut App, text: &str) {
    for c in text.chars() {
        app.apply_event(key_event(KeyCode::Char(c)));
    }
}
