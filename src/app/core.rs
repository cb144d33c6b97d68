use crate::combo::ComboManager;
use crate::config::Config;
use crate::error::AppResult;
use crate::ui::{ComboLayout, Theme};

use super::state::AppState;

pub struct App {
    pub state: AppState,
    pub combo: ComboManager,
    pub config: Config,
    pub theme: Theme,
    /// Geometry of the last drawn frame, kept for mouse hit-testing.
    pub(crate) last_layout: Option<ComboLayout>,
}

impl App {
    pub fn new() -> AppResult<Self> {
        Ok(Self::with_config(Config::load()?))
    }

    pub fn with_config(config: Config) -> Self {
        let theme = Theme::new(config.theme_variant());
        let state = AppState {
            label: config.ui.label.clone(),
            ..AppState::default()
        };
        Self {
            state,
            combo: ComboManager::default(),
            config,
            theme,
            last_layout: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Config, ThemeVariant};

    use super::App;

    #[test]
    fn with_config_resolves_theme_and_label() {
        let mut config = Config::default();
        config.theme.variant = "compact".to_string();
        config.ui.label = "Pick some fruit".to_string();

        let app = App::with_config(config);
        assert_eq!(app.theme.variant, ThemeVariant::Compact);
        assert_eq!(app.state.label, "Pick some fruit");
        assert!(app.combo.selection().is_empty());
    }
}
