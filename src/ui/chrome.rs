use ratatui::Frame;
use ratatui::widgets::Paragraph;

use crate::app::AppState;

use super::layout::UiFrame;
use super::theme::Theme;

pub fn draw_chrome(
    frame: &mut Frame<'_>,
    areas: &UiFrame,
    app: &AppState,
    selected_count: usize,
    theme: &Theme,
) {
    let label = Paragraph::new(app.label.as_str()).style(theme.label);
    frame.render_widget(label, areas.label);

    let message = if app.status.message.is_empty() {
        "-"
    } else {
        app.status.message.as_str()
    };
    let status_text = format!(
        "{} selected | {} | theme {} | esc quits",
        selected_count,
        message,
        theme.variant.id()
    );
    frame.render_widget(Paragraph::new(status_text).style(theme.status), areas.status);
}
