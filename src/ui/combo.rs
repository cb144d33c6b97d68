use ratatui::Frame;
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::combo::ComboView;

use super::layout::ComboLayout;
use super::theme::Theme;

/// Draw the whole widget from one layout + view pair. `layout.chips` and
/// `view.chips` share the same order by construction.
pub fn draw_combo(frame: &mut Frame<'_>, layout: &ComboLayout, view: &ComboView, theme: &Theme) {
    let border_style = if view.open {
        theme.border_focused
    } else {
        theme.border
    };
    let anchor_block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(border_style);
    frame.render_widget(anchor_block, layout.anchor);

    for (slot, chip) in layout.chips.iter().zip(&view.chips) {
        let line = Line::from(vec![
            Span::styled(format!(" {} ", chip.label), theme.chip),
            Span::styled("✕ ", theme.chip_close),
        ]);
        frame.render_widget(Paragraph::new(line), slot.area);
    }

    let input_line = build_input_line(
        &view.input,
        view.cursor,
        &view.placeholder,
        layout.input.width as usize,
        theme,
    );
    frame.render_widget(Paragraph::new(input_line), layout.input);

    if let Some(popup) = layout.dropdown {
        draw_dropdown(frame, layout, view, theme, popup);
    }
}

fn draw_dropdown(
    frame: &mut Frame<'_>,
    layout: &ComboLayout,
    view: &ComboView,
    theme: &Theme,
    popup: ratatui::layout::Rect,
) {
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if view.items.is_empty() {
        let placeholder = Paragraph::new(" No results found").style(theme.no_results);
        frame.render_widget(placeholder, inner);
        return;
    }

    for &(idx, row) in &layout.items {
        let Some(item) = view.items.get(idx) else {
            continue;
        };
        let check = if item.checked { " ✓ " } else { "   " };
        let mut spans = vec![
            Span::styled(check.to_string(), theme.check),
            Span::raw(item.label.to_string()),
        ];

        let used = 3 + item.label.width();
        let padding = (row.width as usize).saturating_sub(used);
        spans.push(Span::raw(" ".repeat(padding)));

        let style = if item.active {
            theme.item_active
        } else {
            Style::default()
        };
        frame.render_widget(Paragraph::new(Line::from(spans).style(style)), row);
    }
}

/// Software caret (reversed cell) instead of the terminal cursor, windowed
/// so the caret stays visible once the text outgrows the field.
fn build_input_line(
    input: &str,
    cursor: usize,
    placeholder: &str,
    width: usize,
    theme: &Theme,
) -> Line<'static> {
    if width == 0 {
        return Line::default();
    }

    if input.is_empty() {
        let visible: String = placeholder
            .graphemes(true)
            .take(width.saturating_sub(1))
            .collect();
        return Line::from(vec![
            Span::styled(" ".to_string(), Style::default().reversed()),
            Span::styled(visible, theme.placeholder),
        ]);
    }

    let cells: Vec<&str> = input.graphemes(true).collect();
    let count = cells.len();
    let cursor = cursor.min(count);

    let start = if cursor >= width { cursor + 1 - width } else { 0 };
    let end = (start + width).min(count);

    let mut spans = Vec::with_capacity(end - start + 1);
    for (offset, cell) in cells[start..end].iter().enumerate() {
        if start + offset == cursor {
            spans.push(Span::styled(
                (*cell).to_string(),
                Style::default().reversed(),
            ));
        } else {
            spans.push(Span::raw((*cell).to_string()));
        }
    }
    if cursor == count && end - start < width {
        spans.push(Span::styled(" ".to_string(), Style::default().reversed()));
    }
    Line::from(spans)
}
