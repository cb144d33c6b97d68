use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use unicode_width::UnicodeWidthStr;

use crate::combo::{ComboView, HitTarget};

use super::theme::Theme;

/// The input field never shrinks below this many columns; it wraps to its
/// own row instead.
pub(crate) const MIN_INPUT_WIDTH: u16 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiFrame {
    pub label: Rect,
    pub body: Rect,
    pub status: Rect,
}

pub fn split_frame(area: Rect) -> UiFrame {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    UiFrame {
        label: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Geometry of one rendered chip: its full cell area and the cells of its
/// remove control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipSlot {
    pub value: &'static str,
    pub area: Rect,
    pub close: Rect,
}

/// Per-frame geometry of the whole widget. Rendering and mouse hit-testing
/// both read from this so they can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboLayout {
    pub anchor: Rect,
    pub chips: Vec<ChipSlot>,
    pub input: Rect,
    pub dropdown: Option<Rect>,
    /// Visible dropdown rows as (index into `view.items`, row rect).
    pub items: Vec<(usize, Rect)>,
}

/// The anchor's bounding box, or `None` when the viewport cannot mount it.
pub fn anchor_rect(body: Rect, view: &ComboView, theme: &Theme) -> Option<Rect> {
    let chrome = 2 + theme.pad * 2;
    if body.width < chrome + MIN_INPUT_WIDTH {
        return None;
    }
    let width = body.width.min(theme.anchor_width);
    let inner_width = width - chrome;
    let content_rows = flow_rows(view, inner_width).1;
    let height = content_rows + 2;
    if body.height < height {
        return None;
    }
    Some(Rect::new(body.x, body.y, width, height))
}

pub fn compute_combo_layout(
    body: Rect,
    view: &ComboView,
    theme: &Theme,
    max_dropdown_rows: u16,
) -> Option<ComboLayout> {
    let anchor = anchor_rect(body, view, theme)?;
    let inner = Rect::new(
        anchor.x + 1 + theme.pad,
        anchor.y + 1,
        anchor.width - 2 - theme.pad * 2,
        anchor.height - 2,
    );

    let (slots, _) = flow_rows(view, inner.width);
    let mut chips = Vec::with_capacity(view.chips.len());
    let mut input = Rect::new(inner.x, inner.y, inner.width, 1);
    for slot in slots {
        let area = Rect::new(inner.x + slot.x, inner.y + slot.row, slot.width, 1);
        match slot.content {
            FlowContent::Chip(chip_idx) => {
                // Remove control occupies the chip's trailing two cells.
                let close = Rect::new(area.x + area.width.saturating_sub(2), area.y, 2, 1);
                chips.push(ChipSlot {
                    value: view.chips[chip_idx].value,
                    area,
                    close,
                });
            }
            FlowContent::Input => input = area,
        }
    }

    let (dropdown, items) = if view.open {
        dropdown_geometry(body, anchor, view, theme, max_dropdown_rows)
    } else {
        (None, Vec::new())
    };

    Some(ComboLayout {
        anchor,
        chips,
        input,
        dropdown,
        items,
    })
}

pub fn hit_test(layout: &ComboLayout, column: u16, row: u16) -> HitTarget {
    let position = Position::new(column, row);
    for chip in &layout.chips {
        if chip.close.contains(position) {
            return HitTarget::ChipClose(chip.value);
        }
    }
    for &(idx, rect) in &layout.items {
        if rect.contains(position) {
            return HitTarget::Item(idx);
        }
    }
    if layout.anchor.contains(position)
        || layout.dropdown.is_some_and(|rect| rect.contains(position))
    {
        return HitTarget::Anchor;
    }
    HitTarget::Outside
}

/// Popover below the anchor: same width, `gutter` blank rows between, rows
/// clamped to the configured cap and the space left on screen. Suppressed
/// entirely when fewer than three rows fit.
fn dropdown_geometry(
    body: Rect,
    anchor: Rect,
    view: &ComboView,
    theme: &Theme,
    max_dropdown_rows: u16,
) -> (Option<Rect>, Vec<(usize, Rect)>) {
    let top = anchor.y + anchor.height + theme.gutter;
    let bottom = body.y + body.height;
    let available = bottom.saturating_sub(top);
    if available < 3 {
        return (None, Vec::new());
    }

    // One row minimum so the no-results placeholder always has a home.
    let wanted = (view.items.len().max(1) as u16).min(max_dropdown_rows);
    let height = (wanted + 2).min(available);
    let rect = Rect::new(anchor.x, top, anchor.width, height);

    let visible_rows = (height - 2) as usize;
    let start = scroll_start(view.items.len(), view.active_idx, visible_rows);
    let items = (start..view.items.len().min(start + visible_rows))
        .enumerate()
        .map(|(row_offset, idx)| {
            (
                idx,
                Rect::new(
                    rect.x + 1,
                    rect.y + 1 + row_offset as u16,
                    rect.width - 2,
                    1,
                ),
            )
        })
        .collect();

    (Some(rect), items)
}

/// Keep the active item roughly centered once the list outgrows the window.
fn scroll_start(len: usize, active: usize, window: usize) -> usize {
    if len <= window || active < window / 2 {
        0
    } else if active >= len - window.div_ceil(2) {
        len - window
    } else {
        active - window / 2
    }
}

#[derive(Debug, Clone, Copy)]
enum FlowContent {
    Chip(usize),
    Input,
}

#[derive(Debug, Clone, Copy)]
struct FlowSlot {
    content: FlowContent,
    row: u16,
    x: u16,
    width: u16,
}

/// Flow chips left to right with single-cell gaps, wrapping when a chip
/// would overflow, then give the input the remainder of the last row (or a
/// fresh row when too little is left).
fn flow_rows(view: &ComboView, inner_width: u16) -> (Vec<FlowSlot>, u16) {
    let inner_width = inner_width.max(1);
    let mut slots = Vec::with_capacity(view.chips.len() + 1);
    let mut row = 0u16;
    let mut x = 0u16;

    for (chip_idx, chip) in view.chips.iter().enumerate() {
        let label_width = chip.label.width() as u16;
        let width = (label_width + 4).min(inner_width);
        if x > 0 && x + width > inner_width {
            row += 1;
            x = 0;
        }
        slots.push(FlowSlot {
            content: FlowContent::Chip(chip_idx),
            row,
            x,
            width,
        });
        x += width + 1;
    }

    if x > 0 && inner_width.saturating_sub(x) < MIN_INPUT_WIDTH {
        row += 1;
        x = 0;
    }
    slots.push(FlowSlot {
        content: FlowContent::Input,
        row,
        x,
        width: inner_width - x,
    });

    (slots, row + 1)
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::combo::{ChipView, ComboItemView, ComboView, HitTarget};
    use crate::config::ThemeVariant;
    use crate::ui::theme::Theme;

    use super::{anchor_rect, compute_combo_layout, hit_test, scroll_start, split_frame};

    fn view_with(chips: Vec<ChipView>, items: Vec<ComboItemView>, open: bool) -> ComboView {
        ComboView {
            input: String::new(),
            cursor: 0,
            placeholder: "Select a fruit...".to_string(),
            chips,
            open,
            items,
            active_idx: 0,
        }
    }

    fn chip(value: &'static str, label: &'static str) -> ChipView {
        ChipView { value, label }
    }

    fn item(label: &'static str) -> ComboItemView {
        ComboItemView {
            label,
            checked: false,
            active: false,
        }
    }

    #[test]
    fn split_frame_reserves_label_and_status_rows() {
        let frame = split_frame(Rect::new(0, 0, 80, 24));
        assert_eq!(frame.label.height, 1);
        assert_eq!(frame.status.height, 1);
        assert_eq!(frame.body.height, 22);
    }

    #[test]
    fn anchor_is_unmounted_when_the_viewport_is_too_small() {
        let theme = Theme::new(ThemeVariant::Default);
        let view = view_with(vec![], vec![], false);
        assert!(anchor_rect(Rect::new(0, 0, 10, 10), &view, &theme).is_none());
        assert!(anchor_rect(Rect::new(0, 0, 80, 2), &view, &theme).is_none());
        assert!(anchor_rect(Rect::new(0, 0, 80, 24), &view, &theme).is_some());
    }

    #[test]
    fn chips_wrap_and_grow_the_anchor() {
        let theme = Theme::new(ThemeVariant::Default);
        let empty = view_with(vec![], vec![], false);
        let full = view_with(
            vec![
                chip("Apple", "🍎 Apple"),
                chip("Grape", "🍇 Grape"),
                chip("Orange", "🍊 Orange"),
                chip("Strawberry", "🍓 Strawberry"),
                chip("Watermelon", "🍉 Watermelon"),
            ],
            vec![],
            false,
        );
        let body = Rect::new(0, 0, 80, 24);

        let empty_anchor = anchor_rect(body, &empty, &theme).expect("anchor should mount");
        let full_anchor = anchor_rect(body, &full, &theme).expect("anchor should mount");
        assert_eq!(empty_anchor.height, 3);
        assert!(full_anchor.height > empty_anchor.height);
        assert_eq!(full_anchor.width, empty_anchor.width);
    }

    #[test]
    fn dropdown_matches_anchor_width_below_the_gutter() {
        let theme = Theme::new(ThemeVariant::Default);
        let view = view_with(vec![], vec![item("🍎 Apple"), item("🍇 Grape")], true);
        let layout = compute_combo_layout(Rect::new(0, 0, 80, 24), &view, &theme, 8)
            .expect("layout should mount");

        let dropdown = layout.dropdown.expect("dropdown should be placed");
        assert_eq!(dropdown.width, layout.anchor.width);
        assert_eq!(
            dropdown.y,
            layout.anchor.y + layout.anchor.height + theme.gutter
        );
        assert_eq!(layout.items.len(), 2);
    }

    #[test]
    fn open_dropdown_with_no_items_keeps_a_placeholder_row() {
        let theme = Theme::new(ThemeVariant::Default);
        let view = view_with(vec![], vec![], true);
        let layout = compute_combo_layout(Rect::new(0, 0, 80, 24), &view, &theme, 8)
            .expect("layout should mount");

        let dropdown = layout.dropdown.expect("dropdown should be placed");
        assert_eq!(dropdown.height, 3);
        assert!(layout.items.is_empty());
    }

    #[test]
    fn hit_test_resolves_chip_close_items_anchor_and_outside() {
        let theme = Theme::new(ThemeVariant::Default);
        let view = view_with(
            vec![chip("Apple", "🍎 Apple")],
            vec![item("🍎 Apple"), item("🍇 Grape")],
            true,
        );
        let layout = compute_combo_layout(Rect::new(0, 0, 80, 24), &view, &theme, 8)
            .expect("layout should mount");

        let close = layout.chips[0].close;
        assert_eq!(
            hit_test(&layout, close.x, close.y),
            HitTarget::ChipClose("Apple")
        );

        let (idx, row) = layout.items[1];
        assert_eq!(hit_test(&layout, row.x + 1, row.y), HitTarget::Item(idx));

        assert_eq!(
            hit_test(&layout, layout.input.x, layout.input.y),
            HitTarget::Anchor
        );
        assert_eq!(hit_test(&layout, 79, 23), HitTarget::Outside);
    }

    #[test]
    fn input_wraps_to_its_own_row_when_chips_fill_the_line() {
        let theme = Theme::new(ThemeVariant::Compact);
        let view = view_with(
            vec![
                chip("Strawberry", "🍓 Strawberry"),
                chip("Watermelon", "🍉 Watermelon"),
            ],
            vec![],
            false,
        );
        let layout = compute_combo_layout(Rect::new(0, 0, 80, 24), &view, &theme, 8)
            .expect("layout should mount");

        let last_chip = layout.chips.last().expect("chips should be laid out");
        assert!(layout.input.y > last_chip.area.y);
        assert!(layout.input.width >= super::MIN_INPUT_WIDTH);
    }

    #[test]
    fn scroll_start_keeps_the_active_row_in_window() {
        assert_eq!(scroll_start(3, 2, 8), 0);
        assert_eq!(scroll_start(20, 0, 5), 0);
        assert_eq!(scroll_start(20, 10, 5), 8);
        assert_eq!(scroll_start(20, 19, 5), 15);
    }
}
