use crate::event::SelectionEvent;

/// One selected value rendered as a removable chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipView {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComboItemView {
    pub label: &'static str,
    pub checked: bool,
    pub active: bool,
}

/// Snapshot handed to the UI layer each frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboView {
    pub input: String,
    pub cursor: usize,
    pub placeholder: String,
    pub chips: Vec<ChipView>,
    pub open: bool,
    pub items: Vec<ComboItemView>,
    /// Index of the active item within `items`.
    pub active_idx: usize,
}

/// What a mouse press landed on, resolved by the layout hit-test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The remove control of the chip holding this value.
    ChipClose(&'static str),
    /// A dropdown row, by index into the visible item list.
    Item(usize),
    /// The combobox anchor (chips + input box).
    Anchor,
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboKeyResult {
    Consumed {
        redraw: bool,
        event: Option<SelectionEvent>,
    },
    QuitRequested,
}

impl ComboKeyResult {
    pub(crate) fn redraw() -> Self {
        Self::Consumed {
            redraw: true,
            event: None,
        }
    }

    pub(crate) fn ignored() -> Self {
        Self::Consumed {
            redraw: false,
            event: None,
        }
    }

    pub(crate) fn mutated(event: SelectionEvent) -> Self {
        Self::Consumed {
            redraw: true,
            event: Some(event),
        }
    }
}
