use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

use crate::config::ThemeVariant;

/// Resolved visual parameters for one theme variant.
///
/// The two variants are deliberately identical in behavior; only spacing and
/// styling differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub variant: ThemeVariant,
    /// Horizontal padding inside the anchor box.
    pub pad: u16,
    /// Blank rows between the anchor and the dropdown.
    pub gutter: u16,
    /// Preferred anchor width in cells, clamped to the terminal.
    pub anchor_width: u16,
    pub border_type: BorderType,
    pub border: Style,
    pub border_focused: Style,
    pub label: Style,
    pub chip: Style,
    pub chip_close: Style,
    pub placeholder: Style,
    pub item_active: Style,
    pub check: Style,
    pub no_results: Style,
    pub status: Style,
}

impl Theme {
    pub fn new(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Default => Self {
                variant,
                pad: 1,
                gutter: 1,
                anchor_width: 42,
                border_type: BorderType::Rounded,
                border: Style::default().fg(Color::DarkGray),
                border_focused: Style::default().fg(Color::Cyan),
                label: Style::default().add_modifier(Modifier::BOLD),
                chip: Style::default().bg(Color::Rgb(60, 60, 70)),
                chip_close: Style::default()
                    .bg(Color::Rgb(60, 60, 70))
                    .fg(Color::Gray),
                placeholder: Style::default().fg(Color::DarkGray),
                item_active: Style::default().bg(Color::Rgb(45, 45, 50)),
                check: Style::default().fg(Color::Green),
                no_results: Style::default().fg(Color::DarkGray),
                status: Style::default().fg(Color::Gray),
            },
            ThemeVariant::Compact => Self {
                variant,
                pad: 0,
                gutter: 0,
                anchor_width: 42,
                border_type: BorderType::Plain,
                border: Style::default().fg(Color::Gray),
                border_focused: Style::default().fg(Color::White),
                label: Style::default(),
                chip: Style::default().bg(Color::DarkGray),
                chip_close: Style::default().bg(Color::DarkGray).fg(Color::White),
                placeholder: Style::default().fg(Color::DarkGray),
                item_active: Style::default().add_modifier(Modifier::REVERSED),
                check: Style::default(),
                no_results: Style::default().fg(Color::DarkGray),
                status: Style::default().fg(Color::DarkGray),
            },
        }
    }
}
