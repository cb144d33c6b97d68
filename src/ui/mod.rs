mod chrome;
mod combo;
mod layout;
mod theme;

pub use chrome::draw_chrome;
pub use combo::draw_combo;
pub use layout::{ChipSlot, ComboLayout, UiFrame, anchor_rect, compute_combo_layout, hit_test, split_frame};
pub use theme::Theme;
