mod manager;
mod state;
mod types;

pub use manager::ComboManager;
pub use state::SelectionState;
pub use types::{ChipView, ComboItemView, ComboKeyResult, ComboView, HitTarget};
