mod core;
mod event_loop;
mod state;
pub(crate) mod terminal_session;

#[cfg(test)]
mod tests;

pub use core::App;
pub use state::{AppState, StatusState};
