//! Application state: snapshot, actions, and the reducer.

mod action;
mod reducer;
mod state;
pub mod stories;
pub mod types;

pub use action::AppAction;
pub use reducer::AppReducer;
pub use state::AppState;
