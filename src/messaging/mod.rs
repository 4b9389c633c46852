//! In-product message display subsystem.
//!
//! Independent of the rest of the application state: the top-level reducer
//! forwards `AppAction::Messaging` here without inspecting the payload.

mod action;
mod reducer;
mod state;

pub use action::MessagingAction;
pub use reducer::MessagingReducer;
pub use state::{Message, MessagingState};
