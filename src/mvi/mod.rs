//! State-container architecture primitives.
//!
//! This module provides the base traits for unidirectional data flow:
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Observers
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of application state
//! - **Action**: a request to mutate state
//! - **Reducer**: pure function that transforms state based on actions

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::State;
