//! Centralized application state for a browser-style home surface.
//!
//! A stream of [`app::AppAction`]s is folded by a pure reducer into one
//! immutable [`app::AppState`] snapshot. Derived views (the filtered
//! recommendation feed, deduplicated recent-activity lists) are recomputed
//! on every transition that can affect them, so readers never see them out
//! of sync with the primary slices.
//!
//! The [`store::Store`] owns the current snapshot and serializes reductions;
//! everything else in the crate is pure and synchronous, with no I/O.

pub mod app;
pub mod feed;
pub mod logging;
pub mod messaging;
pub mod mvi;
pub mod store;
