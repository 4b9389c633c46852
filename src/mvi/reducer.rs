//! Reducer trait.

use super::action::Action;
use super::state::State;

/// A pure transition function over a state type.
///
/// All mutation flows through `reduce`: it consumes the current snapshot and
/// one action and returns the snapshot that replaces it. Implementations
/// must not perform I/O or touch anything outside their arguments — given
/// the same snapshot and action, the result is always the same.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The action type this reducer handles.
    type Action: Action;

    /// Compute the snapshot that follows `state` after `action`.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}
