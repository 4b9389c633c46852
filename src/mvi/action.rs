//! Base trait for actions (state mutation requests).

/// Marker trait for action objects.
///
/// Actions represent:
/// - User interactions (expanding a collection, selecting a category)
/// - Data updates pushed by collaborators (new top sites, new history)
/// - Housekeeping (clearing crash records)
///
/// Actions are processed by reducers to produce new states.
pub trait Action: Send + 'static {}
