//! Base trait for state snapshots.

/// Marker trait for a state snapshot.
///
/// A snapshot is never edited in place: each transition clones the previous
/// value and replaces fields, so anything holding an old snapshot keeps a
/// consistent view. `PartialEq` lets subscribers skip work when a transition
/// left their slice untouched, and `Default` provides the empty value the
/// session starts from.
pub trait State: Clone + PartialEq + Default + Send + 'static {}
