//! The application state snapshot.

use std::collections::HashSet;

use crate::app::stories::{
    filtered_stories, RecommendedStory, SelectedCategory, StoryCategory,
};
use crate::app::types::{
    Collection, CollectionId, Crash, Mode, RecentBookmark, RecentTab, RecentlyVisitedItem,
    TopSite,
};
use crate::messaging::MessagingState;
use crate::mvi::State;

/// One immutable snapshot of application state.
///
/// Created once with empty defaults at session start; every later value is
/// produced by the reducer. No field is ever mutated in place, the whole
/// snapshot is replaced on each transition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub collections: Vec<Collection>,
    /// Collections currently expanded in the UI. Membership only.
    pub expanded_collections: HashSet<CollectionId>,
    pub top_sites: Vec<TopSite>,
    pub recent_bookmarks: Vec<RecentBookmark>,
    pub recent_tabs: Vec<RecentTab>,
    /// Invariant: contains no `Group` whose title case-insensitively equals
    /// the active recent-tabs search-group term. Re-filtered whenever either
    /// `recent_tabs` or `recent_history` changes.
    pub recent_history: Vec<RecentlyVisitedItem>,
    pub non_fatal_crashes: Vec<Crash>,
    pub story_categories: Vec<StoryCategory>,
    /// Insertion order preserved; duplicate names allowed (see reducer docs).
    pub selected_categories: Vec<SelectedCategory>,
    /// Derived: always recomputed from `story_categories` and
    /// `selected_categories`, except for the direct test/seed override.
    pub recommended_stories: Vec<RecommendedStory>,
    pub show_collection_placeholder: bool,
    pub inactive_tabs_expanded: bool,
    pub mode: Mode,
    pub messaging: MessagingState,
}

impl State for AppState {}

impl AppState {
    /// Initial snapshot for a new session.
    pub fn new() -> Self {
        Self {
            show_collection_placeholder: true,
            ..Self::default()
        }
    }

    /// The search term of the active recent-tabs search group, if any.
    pub fn recent_search_term(&self) -> Option<&str> {
        self.recent_tabs.iter().find_map(RecentTab::search_term)
    }

    /// Recompute the derived recommendation feed for this snapshot.
    pub fn filtered_stories(&self, limit: usize) -> Vec<RecommendedStory> {
        filtered_stories(&self.story_categories, &self.selected_categories, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_snapshot_shows_collection_placeholder() {
        let state = AppState::new();
        assert!(state.show_collection_placeholder);
        assert!(state.collections.is_empty());
        assert!(state.recommended_stories.is_empty());
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn recent_search_term_finds_first_group() {
        let state = AppState {
            recent_tabs: vec![
                RecentTab::Tab {
                    id: "1".into(),
                    url: "https://a".into(),
                    title: "a".into(),
                },
                RecentTab::SearchGroup {
                    search_term: "cats".into(),
                    tab_count: 3,
                },
            ],
            ..AppState::new()
        };
        assert_eq!(state.recent_search_term(), Some("cats"));
    }

    #[test]
    fn recent_search_term_is_none_without_group() {
        assert_eq!(AppState::new().recent_search_term(), None);
    }
}
