//! Recommended-stories model and the derived-feed computation.

use serde::{Deserialize, Serialize};

/// How many recommended stories the home surface displays at once.
pub const STORIES_TO_SHOW_COUNT: usize = 8;

/// A single recommended story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedStory {
    pub title: String,
    pub url: String,
    pub category: String,
    #[serde(default)]
    pub times_shown: u64,
}

/// A named bucket of recommended stories. `name` is the unique key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryCategory {
    pub name: String,
    pub stories: Vec<RecommendedStory>,
}

/// A record of the user selecting a category.
///
/// Selections are kept in insertion order. Re-selecting an already-selected
/// name appends another record; downstream filtering is by name membership,
/// so duplicates do not change the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedCategory {
    pub name: String,
}

/// Identifies a story that was displayed, for impression counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryShownId {
    pub category: String,
    pub title: String,
}

/// Compute the feed of stories to display.
///
/// Keeps only stories from categories whose name appears in `selections`,
/// flattened in category order then story order, truncated to `limit`.
/// Deterministic: structurally equal inputs produce structurally equal
/// output. Empty categories or empty selections yield an empty feed.
pub fn filtered_stories(
    categories: &[StoryCategory],
    selections: &[SelectedCategory],
    limit: usize,
) -> Vec<RecommendedStory> {
    categories
        .iter()
        .filter(|category| selections.iter().any(|s| s.name == category.name))
        .flat_map(|category| category.stories.iter().cloned())
        .take(limit)
        .collect()
}
