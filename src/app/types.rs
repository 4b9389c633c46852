//! Domain types for the home-surface state slices.

/// Browsing mode the session is currently in.
///
/// Opaque to the reducer: it is stored and replaced wholesale, never
/// inspected during a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Private,
}

/// Identifier of a tab collection.
pub type CollectionId = u64;

/// A user-curated collection of saved tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub id: CollectionId,
    pub title: String,
}

/// A frequently-visited site pinned to the top of the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopSite {
    pub url: String,
    pub title: String,
}

/// A bookmark saved recently enough to surface on the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentBookmark {
    pub url: String,
    pub title: String,
}

/// An entry in the recent-tabs section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecentTab {
    /// A single recently-used tab.
    Tab {
        id: String,
        url: String,
        title: String,
    },

    /// A group of tabs sharing a normalized search term.
    ///
    /// At most one SearchGroup should be present in `recent_tabs`; the model
    /// does not enforce uniqueness, callers must not supply duplicates.
    SearchGroup { search_term: String, tab_count: usize },
}

impl RecentTab {
    /// The search term if this entry is a search group.
    pub fn search_term(&self) -> Option<&str> {
        match self {
            RecentTab::SearchGroup { search_term, .. } => Some(search_term),
            RecentTab::Tab { .. } => None,
        }
    }
}

/// An entry in the recently-visited section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecentlyVisitedItem {
    /// A group of history entries sharing a search term.
    /// Identity is the title, compared case-insensitively.
    Group { title: String },

    /// A single highlighted page. Identity is the URL.
    Highlight { title: String, url: String },
}

/// A non-fatal crash recorded during the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crash {
    pub id: String,
}
