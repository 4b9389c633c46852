//! Actions dispatched to the application state store.

use crate::app::stories::{RecommendedStory, SelectedCategory, StoryCategory, StoryShownId};
use crate::app::types::{
    Collection, Crash, Mode, RecentBookmark, RecentTab, RecentlyVisitedItem, TopSite,
};
use crate::messaging::MessagingAction;
use crate::mvi::Action;

/// The closed set of state mutation requests.
///
/// Every variant has exactly one reducer branch; actions referencing data
/// that no longer exists (a removed story, an unknown category) reduce to a
/// silent no-op so stale UI references cannot crash the store.
#[derive(Debug, Clone)]
pub enum AppAction {
    /// Bulk replace of the browsing slices in one transition.
    Change {
        collections: Vec<Collection>,
        mode: Mode,
        top_sites: Vec<TopSite>,
        recent_bookmarks: Vec<RecentBookmark>,
        recent_tabs: Vec<RecentTab>,
        recent_history: Vec<RecentlyVisitedItem>,
    },

    CollectionsChange(Vec<Collection>),
    CollectionExpanded {
        collection: Collection,
        expand: bool,
    },
    RemoveCollectionsPlaceholder,

    ModeChange(Mode),
    TopSitesChange(Vec<TopSite>),

    RecentTabsChange(Vec<RecentTab>),
    RemoveRecentTab(RecentTab),

    RecentBookmarksChange(Vec<RecentBookmark>),
    RemoveRecentBookmark(RecentBookmark),

    RecentHistoryChange(Vec<RecentlyVisitedItem>),
    /// Removes only `Highlight` items with this URL; groups are never
    /// removed by this action.
    RemoveRecentHistoryHighlight(String),
    /// Removes history groups whose title case-insensitively matches either
    /// this term or the currently active recent-tabs search term.
    DisbandSearchGroup(String),

    AddNonFatalCrash(Crash),
    RemoveNonFatalCrash(Crash),
    RemoveAllNonFatalCrashes,

    SelectStoriesCategory(String),
    DeselectStoriesCategory(String),
    StoriesCategoriesChange(Vec<StoryCategory>),
    StoriesCategoriesSelectionsChange {
        categories: Vec<StoryCategory>,
        selections: Vec<SelectedCategory>,
    },
    /// Direct override of the derived feed, bypassing derivation.
    /// Used only for test/seed scenarios.
    RecommendedStoriesChange(Vec<RecommendedStory>),
    StoriesShown(Vec<StoryShownId>),

    UpdateInactiveExpanded(bool),

    /// Forwarded opaquely to the messaging sub-reducer.
    Messaging(MessagingAction),
}

impl Action for AppAction {}

impl AppAction {
    /// Discriminant name, used for dispatch tracing.
    pub fn name(&self) -> &'static str {
        match self {
            AppAction::Change { .. } => "Change",
            AppAction::CollectionsChange(_) => "CollectionsChange",
            AppAction::CollectionExpanded { .. } => "CollectionExpanded",
            AppAction::RemoveCollectionsPlaceholder => "RemoveCollectionsPlaceholder",
            AppAction::ModeChange(_) => "ModeChange",
            AppAction::TopSitesChange(_) => "TopSitesChange",
            AppAction::RecentTabsChange(_) => "RecentTabsChange",
            AppAction::RemoveRecentTab(_) => "RemoveRecentTab",
            AppAction::RecentBookmarksChange(_) => "RecentBookmarksChange",
            AppAction::RemoveRecentBookmark(_) => "RemoveRecentBookmark",
            AppAction::RecentHistoryChange(_) => "RecentHistoryChange",
            AppAction::RemoveRecentHistoryHighlight(_) => "RemoveRecentHistoryHighlight",
            AppAction::DisbandSearchGroup(_) => "DisbandSearchGroup",
            AppAction::AddNonFatalCrash(_) => "AddNonFatalCrash",
            AppAction::RemoveNonFatalCrash(_) => "RemoveNonFatalCrash",
            AppAction::RemoveAllNonFatalCrashes => "RemoveAllNonFatalCrashes",
            AppAction::SelectStoriesCategory(_) => "SelectStoriesCategory",
            AppAction::DeselectStoriesCategory(_) => "DeselectStoriesCategory",
            AppAction::StoriesCategoriesChange(_) => "StoriesCategoriesChange",
            AppAction::StoriesCategoriesSelectionsChange { .. } => {
                "StoriesCategoriesSelectionsChange"
            }
            AppAction::RecommendedStoriesChange(_) => "RecommendedStoriesChange",
            AppAction::StoriesShown(_) => "StoriesShown",
            AppAction::UpdateInactiveExpanded(_) => "UpdateInactiveExpanded",
            AppAction::Messaging(_) => "Messaging",
        }
    }
}
