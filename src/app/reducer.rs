//! Reducer for the application state snapshot.

use crate::app::action::AppAction;
use crate::app::state::AppState;
use crate::app::stories::{SelectedCategory, StoryCategory, STORIES_TO_SHOW_COUNT};
use crate::app::types::{RecentTab, RecentlyVisitedItem};
use crate::messaging::MessagingReducer;
use crate::mvi::Reducer;

/// The sole mutation path for [`AppState`].
///
/// Pure function, total over the action set. Every branch builds a new
/// snapshot from the previous one; nothing is mutated in place. Actions that
/// reference data no longer present (a stale story, an unknown category)
/// reduce to a no-op rather than an error.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            AppAction::Change {
                collections,
                mode,
                top_sites,
                recent_bookmarks,
                recent_tabs,
                recent_history,
            } => {
                // The bulk update only re-filters when both sides arrive
                // non-empty; single-sided updates elsewhere always re-filter.
                let recent_history = if !recent_history.is_empty() && !recent_tabs.is_empty() {
                    let term = recent_tabs.iter().find_map(RecentTab::search_term);
                    filter_out_group(recent_history, term)
                } else {
                    recent_history
                };
                AppState {
                    collections,
                    mode,
                    top_sites,
                    recent_bookmarks,
                    recent_tabs,
                    recent_history,
                    ..state
                }
            }

            AppAction::CollectionsChange(collections) => AppState {
                collections,
                ..state
            },

            AppAction::CollectionExpanded { collection, expand } => {
                let mut expanded_collections = state.expanded_collections.clone();
                if expand {
                    expanded_collections.insert(collection.id);
                } else {
                    expanded_collections.remove(&collection.id);
                }
                AppState {
                    expanded_collections,
                    ..state
                }
            }

            AppAction::RemoveCollectionsPlaceholder => AppState {
                show_collection_placeholder: false,
                ..state
            },

            AppAction::ModeChange(mode) => AppState { mode, ..state },

            AppAction::TopSitesChange(top_sites) => AppState { top_sites, ..state },

            AppAction::RecentTabsChange(recent_tabs) => {
                let term = recent_tabs.iter().find_map(RecentTab::search_term);
                let recent_history = filter_out_group(state.recent_history.clone(), term);
                AppState {
                    recent_tabs,
                    recent_history,
                    ..state
                }
            }

            AppAction::RemoveRecentTab(recent_tab) => {
                let recent_tabs = state
                    .recent_tabs
                    .iter()
                    .filter(|tab| !same_tab(tab, &recent_tab))
                    .cloned()
                    .collect();
                AppState {
                    recent_tabs,
                    ..state
                }
            }

            AppAction::RecentBookmarksChange(recent_bookmarks) => AppState {
                recent_bookmarks,
                ..state
            },

            AppAction::RemoveRecentBookmark(bookmark) => {
                let recent_bookmarks = state
                    .recent_bookmarks
                    .iter()
                    .filter(|b| b.url != bookmark.url)
                    .cloned()
                    .collect();
                AppState {
                    recent_bookmarks,
                    ..state
                }
            }

            AppAction::RecentHistoryChange(recent_history) => {
                let term = state.recent_search_term().map(str::to_owned);
                AppState {
                    recent_history: filter_out_group(recent_history, term.as_deref()),
                    ..state
                }
            }

            AppAction::RemoveRecentHistoryHighlight(url) => {
                let recent_history = state
                    .recent_history
                    .iter()
                    .filter(|item| {
                        !matches!(item, RecentlyVisitedItem::Highlight { url: u, .. } if *u == url)
                    })
                    .cloned()
                    .collect();
                AppState {
                    recent_history,
                    ..state
                }
            }

            AppAction::DisbandSearchGroup(search_term) => {
                let search_term = search_term.to_lowercase();
                let active_term = state.recent_search_term().map(str::to_lowercase);
                let recent_history = state
                    .recent_history
                    .iter()
                    .filter(|item| match item {
                        RecentlyVisitedItem::Group { title } => {
                            // The UI may disband a group already filtered out
                            // of visibility but still active via the tab
                            // group, so both terms are checked.
                            let title = title.to_lowercase();
                            title != search_term
                                && active_term.as_deref() != Some(title.as_str())
                        }
                        RecentlyVisitedItem::Highlight { .. } => true,
                    })
                    .cloned()
                    .collect();
                AppState {
                    recent_history,
                    ..state
                }
            }

            AppAction::AddNonFatalCrash(crash) => {
                let mut non_fatal_crashes = state.non_fatal_crashes.clone();
                non_fatal_crashes.push(crash);
                AppState {
                    non_fatal_crashes,
                    ..state
                }
            }

            AppAction::RemoveNonFatalCrash(crash) => {
                let non_fatal_crashes = state
                    .non_fatal_crashes
                    .iter()
                    .filter(|c| **c != crash)
                    .cloned()
                    .collect();
                AppState {
                    non_fatal_crashes,
                    ..state
                }
            }

            AppAction::RemoveAllNonFatalCrashes => AppState {
                non_fatal_crashes: Vec::new(),
                ..state
            },

            AppAction::SelectStoriesCategory(name) => {
                let mut selected_categories = state.selected_categories.clone();
                selected_categories.push(SelectedCategory { name });
                let updated = AppState {
                    selected_categories,
                    ..state
                };
                // Selecting a category changes the stories to be displayed.
                with_recomputed_feed(updated)
            }

            AppAction::DeselectStoriesCategory(name) => {
                let selected_categories = state
                    .selected_categories
                    .iter()
                    .filter(|s| s.name != name)
                    .cloned()
                    .collect();
                let updated = AppState {
                    selected_categories,
                    ..state
                };
                // Deselecting a category changes the stories to be displayed.
                with_recomputed_feed(updated)
            }

            AppAction::StoriesCategoriesChange(story_categories) => {
                let updated = AppState {
                    story_categories,
                    ..state
                };
                with_recomputed_feed(updated)
            }

            AppAction::StoriesCategoriesSelectionsChange {
                categories,
                selections,
            } => {
                let updated = AppState {
                    story_categories: categories,
                    selected_categories: selections,
                    ..state
                };
                with_recomputed_feed(updated)
            }

            AppAction::RecommendedStoriesChange(recommended_stories) => AppState {
                recommended_stories,
                ..state
            },

            AppAction::StoriesShown(shown) => {
                let story_categories: Vec<StoryCategory> = state
                    .story_categories
                    .iter()
                    .map(|category| {
                        let stories = category
                            .stories
                            .iter()
                            .map(|story| {
                                let was_shown = shown.iter().any(|id| {
                                    id.category == category.name && id.title == story.title
                                });
                                let mut story = story.clone();
                                if was_shown {
                                    story.times_shown += 1;
                                }
                                story
                            })
                            .collect();
                        StoryCategory {
                            name: category.name.clone(),
                            stories,
                        }
                    })
                    .collect();
                AppState {
                    story_categories,
                    ..state
                }
            }

            AppAction::UpdateInactiveExpanded(expanded) => AppState {
                inactive_tabs_expanded: expanded,
                ..state
            },

            AppAction::Messaging(action) => {
                let messaging = MessagingReducer::reduce(state.messaging.clone(), action);
                AppState { messaging, ..state }
            }
        }
    }
}

/// Rebuild the derived recommendation feed after a category or selection
/// change.
fn with_recomputed_feed(state: AppState) -> AppState {
    let recommended_stories = state.filtered_stories(STORIES_TO_SHOW_COUNT);
    AppState {
        recommended_stories,
        ..state
    }
}

/// Whether two recent-tab entries refer to the same thing: tabs match by id,
/// search groups by term.
fn same_tab(a: &RecentTab, b: &RecentTab) -> bool {
    match (a, b) {
        (RecentTab::Tab { id: a, .. }, RecentTab::Tab { id: b, .. }) => a == b,
        (
            RecentTab::SearchGroup { search_term: a, .. },
            RecentTab::SearchGroup { search_term: b, .. },
        ) => a == b,
        _ => false,
    }
}

/// Drop history groups whose title case-insensitively equals `group_title`.
///
/// `None` passes the list through unfiltered: no active search group means
/// nothing to deduplicate against.
fn filter_out_group(
    history: Vec<RecentlyVisitedItem>,
    group_title: Option<&str>,
) -> Vec<RecentlyVisitedItem> {
    match group_title {
        Some(title) => {
            let title = title.to_lowercase();
            history
                .into_iter()
                .filter(|item| {
                    !matches!(item, RecentlyVisitedItem::Group { title: t } if t.to_lowercase() == title)
                })
                .collect()
        }
        None => history,
    }
}
