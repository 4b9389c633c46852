use homestate::app::{AppAction, AppReducer, AppState};
use homestate::feed::{group_by_category, parse_stories, FeedError};
use homestate::mvi::Reducer;

const PAYLOAD: &str = r#"{
    "recommendations": [
        {"title": "rust 1.80", "url": "https://news/rust", "category": "tech"},
        {"title": "sourdough", "url": "https://news/bread", "category": "food", "times_shown": 3},
        {"title": "llvm 19", "url": "https://news/llvm", "category": "tech"}
    ]
}"#;

#[test]
fn payload_decodes_and_groups_in_first_appearance_order() {
    let stories = parse_stories(PAYLOAD).unwrap();
    assert_eq!(stories.len(), 3);
    assert_eq!(stories[1].times_shown, 3);

    let categories = group_by_category(stories);
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name, "tech");
    assert_eq!(categories[0].stories.len(), 2);
    assert_eq!(categories[1].name, "food");
}

#[test]
fn unknown_fields_are_ignored() {
    let payload = r#"{
        "recommendations": [
            {"title": "s", "url": "https://a", "category": "tech",
             "publisher": "example", "time_to_read": 4}
        ],
        "status": "ok"
    }"#;
    let stories = parse_stories(payload).unwrap();
    assert_eq!(stories.len(), 1);
}

#[test]
fn malformed_payload_is_a_json_error() {
    assert!(matches!(parse_stories("{"), Err(FeedError::Json(_))));
}

#[test]
fn decoded_feed_flows_into_the_reducer() {
    let categories = group_by_category(parse_stories(PAYLOAD).unwrap());
    let state = AppReducer::reduce(AppState::new(), AppAction::StoriesCategoriesChange(categories));
    let state = AppReducer::reduce(state, AppAction::SelectStoriesCategory("food".into()));
    assert_eq!(state.recommended_stories.len(), 1);
    assert_eq!(state.recommended_stories[0].title, "sourdough");
}
