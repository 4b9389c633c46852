//! Decoding of the upstream recommendations payload.
//!
//! The recommendation service delivers stories as a JSON document with a
//! `recommendations` array. Decoding is the only fallible surface of this
//! crate; the reducer itself never fails.

use serde::Deserialize;
use thiserror::Error;

use crate::app::stories::{RecommendedStory, StoryCategory};

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("invalid recommendations payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("recommendations payload contained no stories")]
    EmptyPayload,
}

#[derive(Deserialize)]
struct Payload {
    recommendations: Vec<RecommendedStory>,
}

/// Decode a recommendations payload into stories.
///
/// Unknown fields are ignored; `times_shown` defaults to 0 when absent.
pub fn parse_stories(payload: &str) -> Result<Vec<RecommendedStory>, FeedError> {
    let payload: Payload = serde_json::from_str(payload)?;
    if payload.recommendations.is_empty() {
        return Err(FeedError::EmptyPayload);
    }
    Ok(payload.recommendations)
}

/// Group stories into categories, preserving the order in which each
/// category first appears in the input.
pub fn group_by_category(stories: Vec<RecommendedStory>) -> Vec<StoryCategory> {
    let mut categories: Vec<StoryCategory> = Vec::new();
    for story in stories {
        match categories.iter_mut().find(|c| c.name == story.category) {
            Some(category) => category.stories.push(story),
            None => categories.push(StoryCategory {
                name: story.category.clone(),
                stories: vec![story],
            }),
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_times_shown_to_zero() {
        let payload = r#"{
            "recommendations": [
                {"title": "s1", "url": "https://a", "category": "tech"}
            ]
        }"#;
        let stories = parse_stories(payload).unwrap();
        assert_eq!(stories[0].times_shown, 0);
    }

    #[test]
    fn parse_rejects_empty_payload() {
        let payload = r#"{"recommendations": []}"#;
        assert!(matches!(
            parse_stories(payload),
            Err(FeedError::EmptyPayload)
        ));
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(matches!(
            parse_stories("not json"),
            Err(FeedError::Json(_))
        ));
    }

    #[test]
    fn grouping_preserves_first_appearance_order() {
        let stories = vec![
            story("t1", "tech"),
            story("f1", "food"),
            story("t2", "tech"),
        ];
        let categories = group_by_category(stories);
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "tech");
        assert_eq!(categories[0].stories.len(), 2);
        assert_eq!(categories[1].name, "food");
    }

    fn story(title: &str, category: &str) -> RecommendedStory {
        RecommendedStory {
            title: title.to_string(),
            url: format!("https://stories.example/{title}"),
            category: category.to_string(),
            times_shown: 0,
        }
    }
}
