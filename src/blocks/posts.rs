//! Blocks that embed post cards

use serde::Serialize;
use serde_json::Value;

use super::link::CallToAction;
use crate::content::fields::{array_field, str_field};
use crate::content::PostSummary;

/// A fixed-width row of post cards (`post_1` .. `post_N`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostColumns {
    pub columns: usize,
    pub variant: Option<String>,
    /// Cards that have a title, slug and content type, in slot order
    pub posts: Vec<PostSummary>,
}

impl PostColumns {
    pub fn from_value(value: &Value, columns: usize) -> Self {
        let posts = (1..=columns)
            .filter_map(|slot| value.get(format!("post_{}", slot)))
            .filter_map(PostSummary::from_card_value)
            .collect();

        Self {
            columns,
            variant: str_field(value, "postComponentVariant"),
            posts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientStories {
    pub heading: Option<String>,
    pub sub_heading: Option<String>,
    pub posts: Vec<PostSummary>,
    /// Raw `posts` length, including incomplete stories
    pub entry_count: usize,
    /// "View more" button under the grid
    pub button: Option<CallToAction>,
}

impl ClientStories {
    pub const SECTION_ID: &'static str = "client-stories";

    pub fn from_value(value: &Value) -> Self {
        let stories = array_field(value, "posts");
        Self {
            heading: str_field(value, "heading"),
            sub_heading: str_field(value, "subHeading"),
            entry_count: stories.len(),
            posts: stories
                .iter()
                .filter_map(|story| story.get("post"))
                .filter_map(PostSummary::from_card_value)
                .collect(),
            button: CallToAction::from_fields(
                value,
                "clientsStoriesButtonName",
                "clientsStoriesButtonLink",
                "isExternal",
                "clientsStoriesButtonTarget",
                "clientsStoriesButtonVariant",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn card(title: &str, slug: &str, content_type: &str) -> Value {
        json!({ "postTitle": title, "postSlug": slug, "contentType": content_type })
    }

    #[test]
    fn test_columns_keep_slot_order_and_drop_incomplete_cards() {
        let block = PostColumns::from_value(
            &json!({
                "post_1": card("One", "one", "article"),
                "post_2": { "postTitle": "No slug", "contentType": "article" },
                "post_3": card("Three", "three", "case-study"),
                "post_4": null,
                "post_5": card("Ignored", "five", "article")
            }),
            4,
        );
        let slugs: Vec<_> = block.posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["one", "three"]);
        assert_eq!(block.columns, 4);
    }

    #[test]
    fn test_client_stories() {
        let block = ClientStories::from_value(&json!({
            "heading": "Stories",
            "posts": [
                { "post": card("A", "a", "case-study") },
                { "post": null }
            ],
            "clientsStoriesButtonName": "View all",
            "clientsStoriesButtonLink": "/case-studies"
        }));
        assert_eq!(block.posts.len(), 1);
        assert_eq!(block.posts[0].url(), "/case-studies/a");
        assert_eq!(block.button.unwrap().label, "View all");
    }
}
