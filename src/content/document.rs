//! Normalized content records

use serde::Serialize;
use serde_json::Value;

use super::fields::{image_field, str_field, str_field_any};
use super::ContentCategory;
use crate::blocks::Block;
use crate::helpers::content_type_url;

/// Report type whose pages are a download form rather than an article
const FORM_REPORT_TYPE: &str = "research_form";

/// A media reference. Only constructed when a URL is present, so holders of
/// an `ImageRef` never render a broken image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageRef {
    pub url: String,
    #[serde(rename = "altText")]
    pub alt_text: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ImageRef {
    /// Normalize a CMS media object (`url`, `alternativeText`, `width`, `height`)
    pub fn from_value(value: &Value) -> Option<Self> {
        let url = str_field(value, "url")?;
        let dimension = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok())
                .filter(|n| *n > 0)
        };

        Some(Self {
            url,
            alt_text: str_field_any(value, &["alternativeText", "altText"]),
            width: dimension("width"),
            height: dimension("height"),
        })
    }

    /// CSS `aspect-ratio` value, when both dimensions are known
    pub fn aspect_ratio(&self) -> Option<String> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some(format!("{} / {}", w, h)),
            _ => None,
        }
    }
}

/// A fully resolved page, article, case study, report or webinar
#[derive(Debug, Clone)]
pub struct ContentDocument {
    pub category: ContentCategory,
    pub title: String,
    pub slug: String,
    /// Rendering order is storage order
    pub blocks: Vec<Block>,
    pub featured_image: Option<ImageRef>,
    pub excerpt: Option<String>,
    /// Vimeo video id (webinars)
    pub video_id: Option<String>,
    /// CMS report type (research reports)
    pub report_type: Option<String>,
}

impl ContentDocument {
    /// Public path of this document
    pub fn route(&self) -> String {
        self.category.route(&self.slug)
    }

    /// Short kind names of the blocks, in order
    pub fn block_kinds(&self) -> Vec<&str> {
        self.blocks.iter().map(Block::kind).collect()
    }

    /// Form-type research reports keep the featured image out of the page
    pub fn is_form_report(&self) -> bool {
        self.report_type.as_deref() == Some(FORM_REPORT_TYPE)
    }
}

/// Read-only projection of a post: used by listing pages and embedded in
/// post-card blocks
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostSummary {
    pub title: String,
    pub slug: String,
    #[serde(rename = "contentTypeCategory")]
    pub content_type_category: String,
    #[serde(rename = "featuredImage")]
    pub featured_image: Option<ImageRef>,
    pub excerpt: Option<String>,
}

impl PostSummary {
    /// Build from a post reference embedded in a block
    /// (`postTitle`, `postSlug`, `contentType`, `postFeaturedImage`).
    ///
    /// Title, slug and content type are all required.
    pub fn from_card_value(value: &Value) -> Option<Self> {
        Some(Self {
            title: str_field(value, "postTitle")?,
            slug: str_field(value, "postSlug")?,
            content_type_category: str_field(value, "contentType")?,
            featured_image: image_field(value, "postFeaturedImage"),
            excerpt: None,
        })
    }

    /// Public path of the post, or `#` for unknown content types
    pub fn url(&self) -> String {
        content_type_url(&self.content_type_category, &self.slug)
    }

    /// Badge text: the content type with its first `-` turned into a space
    pub fn badge(&self) -> String {
        self.content_type_category.replacen('-', " ", 1)
    }
}
