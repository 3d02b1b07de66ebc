//! Text, button and image blocks

use serde::Serialize;
use serde_json::Value;

use super::layout::Orientation;
use super::link::{ButtonVariant, LinkTarget};
use crate::content::fields::{bool_field, image_field, str_field};
use crate::content::ImageRef;

const BORDERED_VARIANT: &str = "Content_with_Top_and_Bottom_border";
const QUOTE_LEADING_VARIANT: &str = "Quote_and_content_right_align";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    pub text: Option<String>,
}

impl Heading {
    pub fn from_value(value: &Value) -> Self {
        Self {
            text: str_field(value, "text"),
        }
    }
}

/// Trusted rich-text HTML
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Description {
    pub content: Option<String>,
}

impl Description {
    pub fn from_value(value: &Value) -> Self {
        Self {
            content: str_field(value, "content"),
        }
    }
}

/// A standalone button. Name and link are kept separately so a half-filled
/// button can be reported and skipped at render time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    pub name: Option<String>,
    pub link: Option<LinkTarget>,
    pub variant: ButtonVariant,
}

impl Button {
    pub fn from_value(value: &Value) -> Self {
        Self {
            name: str_field(value, "buttonName"),
            link: LinkTarget::from_fields(value, "buttonLink", "isExternal", "target"),
            variant: ButtonVariant::parse(str_field(value, "variant").as_deref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageAndText {
    pub heading: Option<String>,
    pub description: Option<String>,
    pub image: Option<ImageRef>,
    pub orientation: Orientation,
}

impl ImageAndText {
    pub fn from_value(value: &Value) -> Self {
        Self {
            heading: str_field(value, "heading"),
            description: str_field(value, "description"),
            image: image_field(value, "image"),
            orientation: Orientation::parse(str_field(value, "contentVariant").as_deref()),
        }
    }
}

/// Image and text wrapped in a single link
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageAndTextClickable {
    pub heading: Option<String>,
    pub description: Option<String>,
    pub label: Option<String>,
    pub link: Option<LinkTarget>,
    pub image: Option<ImageRef>,
    pub orientation: Orientation,
}

impl ImageAndTextClickable {
    pub fn from_value(value: &Value) -> Self {
        Self {
            heading: str_field(value, "heading"),
            description: str_field(value, "description"),
            label: str_field(value, "buttonLabel"),
            link: LinkTarget::from_fields(value, "buttonURL", "isButtonUrlExternal", "buttontarget"),
            image: image_field(value, "backgroundImage"),
            orientation: Orientation::parse(str_field(value, "buttonTheme").as_deref()),
        }
    }

    /// Accessible name of the card link
    pub fn aria_label(&self) -> Option<&str> {
        self.label.as_deref().or(self.heading.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImagePopup {
    pub title: Option<String>,
    pub image: Option<ImageRef>,
    /// Only an explicit `false` disables the block
    pub enabled: bool,
}

impl ImagePopup {
    pub const DEFAULT_ASPECT_RATIO: &'static str = "16 / 9";

    pub fn from_value(value: &Value) -> Self {
        Self {
            title: str_field(value, "imagePopupTitle"),
            image: image_field(value, "imagePopup"),
            enabled: bool_field(value, "enable").unwrap_or(true),
        }
    }

    pub fn aspect_ratio(&self) -> String {
        self.image
            .as_ref()
            .and_then(ImageRef::aspect_ratio)
            .unwrap_or_else(|| Self::DEFAULT_ASPECT_RATIO.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewHeadingAndContent {
    pub heading: Option<String>,
    pub description: Option<String>,
    pub bordered: bool,
}

impl OverviewHeadingAndContent {
    pub fn from_value(value: &Value) -> Self {
        Self {
            heading: str_field(value, "heading"),
            description: str_field(value, "description"),
            bordered: str_field(value, "variant").as_deref() == Some(BORDERED_VARIANT),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuotesAndContents {
    pub quote: Option<String>,
    pub content: Option<String>,
    /// Quote sits in a narrow leading column beside the content
    pub quote_leading: bool,
}

impl QuotesAndContents {
    pub fn from_value(value: &Value) -> Self {
        Self {
            quote: str_field(value, "quote"),
            content: str_field(value, "content"),
            quote_leading: str_field(value, "quoteVariant").as_deref() == Some(QUOTE_LEADING_VARIANT),
        }
    }
}
