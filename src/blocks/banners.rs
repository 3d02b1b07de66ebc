//! Full-width banners

use serde::Serialize;
use serde_json::Value;

use super::layout::{BannerSize, PromoSize, TextPosition};
use super::link::CallToAction;
use crate::content::fields::{image_field, str_field};
use crate::content::ImageRef;

/// Hero banner with optional background image and button
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BannerContent {
    pub heading: Option<String>,
    pub sub_heading: Option<String>,
    pub text_position: TextPosition,
    pub size: BannerSize,
    pub background: Option<ImageRef>,
    pub button: Option<CallToAction>,
}

impl BannerContent {
    pub fn from_value(value: &Value) -> Self {
        Self {
            heading: str_field(value, "heading"),
            sub_heading: str_field(value, "subHeading"),
            text_position: TextPosition::parse(str_field(value, "textPosition").as_deref()),
            size: BannerSize::parse(str_field(value, "bannerSize").as_deref()),
            background: image_field(value, "background"),
            button: CallToAction::from_fields(
                value,
                "bannerButtonName",
                "bannerButtonLink",
                "isbannerButtonLinkExternal",
                "bannerButtonTarget",
                "bannerButtonVariant",
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromotionalBannerCta {
    pub heading: Option<String>,
    pub sub_heading: Option<String>,
    pub size: PromoSize,
    pub background: Option<ImageRef>,
    pub button: Option<CallToAction>,
}

impl PromotionalBannerCta {
    pub fn from_value(value: &Value) -> Self {
        Self {
            heading: str_field(value, "heading"),
            sub_heading: str_field(value, "subHeading"),
            size: PromoSize::parse(str_field(value, "PromotionBannerSize").as_deref()),
            background: image_field(value, "backgroundImage"),
            button: CallToAction::from_fields(
                value,
                "buttonName",
                "buttonLink",
                "isExternal",
                "buttonTarget",
                "buttonVariant",
            ),
        }
    }
}
