//! Presentation enums selected by CMS variant strings

use serde::Serialize;

/// Horizontal alignment of banner text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextPosition {
    Left,
    #[default]
    Center,
    Right,
}

impl TextPosition {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("left") => TextPosition::Left,
            Some("right") => TextPosition::Right,
            _ => TextPosition::Center,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            TextPosition::Left => "text-left",
            TextPosition::Center => "text-center",
            TextPosition::Right => "text-right",
        }
    }
}

/// Banner height tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl BannerSize {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("small") => BannerSize::Small,
            Some("large") => BannerSize::Large,
            _ => BannerSize::Medium,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            BannerSize::Small => "banner-small",
            BannerSize::Medium => "banner-medium",
            BannerSize::Large => "banner-large",
        }
    }

    /// Minimum banner height in pixels
    pub fn min_height(&self) -> u32 {
        match self {
            BannerSize::Small => 200,
            BannerSize::Medium => 400,
            BannerSize::Large => 640,
        }
    }
}

/// Vertical padding tier of a promotional banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PromoSize {
    Thin,
    #[default]
    Medium,
    Large,
}

impl PromoSize {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("Thin") => PromoSize::Thin,
            Some("Large") => PromoSize::Large,
            _ => PromoSize::Medium,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            PromoSize::Thin => "promo-thin",
            PromoSize::Medium => "promo-medium",
            PromoSize::Large => "promo-large",
        }
    }
}

/// Which slot of a two-column block comes first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Orientation {
    #[default]
    TextFirst,
    ImageFirst,
}

impl Orientation {
    const IMAGE_LEFT: &'static str = "Image_left_Text_right";

    pub fn parse(value: Option<&str>) -> Self {
        if value == Some(Self::IMAGE_LEFT) {
            Orientation::ImageFirst
        } else {
            Orientation::TextFirst
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Orientation::TextFirst => "text-first",
            Orientation::ImageFirst => "image-first",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_unknown_values() {
        assert_eq!(TextPosition::parse(Some("justify")), TextPosition::Center);
        assert_eq!(BannerSize::parse(None), BannerSize::Medium);
        assert_eq!(PromoSize::parse(Some("Huge")), PromoSize::Medium);
        assert_eq!(Orientation::parse(Some("Text_left_Image_right")), Orientation::TextFirst);
    }

    #[test]
    fn test_banner_tiers() {
        assert_eq!(BannerSize::parse(Some("large")).min_height(), 640);
        assert_eq!(BannerSize::parse(Some("small")).min_height(), 200);
        assert_eq!(PromoSize::parse(Some("Thin")), PromoSize::Thin);
        assert_eq!(Orientation::parse(Some("Image_left_Text_right")), Orientation::ImageFirst);
    }
}
