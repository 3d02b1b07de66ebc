//! Blocks module - the typed content blocks pages are made of
//!
//! Raw CMS blocks carry a `__typename` discriminator such as
//! `ComponentBlocksHeading`. [`Block::from_value`] normalizes each known kind
//! into its own record with every default applied, so renderers never
//! inspect raw JSON. Kinds this crate does not model are kept as
//! [`Block::Unknown`].

mod banners;
mod basic;
pub mod grouping;
mod layout;
mod link;
mod posts;
mod sections;
pub mod state;

use serde_json::Value;

pub use banners::{BannerContent, PromotionalBannerCta};
pub use basic::{
    Button, Description, Heading, ImageAndText, ImageAndTextClickable, ImagePopup,
    OverviewHeadingAndContent, QuotesAndContents,
};
pub use grouping::{group_by_period, Period, PeriodGroups, TaggedItem};
pub use layout::{BannerSize, Orientation, PromoSize, TextPosition};
pub use link::{ButtonVariant, CallToAction, LinkTarget};
pub use posts::{ClientStories, PostColumns};
pub use sections::{
    BusinessFunction, Bo, ClientLogos, DecisiveInsights, FutureOfColumn, FutureOfIcon,
    IndustryParticipants, MenuItem, OurSolutions, ParticipantCard, Sgf, SgfColumn, SolutionItem,
    SolutionsContentSlider, StickySubMenu, MAX_LARGE_COLUMNS,
};

/// Prefix shared by every block typename
pub const TYPENAME_PREFIX: &str = "ComponentBlocks";

/// A normalized content block
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading(Heading),
    Description(Description),
    BannerContent(BannerContent),
    Button(Button),
    ImageAndText(ImageAndText),
    ImageAndTextClickable(ImageAndTextClickable),
    IndustryParticipants(IndustryParticipants),
    ClientLogos(ClientLogos),
    SolutionsContentSlider(SolutionsContentSlider),
    StickySubMenu(StickySubMenu),
    OurSolutions(OurSolutions),
    DecisiveInsights(DecisiveInsights),
    Bo(Bo),
    PromotionalBannerCta(PromotionalBannerCta),
    PostContent2ColumnLayout(PostColumns),
    PostContent4ColumnLayout(PostColumns),
    Sgf(Sgf),
    ClientStories(ClientStories),
    ImagePopup(ImagePopup),
    OverviewHeadingAndContent(OverviewHeadingAndContent),
    QuotesAndContents(QuotesAndContents),
    /// A kind with no renderer; keeps the raw block for diagnostics
    Unknown { kind: String, payload: Value },
}

impl Block {
    /// Normalize one raw block. Returns `None` for `null` and for values
    /// without a typename; every typed block yields a `Block`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let typename = match value.get("__typename").and_then(Value::as_str) {
            Some(t) if !t.trim().is_empty() => t.trim(),
            _ => {
                if !value.is_null() {
                    tracing::warn!("Skipping block without a typename: {}", value);
                }
                return None;
            }
        };

        let name = typename.strip_prefix(TYPENAME_PREFIX).unwrap_or("");
        let block = match name {
            "Heading" => Block::Heading(Heading::from_value(value)),
            "Description" => Block::Description(Description::from_value(value)),
            "BannerContent" => Block::BannerContent(BannerContent::from_value(value)),
            "Button" => Block::Button(Button::from_value(value)),
            "ImageAndTextNonClickable" => Block::ImageAndText(ImageAndText::from_value(value)),
            "ImageAndTextClickable" => {
                Block::ImageAndTextClickable(ImageAndTextClickable::from_value(value))
            }
            "IndustryParticipants" => {
                Block::IndustryParticipants(IndustryParticipants::from_value(value))
            }
            "ClientLogos" => Block::ClientLogos(ClientLogos::from_value(value)),
            "SolutionsContentSlider" => {
                Block::SolutionsContentSlider(SolutionsContentSlider::from_value(value))
            }
            "StickySubMenu" => Block::StickySubMenu(StickySubMenu::from_value(value)),
            "OurSolutions" => Block::OurSolutions(OurSolutions::from_value(value)),
            "DecisiveInsights" => Block::DecisiveInsights(DecisiveInsights::from_value(value)),
            "Bo" => Block::Bo(Bo::from_value(value)),
            "PromotionalBannerCta" => {
                Block::PromotionalBannerCta(PromotionalBannerCta::from_value(value))
            }
            "PostContent2ColumnLayout" => {
                Block::PostContent2ColumnLayout(PostColumns::from_value(value, 2))
            }
            "PostContent4ColumnLayout" => {
                Block::PostContent4ColumnLayout(PostColumns::from_value(value, 4))
            }
            "Sgf" => Block::Sgf(Sgf::from_value(value)),
            "ClientsStories" => Block::ClientStories(ClientStories::from_value(value)),
            "ImagePopup" => Block::ImagePopup(ImagePopup::from_value(value)),
            "OverviewHeadingAndContent" => {
                Block::OverviewHeadingAndContent(OverviewHeadingAndContent::from_value(value))
            }
            "QuotesAndContents" => Block::QuotesAndContents(QuotesAndContents::from_value(value)),
            _ => Block::Unknown {
                kind: typename.to_string(),
                payload: value.clone(),
            },
        };

        Some(block)
    }

    /// Normalize a block list, skipping `null` and typename-less entries
    pub fn from_values(values: &[Value]) -> Vec<Self> {
        values.iter().filter_map(Block::from_value).collect()
    }

    /// Short kind name; unknown blocks report their raw typename
    pub fn kind(&self) -> &str {
        match self {
            Block::Heading(_) => "Heading",
            Block::Description(_) => "Description",
            Block::BannerContent(_) => "BannerContent",
            Block::Button(_) => "Button",
            Block::ImageAndText(_) => "ImageAndTextNonClickable",
            Block::ImageAndTextClickable(_) => "ImageAndTextClickable",
            Block::IndustryParticipants(_) => "IndustryParticipants",
            Block::ClientLogos(_) => "ClientLogos",
            Block::SolutionsContentSlider(_) => "SolutionsContentSlider",
            Block::StickySubMenu(_) => "StickySubMenu",
            Block::OurSolutions(_) => "OurSolutions",
            Block::DecisiveInsights(_) => "DecisiveInsights",
            Block::Bo(_) => "Bo",
            Block::PromotionalBannerCta(_) => "PromotionalBannerCta",
            Block::PostContent2ColumnLayout(_) => "PostContent2ColumnLayout",
            Block::PostContent4ColumnLayout(_) => "PostContent4ColumnLayout",
            Block::Sgf(_) => "Sgf",
            Block::ClientStories(_) => "ClientsStories",
            Block::ImagePopup(_) => "ImagePopup",
            Block::OverviewHeadingAndContent(_) => "OverviewHeadingAndContent",
            Block::QuotesAndContents(_) => "QuotesAndContents",
            Block::Unknown { kind, .. } => kind.as_str(),
        }
    }

    /// CSS class fragment for this kind, e.g. `image-popup`
    pub fn css_name(&self) -> String {
        match self {
            Block::Unknown { .. } => "unknown".to_string(),
            _ => slug::slugify(camel_to_words(self.kind())),
        }
    }
}

fn camel_to_words(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 8);
    let mut prev: Option<char> = None;
    for c in name.chars() {
        if let Some(p) = prev {
            if c.is_ascii_uppercase() && (p.is_ascii_lowercase() || p.is_ascii_digit()) {
                out.push(' ');
            }
            if c.is_ascii_digit() && p.is_ascii_alphabetic() {
                out.push(' ');
            }
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_kinds_normalize() {
        let block = Block::from_value(&json!({
            "__typename": "ComponentBlocksHeading",
            "text": "Hello"
        }))
        .unwrap();
        assert_eq!(block.kind(), "Heading");
        match block {
            Block::Heading(h) => assert_eq!(h.text.as_deref(), Some("Hello")),
            other => panic!("unexpected block {:?}", other),
        }
    }

    #[test]
    fn test_every_known_typename_is_recognized() {
        let names = [
            "Heading",
            "Description",
            "BannerContent",
            "Button",
            "ImageAndTextNonClickable",
            "ImageAndTextClickable",
            "IndustryParticipants",
            "ClientLogos",
            "SolutionsContentSlider",
            "StickySubMenu",
            "OurSolutions",
            "DecisiveInsights",
            "Bo",
            "PromotionalBannerCta",
            "PostContent2ColumnLayout",
            "PostContent4ColumnLayout",
            "Sgf",
            "ClientsStories",
            "ImagePopup",
            "OverviewHeadingAndContent",
            "QuotesAndContents",
        ];
        for name in names {
            let value = json!({ "__typename": format!("{}{}", TYPENAME_PREFIX, name) });
            let block = Block::from_value(&value).unwrap();
            assert!(!matches!(block, Block::Unknown { .. }), "{}", name);
            assert_eq!(block.kind(), name);
        }
    }

    #[test]
    fn test_wrongly_typed_fields_degrade_to_defaults() {
        let block = Block::from_value(&json!({
            "__typename": "ComponentBlocksBannerContent",
            "heading": 42,
            "bannerSize": ["large"],
            "background": "not-an-object"
        }))
        .unwrap();
        match block {
            Block::BannerContent(b) => {
                assert!(b.heading.is_none());
                assert_eq!(b.size, BannerSize::Medium);
                assert!(b.background.is_none());
            }
            other => panic!("unexpected block {:?}", other),
        }
    }

    #[test]
    fn test_unknown_kind_keeps_payload() {
        let value = json!({ "__typename": "ComponentBlocksCarousel3d", "speed": 3 });
        let block = Block::from_value(&value).unwrap();
        assert_eq!(block.kind(), "ComponentBlocksCarousel3d");
        match block {
            Block::Unknown { payload, .. } => assert_eq!(payload, value),
            other => panic!("unexpected block {:?}", other),
        }
    }

    #[test]
    fn test_null_and_untyped_blocks_are_skipped() {
        assert!(Block::from_value(&Value::Null).is_none());
        assert!(Block::from_value(&json!({ "text": "x" })).is_none());
        assert!(Block::from_value(&json!({ "__typename": "" })).is_none());

        let blocks = Block::from_values(&[
            json!({ "__typename": "ComponentBlocksHeading", "text": "a" }),
            Value::Null,
            json!({ "__typename": "Unknown" }),
        ]);
        let kinds: Vec<_> = blocks.iter().map(Block::kind).collect();
        assert_eq!(kinds, vec!["Heading", "Unknown"]);
    }

    #[test]
    fn test_css_names() {
        let popup = Block::from_value(&json!({ "__typename": "ComponentBlocksImagePopup" })).unwrap();
        assert_eq!(popup.css_name(), "image-popup");
        let columns =
            Block::from_value(&json!({ "__typename": "ComponentBlocksPostContent2ColumnLayout" })).unwrap();
        assert_eq!(columns.css_name(), "post-content-2-column-layout");
        let unknown = Block::from_value(&json!({ "__typename": "Mystery" })).unwrap();
        assert_eq!(unknown.css_name(), "unknown");
    }
}
