//! Banner renderers

use super::{opt_heading, RenderedOutput};
use crate::blocks::{BannerContent, CallToAction, PromotionalBannerCta};
use crate::config::SiteConfig;
use crate::helpers::{html_escape, image_tag, link_to};

fn cta(config: &SiteConfig, button: Option<&CallToAction>) -> String {
    button
        .map(|b| link_to(config, &b.link, &b.label, Some(b.variant.class())))
        .unwrap_or_default()
}

fn sub_heading(text: Option<&str>) -> String {
    text.map(|t| format!(r#"<p class="banner-sub">{}</p>"#, html_escape(t)))
        .unwrap_or_default()
}

pub(super) fn banner_content(config: &SiteConfig, block: &BannerContent) -> RenderedOutput {
    let background = block
        .background
        .as_ref()
        .map(|image| image_tag(image, "Banner background", Some("banner-bg")))
        .unwrap_or_default();

    RenderedOutput::Html(format!(
        concat!(
            r#"<div class="block block-banner {size}" style="min-height: {height}px">"#,
            "{background}",
            r#"<div class="banner-overlay"></div>"#,
            r#"<div class="banner-content {position}">{heading}{sub}{button}</div>"#,
            "</div>"
        ),
        size = block.size.class(),
        height = block.size.min_height(),
        background = background,
        position = block.text_position.class(),
        heading = opt_heading("h1", "banner-heading", block.heading.as_deref()),
        sub = sub_heading(block.sub_heading.as_deref()),
        button = cta(config, block.button.as_ref()),
    ))
}

pub(super) fn promotional_banner_cta(config: &SiteConfig, block: &PromotionalBannerCta) -> RenderedOutput {
    let background = match &block.background {
        Some(image) => format!(
            r#"{}<div class="banner-overlay"></div>"#,
            image_tag(image, "Promotional banner background", Some("banner-bg"))
        ),
        None => r#"<div class="promo-gradient"></div>"#.to_string(),
    };

    RenderedOutput::Html(format!(
        concat!(
            r#"<section class="block block-promo {size}">"#,
            "{background}",
            r#"<div class="banner-content text-center">{heading}{sub}{button}</div>"#,
            "</section>"
        ),
        size = block.size.class(),
        background = background,
        heading = opt_heading("h2", "banner-heading", block.heading.as_deref()),
        sub = sub_heading(block.sub_heading.as_deref()),
        button = cta(config, block.button.as_ref()),
    ))
}
