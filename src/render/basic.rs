//! Text, button and image block renderers

use super::{opt_heading, opt_rich, RenderedOutput};
use crate::blocks::{
    Button, Description, Heading, ImageAndText, ImageAndTextClickable, ImagePopup,
    Orientation, OverviewHeadingAndContent, QuotesAndContents,
};
use crate::config::SiteConfig;
use crate::helpers::{anchor_open, html_escape, image_tag, link_to};

pub(super) fn heading(block: &Heading) -> RenderedOutput {
    match &block.text {
        Some(text) => RenderedOutput::Html(format!(
            r#"<h2 class="block block-heading">{}</h2>"#,
            html_escape(text)
        )),
        None => RenderedOutput::Empty,
    }
}

pub(super) fn description(block: &Description) -> RenderedOutput {
    match &block.content {
        Some(content) => RenderedOutput::Html(format!(
            r#"<div class="block block-description prose">{}</div>"#,
            content
        )),
        None => RenderedOutput::Empty,
    }
}

pub(super) fn button(config: &SiteConfig, block: &Button) -> RenderedOutput {
    let (name, link) = match (&block.name, &block.link) {
        (Some(name), Some(link)) => (name, link),
        _ => {
            tracing::warn!("Button block without a name or link: {:?}", block);
            return RenderedOutput::Empty;
        }
    };

    RenderedOutput::Html(format!(
        r#"<div class="block block-button">{}</div>"#,
        link_to(config, link, name, Some(block.variant.class()))
    ))
}

pub(super) fn image_and_text(block: &ImageAndText) -> RenderedOutput {
    let text = format!(
        r#"<div class="split-text">{}{}</div>"#,
        opt_heading("h2", "split-heading", block.heading.as_deref()),
        opt_rich("prose", block.description.as_deref())
    );
    let image = block
        .image
        .as_ref()
        .map(|image| {
            format!(
                r#"<div class="split-media">{}</div>"#,
                image_tag(image, block.heading.as_deref().unwrap_or("Content image"), None)
            )
        })
        .unwrap_or_default();

    RenderedOutput::Html(format!(
        r#"<div class="block block-image-and-text split {}">{}</div>"#,
        block.orientation.class(),
        ordered(block.orientation, text, image)
    ))
}

pub(super) fn image_and_text_clickable(config: &SiteConfig, block: &ImageAndTextClickable) -> RenderedOutput {
    let link = match &block.link {
        Some(link) => link,
        None => {
            tracing::warn!("ImageAndTextClickable block without a buttonURL: {:?}", block);
            return RenderedOutput::Empty;
        }
    };

    let text = format!(
        r#"<div class="split-text">{}{}</div>"#,
        opt_heading("h3", "split-heading", block.heading.as_deref()),
        opt_rich("prose", block.description.as_deref())
    );
    let image = block
        .image
        .as_ref()
        .map(|image| {
            format!(
                r#"<div class="split-media">{}</div>"#,
                image_tag(image, block.heading.as_deref().unwrap_or("Content image"), None)
            )
        })
        .unwrap_or_default();

    RenderedOutput::Html(format!(
        r#"<section class="block block-image-and-text-clickable">{}<div class="split {}">{}</div></a></section>"#,
        anchor_open(config, link, Some("card-link"), block.aria_label()),
        block.orientation.class(),
        ordered(block.orientation, text, image)
    ))
}

pub(super) fn image_popup(block: &ImagePopup) -> RenderedOutput {
    let image = match (&block.image, block.enabled) {
        (Some(image), true) => image,
        _ => return RenderedOutput::Empty,
    };

    let caption = block
        .title
        .as_deref()
        .map(|title| format!("<figcaption>{}</figcaption>", html_escape(title)))
        .unwrap_or_default();

    RenderedOutput::Html(format!(
        r#"<figure class="block block-image-popup"><div class="popup-frame" style="aspect-ratio: {}">{}</div>{}</figure>"#,
        block.aspect_ratio(),
        image_tag(image, block.title.as_deref().unwrap_or("Popup image"), None),
        caption
    ))
}

pub(super) fn overview_heading_and_content(block: &OverviewHeadingAndContent) -> RenderedOutput {
    let class = if block.bordered {
        "block block-overview bordered"
    } else {
        "block block-overview"
    };

    RenderedOutput::Html(format!(
        r#"<div class="{}">{}{}</div>"#,
        class,
        opt_heading("h2", "overview-heading", block.heading.as_deref()),
        opt_rich("prose", block.description.as_deref())
    ))
}

pub(super) fn quotes_and_contents(block: &QuotesAndContents) -> RenderedOutput {
    if block.quote.is_none() && block.content.is_none() {
        return RenderedOutput::Empty;
    }

    let quote = block
        .quote
        .as_deref()
        .map(|quote| {
            format!(
                r#"<div class="quote-column"><blockquote>&ldquo;{}&rdquo;</blockquote></div>"#,
                html_escape(quote)
            )
        })
        .unwrap_or_default();
    let content = block
        .content
        .as_deref()
        .map(|content| format!(r#"<div class="content-column prose">{}</div>"#, content))
        .unwrap_or_default();

    let class = if block.quote_leading {
        "block block-quotes quote-leading"
    } else {
        "block block-quotes"
    };

    RenderedOutput::Html(format!(r#"<div class="{}">{}{}</div>"#, class, quote, content))
}

/// Put the text and image slots in display order
fn ordered(orientation: Orientation, text: String, image: String) -> String {
    match orientation {
        Orientation::TextFirst => text + &image,
        Orientation::ImageFirst => image + &text,
    }
}
