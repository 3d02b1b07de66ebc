//! Post cards and the blocks that embed them

use super::{id_attr, opt_heading, RenderedOutput};
use crate::blocks::{ClientStories, PostColumns};
use crate::config::SiteConfig;
use crate::content::PostSummary;
use crate::helpers::{href_for, html_escape, image_tag, link_to};

/// A linked card for one post; listing pages reuse it with excerpts
pub fn post_card(config: &SiteConfig, post: &PostSummary) -> String {
    let image = post
        .featured_image
        .as_ref()
        .map(|image| {
            format!(
                r#"<div class="post-card-image">{}<span class="post-card-badge">{}</span></div>"#,
                image_tag(image, &post.title, None),
                html_escape(&post.badge())
            )
        })
        .unwrap_or_default();

    let excerpt = post
        .excerpt
        .as_deref()
        .map(|e| format!(r#"<p class="post-card-excerpt">{}</p>"#, html_escape(e)))
        .unwrap_or_default();

    format!(
        concat!(
            r#"<a href="{href}" class="post-card">{image}"#,
            r#"<div class="post-card-body"><h3>{title}</h3>{excerpt}"#,
            r#"<span class="read-more">Read More &rarr;</span></div></a>"#
        ),
        href = html_escape(&href_for(config, &post.url())),
        image = image,
        title = html_escape(&post.title),
        excerpt = excerpt,
    )
}

fn cards(config: &SiteConfig, posts: &[PostSummary]) -> String {
    posts.iter().map(|post| post_card(config, post)).collect()
}

pub(super) fn post_columns(config: &SiteConfig, block: &PostColumns) -> RenderedOutput {
    RenderedOutput::Html(format!(
        r#"<section class="block block-post-columns cols-{}"><div class="post-grid">{}</div></section>"#,
        block.columns,
        cards(config, &block.posts)
    ))
}

pub(super) fn client_stories(config: &SiteConfig, block: &ClientStories) -> RenderedOutput {
    if block.entry_count == 0 {
        return RenderedOutput::Empty;
    }

    let more = block
        .button
        .as_ref()
        .map(|b| {
            format!(
                r#"<div class="view-more">{}</div>"#,
                link_to(config, &b.link, &b.label, Some(b.variant.class()))
            )
        })
        .unwrap_or_default();

    let sub = block
        .sub_heading
        .as_deref()
        .map(|s| format!(r#"<p class="section-sub">{}</p>"#, html_escape(s)))
        .unwrap_or_default();

    RenderedOutput::Html(format!(
        r#"<section{} class="block block-client-stories">{}{}<div class="post-grid">{}</div>{}</section>"#,
        id_attr(Some(ClientStories::SECTION_ID)),
        opt_heading("h2", "section-heading", block.heading.as_deref()),
        sub,
        cards(config, &block.posts),
        more
    ))
}
