//! Render module - turns normalized blocks into HTML
//!
//! Every block renders independently of its siblings. A block that lacks
//! what it needs renders as [`RenderedOutput::Empty`]; a block kind with no
//! renderer becomes [`RenderedOutput::MissingRenderer`]. Neither affects the
//! rest of the page.

mod banners;
mod basic;
mod posts;
mod sections;

use serde_json::Value;

use crate::blocks::Block;
use crate::config::SiteConfig;
use crate::helpers::html_escape;

pub use posts::post_card;

/// The result of rendering one block
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedOutput {
    Html(String),
    /// The block chose to render nothing
    Empty,
    /// No renderer exists for this kind; shown as a visible placeholder
    MissingRenderer { kind: String, payload: Value },
}

impl RenderedOutput {
    pub fn is_empty(&self) -> bool {
        matches!(self, RenderedOutput::Empty)
    }

    /// Final markup for this output
    pub fn to_html(&self) -> String {
        match self {
            RenderedOutput::Html(html) => html.clone(),
            RenderedOutput::Empty => String::new(),
            RenderedOutput::MissingRenderer { kind, payload } => {
                let pretty = serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
                format!(
                    concat!(
                        r#"<div class="block block-missing" data-kind="{kind}">"#,
                        r#"<p class="missing-title">Missing Component: <code>{kind}</code></p>"#,
                        r#"<pre class="missing-payload">{payload}</pre>"#,
                        "</div>"
                    ),
                    kind = html_escape(kind),
                    payload = html_escape(&pretty)
                )
            }
        }
    }
}

/// Dispatches blocks to their per-kind renderers
pub struct BlockRenderer {
    config: SiteConfig,
}

impl BlockRenderer {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Render one block
    pub fn render(&self, block: &Block) -> RenderedOutput {
        let cx = &self.config;
        match block {
            Block::Heading(b) => basic::heading(b),
            Block::Description(b) => basic::description(b),
            Block::BannerContent(b) => banners::banner_content(cx, b),
            Block::Button(b) => basic::button(cx, b),
            Block::ImageAndText(b) => basic::image_and_text(b),
            Block::ImageAndTextClickable(b) => basic::image_and_text_clickable(cx, b),
            Block::IndustryParticipants(b) => sections::industry_participants(cx, b),
            Block::ClientLogos(b) => sections::client_logos(b),
            Block::SolutionsContentSlider(b) => sections::solutions_content_slider(b),
            Block::StickySubMenu(b) => sections::sticky_sub_menu(cx, b),
            Block::OurSolutions(b) => sections::our_solutions(b),
            Block::DecisiveInsights(b) => sections::decisive_insights(cx, b),
            Block::Bo(b) => sections::bo(b),
            Block::PromotionalBannerCta(b) => banners::promotional_banner_cta(cx, b),
            Block::PostContent2ColumnLayout(b) | Block::PostContent4ColumnLayout(b) => {
                posts::post_columns(cx, b)
            }
            Block::Sgf(b) => sections::sgf(cx, b),
            Block::ClientStories(b) => posts::client_stories(cx, b),
            Block::ImagePopup(b) => basic::image_popup(b),
            Block::OverviewHeadingAndContent(b) => basic::overview_heading_and_content(b),
            Block::QuotesAndContents(b) => basic::quotes_and_contents(b),
            Block::Unknown { kind, payload } => {
                tracing::warn!("No renderer for block kind {:?}", kind);
                RenderedOutput::MissingRenderer {
                    kind: kind.clone(),
                    payload: payload.clone(),
                }
            }
        }
    }

    /// Render blocks in order, one output per block
    pub fn render_all(&self, blocks: &[Block]) -> Vec<RenderedOutput> {
        blocks.iter().map(|block| self.render(block)).collect()
    }

    /// Normalize and render raw blocks; `null` and untyped entries are
    /// skipped and contribute no output
    pub fn render_values(&self, values: &[Value]) -> Vec<RenderedOutput> {
        self.render_all(&Block::from_values(values))
    }

    /// Render blocks and join the markup
    pub fn render_html(&self, blocks: &[Block]) -> String {
        self.render_all(blocks)
            .iter()
            .filter(|output| !output.is_empty())
            .map(RenderedOutput::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// `<h2>` or nothing
fn opt_heading(tag: &str, class: &str, text: Option<&str>) -> String {
    match text {
        Some(text) => format!(r#"<{tag} class="{class}">{}</{tag}>"#, html_escape(text)),
        None => String::new(),
    }
}

/// Trusted rich text, or nothing
fn opt_rich(class: &str, html: Option<&str>) -> String {
    match html {
        Some(html) => format!(r#"<div class="{}">{}</div>"#, class, html),
        None => String::new(),
    }
}

/// `id="..."` attribute fragment
fn id_attr(id: Option<&str>) -> String {
    id.map(|id| format!(r#" id="{}""#, id)).unwrap_or_default()
}
