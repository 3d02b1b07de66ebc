//! Built-in site templates using the Tera template engine
//!
//! Templates are embedded in the binary. Block markup arrives pre-rendered
//! and already escaped, so autoescaping is off.

use anyhow::Result;
use chrono::Datelike;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::{ContentCategory, ContentDocument, ImageRef, PostSummary};
use crate::helpers::{self, full_url_for, url_for};

/// Template renderer with the embedded site templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("page.html", include_str!("site/page.html")),
            ("article.html", include_str!("site/article.html")),
            ("listing.html", include_str!("site/listing.html")),
            ("not_found.html", include_str!("site/not_found.html")),
        ])?;

        tera.register_filter("strip_html", strip_html_filter);
        tera.register_filter("truncate_chars", truncate_chars_filter);
        tera.register_filter("attr", attr_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Render a resolved document around its pre-rendered block markup
    pub fn render_document(&self, config: &SiteConfig, document: &ContentDocument, body: &str) -> Result<String> {
        let template = if document.category.is_post() {
            "article.html"
        } else {
            "page.html"
        };

        let mut context = Context::new();
        context.insert("site", &SiteData::new(config));
        context.insert("page", &PageData::new(config, document, body));
        self.render(template, &context)
    }

    /// Render the listing page of a post category
    pub fn render_listing(&self, config: &SiteConfig, category: ContentCategory, posts: &[PostSummary]) -> Result<String> {
        let mut context = Context::new();
        context.insert("site", &SiteData::new(config));
        context.insert("listing", &ListingData::new(config, category, posts));
        self.render("listing.html", &context)
    }

    /// Render the not-found page
    pub fn render_not_found(&self, config: &SiteConfig, path: &str) -> Result<String> {
        let mut context = Context::new();
        context.insert("site", &SiteData::new(config));
        context.insert("path", &helpers::html_escape(path));
        self.render("not_found.html", &context)
    }
}

/// Tera filter: strip HTML tags
fn strip_html_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("strip_html", "value", String, value);
    Ok(tera::Value::String(helpers::strip_html(&s)))
}

/// Tera filter: escape a value for a quoted attribute, leaving `/` intact
fn attr_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("attr", "value", String, value);
    Ok(tera::Value::String(helpers::html_escape(&s)))
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 150,
    };
    let omission = match args.get("omission") {
        Some(val) => tera::try_get_value!("truncate_chars", "omission", String, val),
        None => "...".to_string(),
    };

    Ok(tera::Value::String(helpers::truncate(&s, length, Some(&omission))))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    pub language: String,
    pub root: String,
    pub home: String,
    pub nav: Vec<NavLink>,
    pub year: i32,
    pub generated_at: String,
}

impl SiteData {
    pub fn new(config: &SiteConfig) -> Self {
        let now = chrono::Local::now();
        let nav = config
            .listing_categories
            .iter()
            .filter_map(|name| name.parse::<ContentCategory>().ok())
            .filter_map(|category| {
                category.listing_prefix().map(|prefix| NavLink {
                    name: listing_title(category).to_string(),
                    path: url_for(config, &format!("{}/", prefix)),
                })
            })
            .collect();

        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            language: config.language.clone(),
            root: url_for(config, "/"),
            home: url_for(config, &format!("/{}/", config.home)),
            nav,
            year: now.year(),
            generated_at: now.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageData {
    pub title: String,
    pub category: ContentCategory,
    pub path: String,
    pub permalink: String,
    pub body: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<ImageRef>,
    pub video_url: Option<String>,
    /// Webinars without a video show a placeholder instead
    pub is_webinar: bool,
}

impl PageData {
    pub fn new(config: &SiteConfig, document: &ContentDocument, body: &str) -> Self {
        let route = document.route();
        let featured_image = if document.is_form_report() {
            None
        } else {
            document.featured_image.clone()
        };

        Self {
            title: document.title.clone(),
            category: document.category,
            path: url_for(config, &route),
            permalink: full_url_for(config, &route),
            body: body.to_string(),
            excerpt: document.excerpt.clone(),
            featured_image,
            video_url: document.video_id.as_deref().map(vimeo_player_url),
            is_webinar: document.category == ContentCategory::Webinar,
        }
    }
}

/// Embeddable Vimeo player address for a video id
pub fn vimeo_player_url(video_id: &str) -> String {
    format!("https://player.vimeo.com/video/{}", video_id)
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingData {
    pub title: String,
    pub path: String,
    pub posts: Vec<ListingItem>,
}

impl ListingData {
    pub fn new(config: &SiteConfig, category: ContentCategory, posts: &[PostSummary]) -> Self {
        let limit = if config.per_listing == 0 {
            posts.len()
        } else {
            config.per_listing
        };

        Self {
            title: listing_title(category).to_string(),
            path: url_for(config, &format!("{}/", category.listing_prefix().unwrap_or_default())),
            posts: posts
                .iter()
                .take(limit)
                .map(|post| ListingItem {
                    title: post.title.clone(),
                    url: helpers::href_for(config, &post.url()),
                    badge: post.badge(),
                    excerpt: post.excerpt.clone(),
                    featured_image: post.featured_image.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingItem {
    pub title: String,
    pub url: String,
    pub badge: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<ImageRef>,
}

/// Heading of a category's listing page
pub fn listing_title(category: ContentCategory) -> &'static str {
    match category {
        ContentCategory::Article => "Articles",
        ContentCategory::CaseStudy => "Case Studies",
        ContentCategory::ResearchReport => "Research Reports",
        ContentCategory::Webinar => "Webinars",
        ContentCategory::Page | ContentCategory::IndustryPage => "Pages",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(category: ContentCategory) -> ContentDocument {
        ContentDocument {
            category,
            title: "Haulage & logistics".to_string(),
            slug: "haulage".to_string(),
            blocks: Vec::new(),
            featured_image: Some(ImageRef {
                url: "/uploads/h.png".to_string(),
                alt_text: None,
                width: None,
                height: None,
            }),
            excerpt: Some("Moving things".to_string()),
            video_id: None,
            report_type: None,
        }
    }

    #[test]
    fn test_templates_load() {
        assert!(TemplateRenderer::new().is_ok());
    }

    #[test]
    fn test_render_page_embeds_body() {
        let renderer = TemplateRenderer::new().unwrap();
        let config = SiteConfig::default();
        let html = renderer
            .render_document(&config, &document(ContentCategory::Page), "<h2>Body</h2>")
            .unwrap();
        assert!(html.contains("<h2>Body</h2>"));
        assert!(html.contains("<title>Haulage &amp; logistics"));
    }

    #[test]
    fn test_article_shows_featured_image() {
        let renderer = TemplateRenderer::new().unwrap();
        let config = SiteConfig::default();
        let html = renderer
            .render_document(&config, &document(ContentCategory::Article), "")
            .unwrap();
        assert!(html.contains(r#"src="/uploads/h.png""#));
    }

    #[test]
    fn test_form_report_hides_featured_image() {
        let renderer = TemplateRenderer::new().unwrap();
        let config = SiteConfig::default();
        let mut doc = document(ContentCategory::ResearchReport);
        doc.report_type = Some("research_form".to_string());
        let html = renderer.render_document(&config, &doc, "").unwrap();
        assert!(!html.contains("/uploads/h.png"));
    }

    #[test]
    fn test_webinar_video() {
        let renderer = TemplateRenderer::new().unwrap();
        let config = SiteConfig::default();
        let mut doc = document(ContentCategory::Webinar);
        let html = renderer.render_document(&config, &doc, "").unwrap();
        assert!(html.contains("Video not available."));

        doc.video_id = Some("76979871".to_string());
        let html = renderer.render_document(&config, &doc, "").unwrap();
        assert!(html.contains("https://player.vimeo.com/video/76979871"));
    }

    #[test]
    fn test_cms_values_cannot_break_out_of_attributes() {
        let renderer = TemplateRenderer::new().unwrap();
        let config = SiteConfig::default();

        let mut doc = document(ContentCategory::Webinar);
        doc.video_id = Some(r#"1" onload="alert(1)"#.to_string());
        let html = renderer.render_document(&config, &doc, "").unwrap();
        assert!(html.contains(r#"src="https://player.vimeo.com/video/1&quot; onload=&quot;alert(1)&quot;""#));
        assert!(!html.contains(r#"" onload=""#));

        let mut doc = document(ContentCategory::Article);
        doc.featured_image.as_mut().unwrap().url = r#"/x.png" onerror="y"#.to_string();
        let html = renderer.render_document(&config, &doc, "").unwrap();
        assert!(html.contains(r#"src="/x.png&quot; onerror=&quot;y""#));

        let posts = vec![PostSummary {
            title: "A".to_string(),
            slug: r#"a"b"#.to_string(),
            content_type_category: "article".to_string(),
            featured_image: Some(ImageRef {
                url: "/a.png'".to_string(),
                alt_text: None,
                width: None,
                height: None,
            }),
            excerpt: None,
        }];
        let html = renderer
            .render_listing(&config, ContentCategory::Article, &posts)
            .unwrap();
        assert!(html.contains(r#"href="/articles/a&quot;b""#));
        assert!(html.contains(r#"src="/a.png&#39;""#));
    }

    #[test]
    fn test_empty_page_shows_notice() {
        let renderer = TemplateRenderer::new().unwrap();
        let config = SiteConfig::default();
        let html = renderer
            .render_document(&config, &document(ContentCategory::Page), "")
            .unwrap();
        assert!(html.contains("No content blocks found for this page."));

        let html = renderer
            .render_document(&config, &document(ContentCategory::Page), "<h2>Body</h2>")
            .unwrap();
        assert!(!html.contains("No content blocks found"));
    }

    #[test]
    fn test_listing_uses_filters() {
        let renderer = TemplateRenderer::new().unwrap();
        let config = SiteConfig::default();
        let posts = vec![PostSummary {
            title: "A".to_string(),
            slug: "a".to_string(),
            content_type_category: "articles".to_string(),
            featured_image: None,
            excerpt: Some(format!("<p>{}</p>", "x".repeat(300))),
        }];
        let html = renderer
            .render_listing(&config, ContentCategory::Article, &posts)
            .unwrap();
        assert!(html.contains(r#"href="/articles/a""#));
        assert!(!html.contains("<p>xxx"));
        assert!(html.contains("..."));
    }

    #[test]
    fn test_not_found_page() {
        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer
            .render_not_found(&SiteConfig::default(), "/articles/missing/")
            .unwrap();
        assert!(html.contains("Page not found"));
        assert!(html.contains("/articles/missing/"));
    }

    #[test]
    fn test_site_nav_from_listing_categories() {
        let site = SiteData::new(&SiteConfig::default());
        let names: Vec<_> = site.nav.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Articles", "Case Studies", "Research Reports", "Webinars"]);
        assert_eq!(site.nav[1].path, "/case-studies/");
        assert_eq!(site.home, "/about/");
    }
}
