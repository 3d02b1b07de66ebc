//! Generator module - exports every resolvable record as static HTML

use anyhow::Result;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use crate::config::SiteConfig;
use crate::content::{ContentCategory, ContentResolver};
use crate::helpers::{html_escape, url_for};
use crate::render::BlockRenderer;
use crate::templates::TemplateRenderer;
use crate::Site;

/// What a generation run produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateStats {
    pub pages: usize,
    pub listings: usize,
    pub skipped: usize,
}

/// Static site generator
pub struct Generator {
    site: Site,
    resolver: ContentResolver,
    renderer: BlockRenderer,
    templates: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        Ok(Self {
            site: site.clone(),
            resolver: site.resolver(),
            renderer: site.block_renderer(),
            templates: TemplateRenderer::new()?,
        })
    }

    /// Generate the entire site
    pub fn generate(&self) -> Result<GenerateStats> {
        fs::create_dir_all(&self.site.public_dir)?;

        let mut stats = GenerateStats::default();
        let mut routes = HashSet::new();

        // Pages first so a page wins over an industry page with the same slug
        for category in ContentCategory::ALL {
            self.generate_category(category, &mut routes, &mut stats)?;
        }

        for category in listing_categories(&self.site.config) {
            self.generate_listing(category)?;
            stats.listings += 1;
        }

        self.generate_not_found()?;
        self.generate_root_redirect()?;

        Ok(stats)
    }

    /// Render every record file of one category
    fn generate_category(
        &self,
        category: ContentCategory,
        routes: &mut HashSet<String>,
        stats: &mut GenerateStats,
    ) -> Result<()> {
        for slug in self.resolver.slugs(category) {
            let document = match self.resolver.resolve(category, &slug) {
                Ok(document) => document,
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", e, e.cause);
                    stats.skipped += 1;
                    continue;
                }
            };

            // Export under the file slug; an industry fallback record keeps the requested path
            let route = category.route(&slug);
            if !routes.insert(route.clone()) {
                tracing::warn!("Skipping {} {:?}: {} is already generated", category, slug, route);
                stats.skipped += 1;
                continue;
            }

            let body = self.renderer.render_html(&document.blocks);
            let html = self
                .templates
                .render_document(&self.site.config, &document, &body)?;
            self.write_route(&route, &html)?;
            stats.pages += 1;
        }

        Ok(())
    }

    fn generate_listing(&self, category: ContentCategory) -> Result<()> {
        let posts = self.resolver.list_all(category);
        let html = self
            .templates
            .render_listing(&self.site.config, category, &posts)?;
        let route = format!("{}/", category.listing_prefix().unwrap_or_default());
        self.write_route(&route, &html)
    }

    fn generate_not_found(&self) -> Result<()> {
        let html = self.templates.render_not_found(&self.site.config, "")?;
        let path = self.site.public_dir.join("404.html");
        fs::write(&path, html)?;
        tracing::debug!("Generated: {:?}", path);
        Ok(())
    }

    /// `/` has no page of its own; it forwards to the configured home page
    fn generate_root_redirect(&self) -> Result<()> {
        let target = html_escape(&url_for(&self.site.config, &format!("/{}/", self.site.config.home)));
        let html = format!(
            concat!(
                "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">",
                "<meta http-equiv=\"refresh\" content=\"0; url={target}\">",
                "<link rel=\"canonical\" href=\"{target}\"></head>",
                "<body><a href=\"{target}\">{target}</a></body></html>\n"
            ),
            target = target
        );
        let path = self.site.public_dir.join("index.html");
        fs::write(&path, html)?;
        Ok(())
    }

    /// Write `{public_dir}{route}index.html`
    fn write_route(&self, route: &str, html: &str) -> Result<()> {
        let path = self.output_path(route);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, html)?;
        tracing::debug!("Generated: {:?}", path);
        Ok(())
    }

    fn output_path(&self, route: &str) -> PathBuf {
        let relative = route.trim_matches('/');
        let mut path = self.site.public_dir.clone();
        if !relative.is_empty() {
            path.push(relative);
        }
        path.join("index.html")
    }
}

/// Post categories named in the config that have a listing page
pub fn listing_categories(config: &SiteConfig) -> Vec<ContentCategory> {
    config
        .listing_categories
        .iter()
        .filter_map(|name| match name.parse::<ContentCategory>() {
            Ok(category) if category.is_post() => Some(category),
            Ok(category) => {
                tracing::warn!("{} has no listing page", category);
                None
            }
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_json(root: &Path, relative: &str, value: serde_json::Value) {
        let path = root.join("public/data").join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, value.to_string()).unwrap();
    }

    fn page(slug: &str, text: &str) -> serde_json::Value {
        json!({ "title": slug, "slug": slug, "blocks": [
            { "__typename": "ComponentBlocksHeading", "text": text }
        ]})
    }

    fn setup() -> TempDir {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        write_json(root, "Pages/about.json", json!({ "data": { "pages": [page("about", "About us")] } }));
        write_json(root, "Pages/industry/energy.json", json!({ "data": { "pages": [page("energy", "Energy")] } }));
        write_json(root, "Pages/industry/about.json", json!({ "data": { "pages": [page("about", "Shadowed")] } }));
        write_json(root, "Articles/haulage.json", json!({ "data": { "articles": [{
            "title": "Haulage", "slug": "haulage", "excerpts": "Trucks",
            "content": [{ "__typename": "ComponentBlocksDescription", "content": "<p>Roads</p>" }]
        }]}}));
        fs::create_dir_all(root.join("public/data/Webinars")).unwrap();
        fs::write(root.join("public/data/Webinars/broken.json"), "{").unwrap();
        tmp
    }

    #[test]
    fn test_generate_site() {
        let tmp = setup();
        let site = Site::new(tmp.path()).unwrap();
        let stats = Generator::new(&site).unwrap().generate().unwrap();

        assert_eq!(stats.pages, 3);
        // broken webinar + shadowed industry page
        assert_eq!(stats.skipped, 2);
        assert_eq!(stats.listings, 4);

        let public = tmp.path().join("dist");
        let about = fs::read_to_string(public.join("about/index.html")).unwrap();
        assert!(about.contains("About us"));
        assert!(!about.contains("Shadowed"));
        assert!(public.join("energy/index.html").exists());

        let article = fs::read_to_string(public.join("articles/haulage/index.html")).unwrap();
        assert!(article.contains("<p>Roads</p>"));

        let listing = fs::read_to_string(public.join("articles/index.html")).unwrap();
        assert!(listing.contains("/articles/haulage"));
        assert!(public.join("webinars/index.html").exists());

        let root = fs::read_to_string(public.join("index.html")).unwrap();
        assert!(root.contains("url=/about/"));
        assert!(public.join("404.html").exists());
    }

    #[test]
    fn test_industry_fallback_keeps_file_route() {
        let tmp = TempDir::new().unwrap();
        write_json(
            tmp.path(),
            "Pages/industry/energy.json",
            json!({ "data": { "pages": [page("a", "First entry")] } }),
        );

        let site = Site::new(tmp.path()).unwrap();
        let stats = Generator::new(&site).unwrap().generate().unwrap();
        assert_eq!(stats.pages, 1);

        let public = tmp.path().join("dist");
        let energy = fs::read_to_string(public.join("energy/index.html")).unwrap();
        assert!(energy.contains("First entry"));
        assert!(!public.join("a/index.html").exists());
    }

    #[test]
    fn test_generate_empty_store() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        let stats = Generator::new(&site).unwrap().generate().unwrap();
        assert_eq!(stats.pages, 0);
        assert_eq!(stats.skipped, 0);
        assert!(tmp.path().join("dist/index.html").exists());
    }

    #[test]
    fn test_unknown_listing_categories_are_ignored() {
        let tmp = TempDir::new().unwrap();
        let mut config = crate::config::SiteConfig::default();
        config.listing_categories = vec!["podcast".to_string(), "page".to_string(), "webinars".to_string()];
        let site = Site::with_config(tmp.path(), config);
        assert_eq!(listing_categories(&site.config), vec![ContentCategory::Webinar]);
    }
}
