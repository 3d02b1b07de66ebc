//! blocksite: renders CMS-exported JSON pages built from typed content blocks
//!
//! The content resolver maps a (category, slug) pair to a normalized
//! document; the block renderer turns its blocks into HTML. Both are used by
//! the static generator and the preview server.

pub mod blocks;
pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod render;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};
use thiserror::Error;

use content::{ContentCategory, ContentResolver, NotFound};
use render::BlockRenderer;
use templates::TemplateRenderer;

/// Why a page could not be served
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    NotFound(#[from] NotFound),

    #[error("failed to render page: {0}")]
    Template(#[from] anyhow::Error),
}

/// The main blocksite application
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Exported CMS documents
    pub data_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Site {
    /// Create a new Site from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a Site from an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let data_dir = base_dir.join(&config.data_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            data_dir,
            public_dir,
        }
    }

    /// Content resolver over this site's data directory
    pub fn resolver(&self) -> ContentResolver {
        ContentResolver::for_site(self)
    }

    /// Block renderer for this site
    pub fn block_renderer(&self) -> BlockRenderer {
        BlockRenderer::new(&self.config)
    }

    /// Resolve a record and render it into a full HTML page
    pub fn render_page(
        &self,
        templates: &TemplateRenderer,
        category: ContentCategory,
        slug: &str,
    ) -> std::result::Result<String, PageError> {
        let document = self.resolver().resolve(category, slug)?;
        let body = self.block_renderer().render_html(&document.blocks);
        Ok(templates.render_document(&self.config, &document, &body)?)
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_site_reads_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("_config.yml"),
            "title: Insight\ndata_dir: content\npublic_dir: out\n",
        )
        .unwrap();

        let site = Site::new(tmp.path()).unwrap();
        assert_eq!(site.config.title, "Insight");
        assert_eq!(site.data_dir, tmp.path().join("content"));
        assert_eq!(site.public_dir, tmp.path().join("out"));
    }

    #[test]
    fn test_site_defaults_without_config() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        assert_eq!(site.data_dir, tmp.path().join("public/data"));
        assert_eq!(site.config.home, "about");
    }

    #[test]
    fn test_render_page() {
        let tmp = TempDir::new().unwrap();
        let pages = tmp.path().join("public/data/Pages");
        fs::create_dir_all(&pages).unwrap();
        fs::write(
            pages.join("about.json"),
            r#"{"data":{"pages":[{"title":"About","slug":"about","blocks":[
                {"__typename":"ComponentBlocksHeading","text":"Who we are"},
                {"__typename":"ComponentBlocksNewThing"}
            ]}]}}"#,
        )
        .unwrap();

        let site = Site::new(tmp.path()).unwrap();
        let templates = TemplateRenderer::new().unwrap();

        let html = site
            .render_page(&templates, ContentCategory::Page, "about")
            .unwrap();
        assert!(html.contains("Who we are"));
        assert!(html.contains("Missing Component"));

        let missing = site.render_page(&templates, ContentCategory::Page, "team");
        assert!(matches!(missing, Err(PageError::NotFound(_))));
    }
}
