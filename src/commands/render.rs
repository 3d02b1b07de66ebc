//! Render a single page to stdout

use anyhow::{anyhow, bail, Result};

use crate::content::ContentCategory;
use crate::templates::TemplateRenderer;
use crate::{PageError, Site};

/// Resolve and render one record as a full HTML page
pub fn render(site: &Site, category: &str, slug: &str) -> Result<String> {
    let category: ContentCategory = category.parse().map_err(|e| anyhow!("{}", e))?;
    let templates = TemplateRenderer::new()?;

    match site.render_page(&templates, category, slug) {
        Ok(html) => Ok(html),
        Err(PageError::NotFound(e)) => bail!("{} ({})", e, e.cause),
        Err(PageError::Template(e)) => Err(e),
    }
}

pub fn run(site: &Site, category: &str, slug: &str) -> Result<()> {
    let html = render(site, category, slug)?;
    println!("{}", html);
    Ok(())
}
