//! List site content

use anyhow::{anyhow, Result};

use crate::content::ContentCategory;
use crate::Site;

/// Lines describing every record of a category
pub fn lines(site: &Site, category: &str) -> Result<Vec<String>> {
    let category: ContentCategory = category.parse().map_err(|e| anyhow!("{}", e))?;
    let resolver = site.resolver();

    let lines = if category.is_post() {
        resolver
            .list_all(category)
            .iter()
            .map(|post| format!("  {} [{}]", post.title, post.url()))
            .collect()
    } else {
        // Page files hold arrays, so only the file stems are listed
        resolver
            .slugs(category)
            .iter()
            .map(|slug| format!("  {} [{}]", slug, category.route(slug)))
            .collect()
    };

    Ok(lines)
}

/// Print every record of a category
pub fn run(site: &Site, category: &str) -> Result<()> {
    let lines = lines(site, category)?;
    println!("{} ({}):", category, lines.len());
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
