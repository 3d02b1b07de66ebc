//! Generate static files

use anyhow::Result;
use std::time::Instant;

use crate::generator::{GenerateStats, Generator};
use crate::Site;

/// Generate the static site
pub fn run(site: &Site) -> Result<()> {
    run_with_stats(site).map(|_| ())
}

/// Generate the static site and report what was written
pub fn run_with_stats(site: &Site) -> Result<GenerateStats> {
    let start = Instant::now();
    tracing::debug!("Reading content from {:?}", site.data_dir);

    if !site.data_dir.is_dir() {
        tracing::warn!("Data directory {:?} does not exist", site.data_dir);
    }

    let stats = Generator::new(site)?.generate()?;

    tracing::info!(
        "Generated {} pages and {} listings in {:.2?}",
        stats.pages,
        stats.listings,
        start.elapsed()
    );
    if stats.skipped > 0 {
        tracing::warn!("Skipped {} records that could not be resolved", stats.skipped);
    }

    Ok(stats)
}
