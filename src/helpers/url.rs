//! URL helper functions

use crate::config::SiteConfig;

/// Sentinel href for things that cannot be linked
pub const NO_LINK: &str = "#";

/// Content type → URL prefix, keyed by normalized plural and singular names.
const CONTENT_TYPE_PREFIXES: &[(&str, &str, &str)] = &[
    ("articles", "article", "/articles"),
    ("case-studies", "case-study", "/case-studies"),
    ("research-reports", "research-report", "/research-reports"),
    ("webinars", "webinar", "/webinars"),
    ("news", "news", "/news"),
    ("events", "event", "/events"),
    ("white-papers", "white-paper", "/white-papers"),
];

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/style.css") // -> "/blog/css/style.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Resolve an href coming from content: fragments, absolute URLs and
/// `mailto:`/`tel:` pass through untouched, site paths get the root prefix.
pub fn href_for(config: &SiteConfig, link: &str) -> String {
    if link.starts_with('#') || is_absolute_url(link) {
        link.to_string()
    } else {
        url_for(config, link)
    }
}

/// Whether a link leaves the site
pub fn is_absolute_url(link: &str) -> bool {
    link.starts_with("http://")
        || link.starts_with("https://")
        || link.starts_with("//")
        || link.starts_with("mailto:")
        || link.starts_with("tel:")
}

/// Lowercase a content type name and fold `_`, spaces and camelCase humps
/// into `-`.
///
/// # Examples
/// ```ignore
/// normalize_type_name("Research_Report") // -> "research-report"
/// normalize_type_name("caseStudy")       // -> "case-study"
/// ```
pub fn normalize_type_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;

    for c in name.trim().chars() {
        if c.is_ascii_uppercase() {
            if prev_lower {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
            prev_lower = false;
        } else if c == '_' || c == '-' || c.is_whitespace() {
            if !out.ends_with('-') {
                out.push('-');
            }
            prev_lower = false;
        } else {
            out.push(c);
            prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }

    out.trim_matches('-').to_string()
}

/// Find the URL prefix for a content type name, if one is defined
pub fn content_type_prefix(content_type: &str) -> Option<&'static str> {
    let normalized = normalize_type_name(content_type);
    if normalized.is_empty() {
        return None;
    }

    CONTENT_TYPE_PREFIXES
        .iter()
        .find(|(plural, singular, _)| *plural == normalized || *singular == normalized)
        .map(|(_, _, prefix)| *prefix)
}

/// Build the public path for a piece of content: `{prefix}/{slug}`.
///
/// Returns [`NO_LINK`] when the type is unknown or either input is blank.
///
/// # Examples
/// ```ignore
/// content_type_url("research_report", "x") // -> "/research-reports/x"
/// content_type_url("podcast", "x")         // -> "#"
/// ```
pub fn content_type_url(content_type: &str, slug: &str) -> String {
    let slug = slug.trim();
    if content_type.trim().is_empty() || slug.is_empty() {
        return NO_LINK.to_string();
    }

    match content_type_prefix(content_type) {
        Some(prefix) => format!("{}/{}", prefix, slug),
        None => {
            tracing::warn!(
                "No URL prefix for content type {:?} (normalized: {:?})",
                content_type,
                normalize_type_name(content_type)
            );
            NO_LINK.to_string()
        }
    }
}
