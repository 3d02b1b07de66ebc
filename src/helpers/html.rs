//! HTML helper functions

use super::url::href_for;
use crate::blocks::LinkTarget;
use crate::config::SiteConfig;
use crate::content::ImageRef;

/// Generate an opening anchor tag for a content link.
///
/// New-tab links always carry `rel="noopener noreferrer"`.
///
/// # Examples
/// ```ignore
/// anchor_open(&config, &link, Some("btn"), None) // -> <a href="/about" class="btn">
/// ```
pub fn anchor_open(
    config: &SiteConfig,
    link: &LinkTarget,
    class: Option<&str>,
    aria_label: Option<&str>,
) -> String {
    let href = if link.is_external {
        link.url.clone()
    } else {
        href_for(config, &link.url)
    };

    let mut tag = format!(r#"<a href="{}""#, html_escape(&href));
    if link.open_in_new_tab {
        tag.push_str(r#" target="_blank" rel="noopener noreferrer""#);
    }
    if let Some(class) = class {
        tag.push_str(&format!(r#" class="{}""#, class));
    }
    if let Some(label) = aria_label {
        tag.push_str(&format!(r#" aria-label="{}""#, html_escape(label)));
    }
    tag.push('>');
    tag
}

/// Generate an anchor tag with escaped text
pub fn link_to(config: &SiteConfig, link: &LinkTarget, text: &str, class: Option<&str>) -> String {
    format!(
        "{}{}</a>",
        anchor_open(config, link, class, None),
        html_escape(text)
    )
}

/// Generate an image tag. `alt_fallback` is used when the image carries no
/// alternative text of its own.
pub fn image_tag(image: &ImageRef, alt_fallback: &str, class: Option<&str>) -> String {
    let alt = image.alt_text.as_deref().unwrap_or(alt_fallback);
    let mut tag = format!(
        r#"<img src="{}" alt="{}""#,
        html_escape(&image.url),
        html_escape(alt)
    );
    if let Some(width) = image.width {
        tag.push_str(&format!(r#" width="{}""#, width));
    }
    if let Some(height) = image.height {
        tag.push_str(&format!(r#" height="{}""#, height));
    }
    if let Some(class) = class {
        tag.push_str(&format!(r#" class="{}""#, class));
    }
    tag.push_str(r#" loading="lazy">"#);
    tag
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Truncate a string to a specified length
pub fn truncate(s: &str, length: usize, omission: Option<&str>) -> String {
    let omission = omission.unwrap_or("...");

    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s
            .chars()
            .take(length.saturating_sub(omission.chars().count()))
            .collect();
        format!("{}{}", truncated.trim_end(), omission)
    }
}
