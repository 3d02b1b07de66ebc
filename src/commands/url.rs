//! Resolve a content type and slug to its public path

use crate::helpers::content_type_url;

/// Print the public path; unknown content types print `#`
pub fn run(content_type: &str, slug: &str) {
    println!("{}", content_type_url(content_type, slug));
}
