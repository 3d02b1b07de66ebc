//! Content resolver - maps (category, slug) to a normalized document

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::error::{NotFound, StoreError};
use super::fields::{image_field, str_field, str_field_any};
use super::{ContentCategory, ContentDocument, LookupMode, PostSummary};
use crate::blocks::Block;
use crate::Site;

lazy_static! {
    static ref SLUG_RE: Regex = Regex::new(r"^[A-Za-z0-9_~-][A-Za-z0-9._~-]*$").unwrap();
}

/// Reads records from the exported content store. The store is read-only;
/// every call reads fresh from disk.
pub struct ContentResolver {
    data_dir: PathBuf,
}

impl ContentResolver {
    /// Create a resolver rooted at a data directory
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Create a resolver for a site's data directory
    pub fn for_site(site: &Site) -> Self {
        Self::new(site.data_dir.clone())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Directory holding a category's files
    pub fn category_dir(&self, category: ContentCategory) -> PathBuf {
        self.data_dir.join(category.directory())
    }

    /// File backing a (category, slug) pair
    pub fn record_path(&self, category: ContentCategory, slug: &str) -> PathBuf {
        self.category_dir(category).join(format!("{}.json", slug))
    }

    /// Resolve a record into a document.
    ///
    /// Every failure (bad slug, missing or corrupt file, wrong shape, no
    /// matching entry, missing required field) comes back as [`NotFound`].
    pub fn resolve(&self, category: ContentCategory, slug: &str) -> Result<ContentDocument, NotFound> {
        let result = self
            .load_record(category, slug)
            .and_then(|(path, record)| normalize_document(category, slug, &record, &path));

        match result {
            Ok(document) => {
                tracing::debug!(
                    "Resolved {} {:?} with {} blocks",
                    category,
                    slug,
                    document.blocks.len()
                );
                Ok(document)
            }
            Err(cause) => {
                tracing::warn!("Could not resolve {} {:?}: {}", category, slug, cause);
                Err(NotFound {
                    category,
                    slug: slug.to_string(),
                    cause,
                })
            }
        }
    }

    /// Load the raw record for a (category, slug) pair
    fn load_record(&self, category: ContentCategory, slug: &str) -> Result<(PathBuf, Value), StoreError> {
        validate_slug(slug)?;

        let path = self.record_path(category, slug);
        tracing::debug!("Reading {} data from {:?}", category, path);

        let json = read_json_file(&path)?;
        let entries = record_array(&json, category.array_key(), &path)?;

        let record = match category.lookup() {
            LookupMode::SoleEntry => &entries[0],
            LookupMode::MatchSlug => {
                find_by_slug(entries, slug).ok_or_else(|| StoreError::NoMatch {
                    path: path.clone(),
                    slug: slug.to_string(),
                })?
            }
            LookupMode::MatchSlugOrFirst => match find_by_slug(entries, slug) {
                Some(record) => record,
                None => {
                    tracing::warn!(
                        "No {} with slug {:?} in {:?}, using the first entry",
                        category,
                        slug,
                        path
                    );
                    &entries[0]
                }
            },
        };

        Ok((path, record.clone()))
    }

    /// Every file stem under a category directory, sorted
    pub fn slugs(&self, category: ContentCategory) -> Vec<String> {
        json_files(&self.category_dir(category))
            .iter()
            .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(str::to_string))
            .collect()
    }

    /// Summaries of every record in a category.
    ///
    /// Files that cannot be read or parsed, or lack a non-empty record array,
    /// are skipped; one bad file never hides the others.
    pub fn list_all(&self, category: ContentCategory) -> Vec<PostSummary> {
        let dir = self.category_dir(category);
        if !dir.is_dir() {
            tracing::warn!("Directory not found for listing: {:?}", dir);
            return Vec::new();
        }

        let fallback_type = slug::slugify(
            dir.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or(category.name()),
        );

        let mut summaries = Vec::new();
        for path in json_files(&dir) {
            match load_summary(&path, category.array_key(), &fallback_type) {
                Ok(summary) => summaries.push(summary),
                Err(e) => {
                    tracing::warn!("Skipping {:?}: {}", path, e);
                }
            }
        }

        tracing::debug!("Listed {} {} records", summaries.len(), category);
        summaries
    }
}

/// Check that a slug is non-empty and URL-safe
pub fn validate_slug(slug: &str) -> Result<(), StoreError> {
    if SLUG_RE.is_match(slug) {
        Ok(())
    } else {
        Err(StoreError::InvalidSlug(slug.to_string()))
    }
}

/// Read and parse a JSON file
fn read_json_file(path: &Path) -> Result<Value, StoreError> {
    if !path.is_file() {
        return Err(StoreError::Missing(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// The non-empty `data.<key>` array of a store document
fn record_array<'a>(json: &'a Value, key: &'static str, path: &Path) -> Result<&'a [Value], StoreError> {
    let entries = json
        .get("data")
        .and_then(|data| data.get(key))
        .and_then(Value::as_array)
        .ok_or_else(|| StoreError::Shape {
            path: path.to_path_buf(),
            key,
        })?;

    if entries.is_empty() {
        return Err(StoreError::EmptyArray {
            path: path.to_path_buf(),
            key,
        });
    }

    Ok(entries)
}

fn find_by_slug<'a>(entries: &'a [Value], slug: &str) -> Option<&'a Value> {
    entries
        .iter()
        .find(|entry| entry.get("slug").and_then(Value::as_str) == Some(slug))
}

/// Build a document from a raw record, failing on missing required fields
fn normalize_document(
    category: ContentCategory,
    requested_slug: &str,
    record: &Value,
    path: &Path,
) -> Result<ContentDocument, StoreError> {
    let missing = |field: &'static str| StoreError::MissingField {
        path: path.to_path_buf(),
        field,
    };

    let title = str_field(record, "title").ok_or_else(|| missing("title"))?;
    let slug = str_field(record, "slug").unwrap_or_else(|| requested_slug.to_string());

    // Pages keep their blocks under `blocks`, posts under `content`
    let raw_blocks = ["blocks", "content"]
        .iter()
        .find_map(|key| record.get(*key).and_then(Value::as_array))
        .ok_or_else(|| missing("blocks"))?;

    Ok(ContentDocument {
        category,
        title,
        slug,
        blocks: Block::from_values(raw_blocks),
        featured_image: image_field(record, "featuredImage"),
        excerpt: str_field_any(record, &["excerpts", "excrept", "excerpt"]),
        video_id: str_field(record, "vimeoVideoId"),
        report_type: str_field(record, "reportType"),
    })
}

/// Read a listing summary from the first record of a file
fn load_summary(path: &Path, key: &'static str, fallback_type: &str) -> Result<PostSummary, StoreError> {
    let json = read_json_file(path)?;
    let record = &record_array(&json, key, path)?[0];

    let file_stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();

    Ok(PostSummary {
        title: str_field(record, "title").unwrap_or_else(|| "Untitled".to_string()),
        slug: str_field(record, "slug").unwrap_or(file_stem),
        content_type_category: str_field(record, "postType")
            .unwrap_or_else(|| fallback_type.to_string()),
        featured_image: image_field(record, "featuredImage"),
        excerpt: str_field_any(record, &["excerpts", "excrept"]),
    })
}

/// `.json` files directly inside a directory, sorted by file name
fn json_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|path| path.is_file() && is_json_file(path))
        .collect()
}

/// Check if a file is a JSON document
fn is_json_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write(dir: &Path, relative: &str, content: &str) {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn write_json(dir: &Path, relative: &str, value: Value) {
        write(dir, relative, &serde_json::to_string_pretty(&value).unwrap());
    }

    fn page(slug: &str) -> Value {
        json!({
            "title": format!("Page {}", slug),
            "slug": slug,
            "blocks": [
                { "__typename": "ComponentBlocksHeading", "text": "Hello" }
            ]
        })
    }

    fn article(slug: &str) -> Value {
        json!({ "data": { "articles": [{
            "title": format!("Article {}", slug),
            "slug": slug,
            "excerpts": "Short",
            "featuredImage": { "url": "/uploads/a.png", "alternativeText": "A" },
            "content": [
                { "__typename": "ComponentBlocksDescription", "content": "<p>x</p>" },
                null
            ]
        }]}})
    }

    #[test]
    fn test_resolve_page_by_slug() {
        let tmp = TempDir::new().unwrap();
        write_json(
            tmp.path(),
            "Pages/about.json",
            json!({ "data": { "pages": [page("team"), page("about")] } }),
        );

        let resolver = ContentResolver::new(tmp.path());
        let doc = resolver.resolve(ContentCategory::Page, "about").unwrap();
        assert_eq!(doc.slug, "about");
        assert_eq!(doc.title, "Page about");
        assert_eq!(doc.block_kinds(), vec!["Heading"]);
        assert_eq!(doc.route(), "/about/");
    }

    #[test]
    fn test_page_without_matching_entry_is_not_found() {
        let tmp = TempDir::new().unwrap();
        write_json(
            tmp.path(),
            "Pages/about.json",
            json!({ "data": { "pages": [page("team")] } }),
        );

        let resolver = ContentResolver::new(tmp.path());
        let err = resolver.resolve(ContentCategory::Page, "about").unwrap_err();
        assert!(matches!(err.cause, StoreError::NoMatch { .. }));
    }

    // Documented oddity: unmatched industry slugs serve the file's first page.
    #[test]
    fn test_industry_page_falls_back_to_first_entry() {
        let tmp = TempDir::new().unwrap();
        write_json(
            tmp.path(),
            "Pages/industry/nonexistent.json",
            json!({ "data": { "pages": [page("a"), page("b")] } }),
        );

        let resolver = ContentResolver::new(tmp.path());
        let doc = resolver
            .resolve(ContentCategory::IndustryPage, "nonexistent")
            .unwrap();
        assert_eq!(doc.slug, "a");
    }

    #[test]
    fn test_industry_page_prefers_exact_match() {
        let tmp = TempDir::new().unwrap();
        write_json(
            tmp.path(),
            "Pages/industry/energy.json",
            json!({ "data": { "pages": [page("a"), page("energy")] } }),
        );

        let resolver = ContentResolver::new(tmp.path());
        let doc = resolver.resolve(ContentCategory::IndustryPage, "energy").unwrap();
        assert_eq!(doc.slug, "energy");
    }

    #[test]
    fn test_industry_page_with_empty_array_is_not_found() {
        let tmp = TempDir::new().unwrap();
        write_json(
            tmp.path(),
            "Pages/industry/energy.json",
            json!({ "data": { "pages": [] } }),
        );

        let resolver = ContentResolver::new(tmp.path());
        let err = resolver
            .resolve(ContentCategory::IndustryPage, "energy")
            .unwrap_err();
        assert!(matches!(err.cause, StoreError::EmptyArray { .. }));
    }

    #[test]
    fn test_resolve_article_takes_sole_entry() {
        let tmp = TempDir::new().unwrap();
        write_json(tmp.path(), "Articles/haulage.json", article("haulage"));

        let resolver = ContentResolver::new(tmp.path());
        let doc = resolver.resolve(ContentCategory::Article, "haulage").unwrap();
        assert_eq!(doc.slug, "haulage");
        assert_eq!(doc.excerpt.as_deref(), Some("Short"));
        assert_eq!(doc.featured_image.as_ref().unwrap().url, "/uploads/a.png");
        // the null block is dropped during normalization
        assert_eq!(doc.block_kinds(), vec!["Description"]);
        assert_eq!(doc.category.route(&doc.slug), "/articles/haulage/");
    }

    #[test]
    fn test_missing_article_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let resolver = ContentResolver::new(tmp.path());
        let err = resolver
            .resolve(ContentCategory::Article, "does-not-exist")
            .unwrap_err();
        assert_eq!(err.category, ContentCategory::Article);
        assert_eq!(err.slug, "does-not-exist");
        assert!(matches!(err.cause, StoreError::Missing(_)));
    }

    #[test]
    fn test_malformed_json_is_not_found() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "Webinars/broken.json", "{ \"data\": { \"webinars\": [");

        let resolver = ContentResolver::new(tmp.path());
        let err = resolver.resolve(ContentCategory::Webinar, "broken").unwrap_err();
        assert!(matches!(err.cause, StoreError::Parse { .. }));
    }

    #[test]
    fn test_wrong_shape_is_not_found() {
        let tmp = TempDir::new().unwrap();
        write_json(
            tmp.path(),
            "Case Study/x.json",
            json!({ "data": { "articles": [{ "title": "t", "content": [] }] } }),
        );

        let resolver = ContentResolver::new(tmp.path());
        let err = resolver.resolve(ContentCategory::CaseStudy, "x").unwrap_err();
        assert!(matches!(err.cause, StoreError::Shape { key: "caseStudies", .. }));
    }

    #[test]
    fn test_record_without_title_is_not_found() {
        let tmp = TempDir::new().unwrap();
        write_json(
            tmp.path(),
            "Research Reports/r.json",
            json!({ "data": { "researchReports": [{ "slug": "r", "content": [] }] } }),
        );

        let resolver = ContentResolver::new(tmp.path());
        let err = resolver
            .resolve(ContentCategory::ResearchReport, "r")
            .unwrap_err();
        assert!(matches!(err.cause, StoreError::MissingField { field: "title", .. }));
    }

    #[test]
    fn test_record_without_blocks_is_not_found() {
        let tmp = TempDir::new().unwrap();
        write_json(
            tmp.path(),
            "Pages/about.json",
            json!({ "data": { "pages": [{ "title": "About", "slug": "about" }] } }),
        );

        let resolver = ContentResolver::new(tmp.path());
        let err = resolver.resolve(ContentCategory::Page, "about").unwrap_err();
        assert!(matches!(err.cause, StoreError::MissingField { field: "blocks", .. }));
    }

    #[test]
    fn test_webinar_and_report_extras() {
        let tmp = TempDir::new().unwrap();
        write_json(
            tmp.path(),
            "Webinars/w.json",
            json!({ "data": { "webinars": [{
                "title": "W", "excrept": "Typo key", "vimeoVideoId": "123", "content": []
            }]}}),
        );
        write_json(
            tmp.path(),
            "Research Reports/r.json",
            json!({ "data": { "researchReports": [{
                "title": "R", "reportType": "research_form", "content": []
            }]}}),
        );

        let resolver = ContentResolver::new(tmp.path());
        let webinar = resolver.resolve(ContentCategory::Webinar, "w").unwrap();
        assert_eq!(webinar.slug, "w");
        assert_eq!(webinar.excerpt.as_deref(), Some("Typo key"));
        assert_eq!(webinar.video_id.as_deref(), Some("123"));

        let report = resolver.resolve(ContentCategory::ResearchReport, "r").unwrap();
        assert!(report.is_form_report());
    }

    #[test]
    fn test_invalid_slugs_never_touch_disk() {
        let tmp = TempDir::new().unwrap();
        write_json(tmp.path(), "Articles/x.json", article("x"));

        let resolver = ContentResolver::new(tmp.path());
        for slug in ["", "../Articles/x", "a/b", ".hidden", "with space"] {
            let err = resolver.resolve(ContentCategory::Article, slug).unwrap_err();
            assert!(matches!(err.cause, StoreError::InvalidSlug(_)), "{:?}", slug);
        }
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("chemicals-and-natural-resources").is_ok());
        assert!(validate_slug("v1.2_final~draft").is_ok());
        assert!(validate_slug("..").is_err());
        assert!(validate_slug("a\\b").is_err());
    }

    #[test]
    fn test_list_all_skips_corrupt_files() {
        let tmp = TempDir::new().unwrap();
        for slug in ["a", "b", "c", "d"] {
            write_json(tmp.path(), &format!("Articles/{}.json", slug), article(slug));
        }
        write(tmp.path(), "Articles/e.json", "{ not json");
        write(tmp.path(), "Articles/notes.txt", "ignored");

        let resolver = ContentResolver::new(tmp.path());
        let summaries = resolver.list_all(ContentCategory::Article);
        let slugs: Vec<_> = summaries.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b", "c", "d"]);
        assert_eq!(summaries[0].title, "Article a");
        assert_eq!(summaries[0].excerpt.as_deref(), Some("Short"));
    }

    #[test]
    fn test_list_all_fallbacks() {
        let tmp = TempDir::new().unwrap();
        write_json(
            tmp.path(),
            "Case Study/mining-story.json",
            json!({ "data": { "caseStudies": [{ "content": [] }] } }),
        );
        write_json(
            tmp.path(),
            "Case Study/empty.json",
            json!({ "data": { "caseStudies": [] } }),
        );

        let resolver = ContentResolver::new(tmp.path());
        let summaries = resolver.list_all(ContentCategory::CaseStudy);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].slug, "mining-story");
        assert_eq!(summaries[0].title, "Untitled");
        assert_eq!(summaries[0].content_type_category, "case-study");
        assert_eq!(summaries[0].url(), "/case-studies/mining-story");
    }

    #[test]
    fn test_list_all_missing_directory_is_empty() {
        let tmp = TempDir::new().unwrap();
        let resolver = ContentResolver::new(tmp.path());
        assert!(resolver.list_all(ContentCategory::Webinar).is_empty());
    }

    #[test]
    fn test_slugs_are_sorted_file_stems() {
        let tmp = TempDir::new().unwrap();
        write_json(tmp.path(), "Articles/b.json", article("b"));
        write_json(tmp.path(), "Articles/a.json", article("a"));
        write(tmp.path(), "Articles/readme.md", "#");

        let resolver = ContentResolver::new(tmp.path());
        assert_eq!(resolver.slugs(ContentCategory::Article), vec!["a", "b"]);
    }
}
