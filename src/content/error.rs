//! Content store errors

use std::path::PathBuf;
use thiserror::Error;

use super::ContentCategory;

/// Why a record could not be loaded from the content store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid slug {0:?}")]
    InvalidSlug(String),

    #[error("file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} has no `data.{key}` array", .path.display())]
    Shape { path: PathBuf, key: &'static str },

    #[error("`data.{key}` in {} is empty", .path.display())]
    EmptyArray { path: PathBuf, key: &'static str },

    #[error("no record with slug {slug:?} in {}", .path.display())]
    NoMatch { path: PathBuf, slug: String },

    #[error("record in {} is missing `{field}`", .path.display())]
    MissingField { path: PathBuf, field: &'static str },
}

/// The only failure a resolve can surface. Callers map it to a 404.
#[derive(Debug, Error)]
#[error("{category} {slug:?} not found")]
pub struct NotFound {
    pub category: ContentCategory,
    pub slug: String,
    #[source]
    pub cause: StoreError,
}

#[derive(Debug, Error)]
#[error("unknown content category {0:?} (expected one of: page, industryPage, article, caseStudy, researchReport, webinar)")]
pub struct UnknownCategory(pub String);
