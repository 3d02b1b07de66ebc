//! Content categories and how each one is laid out in the content store

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::error::UnknownCategory;
use crate::helpers::{content_type_prefix, normalize_type_name};

/// How a record is picked out of a category file's array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMode {
    /// The entry whose `slug` equals the requested slug; no match is not-found
    MatchSlug,
    /// Like `MatchSlug`, but falls back to the first entry when nothing matches
    MatchSlugOrFirst,
    /// The first (sole) entry of a one-record-per-file document
    SoleEntry,
}

/// The fixed set of content types the store holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentCategory {
    Page,
    IndustryPage,
    Article,
    CaseStudy,
    ResearchReport,
    Webinar,
}

impl ContentCategory {
    pub const ALL: [ContentCategory; 6] = [
        ContentCategory::Page,
        ContentCategory::IndustryPage,
        ContentCategory::Article,
        ContentCategory::CaseStudy,
        ContentCategory::ResearchReport,
        ContentCategory::Webinar,
    ];

    /// Canonical camelCase name
    pub fn name(&self) -> &'static str {
        match self {
            ContentCategory::Page => "page",
            ContentCategory::IndustryPage => "industryPage",
            ContentCategory::Article => "article",
            ContentCategory::CaseStudy => "caseStudy",
            ContentCategory::ResearchReport => "researchReport",
            ContentCategory::Webinar => "webinar",
        }
    }

    /// Directory under the data root
    pub fn directory(&self) -> &'static str {
        match self {
            ContentCategory::Page => "Pages",
            ContentCategory::IndustryPage => "Pages/industry",
            ContentCategory::Article => "Articles",
            ContentCategory::CaseStudy => "Case Study",
            ContentCategory::ResearchReport => "Research Reports",
            ContentCategory::Webinar => "Webinars",
        }
    }

    /// Key of the record array inside `data`
    pub fn array_key(&self) -> &'static str {
        match self {
            ContentCategory::Page | ContentCategory::IndustryPage => "pages",
            ContentCategory::Article => "articles",
            ContentCategory::CaseStudy => "caseStudies",
            ContentCategory::ResearchReport => "researchReports",
            ContentCategory::Webinar => "webinars",
        }
    }

    pub fn lookup(&self) -> LookupMode {
        match self {
            ContentCategory::Page => LookupMode::MatchSlug,
            // Unmatched industry slugs serve the file's first page rather than a 404
            ContentCategory::IndustryPage => LookupMode::MatchSlugOrFirst,
            _ => LookupMode::SoleEntry,
        }
    }

    /// Whether records of this category are rendered as standalone posts
    /// (header, featured image, `content` blocks) rather than block pages
    pub fn is_post(&self) -> bool {
        self.lookup() == LookupMode::SoleEntry
    }

    /// URL prefix of the category's listing, for post categories
    pub fn listing_prefix(&self) -> Option<&'static str> {
        if self.is_post() {
            content_type_prefix(self.name())
        } else {
            None
        }
    }

    /// Public path of a record, always ending in `/`
    ///
    /// # Examples
    /// ```ignore
    /// ContentCategory::Article.route("x")      // -> "/articles/x/"
    /// ContentCategory::IndustryPage.route("e") // -> "/e/"
    /// ```
    pub fn route(&self, slug: &str) -> String {
        match self.listing_prefix() {
            Some(prefix) => format!("{}/{}/", prefix, slug),
            None => format!("/{}/", slug),
        }
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContentCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_type_name(s).as_str() {
            "page" | "pages" => Ok(ContentCategory::Page),
            "industry" | "industry-page" | "industry-pages" => Ok(ContentCategory::IndustryPage),
            "article" | "articles" => Ok(ContentCategory::Article),
            "case-study" | "case-studies" => Ok(ContentCategory::CaseStudy),
            "research-report" | "research-reports" => Ok(ContentCategory::ResearchReport),
            "webinar" | "webinars" => Ok(ContentCategory::Webinar),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}
