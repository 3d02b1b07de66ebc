//! Content module - categories, normalized records and the content resolver

mod category;
mod document;
mod error;
pub(crate) mod fields;
pub mod resolver;

pub use category::{ContentCategory, LookupMode};
pub use document::{ContentDocument, ImageRef, PostSummary};
pub use error::{NotFound, StoreError, UnknownCategory};
pub use resolver::ContentResolver;
