//! Helper functions shared by the block renderers, templates and generator

mod html;
mod url;

pub use html::*;
pub use url::*;
