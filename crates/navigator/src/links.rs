//! Rewrites Markdown-style links in generated answer text so internal
//! targets always point at a known page.

pub mod catalog;
pub mod enhance;
pub mod resolve;
pub mod sanitizer;

pub use catalog::ProductCatalog;
pub use resolve::PathResolver;
pub use sanitizer::{LinkSanitizer, LinkToken, SanitizeOptions};
