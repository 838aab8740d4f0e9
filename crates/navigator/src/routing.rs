//! Free-text to route matching and fallback search suggestions.

pub mod matcher;
pub mod suggest;

pub use matcher::{keyword_confidence, MatchResult, RouteMatcher};
pub use suggest::suggest;
