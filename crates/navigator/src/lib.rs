pub mod error;
pub mod config;

pub mod registry;
pub mod routing;
pub mod links;
pub mod search;
pub mod session;
pub mod storage;

pub use crate::config::NavigatorConfig;
pub use crate::error::{NavigatorError, NavigatorResult};
pub use crate::links::{LinkSanitizer, ProductCatalog, SanitizeOptions};
pub use crate::registry::{PageEntry, PathRegistry, RouteGroup};
pub use crate::routing::{MatchResult, RouteMatcher};
pub use crate::session::{Navigator, Orchestrator, UserProfile};
