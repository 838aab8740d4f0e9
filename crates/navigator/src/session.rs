//! Query lifecycle: matching, notices, navigation and bounded history.

pub mod history;
pub mod navigation;
pub mod orchestrator;
pub mod profile;

pub use history::{BoundedHistory, InteractionRecord, SearchHistoryItem};
pub use navigation::{DelayedNavigator, NavigationRequest, NavigationTarget, Navigator};
pub use orchestrator::{Notice, NoticeKind, Orchestrator, Phase, SessionState};
pub use profile::{DigitalProficiency, ProfilePreferences, UserProfile};
