use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::NavigatorConfig;
use crate::links::{LinkSanitizer, ProductCatalog, SanitizeOptions};
use crate::registry::{PageEntry, PathRegistry};
use crate::routing::{suggest, MatchResult, RouteMatcher};
use crate::search::{detect_links, AssistantAnswer};
use crate::storage::{load_json, save_json, KvStore, SEARCH_HISTORY_KEY, USER_PROFILE_KEY};

use super::history::{BoundedHistory, InteractionRecord, SearchHistoryItem};
use super::navigation::{NavigationRequest, NavigationTarget, Navigator};
use super::profile::UserProfile;

const EMPTY_QUERY_TEXT: &str = "검색어를 입력해주세요.";
const SEARCH_REDIRECT_TEXT: &str = "검색 결과로 이동합니다.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Processing,
    Matched,
    Unmatched,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
    Error,
}

/// Message surfaced to the reader after a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Per-session state owned by one [`Orchestrator`].
#[derive(Debug, Clone)]
pub struct SessionState {
    pub phase: Phase,
    /// Branch taken by the most recent accepted query.
    pub last_outcome: Option<Phase>,
    pub user_input: String,
    pub last_processed_input: String,
    pub match_result: Option<MatchResult>,
    pub notice: Option<Notice>,
    pub suggestions: Vec<String>,
    pub query_history: BoundedHistory<InteractionRecord>,
    pub search_history: BoundedHistory<SearchHistoryItem>,
}

impl SessionState {
    fn new(max_history: usize) -> Self {
        Self {
            phase: Phase::Idle,
            last_outcome: None,
            user_input: String::new(),
            last_processed_input: String::new(),
            match_result: None,
            notice: None,
            suggestions: Vec::new(),
            query_history: BoundedHistory::with_capacity(max_history),
            search_history: BoundedHistory::with_capacity(max_history),
        }
    }
}

/// Holds the orchestrator in `Processing` and returns it to `Idle` when
/// dropped, including while unwinding from a navigator panic.
struct ProcessingGuard<'a> {
    orchestrator: &'a mut Orchestrator,
}

impl<'a> ProcessingGuard<'a> {
    fn enter(orchestrator: &'a mut Orchestrator) -> Self {
        orchestrator.state.phase = Phase::Processing;
        Self { orchestrator }
    }
}

impl Deref for ProcessingGuard<'_> {
    type Target = Orchestrator;

    fn deref(&self) -> &Orchestrator {
        self.orchestrator
    }
}

impl DerefMut for ProcessingGuard<'_> {
    fn deref_mut(&mut self) -> &mut Orchestrator {
        self.orchestrator
    }
}

impl Drop for ProcessingGuard<'_> {
    fn drop(&mut self) {
        self.orchestrator.state.phase = Phase::Idle;
    }
}

/// Drives one query at a time from raw text to a navigation decision.
pub struct Orchestrator {
    matcher: RouteMatcher,
    sanitizer: LinkSanitizer,
    config: NavigatorConfig,
    state: SessionState,
    store: Option<Box<dyn KvStore>>,
    profile: Option<UserProfile>,
}

impl Orchestrator {
    pub fn new(registry: Arc<PathRegistry>, catalog: ProductCatalog, config: NavigatorConfig) -> Self {
        let sanitizer = LinkSanitizer::new(
            registry.clone(),
            catalog,
            &config.links.products_route,
            &config.links.fallback_path,
        );
        Self {
            matcher: RouteMatcher::new(registry),
            sanitizer,
            state: SessionState::new(config.history.max_entries),
            config,
            store: None,
            profile: None,
        }
    }

    /// Attach a persistence collaborator and restore search history from it.
    pub fn with_store(mut self, store: Box<dyn KvStore>) -> Self {
        match load_json::<Vec<SearchHistoryItem>>(store.as_ref(), SEARCH_HISTORY_KEY) {
            Ok(Some(items)) => self.state.search_history.replace(items),
            Ok(None) => {}
            Err(error) => tracing::warn!(%error, "ignoring stored search history"),
        }
        self.store = Some(store);
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn registry(&self) -> &PathRegistry {
        self.matcher.registry()
    }

    pub fn sanitizer(&self) -> &LinkSanitizer {
        &self.sanitizer
    }

    /// Handle one query. Returns `false` only for blank input, which leaves a
    /// warning notice and schedules nothing.
    pub fn process_input(&mut self, input: &str, navigator: &dyn Navigator) -> bool {
        if input.trim().is_empty() {
            tracing::warn!("rejected blank query");
            self.state.notice = Some(Notice::new(NoticeKind::Warning, EMPTY_QUERY_TEXT));
            return false;
        }

        let mut session = ProcessingGuard::enter(self);
        session.state.user_input = input.to_string();
        session.state.last_processed_input = input.to_string();
        session.state.notice = None;
        session.state.suggestions.clear();

        let result = session.matcher.find_best_match(input);
        session.state.match_result = result.clone();

        let outcome = match result {
            Some(matched) if matched.confidence > session.config.routing.confidence_threshold => {
                session.state.phase = Phase::Matched;
                session.navigate_to_match(input, matched, navigator);
                Phase::Matched
            }
            _ => {
                session.state.phase = Phase::Unmatched;
                session.redirect_to_search(input, navigator);
                Phase::Unmatched
            }
        };

        session.state.last_outcome = Some(outcome);
        true
    }

    fn navigate_to_match(&mut self, input: &str, matched: MatchResult, navigator: &dyn Navigator) {
        let description = self.route_description(&matched.route).unwrap_or_default();
        let notice = Notice::new(NoticeKind::Success, format!("\"{description}\" 페이지로 이동합니다."));

        tracing::info!(
            route = %matched.route,
            confidence = matched.confidence,
            "navigating to matched route"
        );
        navigator.navigate(NavigationRequest {
            target: NavigationTarget::Route {
                path: matched.route,
            },
            delay: self.config.routing.navigation_delay(),
        });

        self.add_to_history(InteractionRecord {
            query: input.to_string(),
            response: notice.text.clone(),
            timestamp: Utc::now().to_rfc3339(),
        });
        self.state.notice = Some(notice);
    }

    fn redirect_to_search(&mut self, input: &str, navigator: &dyn Navigator) {
        self.state.suggestions = suggest(
            self.matcher.registry(),
            input,
            self.config.routing.max_suggestions,
        );

        tracing::info!(suggestions = self.state.suggestions.len(), "redirecting to search");
        navigator.navigate(NavigationRequest {
            target: NavigationTarget::Search {
                path: self.config.routing.search_path.clone(),
                query: input.to_string(),
            },
            delay: Duration::ZERO,
        });

        self.state.notice = Some(Notice::new(NoticeKind::Info, SEARCH_REDIRECT_TEXT));
    }

    pub fn match_query(&self, input: &str) -> Option<MatchResult> {
        self.matcher.find_best_match(input)
    }

    pub fn page_by_path(&self, path: &str) -> Option<&PageEntry> {
        self.registry().find_by_path(path)
    }

    pub fn route_description(&self, route: &str) -> Option<String> {
        self.registry().route_description(route).map(str::to_string)
    }

    pub fn add_to_history(&mut self, record: InteractionRecord) {
        self.state.query_history.push(record);
    }

    /// Record a search and persist the list. Persistence failures are logged
    /// and otherwise ignored.
    pub fn add_search_history(&mut self, item: SearchHistoryItem) {
        self.state.search_history.push(item);
        let items = self.state.search_history.to_vec();
        if let Some(store) = self.store.as_deref_mut() {
            if let Err(error) = save_json(store, SEARCH_HISTORY_KEY, &items) {
                tracing::warn!(%error, "failed to persist search history");
            }
        }
    }

    /// The reader's profile, loaded from the store on first use. An
    /// unreadable stored profile counts as no profile.
    pub fn user_profile(&mut self) -> Option<&UserProfile> {
        if self.profile.is_none() {
            if let Some(store) = self.store.as_deref() {
                self.profile = match load_json::<UserProfile>(store, USER_PROFILE_KEY) {
                    Ok(profile) => profile,
                    Err(error) => {
                        tracing::warn!(%error, "ignoring stored user profile");
                        None
                    }
                };
            }
        }
        self.profile.as_ref()
    }

    pub fn set_user_profile(&mut self, profile: UserProfile) {
        if let Some(store) = self.store.as_deref_mut() {
            if let Err(error) = save_json(store, USER_PROFILE_KEY, &profile) {
                tracing::warn!(%error, "failed to persist user profile");
            }
        }
        self.profile = Some(profile);
    }

    /// Sanitize the links in a backend answer for the current reader.
    pub fn present_answer(&mut self, answer: AssistantAnswer) -> AssistantAnswer {
        let options = SanitizeOptions::for_profile(self.user_profile());
        let text = self.sanitizer.sanitize(&answer.answer, options);
        AssistantAnswer {
            has_links: detect_links(&text),
            answer: text,
            ..answer
        }
    }

    /// Clear the current query; history and profile are kept.
    pub fn reset(&mut self) {
        self.state.user_input.clear();
        self.state.last_processed_input.clear();
        self.state.match_result = None;
        self.state.notice = None;
        self.state.suggestions.clear();
        self.state.last_outcome = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::ContentType;
    use crate::session::profile::DigitalProficiency;
    use crate::storage::MemoryKvStore;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNavigator {
        requests: Mutex<Vec<NavigationRequest>>,
    }

    impl RecordingNavigator {
        fn requests(&self) -> Vec<NavigationRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, request: NavigationRequest) {
            self.requests.lock().unwrap().push(request);
        }
    }

    fn orchestrator() -> Orchestrator {
        Orchestrator::new(
            Arc::new(PathRegistry::default_site()),
            ProductCatalog::new(),
            NavigatorConfig::default(),
        )
    }

    fn search_item(query: &str) -> SearchHistoryItem {
        SearchHistoryItem {
            query: query.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            result: AssistantAnswer::error("offline"),
        }
    }

    #[test]
    fn blank_input_warns_and_schedules_nothing() {
        let mut orch = orchestrator();
        let nav = RecordingNavigator::default();

        assert!(!orch.process_input("", &nav));
        assert!(!orch.process_input("   ", &nav));

        assert!(nav.requests().is_empty());
        assert_eq!(orch.state().phase, Phase::Idle);
        let notice = orch.state().notice.clone().unwrap();
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert!(orch.state().query_history.is_empty());
    }

    #[test]
    fn confident_match_schedules_delayed_navigation() {
        let mut orch = orchestrator();
        let nav = RecordingNavigator::default();

        assert!(orch.process_input("보험 상품 추천해줘", &nav));

        let requests = nav.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].target,
            NavigationTarget::Route { path: "/products".to_string() }
        );
        assert_eq!(requests[0].delay, Duration::from_millis(300));

        let state = orch.state();
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.last_outcome, Some(Phase::Matched));
        let notice = state.notice.clone().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert!(notice.text.contains("다양한 보험 상품 정보"));
        assert_eq!(state.query_history.len(), 1);
        assert_eq!(state.query_history.latest().unwrap().response, notice.text);
    }

    #[test]
    fn weak_match_redirects_to_search_with_suggestions() {
        let mut orch = orchestrator();
        let nav = RecordingNavigator::default();

        assert!(orch.process_input("오늘 날씨 어때", &nav));

        let requests = nav.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].delay, Duration::ZERO);
        assert_eq!(requests[0].target.href(), "/search?q=%EC%98%A4%EB%8A%98%20%EB%82%A0%EC%94%A8%20%EC%96%B4%EB%95%8C");

        let state = orch.state();
        assert_eq!(state.last_outcome, Some(Phase::Unmatched));
        assert_eq!(state.notice.as_ref().unwrap().kind, NoticeKind::Info);
        assert!(!state.suggestions.is_empty());
        assert!(state.suggestions.len() <= 5);
        assert!(state.query_history.is_empty());
    }

    #[test]
    fn navigator_panic_still_returns_to_idle() {
        struct PanickingNavigator;

        impl Navigator for PanickingNavigator {
            fn navigate(&self, _request: NavigationRequest) {
                panic!("router unavailable");
            }
        }

        let mut orch = orchestrator();
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            orch.process_input("보험 상품 추천해줘", &PanickingNavigator)
        }));
        assert!(outcome.is_err());
        assert_eq!(orch.state().phase, Phase::Idle);

        let nav = RecordingNavigator::default();
        assert!(orch.process_input("오늘 날씨 어때", &nav));
        assert_eq!(orch.state().phase, Phase::Idle);
        assert_eq!(orch.state().last_outcome, Some(Phase::Unmatched));
    }

    #[test]
    fn threshold_is_configurable() {
        let mut config = NavigatorConfig::default();
        config.routing.confidence_threshold = 1.0;
        let mut orch = Orchestrator::new(
            Arc::new(PathRegistry::default_site()),
            ProductCatalog::new(),
            config,
        );
        let nav = RecordingNavigator::default();

        orch.process_input("보험 상품 추천해줘", &nav);
        assert_eq!(orch.state().last_outcome, Some(Phase::Unmatched));
        assert!(matches!(nav.requests()[0].target, NavigationTarget::Search { .. }));
    }

    #[test]
    fn history_keeps_twenty_newest() {
        let mut orch = orchestrator();
        let nav = RecordingNavigator::default();
        for i in 0..25 {
            orch.process_input(&format!("상담 문의 {i}"), &nav);
        }
        let history = &orch.state().query_history;
        assert_eq!(history.len(), 20);
        assert_eq!(history.latest().unwrap().query, "상담 문의 24");
        assert_eq!(history.iter().last().unwrap().query, "상담 문의 5");
    }

    #[test]
    fn reset_clears_query_but_keeps_history() {
        let mut orch = orchestrator();
        let nav = RecordingNavigator::default();
        orch.process_input("회사 소개", &nav);
        orch.reset();

        let state = orch.state();
        assert!(state.user_input.is_empty());
        assert!(state.match_result.is_none());
        assert!(state.notice.is_none());
        assert_eq!(state.query_history.len(), 1);
    }

    #[test]
    fn search_history_is_persisted_and_restored() {
        let mut orch = orchestrator().with_store(Box::new(MemoryKvStore::new()));
        orch.add_search_history(search_item("암보험"));
        orch.add_search_history(search_item("청구"));

        let store = orch.store.take().unwrap();
        let restored = orchestrator().with_store(store);
        let queries: Vec<&str> = restored
            .state()
            .search_history
            .iter()
            .map(|item| item.query.as_str())
            .collect();
        assert_eq!(queries, vec!["청구", "암보험"]);
    }

    #[test]
    fn unreadable_profile_counts_as_none() {
        let mut store = MemoryKvStore::new();
        store.set(USER_PROFILE_KEY, "{ broken".to_string()).unwrap();
        let mut orch = orchestrator().with_store(Box::new(store));
        assert!(orch.user_profile().is_none());
    }

    #[test]
    fn stored_profile_with_odd_field_types_keeps_assistance() {
        let mut store = MemoryKvStore::new();
        store
            .set(USER_PROFILE_KEY, r#"{"digitalProficiency":"low","age":"72"}"#.to_string())
            .unwrap();
        let mut orch = orchestrator().with_store(Box::new(store));

        let profile = orch.user_profile().expect("profile");
        assert!(profile.needs_assistance());
        assert_eq!(profile.age, None);
        assert!(SanitizeOptions::for_profile(orch.user_profile()).assisted);
    }

    #[test]
    fn profile_round_trips_through_store() {
        let mut orch = orchestrator().with_store(Box::new(MemoryKvStore::new()));
        orch.set_user_profile(UserProfile {
            name: Some("김보험".to_string()),
            ..UserProfile::default()
        });
        let store = orch.store.take().unwrap();

        let mut fresh = orchestrator().with_store(store);
        assert_eq!(
            fresh.user_profile().and_then(|p| p.name.clone()),
            Some("김보험".to_string())
        );
    }

    #[test]
    fn present_answer_sanitizes_for_profile() {
        let mut orch = orchestrator();
        orch.set_user_profile(UserProfile {
            digital_proficiency: Some(DigitalProficiency::Low),
            ..UserProfile::default()
        });
        let answer = AssistantAnswer {
            answer: "자세한 내용은 [보험금 청구 절차 안내](/청구?from=ai) 참고".to_string(),
            recommended_path: Some("/claim".to_string()),
            confidence: 0.7,
            content_type: ContentType::SearchResults,
            has_links: false,
        };

        let presented = orch.present_answer(answer);
        assert_eq!(
            presented.answer,
            "자세한 내용은 [보험금 청구 절차 안내 (청구 절차 확인)](/claim) 참고"
        );
        assert!(presented.has_links);
        assert_eq!(presented.recommended_path.as_deref(), Some("/claim"));
    }
}
