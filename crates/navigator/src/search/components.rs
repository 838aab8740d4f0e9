use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::answer::{answer_from_search, detect_links, AssistantAnswer, ContentType};
use super::page_type::PageType;
use super::types::SearchResults;

/// Confidence reported for answers assembled from page components.
pub const DYNAMIC_UI_CONFIDENCE: f64 = 0.6;

const PREPARING_TEXT: &str = "요청하신 정보를 준비하고 있습니다.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    HeroSection,
    ProductCard,
    Notice,
    FaqItem,
    #[serde(other)]
    Other,
}

/// One block of a generated page layout, as returned by the UI backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiComponent {
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default)]
    pub priority: i32,
}

impl UiComponent {
    fn summary(&self) -> String {
        match self.kind {
            ComponentKind::HeroSection => format!("{}: {}", self.title, self.content),
            ComponentKind::ProductCard => format!("추천 상품: {} - {}", self.title, self.content),
            ComponentKind::Notice => format!("안내: {}", self.content),
            ComponentKind::FaqItem => format!("Q: {}\nA: {}", self.title, self.content),
            ComponentKind::Other if !self.content.is_empty() => self.content.clone(),
            ComponentKind::Other => self.title.clone(),
        }
    }
}

/// Plain answer text for a component layout, one paragraph per component.
pub fn answer_from_components(components: &[UiComponent]) -> String {
    if components.is_empty() {
        return PREPARING_TEXT.to_string();
    }
    components
        .iter()
        .map(UiComponent::summary)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Answer built from a component layout when search was unavailable.
///
/// The recommended path comes from the page type guessed for `query`.
pub fn fallback_answer(query: &str, components: &[UiComponent]) -> AssistantAnswer {
    let page_type = PageType::infer(query);
    let answer = answer_from_components(components);
    AssistantAnswer {
        has_links: detect_links(&answer),
        answer,
        recommended_path: Some(page_type.recommended_path().to_string()),
        confidence: DYNAMIC_UI_CONFIDENCE,
        content_type: ContentType::DynamicUi,
    }
}

/// Answer a free-text query: search results first, then a generated layout
/// for the inferred page type, then an error answer naming the search failure.
///
/// `layout` is only called when search failed.
pub fn answer_with_fallback<E, F>(
    query: &str,
    search: Result<SearchResults, E>,
    layout: F,
) -> AssistantAnswer
where
    E: Display,
    F: FnOnce(PageType) -> Result<Vec<UiComponent>, E>,
{
    let search_error = match search {
        Ok(results) => return answer_from_search(query, &results),
        Err(error) => error,
    };
    tracing::warn!(error = %search_error, "search failed, falling back to page layout");

    match layout(PageType::infer(query)) {
        Ok(components) => fallback_answer(query, &components),
        Err(layout_error) => {
            tracing::warn!(error = %layout_error, "page layout failed");
            AssistantAnswer::error(&search_error.to_string())
        }
    }
}
