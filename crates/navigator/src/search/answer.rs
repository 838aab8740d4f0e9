use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::types::SearchResults;

static LINK_DETECT_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)(https?://\S+)|(<a[^>]*>)|(\[[^\]]+\]\([^)]+\))").ok()
});

const PRODUCTS_SHOWN: usize = 3;
const FAQS_SHOWN: usize = 2;
const TESTIMONIALS_SHOWN: usize = 2;
const FAQ_EXCERPT_CHARS: usize = 100;
const TESTIMONIAL_EXCERPT_CHARS: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    SearchResults,
    DynamicUi,
    Error,
}

/// Answer shown for a free-text query, before link sanitization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantAnswer {
    pub answer: String,
    pub recommended_path: Option<String>,
    pub confidence: f64,
    pub content_type: ContentType,
    pub has_links: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSize {
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Simplicity {
    Minimal,
    Standard,
}

/// Presentation hints attached to an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSuggestions {
    pub font_size: FontSize,
    pub contrast: String,
    pub simplicity: Simplicity,
    pub interaction_method: String,
}

impl AssistantAnswer {
    /// Larger type for less certain answers, a minimal layout for errors.
    pub fn ui_suggestions(&self) -> UiSuggestions {
        UiSuggestions {
            font_size: if self.confidence > 0.7 {
                FontSize::Medium
            } else {
                FontSize::Large
            },
            contrast: "high".to_string(),
            simplicity: if self.content_type == ContentType::Error {
                Simplicity::Minimal
            } else {
                Simplicity::Standard
            },
            interaction_method: "touch".to_string(),
        }
    }

    /// Stand-in answer when the backend could not be reached.
    pub fn error(reason: &str) -> Self {
        Self {
            answer: format!("죄송합니다, 요청을 처리하는 중 오류가 발생했습니다. {reason}"),
            recommended_path: None,
            confidence: 0.0,
            content_type: ContentType::Error,
            has_links: false,
        }
    }
}

pub fn answer_from_search(query: &str, results: &SearchResults) -> AssistantAnswer {
    let answer = compose_answer(query, results);
    AssistantAnswer {
        has_links: detect_links(&answer),
        answer,
        recommended_path: recommended_path(results).map(str::to_string),
        confidence: search_confidence(results),
        content_type: ContentType::SearchResults,
    }
}

/// Markdown summary of the top results in each category.
pub fn compose_answer(query: &str, results: &SearchResults) -> String {
    if results.is_empty() {
        return format!("'{query}'에 대한 검색 결과를 찾을 수 없습니다. 다른 검색어를 시도해보세요.");
    }

    let mut answer = format!("'{query}'에 대한 검색 결과입니다.\n\n");

    if !results.products.is_empty() {
        answer.push_str(&format!("**관련 보험 상품 ({}개)**\n", results.products.len()));
        for (index, product) in results.products.iter().take(PRODUCTS_SHOWN).enumerate() {
            let price = product
                .base_price
                .map(format_won)
                .unwrap_or_else(|| "-".to_string());
            answer.push_str(&format!("{}. **{}**\n", index + 1, product.name));
            answer.push_str(&format!("   {}\n", product.description));
            answer.push_str(&format!("   보험료: {price}원/월\n\n"));
        }
    }

    if !results.faqs.is_empty() {
        answer.push_str(&format!("**관련 FAQ ({}개)**\n", results.faqs.len()));
        for (index, faq) in results.faqs.iter().take(FAQS_SHOWN).enumerate() {
            answer.push_str(&format!("{}. **{}**\n", index + 1, faq.question));
            answer.push_str(&format!(
                "   {}...\n\n",
                excerpt(&faq.answer, FAQ_EXCERPT_CHARS)
            ));
        }
    }

    if !results.testimonials.is_empty() {
        answer.push_str(&format!("**고객 후기 ({}개)**\n", results.testimonials.len()));
        for (index, testimonial) in results.testimonials.iter().take(TESTIMONIALS_SHOWN).enumerate() {
            answer.push_str(&format!(
                "{}. **{}** (⭐{}/5)\n",
                index + 1,
                testimonial.title,
                testimonial.rating
            ));
            answer.push_str(&format!(
                "   {}...\n\n",
                excerpt(&testimonial.content, TESTIMONIAL_EXCERPT_CHARS)
            ));
        }
    }

    answer
}

pub fn recommended_path(results: &SearchResults) -> Option<&'static str> {
    if !results.products.is_empty() {
        Some("/products")
    } else if !results.faqs.is_empty() {
        Some("/faq")
    } else {
        None
    }
}

pub fn search_confidence(results: &SearchResults) -> f64 {
    match results.total() {
        0 => 0.0,
        1..=2 => 0.5,
        3..=4 => 0.7,
        _ => 0.9,
    }
}

pub fn detect_links(text: &str) -> bool {
    LINK_DETECT_RE
        .as_ref()
        .is_some_and(|re| re.is_match(text))
}

fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Whole won with thousands separators, e.g. `35,000`.
fn format_won(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{}", rounded.abs() as u64);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
