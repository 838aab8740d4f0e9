//! Backend search payloads, page layouts and the answer text composed from them.

pub mod answer;
pub mod components;
pub mod page_type;
pub mod types;

pub use answer::{
    answer_from_search, compose_answer, detect_links, recommended_path, search_confidence,
    AssistantAnswer, ContentType, FontSize, Simplicity, UiSuggestions,
};
pub use components::{
    answer_from_components, answer_with_fallback, fallback_answer, ComponentKind, UiComponent,
    DYNAMIC_UI_CONFIDENCE,
};
pub use page_type::PageType;
pub use types::{Faq, Product, SearchResults, Testimonial};
