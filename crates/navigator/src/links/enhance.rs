//! Call-to-action wording for internal link text.

/// Words that already mark link text as actionable. Matched as
/// case-insensitive substrings.
pub const CALL_TO_ACTION: &[&str] = &[
    "클릭", "보기", "바로가기", "이동", "확인", "신청", "click", "view", "go to", "visit",
];

/// Path fragment to action phrase, first match wins. Every phrase contains a
/// call-to-action word so a second pass leaves it alone.
const ACTION_PHRASES: &[(&str, &str)] = &[
    ("products", "상품 보기"),
    ("claim", "청구 절차 확인"),
    ("consultation", "상담 신청하기"),
    ("faq", "자주 묻는 질문 보기"),
    ("mypage", "내 정보 보기"),
    ("about", "회사 소개 보기"),
];

const DEFAULT_ACTION_PHRASE: &str = "바로가기";

/// Short link text is rewritten regardless of the reader.
const SHORT_TEXT_CHARS: usize = 5;

/// Below this length the phrase is appended inline, otherwise in parentheses.
const INLINE_PHRASE_CHARS: usize = 10;

pub fn has_call_to_action(text: &str) -> bool {
    let lowered = text.to_lowercase();
    CALL_TO_ACTION.iter().any(|phrase| lowered.contains(phrase))
}

pub fn should_enhance(text: &str, assisted: bool) -> bool {
    (assisted || text.chars().count() < SHORT_TEXT_CHARS) && !has_call_to_action(text)
}

pub fn action_phrase(path: &str) -> &'static str {
    let lowered = path.to_lowercase();
    ACTION_PHRASES
        .iter()
        .find(|(fragment, _)| lowered.contains(fragment))
        .map(|(_, phrase)| *phrase)
        .unwrap_or(DEFAULT_ACTION_PHRASE)
}

/// Link text for `path`, with an action phrase added when warranted.
pub fn enhance_link_text(text: &str, path: &str, assisted: bool) -> String {
    if !should_enhance(text, assisted) {
        return text.to_string();
    }
    let phrase = action_phrase(path);
    if text.chars().count() < INLINE_PHRASE_CHARS {
        format!("{text} {phrase}")
    } else {
        format!("{text} ({phrase})")
    }
}
