use serde::{Deserialize, Serialize};

/// Coarse page category guessed from a query when search is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageType {
    Home,
    Products,
    Claim,
    MyPage,
    Consultation,
    Faq,
}

impl PageType {
    /// First rule that hits wins, so "보험금" lands on products via "보험".
    pub fn infer(query: &str) -> Self {
        let lowered = query.to_lowercase();
        let has = |needle: &str| lowered.contains(needle);

        if has("상품") || has("보험") {
            PageType::Products
        } else if has("청구") || has("보험금") {
            PageType::Claim
        } else if has("내") || has("계약") || has("가입") {
            PageType::MyPage
        } else if has("상담") || has("문의") {
            PageType::Consultation
        } else if has("질문") || has("faq") {
            PageType::Faq
        } else {
            PageType::Home
        }
    }

    pub fn recommended_path(self) -> &'static str {
        match self {
            PageType::Home => "/",
            PageType::Products => "/products",
            PageType::Claim => "/claim",
            PageType::MyPage => "/mypage",
            PageType::Consultation => "/consultation",
            PageType::Faq => "/faq",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_order_decides_overlaps() {
        assert_eq!(PageType::infer("보험금 청구"), PageType::Products);
        assert_eq!(PageType::infer("청구 서류"), PageType::Claim);
        assert_eq!(PageType::infer("내 계약"), PageType::MyPage);
        assert_eq!(PageType::infer("상담 예약"), PageType::Consultation);
        assert_eq!(PageType::infer("FAQ"), PageType::Faq);
        assert_eq!(PageType::infer("hello"), PageType::Home);
    }

    #[test]
    fn paths() {
        assert_eq!(PageType::Home.recommended_path(), "/");
        assert_eq!(PageType::MyPage.recommended_path(), "/mypage");
    }
}
