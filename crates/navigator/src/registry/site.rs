//! Built-in catalog for the insurance site.

use super::page::{PageEntry, RouteGroup};
use super::table::PathRegistry;

pub fn pages() -> Vec<PageEntry> {
    vec![
        PageEntry::new(
            "/products",
            "보험 상품",
            "생명보험, 건강보험, 암보험, 자동차보험 등 다양한 보험 상품 정보",
            &["보험", "상품", "생명", "건강", "암", "자동차", "보장", "보험료", "보험금"],
        ),
        PageEntry::new(
            "/claim",
            "보험금 청구",
            "보험금 청구 방법, 필요 서류, 청구 절차 및 보험금 지급 과정",
            &["청구", "보험금", "서류", "절차", "지급", "청구서", "신청"],
        ),
        PageEntry::new(
            "/mypage",
            "마이페이지",
            "계약 정보, 청구 내역, 개인정보 관리 등 사용자 계정 관리",
            &["계정", "내정보", "계약", "내역", "관리", "마이", "개인"],
        ),
        PageEntry::new(
            "/consultation",
            "상담 서비스",
            "보험 관련 전문 상담사와의 상담 예약 및 문의",
            &["상담", "문의", "질문", "예약", "전화", "상담사", "연락"],
        ),
        PageEntry::new(
            "/faq",
            "자주 묻는 질문",
            "보험 가입, 청구, 상품 관련 자주 묻는 질문과 답변",
            &["FAQ", "질문", "답변", "도움말", "자주", "문의"],
        ),
        PageEntry::new(
            "/about",
            "회사 소개",
            "회사 소개, 비전 및 미션, 연혁, 경영 철학",
            &["소개", "정보", "회사", "기업", "서비스", "어바웃", "비전", "미션"],
        ),
        PageEntry::new("/", "홈", "메인 홈페이지", &["홈", "메인", "시작", "처음"]),
    ]
}

/// Synonym groups, including English terms, layered over the page keywords.
pub fn groups() -> Vec<RouteGroup> {
    vec![
        RouteGroup::new(
            "/consultation",
            "상담 페이지에서는 문의사항을 등록하거나 직접 연락처를 확인할 수 있습니다.",
            &[
                "상담", "문의", "질문", "고객센터", "연락", "도움", "지원", "컨택", "contact", "help",
                "support", "consult",
            ],
        ),
        RouteGroup::new(
            "/about",
            "회사 소개 페이지에서는 저희 서비스와 비전에 대해 알아볼 수 있습니다.",
            &[
                "소개", "정보", "회사", "기업", "서비스", "어바웃", "about", "info", "company",
                "service",
            ],
        ),
        RouteGroup::new(
            "/",
            "메인 페이지로 이동합니다.",
            &["홈", "메인", "처음", "시작", "home", "main", "start"],
        ),
    ]
}

impl PathRegistry {
    /// The built-in site catalog. Paths are known to be unique.
    pub fn default_site() -> Self {
        Self::assemble(pages(), groups())
    }
}
