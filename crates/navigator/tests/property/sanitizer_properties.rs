use std::sync::Arc;

use navigator::{LinkSanitizer, PathRegistry, ProductCatalog, SanitizeOptions};
use proptest::prelude::*;

fn sanitizer() -> LinkSanitizer {
    let mut catalog = ProductCatalog::new();
    catalog.push("든든 암보험", "암 진단 시 목돈 보장");
    LinkSanitizer::new(Arc::new(PathRegistry::default_site()), catalog, "/products", "/")
}

fn link_text() -> impl Strategy<Value = String> {
    "[a-zA-Z가-힣 ]{1,16}"
}

fn internal_target() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("/products".to_string()),
        Just("/claim?x=1".to_string()),
        Just("/FAQ".to_string()),
        Just("consultation".to_string()),
        "/[a-z가-힣]{1,10}(\\?[a-z]=[0-9])?",
    ]
}

proptest! {
    #[test]
    fn external_links_are_never_rewritten(
        text in link_text(),
        host in "[a-z]{1,10}",
        path in "[a-z/]{0,10}",
        secure in any::<bool>(),
        assisted in any::<bool>(),
    ) {
        let scheme = if secure { "https" } else { "http" };
        let markdown = format!("see [{text}]({scheme}://{host}.com/{path}) now");
        let out = sanitizer().sanitize(&markdown, SanitizeOptions { assisted });
        prop_assert_eq!(out, markdown);
    }

    #[test]
    fn every_internal_target_lands_on_a_registry_path(
        text in link_text(),
        target in internal_target(),
        assisted in any::<bool>(),
    ) {
        let s = sanitizer();
        let out = s.sanitize(&format!("[{text}]({target})"), SanitizeOptions { assisted });
        let tokens = LinkSanitizer::scan(&out);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert!(s.resolver().registry().find_by_path(&tokens[0].target_path).is_some());
    }

    #[test]
    fn second_pass_keeps_paths(
        text in link_text(),
        target in internal_target(),
        assisted in any::<bool>(),
    ) {
        let s = sanitizer();
        let options = SanitizeOptions { assisted };
        let once = s.sanitize(&format!("[{text}]({target})"), options);
        let twice = s.sanitize(&once, options);
        let first: Vec<String> = LinkSanitizer::scan(&once).into_iter().map(|t| t.target_path).collect();
        let second: Vec<String> = LinkSanitizer::scan(&twice).into_iter().map(|t| t.target_path).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unresolvable_paths_go_to_root(text in link_text(), junk in "[qxz]{3,8}") {
        let out = sanitizer().sanitize(&format!("[{text}](/{junk})"), SanitizeOptions::default());
        let tokens = LinkSanitizer::scan(&out);
        prop_assert_eq!(tokens[0].target_path.as_str(), "/");
    }

    #[test]
    fn text_without_brackets_is_untouched(text in "[^\\[\\]]{0,80}") {
        prop_assert_eq!(sanitizer().sanitize(&text, SanitizeOptions::default()), text);
    }
}
