use std::sync::Arc;

use navigator::routing::{keyword_confidence, suggest};
use navigator::{PathRegistry, RouteGroup, RouteMatcher};
use proptest::prelude::*;

fn matcher(groups: Vec<RouteGroup>) -> RouteMatcher {
    RouteMatcher::new(Arc::new(PathRegistry::new(Vec::new(), groups).unwrap()))
}

proptest! {
    #[test]
    fn confidence_stays_in_unit_interval(input in ".{0,60}") {
        let matcher = RouteMatcher::new(Arc::new(PathRegistry::default_site()));
        if let Some(result) = matcher.find_best_match(&input) {
            prop_assert!(result.confidence > 0.0);
            prop_assert!(result.confidence <= 1.0);
        }
    }

    #[test]
    fn whitespace_never_matches(input in "[ \t\n]{0,20}") {
        let matcher = RouteMatcher::new(Arc::new(PathRegistry::default_site()));
        prop_assert!(matcher.find_best_match(&input).is_none());
    }

    #[test]
    fn single_keyword_matches_formula(
        prefix in "[a-z ]{0,20}",
        keyword in "[A-Z]{1,8}",
        suffix in "[a-z ]{0,20}",
    ) {
        let input = format!("{prefix}{keyword}{suffix}");
        let matcher = matcher(vec![RouteGroup::new("/only", "only", &[keyword.as_str()])]);
        let result = matcher.find_best_match(&input).unwrap();
        let expected = (1.0 / 3.0
            + keyword.chars().count() as f64 / (input.chars().count() as f64 * 0.7))
            .min(1.0);
        prop_assert!((result.confidence - expected).abs() < 1e-12);
    }

    #[test]
    fn more_distinct_hits_never_lower_confidence(
        words in prop::collection::vec("[a-z]{2,6}", 1..6),
        extra_words in "[a-z ]{0,30}",
    ) {
        let input = format!("{} {extra_words}", words.join(" "));
        let mut previous = 0.0;
        for count in 1..=words.len() {
            let keywords: Vec<&str> = words[..count].iter().map(String::as_str).collect();
            let result = matcher(vec![RouteGroup::new("/r", "r", &keywords)])
                .find_best_match(&input)
                .unwrap();
            prop_assert!(result.confidence >= previous);
            previous = result.confidence;
        }
    }

    #[test]
    fn confidence_formula_is_monotone_in_count(
        count in 1usize..10,
        chars in 1usize..50,
        input in 1usize..200,
    ) {
        prop_assert!(keyword_confidence(count + 1, chars, input) >= keyword_confidence(count, chars, input));
    }

    #[test]
    fn suggestions_are_bounded_and_unique(input in ".{0,30}") {
        let registry = PathRegistry::default_site();
        let suggestions = suggest(&registry, &input, 5);
        prop_assert!(suggestions.len() <= 5);
        let mut deduped = suggestions.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), suggestions.len());
    }
}
