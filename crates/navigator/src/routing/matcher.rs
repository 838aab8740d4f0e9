use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::registry::{PathRegistry, RouteGroup};

/// Best route for a query with its heuristic confidence in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub route: String,
    pub confidence: f64,
}

/// Scores free text against every keyword group in the registry.
#[derive(Debug, Clone)]
pub struct RouteMatcher {
    registry: Arc<PathRegistry>,
}

/// `min(1, count / 3 + covered / (input_len * 0.7))`.
///
/// Rewards both the number of distinct keyword hits and the share of the
/// input those hits cover. Lengths are counted in chars.
pub fn keyword_confidence(matched_count: usize, matched_chars: usize, input_chars: usize) -> f64 {
    if matched_count == 0 || input_chars == 0 {
        return 0.0;
    }
    let by_count = matched_count as f64 / 3.0;
    let by_coverage = matched_chars as f64 / (input_chars as f64 * 0.7);
    (by_count + by_coverage).min(1.0)
}

impl RouteMatcher {
    pub fn new(registry: Arc<PathRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &PathRegistry {
        &self.registry
    }

    /// Route whose keyword group scores highest against `input`.
    ///
    /// Ties keep the group registered first. Blank input never matches.
    pub fn find_best_match(&self, input: &str) -> Option<MatchResult> {
        if input.trim().is_empty() {
            return None;
        }

        let lowered = input.to_lowercase();
        let input_chars = input.chars().count();

        let mut best: Option<MatchResult> = None;
        for group in self.registry.groups() {
            let confidence = score_group(group, &lowered, input_chars);
            if confidence <= 0.0 {
                continue;
            }
            let better = best
                .as_ref()
                .map_or(true, |current| confidence > current.confidence);
            if better {
                best = Some(MatchResult {
                    route: group.route.clone(),
                    confidence,
                });
            }
        }

        match &best {
            Some(result) => tracing::debug!(
                route = %result.route,
                confidence = result.confidence,
                "route matched"
            ),
            None => tracing::debug!("no route matched"),
        }
        best
    }
}

fn score_group(group: &RouteGroup, lowered_input: &str, input_chars: usize) -> f64 {
    let matched: Vec<String> = group
        .keywords
        .iter()
        .map(|kw| kw.to_lowercase())
        .filter(|kw| !kw.is_empty() && lowered_input.contains(kw.as_str()))
        .collect();
    let covered: usize = matched.iter().map(|kw| kw.chars().count()).sum();
    keyword_confidence(matched.len(), covered, input_chars)
}
