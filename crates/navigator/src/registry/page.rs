use serde::{Deserialize, Serialize};

/// A known site section.
///
/// `title` and `description` only feed fuzzy path resolution; routing
/// decisions are made from `keywords`. The first keyword is the entry's
/// representative term when suggestions are backfilled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEntry {
    pub path: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

impl PageEntry {
    pub fn new(path: &str, title: &str, description: &str, keywords: &[&str]) -> Self {
        Self {
            path: path.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// The keyword group this page contributes to the matcher, if any.
    pub fn route_group(&self) -> Option<RouteGroup> {
        if self.keywords.is_empty() {
            return None;
        }
        Some(RouteGroup {
            route: self.path.clone(),
            description: self.description.clone(),
            keywords: self.keywords.clone(),
        })
    }
}

/// A keyword set mapped to a target route.
///
/// Several groups may target the same route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteGroup {
    pub route: String,
    /// Human-readable summary surfaced when the matcher picks this route.
    pub description: String,
    pub keywords: Vec<String>,
}

impl RouteGroup {
    pub fn new(route: &str, description: &str, keywords: &[&str]) -> Self {
        Self {
            route: route.to_string(),
            description: description.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Representative keyword, used for suggestion backfill.
    pub fn representative(&self) -> Option<&str> {
        self.keywords.first().map(String::as_str)
    }
}
