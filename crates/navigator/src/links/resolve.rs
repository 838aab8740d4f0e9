use std::sync::Arc;

use crate::registry::PathRegistry;

use super::catalog::{overlaps, ProductCatalog};

/// Fuzzy lookup for internal paths that are not exact registry matches.
#[derive(Debug, Clone)]
pub struct PathResolver {
    registry: Arc<PathRegistry>,
    catalog: ProductCatalog,
    products_route: String,
}

impl PathResolver {
    pub fn new(registry: Arc<PathRegistry>, catalog: ProductCatalog, products_route: &str) -> Self {
        Self {
            registry,
            catalog,
            products_route: products_route.to_string(),
        }
    }

    pub fn registry(&self) -> &PathRegistry {
        &self.registry
    }

    /// Resolve `path` to a registry path, first hit wins:
    ///
    /// 1. case-insensitive exact path
    /// 2. a path segment and a page keyword contain one another
    /// 3. the path and a page title or description contain one another
    /// 4. the path names a catalog product, giving the products route
    pub fn resolve(&self, path: &str) -> Option<String> {
        let decoded = decode(path);
        let lowered = decoded.to_lowercase();

        if let Some(page) = self
            .registry
            .all_entries()
            .iter()
            .find(|page| page.path.to_lowercase() == lowered)
        {
            tracing::debug!(path, resolved = %page.path, "resolved by case-insensitive path");
            return Some(page.path.clone());
        }

        for segment in lowered.split('/').filter(|s| !s.is_empty()) {
            for page in self.registry.all_entries() {
                if page
                    .keywords
                    .iter()
                    .any(|kw| overlaps(&kw.to_lowercase(), segment)) {
                    tracing::debug!(path, segment, resolved = %page.path, "resolved by keyword");
                    return Some(page.path.clone());
                }
            }
        }

        let needle = lowered.trim_matches('/');
        if needle.is_empty() {
            return None;
        }

        for page in self.registry.all_entries() {
            if overlaps(&page.title.to_lowercase(), needle)
                || overlaps(&page.description.to_lowercase(), needle)
            {
                tracing::debug!(path, resolved = %page.path, "resolved by title or description");
                return Some(page.path.clone());
            }
        }

        if self.catalog.matches(needle) {
            tracing::debug!(path, resolved = %self.products_route, "resolved by product catalog");
            return Some(self.products_route.clone());
        }

        None
    }
}

fn decode(path: &str) -> String {
    urlencoding::decode(path)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
