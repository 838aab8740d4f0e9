use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{NavigatorError, NavigatorResult};

use super::page::{PageEntry, RouteGroup};

/// Read-only lookup table of site sections.
///
/// Populated once at startup. Keywords keep their registered casing for
/// display; lookups compare them lowercased.
#[derive(Debug, Clone)]
pub struct PathRegistry {
    pages: Vec<PageEntry>,
    groups: Vec<RouteGroup>,
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    pages: Vec<PageEntry>,
    #[serde(default)]
    groups: Vec<RouteGroup>,
}

impl PathRegistry {
    /// Build a registry from page entries plus supplementary keyword groups.
    ///
    /// Each page with keywords contributes one group, in registration order,
    /// ahead of the supplementary groups.
    pub fn new(pages: Vec<PageEntry>, extra_groups: Vec<RouteGroup>) -> NavigatorResult<Self> {
        {
            let mut seen = HashSet::new();
            for page in &pages {
                if !seen.insert(page.path.as_str()) {
                    return Err(NavigatorError::DuplicatePath(page.path.clone()));
                }
            }
        }
        Ok(Self::assemble(pages, extra_groups))
    }

    /// Parse a catalog of the form `{ "pages": [...], "groups": [...] }`.
    pub fn from_json(data: &str) -> NavigatorResult<Self> {
        let file: RegistryFile = serde_json::from_str(data)?;
        Self::new(file.pages, file.groups)
    }

    pub(crate) fn assemble(pages: Vec<PageEntry>, extra_groups: Vec<RouteGroup>) -> Self {
        let groups: Vec<RouteGroup> = pages
            .iter()
            .filter_map(PageEntry::route_group)
            .chain(extra_groups)
            .filter(|group| !group.keywords.is_empty())
            .collect();

        tracing::debug!(
            pages = pages.len(),
            groups = groups.len(),
            "path registry assembled"
        );

        Self { pages, groups }
    }

    pub fn find_by_path(&self, path: &str) -> Option<&PageEntry> {
        self.pages.iter().find(|page| page.path == path)
    }

    /// Entries in registration order.
    pub fn all_entries(&self) -> &[PageEntry] {
        &self.pages
    }

    /// Keyword groups in matching order.
    pub fn groups(&self) -> &[RouteGroup] {
        &self.groups
    }

    /// Description of the first group targeting `route`.
    pub fn route_description(&self, route: &str) -> Option<&str> {
        self.groups
            .iter()
            .find(|group| group.route == route)
            .map(|group| group.description.as_str())
    }
}
