use crate::search::Product;

#[derive(Debug, Clone)]
struct CatalogItem {
    name: String,
    description: String,
}

/// Product names and descriptions known to the site, lowercased.
///
/// Used as the last resort when resolving a link path that names a product
/// rather than a page.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    items: Vec<CatalogItem>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_products(products: &[Product]) -> Self {
        let mut catalog = Self::new();
        for product in products {
            catalog.push(&product.name, &product.description);
        }
        catalog
    }

    pub fn push(&mut self, name: &str, description: &str) {
        self.items.push(CatalogItem {
            name: name.to_lowercase(),
            description: description.to_lowercase(),
        });
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when `needle` and a product name or description contain one another.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        if needle.is_empty() {
            return false;
        }
        self.items.iter().any(|item| {
            overlaps(&item.name, &needle) || overlaps(&item.description, &needle)
        })
    }
}

/// Substring containment in either direction, ignoring empty haystacks.
pub(crate) fn overlaps(candidate: &str, needle: &str) -> bool {
    !candidate.is_empty()
        && !needle.is_empty()
        && (candidate.contains(needle) || needle.contains(candidate))
}
