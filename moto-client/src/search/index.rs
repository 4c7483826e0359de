//! In-memory search index
//!
//! Holds the product collection fetched on page mount, paired with a
//! precomputed lower-cased searchable string per product. Filtering is a
//! synchronous substring scan in original collection order — no relevance
//! ranking.

use shared::models::Product;

/// Result lists are truncated to this many entries
pub const MAX_RESULTS: usize = 6;

#[derive(Debug, Clone)]
struct Entry {
    product: Product,
    searchable: String,
}

/// Snapshot of the product collection, queryable without await points
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<Entry>,
    /// Set when the catalog fetch failed; queries then return nothing
    load_failed: bool,
}

impl SearchIndex {
    /// Build an index over a fetched collection, preserving its order
    pub fn new(products: Vec<Product>) -> Self {
        let entries = products
            .into_iter()
            .map(|product| Entry {
                searchable: product.searchable_text(),
                product,
            })
            .collect();
        Self {
            entries,
            load_failed: false,
        }
    }

    /// Degraded index used when the catalog fetch failed
    ///
    /// Search must not crash the page: every query yields an empty result
    /// set until a later successful load replaces the index.
    pub fn failed() -> Self {
        Self {
            entries: Vec::new(),
            load_failed: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    /// Filter to at most [`MAX_RESULTS`] products whose searchable text
    /// contains the lower-cased, trimmed query
    ///
    /// An empty or whitespace-only query yields an empty result set.
    pub fn filter(&self, query: &str) -> Vec<Product> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|e| e.searchable.contains(&needle))
            .take(MAX_RESULTS)
            .map(|e| e.product.clone())
            .collect()
    }
}
