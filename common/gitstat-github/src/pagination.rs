//! Page-by-page collection fetching
//!
//! GitHub list endpoints are paginated. Collections are fetched starting at
//! page 1 and stop at the first empty page; no total-count header is read.
//! The loop is bounded by [`PageLimits`] so a collection that never ends
//! (or an upstream that never returns an empty page) fails instead of
//! growing without bound.

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

/// Largest page size GitHub accepts
pub const MAX_PER_PAGE: u32 = 100;

/// Bounds applied to a single collection fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    /// Items requested per page (1..=100)
    pub per_page: u32,
    /// Highest page number that will be requested
    pub max_pages: u32,
    /// Total items accepted before the fetch is aborted
    pub max_items: usize,
}

impl PageLimits {
    pub fn new(per_page: u32, max_pages: u32, max_items: usize) -> Self {
        Self {
            per_page: per_page.clamp(1, MAX_PER_PAGE),
            max_pages: max_pages.max(1),
            max_items: max_items.max(1),
        }
    }
}

impl Default for PageLimits {
    fn default() -> Self {
        Self::new(MAX_PER_PAGE, 300, 30_000)
    }
}

/// Something that can return one page of a JSON collection
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch page `page` (1-based) of `endpoint` with `per_page` items
    async fn fetch_page(&self, endpoint: &str, page: u32, per_page: u32) -> Result<Vec<Value>>;
}

/// Fetch every page of `endpoint` and concatenate the items in request order
///
/// # Errors
/// Returns an error if:
/// - Any page request fails (no partial results are returned, nothing is retried)
/// - An item cannot be deserialized into `T`
/// - More than `limits.max_items` items are collected
/// - `limits.max_pages` pages are fetched without reaching an empty page
pub async fn fetch_all_pages<T, S>(source: &S, endpoint: &str, limits: &PageLimits) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    S: PageSource + ?Sized,
{
    let mut results = Vec::new();

    for page in 1..=limits.max_pages {
        let items = source
            .fetch_page(endpoint, page, limits.per_page)
            .await
            .with_context(|| format!("Failed to fetch page {} of {}", page, endpoint))?;

        if items.is_empty() {
            info!(
                endpoint,
                pages = page,
                items = results.len(),
                "Collection fetched"
            );
            return Ok(results);
        }

        debug!(endpoint, page, count = items.len(), "Fetched page");

        for item in items {
            let parsed = serde_json::from_value(item)
                .with_context(|| format!("Malformed item on page {} of {}", page, endpoint))?;
            results.push(parsed);
        }

        if results.len() > limits.max_items {
            bail!(
                "Collection {} exceeds the limit of {} items (raise pagination.max_items to fetch it)",
                endpoint,
                limits.max_items
            );
        }
    }

    bail!(
        "Collection {} did not end within {} pages (raise pagination.max_pages to fetch it)",
        endpoint,
        limits.max_pages
    )
}
