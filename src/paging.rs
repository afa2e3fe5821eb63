//! Listing window math and query parameters.
//!
//! The server pages with `offset = (page - 1) * rows`. Listing responses carry
//! the window back as `{ totalCount, offset | page, rows }`; both spellings
//! are accepted and normalized to an offset. Pagination helpers may also send
//! `nowPage`/`listCount` next to the canonical keys, which win when present.

#[cfg(test)]
#[path = "paging_test.rs"]
mod paging_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_ROWS: u64 = 12;

// =============================================================================
// PAGING DESCRIPTOR
// =============================================================================

/// Window of a listing response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawPaging")]
pub struct Paging {
    pub total_count: u64,
    pub offset: u64,
    pub rows: u64,
}

impl Paging {
    /// Compute the window for a 1-based page. Page 0 is treated as page 1.
    #[must_use]
    pub fn for_page(total_count: u64, page: u64, rows: u64) -> Self {
        let page = page.max(1);
        Self { total_count, offset: (page - 1).saturating_mul(rows), rows }
    }

    /// 1-based page number this window starts on.
    #[must_use]
    pub fn page(&self) -> u64 {
        if self.rows == 0 { DEFAULT_PAGE } else { (self.offset / self.rows).saturating_add(1) }
    }

    #[must_use]
    pub fn page_count(&self) -> u64 {
        if self.rows == 0 { 0 } else { self.total_count.div_ceil(self.rows) }
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page() < self.page_count()
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page() > 1
    }
}

/// Wire shape before normalization.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPaging {
    total_count: u64,
    offset: Option<u64>,
    page: Option<u64>,
    now_page: Option<u64>,
    rows: Option<u64>,
    list_count: Option<u64>,
}

impl TryFrom<RawPaging> for Paging {
    type Error = String;

    fn try_from(raw: RawPaging) -> Result<Self, Self::Error> {
        let rows = raw.rows.or(raw.list_count).unwrap_or(DEFAULT_ROWS);
        match (raw.offset, raw.page.or(raw.now_page)) {
            (Some(offset), _) => Ok(Self { total_count: raw.total_count, offset, rows }),
            (None, Some(page)) => Ok(Self::for_page(raw.total_count, page, rows)),
            (None, None) => Err("paging descriptor needs `offset` or `page`".to_owned()),
        }
    }
}

// =============================================================================
// LIST QUERY
// =============================================================================

/// Filter and window requested by a fetch-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub query: Option<String>,
    pub page: u64,
    pub rows: u64,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self { query: None, page: DEFAULT_PAGE, rows: DEFAULT_ROWS }
    }
}

impl ListQuery {
    #[must_use]
    pub fn new(query: Option<String>, page: u64, rows: u64) -> Self {
        Self { query, page: page.max(1), rows }
    }

    /// Query-string pairs in wire order. An absent filter is sent as an empty
    /// `query` so the server sees the same parameters on every listing.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("query".to_owned(), self.query.clone().unwrap_or_default()),
            ("page".to_owned(), self.page.max(1).to_string()),
            ("rows".to_owned(), self.rows.to_string()),
        ]
    }
}
