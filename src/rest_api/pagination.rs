//! # Pagination
//!
//! Offset pagination over an already filtered and sorted sequence.

use super::response::ListResponse;

/// Page used when none is requested
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when none is requested
pub const DEFAULT_LIMIT: usize = 5;

/// A 1-based page window. Both fields are at least 1 once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new(page: usize, limit: usize) -> Self {
        Self { page, limit }
    }

    /// Index of the first item on this page (saturating)
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// Slice `items` to this page and wrap it with total/page/limit.
    ///
    /// `total` is the length of `items` before slicing.
    pub fn paginate<T: Clone>(&self, items: &[T]) -> ListResponse<T> {
        let total = items.len();
        let start = self.offset().min(total);
        let end = start.saturating_add(self.limit).min(total);

        ListResponse::new(total, self.page, self.limit, items[start..end].to_vec())
    }
}
