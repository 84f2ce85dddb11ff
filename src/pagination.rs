//! Pagination primitives shared by repository queries and API responses.

use serde::{Deserialize, Serialize};

/// Number of items shown per page when the client does not ask for a limit.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Page request applied to a repository list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number.
    pub page: usize,
    /// Number of items per page.
    pub per_page: usize,
}

impl Pagination {
    /// Offset of the first row of this page.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1) * self.per_page
    }
}

/// Pagination metadata echoed back in JSON list responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub pages: usize,
}

impl PageInfo {
    /// Compute metadata for `total` records viewed through `pagination`.
    pub fn new(pagination: Pagination, total: usize) -> Self {
        Self {
            page: pagination.page,
            limit: pagination.per_page,
            total,
            pages: total.div_ceil(pagination.per_page.max(1)),
        }
    }
}

/// A page of items together with the page cursor, used by HTML views.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: usize, total_pages: usize) -> Self {
        Self {
            items,
            page,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_info_rounds_page_count_up() {
        let info = PageInfo::new(
            Pagination {
                page: 2,
                per_page: 2,
            },
            5,
        );

        assert_eq!(info.page, 2);
        assert_eq!(info.limit, 2);
        assert_eq!(info.total, 5);
        assert_eq!(info.pages, 3);
    }

    #[test]
    fn pagination_offset_is_zero_based() {
        let pagination = Pagination {
            page: 3,
            per_page: 10,
        };
        assert_eq!(pagination.offset(), 20);

        let first = Pagination {
            page: 0,
            per_page: 10,
        };
        assert_eq!(first.offset(), 0);
    }
}
