//! Page slicing for reservation listings.

use crate::error::{Error, Result};

/// Number of items per page when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// One page of a larger listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// One-based page number.
    pub page: usize,
    /// Total number of pages; 0 for an empty listing.
    pub page_count: usize,
    /// Total number of items across all pages.
    pub total: usize,
    /// Page size used.
    pub page_size: usize,
}

impl<T> Page<T> {
    /// Returns whether a later page exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}

/// Cuts page `page` (one-based) of `page_size` items out of `items`.
///
/// A page past the end yields an empty item list with the true totals.
///
/// # Errors
///
/// Returns `Error::Validation` if `page` or `page_size` is zero.
///
/// # Examples
///
/// ```
/// use seatbook::page::paginate;
///
/// let page = paginate((1..=12).collect::<Vec<_>>(), 3, 5).unwrap();
/// assert_eq!(page.items, vec![11, 12]);
/// assert_eq!(page.page_count, 3);
/// assert_eq!(page.total, 12);
/// ```
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Result<Page<T>> {
    if page == 0 {
        return Err(Error::Validation {
            field: "page".into(),
            message: "page numbers start at 1".into(),
        });
    }
    if page_size == 0 {
        return Err(Error::Validation {
            field: "page_size".into(),
            message: "page size must be at least 1".into(),
        });
    }

    let total = items.len();
    let page_count = total.div_ceil(page_size);
    let start = (page - 1).saturating_mul(page_size);
    let items = items.into_iter().skip(start).take(page_size).collect();

    Ok(Page {
        items,
        page,
        page_count,
        total,
        page_size,
    })
}
