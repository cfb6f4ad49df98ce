//! Fixed-size pagination over an ordered item collection.
//!
//! # Design
//! - `paginate` is a pure function over `(items, page, page_size)`.
//! - `PaginationState` is the only mutable record; transitions go through
//!   `set_page`/`reduce` and every read re-clamps against the current item count.
//! - Out-of-range page requests are clamped, never rejected. A zero page size is
//!   the only failure.

use crate::core::config::{DEFAULT_INITIAL_PAGE, DEFAULT_PAGE_SIZE, DashboardConfig};
use crate::core::error::{DashboardError, Result};
use std::num::NonZeroUsize;
use tracing::{debug, warn};

/// The visible window of a collection plus the metadata a pager needs.
#[derive(Debug, PartialEq, Eq)]
pub struct PageSlice<'a, T> {
    /// Items on the effective page, in collection order.
    pub visible: &'a [T],
    /// Effective one-based page number.
    pub current_page: usize,
    /// Page count, never less than 1.
    pub total_pages: usize,
    /// Length of the full collection.
    pub total_items: usize,
    /// Items per page.
    pub page_size: usize,
}

impl<T> PageSlice<'_, T> {
    /// Whether a page exists before the current one.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a page exists after the current one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// One-based positions of the first and last visible item, or `None` when
    /// nothing is visible.
    #[must_use]
    pub fn item_range(&self) -> Option<(usize, usize)> {
        if self.visible.is_empty() {
            return None;
        }
        let first = (self.current_page - 1) * self.page_size + 1;
        Some((first, first + self.visible.len() - 1))
    }
}

/// Number of pages needed for `item_count` items, clamped to at least one.
#[must_use]
pub const fn total_pages(item_count: usize, page_size: NonZeroUsize) -> usize {
    let pages = item_count.div_ceil(page_size.get());
    if pages == 0 { 1 } else { pages }
}

/// Clamp a requested page into `[1, total_pages]`.
#[must_use]
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// Slice `items` down to the requested page.
///
/// # Errors
/// Returns [`DashboardError::InvalidConfiguration`] when `page_size` is zero.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Result<PageSlice<'_, T>> {
    let page_size = checked_page_size(page_size)?;
    Ok(slice_page(items, page, page_size))
}

pub(crate) fn checked_page_size(page_size: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(page_size).ok_or_else(|| {
        warn!(page_size, "rejected pagination page size");
        DashboardError::InvalidConfiguration {
            field: "page_size",
            reason: "must be at least 1",
        }
    })
}

fn slice_page<T>(items: &[T], page: usize, page_size: NonZeroUsize) -> PageSlice<'_, T> {
    let total = total_pages(items.len(), page_size);
    let current = clamp_page(page, total);
    if current != page {
        debug!(
            requested = page,
            effective = current,
            total_pages = total,
            "page request clamped"
        );
    }
    let start = (current - 1) * page_size.get();
    let end = start.saturating_add(page_size.get()).min(items.len());
    PageSlice {
        visible: items.get(start..end).unwrap_or_default(),
        current_page: current,
        total_pages: total,
        total_items: items.len(),
        page_size: page_size.get(),
    }
}

/// Page navigation requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAction {
    /// Jump to a specific one-based page.
    Set(usize),
    /// Move one page forward.
    Next,
    /// Move one page back.
    Previous,
}

/// Pagination state owned by a single paginated view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationState {
    current_page: usize,
    page_size: NonZeroUsize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: DEFAULT_INITIAL_PAGE,
            page_size: NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl PaginationState {
    /// Start on page 1 with the given page size.
    ///
    /// # Errors
    /// Returns [`DashboardError::InvalidConfiguration`] when `page_size` is zero.
    pub fn new(page_size: usize) -> Result<Self> {
        Ok(Self {
            current_page: 1,
            page_size: checked_page_size(page_size)?,
        })
    }

    /// Build state from a dashboard configuration.
    ///
    /// The initial page is kept as requested and clamped on first read.
    ///
    /// # Errors
    /// Returns [`DashboardError::InvalidConfiguration`] when the configured page
    /// size is zero.
    pub fn from_config(config: &DashboardConfig) -> Result<Self> {
        Ok(Self {
            current_page: config.initial_page,
            page_size: checked_page_size(config.page_size)?,
        })
    }

    /// Items per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Page count for a collection of `item_count` items.
    #[must_use]
    pub const fn total_pages(&self, item_count: usize) -> usize {
        total_pages(item_count, self.page_size)
    }

    /// Effective current page for a collection of `item_count` items.
    #[must_use]
    pub fn current_page(&self, item_count: usize) -> usize {
        clamp_page(self.current_page, self.total_pages(item_count))
    }

    /// Request a page and return the effective page it resolved to.
    pub fn set_page(&mut self, requested: usize, item_count: usize) -> usize {
        let effective = clamp_page(requested, self.total_pages(item_count));
        if effective != requested {
            debug!(requested, effective, "page request clamped");
        }
        self.current_page = effective;
        effective
    }

    /// Request the page after the current one.
    pub fn next(&mut self, item_count: usize) -> usize {
        let current = self.current_page(item_count);
        self.set_page(current.saturating_add(1), item_count)
    }

    /// Request the page before the current one.
    pub fn previous(&mut self, item_count: usize) -> usize {
        let current = self.current_page(item_count);
        self.set_page(current.saturating_sub(1), item_count)
    }

    /// Apply an action and return the resulting state.
    #[must_use]
    pub fn reduce(mut self, action: PageAction, item_count: usize) -> Self {
        match action {
            PageAction::Set(page) => self.set_page(page, item_count),
            PageAction::Next => self.next(item_count),
            PageAction::Previous => self.previous(item_count),
        };
        self
    }

    /// Derive the visible page of `items` for the current state.
    #[must_use]
    pub fn view<'a, T>(&self, items: &'a [T]) -> PageSlice<'a, T> {
        slice_page(items, self.current_page, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(count: usize) -> Vec<usize> {
        (1..=count).collect()
    }

    #[test]
    fn total_pages_matches_ceiling_division() -> Result<()> {
        for count in 1..40 {
            for size in 1..9 {
                let items = numbers(count);
                let page = paginate(&items, 1, size)?;
                assert_eq!(page.total_pages, count.div_ceil(size), "{count}/{size}");
                let seen: usize = (1..=page.total_pages)
                    .map(|k| paginate(&items, k, size).map(|p| p.visible.len()))
                    .sum::<Result<usize>>()?;
                assert_eq!(seen, count);
            }
        }
        Ok(())
    }

    #[test]
    fn non_final_pages_are_full() -> Result<()> {
        let items = numbers(37);
        let size = 6;
        let last = paginate(&items, 1, size)?.total_pages;
        for k in 1..last {
            assert_eq!(paginate(&items, k, size)?.visible.len(), size);
        }
        Ok(())
    }

    #[test]
    fn out_of_range_pages_clamp_to_bounds() -> Result<()> {
        let items = numbers(23);
        let first = paginate(&items, 1, 5)?;
        let last = paginate(&items, 5, 5)?;
        assert_eq!(paginate(&items, 0, 5)?, first);
        assert_eq!(paginate(&items, last.total_pages + 5, 5)?, last);
        assert_eq!(paginate(&items, usize::MAX, 5)?, last);
        Ok(())
    }

    #[test]
    fn empty_collection_has_one_empty_page() -> Result<()> {
        let items: Vec<usize> = Vec::new();
        for requested in [0, 1, 2, 99] {
            let page = paginate(&items, requested, 4)?;
            assert_eq!(page.total_pages, 1);
            assert_eq!(page.current_page, 1);
            assert!(page.visible.is_empty());
            assert_eq!(page.item_range(), None);
        }
        Ok(())
    }

    #[test]
    fn zero_page_size_is_invalid_configuration() {
        let items = numbers(3);
        assert!(matches!(
            paginate(&items, 1, 0),
            Err(DashboardError::InvalidConfiguration {
                field: "page_size",
                ..
            })
        ));
        assert!(paginate::<usize>(&[], 1, 0).is_err());
        assert!(PaginationState::new(0).is_err());
    }

    #[test]
    fn paginate_is_idempotent() -> Result<()> {
        let items = numbers(11);
        assert_eq!(paginate(&items, 2, 4)?, paginate(&items, 2, 4)?);
        Ok(())
    }

    #[test]
    fn twenty_three_items_in_pages_of_five() -> Result<()> {
        let items = numbers(23);
        let last = paginate(&items, 5, 5)?;
        assert_eq!(last.total_pages, 5);
        assert_eq!(last.visible, &[21, 22, 23]);
        assert_eq!(last.item_range(), Some((21, 23)));
        assert_eq!(paginate(&items, 6, 5)?.visible, last.visible);
        Ok(())
    }

    #[test]
    fn item_range_reports_one_based_positions() -> Result<()> {
        let items = numbers(23);
        assert_eq!(paginate(&items, 2, 5)?.item_range(), Some((6, 10)));
        assert_eq!(paginate(&items, 1, 50)?.item_range(), Some((1, 23)));
        Ok(())
    }

    #[test]
    fn navigation_flags_follow_bounds() -> Result<()> {
        let items = numbers(10);
        let first = paginate(&items, 1, 5)?;
        assert!(!first.has_previous());
        assert!(first.has_next());
        let second = paginate(&items, 2, 5)?;
        assert!(second.has_previous());
        assert!(!second.has_next());
        Ok(())
    }

    #[test]
    fn state_clamps_requests_and_navigation() -> Result<()> {
        let mut state = PaginationState::new(5)?;
        assert_eq!(state.set_page(9, 23), 5);
        assert_eq!(state.next(23), 5);
        assert_eq!(state.previous(23), 4);
        assert_eq!(state.set_page(0, 23), 1);
        assert_eq!(state.previous(23), 1);
        Ok(())
    }

    #[test]
    fn state_reclamps_when_collection_shrinks() -> Result<()> {
        let mut state = PaginationState::new(5)?;
        state.set_page(5, 23);
        assert_eq!(state.current_page(23), 5);
        assert_eq!(state.current_page(7), 2);
        assert_eq!(state.current_page(0), 1);
        let items = numbers(7);
        let page = state.view(&items);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.visible, &[6, 7]);
        Ok(())
    }

    #[test]
    fn reduce_applies_actions_in_sequence() -> Result<()> {
        let state = PaginationState::new(4)?
            .reduce(PageAction::Next, 10)
            .reduce(PageAction::Next, 10)
            .reduce(PageAction::Next, 10);
        assert_eq!(state.current_page(10), 3);
        let state = state.reduce(PageAction::Set(1), 10).reduce(PageAction::Previous, 10);
        assert_eq!(state.current_page(10), 1);
        Ok(())
    }

    #[test]
    fn config_initial_page_is_clamped_on_read() -> Result<()> {
        let config = DashboardConfig {
            page_size: 3,
            initial_page: 40,
        };
        let state = PaginationState::from_config(&config)?;
        assert_eq!(state.current_page(7), 3);
        assert_eq!(state.page_size(), 3);
        Ok(())
    }
}
