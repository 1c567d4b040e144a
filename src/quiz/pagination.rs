use std::num::NonZeroUsize;
use thiserror::Error as ThisError;

/// Fixed page size for `GET /questions`.
pub const QUESTIONS_PER_PAGE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum PaginationError {
    #[error("page must be a positive integer, got {0}")]
    NonPositivePage(i64),
}

/// 1-based page number. Construction rejects `0` and negatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNumber(NonZeroUsize);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(NonZeroUsize::MIN);

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<i64> for PageNumber {
    type Error = PaginationError;

    fn try_from(page: i64) -> Result<Self, Self::Error> {
        if page < 1 {
            return Err(PaginationError::NonPositivePage(page));
        }
        // Pages past `usize::MAX` can only ever be empty, so saturating keeps them empty.
        let page = usize::try_from(page).unwrap_or(usize::MAX);
        NonZeroUsize::new(page)
            .map(PageNumber)
            .ok_or(PaginationError::NonPositivePage(0))
    }
}

/// The slice selected by a page, plus the nominal `[start, end)` bounds it was cut with.
///
/// `end` is always `start + page_size` even when `items` is shorter than that.
#[derive(Debug, PartialEq, Eq)]
pub struct PageWindow<'a, T> {
    pub items: &'a [T],
    pub start: usize,
    pub end: usize,
}

impl<T> PageWindow<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cut the `page`-th window of `page_size` items out of `items`.
///
/// A window that starts past the end of `items` is empty, not an error.
pub fn paginate<T>(items: &[T], page: PageNumber, page_size: usize) -> PageWindow<'_, T> {
    let start = (page.get() - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size);

    let lo = start.min(items.len());
    let hi = end.min(items.len());

    PageWindow {
        items: &items[lo..hi],
        start,
        end,
    }
}
