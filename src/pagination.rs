//! Compressed pagination strips.
//!
//! Given the current page and the total page count, produce the short,
//! ellipsis-bearing sequence of entries a results page renders as pager links:
//! the first page, a window of pages around the current one, the last page,
//! and ellipses standing in for the ranges squeezed out in between.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

use crate::error::PaginationError;

/// Results shown per page in the classic layout; pairs with [`pages_count`].
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Pages kept on each side of the current page.
const NEAR_RADIUS: usize = 4;

/// One entry of the pagination strip.
///
/// A tagged variant rather than a number-with-optional-fields, so an entry is
/// either a real page or an ellipsis and nothing in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEntry {
    Ellipsis,
    Page { number: usize, current: bool },
}

impl PageEntry {
    fn page(number: usize, current_page: usize) -> Self {
        Self::Page {
            number,
            current: number == current_page,
        }
    }
}

/// Build the pagination strip for `current_page` out of `pages_count` pages.
///
/// The first entry is always page 1 and the last, when distinct, is always
/// page `pages_count`; at most [`NEAR_RADIUS`] pages are kept on each side of
/// the current page, so the strip never exceeds 13 entries regardless of the
/// page count.
///
/// `1 <= current_page <= pages_count` is a precondition; violations fail with
/// [`PaginationError`] instead of being clamped into a malformed strip.
pub fn paginate(
    current_page: usize,
    pages_count: usize,
) -> Result<Vec<PageEntry>, PaginationError> {
    if pages_count < 1 {
        return Err(PaginationError::NoPages);
    }
    if current_page < 1 || current_page > pages_count {
        return Err(PaginationError::OutOfRange {
            current_page,
            pages_count,
        });
    }

    let mut entries = Vec::with_capacity(13);

    entries.push(PageEntry::page(1, current_page));

    // Gap between page 1 and the near-current segment
    if current_page > NEAR_RADIUS + 2 {
        entries.push(PageEntry::Ellipsis);
    }

    for number in (current_page.saturating_sub(NEAR_RADIUS)).max(2)..=current_page {
        entries.push(PageEntry::page(number, current_page));
    }
    for number in (current_page + 1)..=(pages_count - 1).min(current_page + NEAR_RADIUS) {
        entries.push(PageEntry::page(number, current_page));
    }

    // Gap between the near-current segment and the last page
    if current_page + NEAR_RADIUS + 1 < pages_count {
        entries.push(PageEntry::Ellipsis);
    }

    if pages_count > current_page {
        entries.push(PageEntry::page(pages_count, current_page));
    }

    tracing::trace!(
        current_page,
        pages_count,
        entries = entries.len(),
        "built pagination strip"
    );

    Ok(entries)
}

/// Number of result pages needed for `total_results` at `page_size` results
/// per page (ceiling division).
pub fn pages_count(total_results: usize, page_size: NonZeroUsize) -> usize {
    total_results.div_ceil(page_size.get())
}
