//! Moderation query logic - search, status filtering and pagination.
//!
//! Every function here is a pure derivation over a snapshot collection. The
//! admin views recompute their rows from the source collection and the current
//! [`ModerationQuery`] on each change instead of patching displayed rows.

use crate::{
    entities::{Moderatable, ModerationStatus, StatusFilter},
    errors::{Error, Result},
};
use serde::Serialize;

/// Rows per page used by the admin panel unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of a filtered collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Rows on this page, in source order
    pub items: Vec<T>,
    /// 1-based page number that was requested
    pub page: usize,
    /// Maximum rows per page
    pub page_size: usize,
    /// `ceil(total_matches / page_size)`; zero when nothing matched
    pub total_pages: usize,
    /// Number of entities that passed the filter
    pub total_matches: usize,
}

impl<T> Page<T> {
    /// True when there is nothing to show ("No results found").
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a later page holds more rows.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether an earlier page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Returns the entities that pass both the status filter and the search term.
///
/// The term is matched case-insensitively as a substring against every
/// searchable field; a single matching field is enough. An empty term matches
/// everything. Source order is preserved.
pub fn filter<'a, T: Moderatable>(
    entities: &'a [T],
    search_term: &str,
    status_filter: StatusFilter,
) -> Vec<&'a T> {
    let needle = search_term.to_lowercase();
    entities
        .iter()
        .filter(|entity| status_filter.matches(entity.status()) && matches_search(*entity, &needle))
        .collect()
}

fn matches_search<T: Moderatable>(entity: &T, needle: &str) -> bool {
    needle.is_empty()
        || entity
            .searchable_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

/// Slices page `page` (1-based) of `filtered`.
///
/// A page past the end yields an empty page rather than an error.
///
/// # Errors
/// Returns [`Error::InvalidQuery`] if `page` or `page_size` is zero.
pub fn paginate<T: Clone>(filtered: &[T], page: usize, page_size: usize) -> Result<Page<T>> {
    validate_page(page)?;
    validate_page_size(page_size)?;
    Ok(slice_page(filtered, page, page_size))
}

fn slice_page<T: Clone>(filtered: &[T], page: usize, page_size: usize) -> Page<T> {
    let start = (page - 1).saturating_mul(page_size);
    let items = filtered.iter().skip(start).take(page_size).cloned().collect();

    Page {
        items,
        page,
        page_size,
        total_pages: filtered.len().div_ceil(page_size),
        total_matches: filtered.len(),
    }
}

fn validate_page(page: usize) -> Result<()> {
    if page == 0 {
        return Err(Error::InvalidQuery {
            message: "page numbers start at 1".to_string(),
        });
    }
    Ok(())
}

fn validate_page_size(page_size: usize) -> Result<()> {
    if page_size == 0 {
        return Err(Error::InvalidQuery {
            message: "page size must be at least 1".to_string(),
        });
    }
    Ok(())
}

/// The query descriptor behind a moderation table.
///
/// Changing the search term or status filter moves back to page 1, so a stale
/// page number is never applied to a freshly filtered set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationQuery {
    search_term: String,
    status_filter: StatusFilter,
    page: usize,
    page_size: usize,
}

impl ModerationQuery {
    /// Creates a query showing page 1 of everything.
    ///
    /// # Errors
    /// Returns [`Error::InvalidQuery`] if `page_size` is zero.
    pub fn new(page_size: usize) -> Result<Self> {
        validate_page_size(page_size)?;
        Ok(Self {
            search_term: String::new(),
            status_filter: StatusFilter::All,
            page: 1,
            page_size,
        })
    }

    /// Current free-text search term
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Current status filter
    #[must_use]
    pub const fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    /// Current 1-based page number
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Rows per page
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replaces the search term and resets to page 1.
    pub fn set_search_term(&mut self, search_term: impl Into<String>) {
        self.search_term = search_term.into();
        self.page = 1;
    }

    /// Replaces the status filter and resets to page 1.
    pub fn set_status_filter(&mut self, status_filter: StatusFilter) {
        self.status_filter = status_filter;
        self.page = 1;
    }

    /// Moves to `page`, which may lie past the last page.
    ///
    /// # Errors
    /// Returns [`Error::InvalidQuery`] if `page` is zero.
    pub fn go_to_page(&mut self, page: usize) -> Result<()> {
        validate_page(page)?;
        self.page = page;
        Ok(())
    }
}

impl Default for ModerationQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            status_filter: StatusFilter::All,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Derives the visible page of `entities` for `query`.
pub fn view<'a, T: Moderatable>(entities: &'a [T], query: &ModerationQuery) -> Page<&'a T> {
    let filtered = filter(entities, query.search_term(), query.status_filter());
    slice_page(&filtered, query.page(), query.page_size())
}

/// Per-status totals shown above the moderation tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    /// Entities awaiting review
    pub pending: usize,
    /// Approved entities
    pub approved: usize,
    /// Rejected entities
    pub rejected: usize,
}

impl StatusCounts {
    /// Sum over all statuses
    #[must_use]
    pub const fn total(&self) -> usize {
        self.pending + self.approved + self.rejected
    }
}

/// Counts `entities` by moderation status.
pub fn status_counts<T: Moderatable>(entities: &[T]) -> StatusCounts {
    entities
        .iter()
        .fold(StatusCounts::default(), |mut counts, entity| {
            match entity.status() {
                ModerationStatus::Pending => counts.pending += 1,
                ModerationStatus::Approved => counts.approved += 1,
                ModerationStatus::Rejected => counts.rejected += 1,
            }
            counts
        })
}
