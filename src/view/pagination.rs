//! Per-table pagination state.
//!
//! Both tables own an independent [`PaginationState`]; transitions return a new
//! snapshot instead of mutating shared state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PageSize {
    #[default]
    Five,
    Ten,
    TwentyFive,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Five, PageSize::Ten, PageSize::TwentyFive];

    pub fn rows(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
        }
    }

    pub fn from_rows(rows: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.rows() == rows)
    }

    /// Next option, wrapping back to the smallest.
    #[cfg_attr(not(feature = "tui"), allow(dead_code))]
    pub fn cycle(self) -> Self {
        match self {
            PageSize::Five => PageSize::Ten,
            PageSize::Ten => PageSize::TwentyFive,
            PageSize::TwentyFive => PageSize::Five,
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows())
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(Self::from_rows)
            .ok_or_else(|| format!("page size must be one of 5, 10, 25 (got {s:?})"))
    }
}

/// Slice `items[page_index * page_size .. + page_size]`, clipped to the end.
///
/// Out-of-range pages yield an empty slice rather than panicking.
pub fn paginate<T>(items: &[T], page_index: usize, page_size: usize) -> &[T] {
    let start = page_index.saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaginationState {
    pub page_index: usize,
    pub page_size: PageSize,
}

impl PaginationState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_index: 0,
            page_size,
        }
    }

    /// Changing the size always returns to the first page.
    #[cfg_attr(not(feature = "tui"), allow(dead_code))]
    pub fn with_page_size(self, page_size: PageSize) -> Self {
        Self {
            page_index: 0,
            page_size,
        }
    }

    pub fn with_page_index(self, page_index: usize) -> Self {
        Self { page_index, ..self }
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        paginate(items, self.page_index, self.page_size.rows())
    }

    #[cfg_attr(not(feature = "tui"), allow(dead_code))]
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.rows())
    }

    /// Advance one page if there is one; stays put on the last page.
    #[cfg_attr(not(feature = "tui"), allow(dead_code))]
    pub fn next_page(self, total: usize) -> Self {
        if self.page_index + 1 < self.page_count(total) {
            self.with_page_index(self.page_index + 1)
        } else {
            self
        }
    }

    #[cfg_attr(not(feature = "tui"), allow(dead_code))]
    pub fn prev_page(self) -> Self {
        self.with_page_index(self.page_index.saturating_sub(1))
    }

    /// Range label in the form `"6–10 of 12"`.
    pub fn range_label(&self, total: usize) -> String {
        let start = self.page_index.saturating_mul(self.page_size.rows());
        let shown = total.saturating_sub(start).min(self.page_size.rows());
        if shown == 0 {
            return format!("0–0 of {total}");
        }
        let from = start + 1;
        format!("{}–{} of {}", from, from + shown - 1, total)
    }
}

#[cfg(test)]
#[path = "tests/pagination_tests.rs"]
mod tests;
