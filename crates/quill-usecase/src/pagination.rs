//! Pagination - Page window over the archive list
//!
//! Renders the familiar "« 3 4 [5] 6 7 »" widget: a window of at most
//! `maximum_number_of_links` page links centred on the current page.

use serde::Serialize;

/// Pagination settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationSettings {
    /// Number of items per page
    pub items_per_page: usize,
    /// Upper bound of page links rendered at once
    pub maximum_number_of_links: usize,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            items_per_page: 10,
            maximum_number_of_links: 99,
        }
    }
}

/// One link of the widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLink {
    pub number: usize,
    pub is_current: bool,
}

/// What the widget template renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationView {
    pub current_page: usize,
    pub number_of_pages: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<usize>,
    pub pages: Vec<PageLink>,
    pub display_range_start: usize,
    pub display_range_end: usize,
    /// Pages exist before the window (beyond page 1)
    pub has_less_pages: bool,
    /// Pages exist after the window (beyond the last page)
    pub has_more_pages: bool,
}

/// A page of items plus the widget describing it
#[derive(Debug, Clone)]
pub struct Pagination {
    settings: PaginationSettings,
    current_page: usize,
    total_items: usize,
}

impl Pagination {
    /// `current_page` is 1-indexed and clamped into the existing pages
    pub fn new(settings: PaginationSettings, total_items: usize, current_page: usize) -> Self {
        let mut pagination = Self {
            settings: PaginationSettings {
                items_per_page: settings.items_per_page.max(1),
                maximum_number_of_links: settings.maximum_number_of_links.max(1),
            },
            current_page: 1,
            total_items,
        };
        pagination.current_page = current_page.max(1).min(pagination.number_of_pages().max(1));
        pagination
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn number_of_pages(&self) -> usize {
        self.total_items.div_ceil(self.settings.items_per_page)
    }

    /// Start index of the current page (0-indexed)
    pub fn start_index(&self) -> usize {
        ((self.current_page - 1) * self.settings.items_per_page).min(self.total_items)
    }

    /// End index of the current page (exclusive, 0-indexed)
    pub fn end_index(&self) -> usize {
        (self.start_index() + self.settings.items_per_page).min(self.total_items)
    }

    /// The items of the current page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end_index().min(items.len());
        let start = self.start_index().min(end);
        &items[start..end]
    }

    pub fn view(&self) -> PaginationView {
        let number_of_pages = self.number_of_pages();
        let (start, end) = self.display_range();

        let pages = (start..=end)
            .filter(|_| number_of_pages > 0)
            .map(|number| PageLink {
                number,
                is_current: number == self.current_page,
            })
            .collect();

        PaginationView {
            current_page: self.current_page,
            number_of_pages,
            previous_page: (self.current_page > 1).then(|| self.current_page - 1),
            next_page: (self.current_page < number_of_pages).then(|| self.current_page + 1),
            pages,
            display_range_start: start,
            display_range_end: end,
            has_less_pages: start > 2,
            has_more_pages: end + 1 < number_of_pages,
        }
    }

    /// First and last page link of the window
    fn display_range(&self) -> (usize, usize) {
        let number_of_pages = self.number_of_pages();
        if number_of_pages == 0 {
            return (1, 1);
        }

        let links = self.settings.maximum_number_of_links.min(number_of_pages) as i64;
        let current = self.current_page as i64;
        let pages = number_of_pages as i64;

        let delta = links / 2;
        let mut start = current - delta;
        let mut end = current + delta - if links % 2 == 0 { 1 } else { 0 };

        if start < 1 {
            end -= start - 1;
        }
        if end > pages {
            start -= end - pages;
        }

        (start.max(1) as usize, end.min(pages) as usize)
    }
}
