//! Document viewer session: which press item is open, the page being shown
//! and the width the page is rendered at.

use crate::content::NewsItem;

/// Width used before the first window measurement arrives.
pub const DEFAULT_WIDTH: u32 = 920;
pub const MIN_WIDTH: f64 = 320.0;
pub const MAX_WIDTH: f64 = 980.0;
/// Horizontal space kept free around the modal.
pub const WINDOW_MARGIN: f64 = 80.0;

/// Maps the window's inner width to the page render width.
pub fn display_width(inner_width: f64) -> u32 {
    if !inner_width.is_finite() {
        return MIN_WIDTH as u32;
    }
    (inner_width - WINDOW_MARGIN).clamp(MIN_WIDTH, MAX_WIDTH) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerSession {
    item: NewsItem,
    page: u32,
    /// 0 until the document reports its page count.
    total_pages: u32,
    width: u32,
    status: LoadStatus,
}

impl ViewerSession {
    pub fn open(item: NewsItem) -> Self {
        Self {
            item,
            page: 1,
            total_pages: 0,
            width: DEFAULT_WIDTH,
            status: LoadStatus::Loading,
        }
    }

    pub fn item(&self) -> &NewsItem {
        &self.item
    }

    /// Whether a load report for `pdf_path` belongs to this session.
    pub fn shows(&self, pdf_path: &str) -> bool {
        self.item.pdf_path == pdf_path
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> Option<u32> {
        (self.total_pages > 0).then_some(self.total_pages)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        match self.total_pages() {
            Some(total) => self.page < total,
            None => true,
        }
    }

    /// Records the page count. A page reached before the count was known is
    /// pulled back inside the document.
    pub fn loaded(&mut self, total_pages: u32) {
        self.status = LoadStatus::Loaded;
        self.total_pages = total_pages;
        if let Some(total) = self.total_pages() {
            self.page = self.page.min(total);
        }
    }

    pub fn failed(&mut self) {
        self.status = LoadStatus::Failed;
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Unbounded while the page count is still unknown.
    pub fn next_page(&mut self) {
        let next = self.page.saturating_add(1);
        self.page = match self.total_pages() {
            Some(total) => next.min(total),
            None => next,
        };
    }

    pub fn resize(&mut self, inner_width: f64) {
        self.width = display_width(inner_width);
    }

    /// Header text, e.g. `3 / 10`, or `1 / –` while loading.
    pub fn page_label(&self) -> String {
        match self.total_pages() {
            Some(total) => format!("{} / {}", self.page, total),
            None => format!("{} / –", self.page),
        }
    }
}
