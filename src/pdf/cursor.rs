// src/pdf/cursor.rs
//! Vertical layout cursor. One instance per render; it never outlives the call.

use super::geometry::{CONTINUATION_TOP, FIRST_PAGE_TOP};

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutCursor {
    y: f32,
    page_index: usize,
}

impl Default for LayoutCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutCursor {
    /// Cursor positioned on the first page, below the banner.
    pub fn new() -> Self {
        Self {
            y: FIRST_PAGE_TOP,
            page_index: 0,
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Zero-based index of the page the cursor is on.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn advance(&mut self, units: f32) {
        self.y += units;
    }

    /// True when the cursor has moved past `threshold` on the current page.
    pub fn check_overflow(&self, threshold: f32) -> bool {
        self.y > threshold
    }

    pub fn new_page(&mut self) {
        self.page_index += 1;
        self.y = CONTINUATION_TOP;
    }

    /// Overflow checkpoint: starts a new page when past `threshold`.
    /// Returns whether a break happened.
    pub fn break_if_past(&mut self, threshold: f32) -> bool {
        if self.check_overflow(threshold) {
            self.new_page();
            true
        } else {
            false
        }
    }
}
