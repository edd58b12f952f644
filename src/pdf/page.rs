// src/pdf/page.rs
//! Positioned draw operations, grouped per page. Coordinates are top-down;
//! the writer flips them into PDF space.

use super::geometry::{Color, Font};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        x: f32,
        y: f32,
        font: Font,
        size: f32,
        color: Color,
        text: String,
    },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Line {
        x1: f32,
        x2: f32,
        y: f32,
        width: f32,
        color: Color,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Output of the layout pass: every page with its draw operations, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaidOutDocument {
    pub pages: Vec<Page>,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Pushes onto the page at `index`, creating intermediate pages as needed.
    pub fn push(&mut self, index: usize, op: DrawOp) {
        while self.pages.len() <= index {
            self.pages.push(Page::default());
        }
        self.pages[index].ops.push(op);
    }

    /// All text in draw order across pages.
    pub fn text_stream(&self) -> Vec<String> {
        self.pages
            .iter()
            .flat_map(|page| page.texts().map(str::to_string))
            .collect()
    }

    /// Vertical position and page of the first text run equal to `needle`.
    pub fn find_text(&self, needle: &str) -> Option<(usize, f32)> {
        self.pages.iter().enumerate().find_map(|(index, page)| {
            page.ops.iter().find_map(|op| match op {
                DrawOp::Text { y, text, .. } if text == needle => Some((index, *y)),
                _ => None,
            })
        })
    }
}
