// src/pdf/mod.rs
//! Job application PDF: layout into a display list, then serialization.

pub mod cursor;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod page;
pub mod writer;

pub use cursor::LayoutCursor;
pub use error::RenderError;
pub use layout::ApplicationLayout;
pub use page::{DrawOp, LaidOutDocument, Page};

use chrono::NaiveDate;
use tracing::debug;

use crate::types::ApplicationRecord;
use crate::utils::today_in_thailand;

/// A single render job. Owns a snapshot of the record, so nothing is shared
/// with other renders.
#[derive(Debug, Clone)]
pub struct ApplicationPdf {
    record: ApplicationRecord,
    issued_on: NaiveDate,
}

impl ApplicationPdf {
    pub fn new(record: ApplicationRecord) -> Self {
        Self {
            record,
            issued_on: today_in_thailand(),
        }
    }

    /// Overrides the date printed in the metadata row.
    pub fn issued_on(mut self, date: NaiveDate) -> Self {
        self.issued_on = date;
        self
    }

    pub fn layout(&self) -> LaidOutDocument {
        ApplicationLayout::compose(&self.record, self.issued_on)
    }

    /// Blocking render.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RenderError> {
        let laid_out = self.layout();
        let title = format!("Job Application {}", self.record.id);
        let bytes = writer::write_pdf(&laid_out, &title)?;
        debug!(
            "Rendered application {} into {} page(s), {} bytes",
            self.record.id,
            laid_out.page_count(),
            bytes.len()
        );
        Ok(bytes)
    }
}

/// Renders on the blocking pool and resolves once the buffer is complete.
pub async fn render(record: &ApplicationRecord) -> Result<Vec<u8>, RenderError> {
    render_on(record, today_in_thailand()).await
}

pub async fn render_on(
    record: &ApplicationRecord,
    issued_on: NaiveDate,
) -> Result<Vec<u8>, RenderError> {
    let job = ApplicationPdf::new(record.clone()).issued_on(issued_on);
    tokio::task::spawn_blocking(move || job.to_bytes())
        .await
        .map_err(|e| RenderError::Aborted(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PersonalInfo, WorkExperience};
    use lopdf::content::Content;
    use lopdf::{Document, Object};

    fn issued() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn barista() -> ApplicationRecord {
        ApplicationRecord {
            id: "APP1760850000000FFEE01".to_string(),
            position: "Barista".to_string(),
            personal_info: PersonalInfo {
                fullname_th: "สมชาย".to_string(),
                gender: "male".to_string(),
                birthdate: "1995-04-12".to_string(),
                age: "31".to_string(),
                id_card: "1103700012345".to_string(),
                phone: "0812345678".to_string(),
                line_id: "somchai.k".to_string(),
                email: "somchai@example.com".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Text shown on each page, decoded back from the PDF bytes.
    fn page_texts(bytes: &[u8]) -> Vec<Vec<String>> {
        let document = Document::load_mem(bytes).unwrap();
        document
            .get_pages()
            .values()
            .map(|page_id| {
                let raw = document.get_page_content(*page_id).unwrap();
                Content::decode(&raw)
                    .unwrap()
                    .operations
                    .into_iter()
                    .filter(|op| op.operator == "Tj")
                    .filter_map(|op| match op.operands.first() {
                        Some(Object::String(bytes, _)) => {
                            Some(bytes.iter().map(|b| *b as char).collect())
                        }
                        _ => None,
                    })
                    .collect()
            })
            .collect()
    }

    fn occurrences(pages: &[Vec<String>], needle: &str) -> usize {
        pages.iter().flatten().filter(|t| t.as_str() == needle).count()
    }

    #[tokio::test]
    async fn test_render_minimal_record() {
        let bytes = render_on(&barista(), issued()).await.unwrap();
        assert!(!bytes.is_empty());

        let pages = page_texts(&bytes);
        assert_eq!(pages.len(), 1);
        assert_eq!(occurrences(&pages, "Personal Information"), 1);
        assert_eq!(occurrences(&pages, "Additional Information"), 1);
        assert_eq!(occurrences(&pages, layout::NO_EXPERIENCE), 1);
        // Thai text falls back to '?' with the standard fonts.
        assert_eq!(occurrences(&pages, "?????"), 1);
    }

    #[tokio::test]
    async fn test_render_twice_same_text() {
        let mut record = barista();
        record.work_experience = vec![WorkExperience {
            company: "Cafe Amazon".to_string(),
            ..Default::default()
        }];

        let first = render_on(&record, issued()).await.unwrap();
        let second = render_on(&record, issued()).await.unwrap();
        assert_eq!(page_texts(&first), page_texts(&second));
    }

    #[tokio::test]
    async fn test_long_motivation_two_pages_one_footer() {
        let mut record = barista();
        let motivation: String = "ชอบกาแฟ and I love serving people every single day. "
            .repeat(20)
            .chars()
            .take(500)
            .collect();
        record.additional_info.motivation = Some(motivation);

        let bytes = render_on(&record, issued()).await.unwrap();
        let pages = page_texts(&bytes);
        assert_eq!(pages.len(), 2);
        assert_eq!(occurrences(&pages, layout::footer_caption()), 1);
        assert!(pages[1].iter().any(|t| t == layout::footer_caption()));
    }

    #[tokio::test]
    async fn test_concurrent_renders_are_independent() {
        let first = barista();
        let mut other = barista();
        other.id = "APP2".to_string();
        other.position = "Driver".to_string();

        let (a, b) = tokio::join!(render_on(&first, issued()), render_on(&other, issued()));
        let a = page_texts(&a.unwrap());
        let b = page_texts(&b.unwrap());
        assert_eq!(occurrences(&a, "Barista"), 1);
        assert_eq!(occurrences(&a, "Driver"), 0);
        assert_eq!(occurrences(&b, "Driver"), 1);
    }

    #[test]
    fn test_blocking_render_matches_layout() {
        let pdf = ApplicationPdf::new(barista()).issued_on(issued());
        let bytes = pdf.to_bytes().unwrap();
        assert_eq!(page_texts(&bytes).len(), pdf.layout().page_count());
    }
}
