// src/pdf/layout.rs
//! Lays an [`ApplicationRecord`] out onto A4 pages.
//!
//! Page breaks happen only at overflow checkpoints: after Personal Information,
//! after Education, after each work entry, before Additional Information,
//! before each motivation line and before each continuation line of a wrapped
//! value. Single-line rows between checkpoints may drift past the threshold.

use chrono::NaiveDate;

use super::cursor::LayoutCursor;
use super::geometry::*;
use super::page::{DrawOp, LaidOutDocument};
use crate::types::ApplicationRecord;
use crate::utils::{non_blank, or_placeholder, thai_date};

const TITLE: &str = "i-Clean";
const SUBTITLE: &str = "Job Application Form";
const FOOTER: &str = "Generated by i-Clean Application System";
pub const NO_EXPERIENCE: &str = "No work experience provided";

const BODY_SIZE: f32 = 10.0;

pub struct ApplicationLayout<'a> {
    record: &'a ApplicationRecord,
    issued_on: NaiveDate,
    cursor: LayoutCursor,
    output: LaidOutDocument,
}

impl<'a> ApplicationLayout<'a> {
    pub fn compose(record: &'a ApplicationRecord, issued_on: NaiveDate) -> LaidOutDocument {
        let mut layout = Self {
            record,
            issued_on,
            cursor: LayoutCursor::new(),
            output: LaidOutDocument::default(),
        };

        layout.banner();
        layout.metadata();

        layout.personal_information();
        layout.cursor.break_if_past(OVERFLOW_THRESHOLD);

        layout.education();
        layout.cursor.break_if_past(OVERFLOW_THRESHOLD);

        layout.work_experience();
        layout.cursor.break_if_past(ADDITIONAL_INFO_THRESHOLD);

        layout.additional_information();
        layout.footer();

        layout.output
    }

    fn text(&mut self, x: f32, font: Font, size: f32, color: Color, text: impl Into<String>) {
        self.text_at(x, self.cursor.y(), font, size, color, text);
    }

    fn text_at(
        &mut self,
        x: f32,
        y: f32,
        font: Font,
        size: f32,
        color: Color,
        text: impl Into<String>,
    ) {
        let op = DrawOp::Text {
            x,
            y,
            font,
            size,
            color,
            text: text.into(),
        };
        self.output.push(self.cursor.page_index(), op);
    }

    fn banner(&mut self) {
        self.output.push(
            0,
            DrawOp::FillRect {
                x: 0.0,
                y: 0.0,
                width: PAGE_WIDTH,
                height: BANNER_HEIGHT,
                color: ACCENT,
            },
        );
        self.text_at(LABEL_X, 30.0, Font::Bold, 28.0, WHITE, TITLE);
        self.text_at(LABEL_X, 65.0, Font::Regular, 14.0, WHITE, SUBTITLE);
    }

    fn metadata(&mut self) {
        let id = format!("Application ID: {}", self.record.id);
        let date = format!("Date: {}", thai_date(self.issued_on));
        self.text(LABEL_X, Font::Regular, BODY_SIZE, MUTED, id);
        self.text(DATE_X, Font::Regular, BODY_SIZE, MUTED, date);
        self.cursor.advance(30.0);
    }

    fn section_header(&mut self, title: &str) {
        self.text(LABEL_X, Font::Bold, 14.0, ACCENT, title);
        let rule = DrawOp::Line {
            x1: LABEL_X,
            x2: RULE_END_X,
            y: self.cursor.y() + RULE_OFFSET,
            width: 2.0,
            color: ACCENT,
        };
        self.output.push(self.cursor.page_index(), rule);
        self.cursor.advance(SECTION_HEADER_HEIGHT);
    }

    /// Label/value row. Absent values show the placeholder; wrapped values
    /// push the row down by one line height per extra line and continue on
    /// a new page once past the overflow threshold.
    fn field(&mut self, label: &str, value: Option<&str>) {
        let value = or_placeholder(value).to_string();
        self.text(LABEL_X, Font::Bold, BODY_SIZE, BLACK, label);

        let lines = wrap_text(&value, Font::Regular, BODY_SIZE, VALUE_WIDTH);
        for (index, line) in lines.into_iter().enumerate() {
            if index > 0 {
                self.cursor.advance(WRAPPED_LINE_HEIGHT);
                self.cursor.break_if_past(OVERFLOW_THRESHOLD);
            }
            self.text(VALUE_X, Font::Regular, BODY_SIZE, BODY, line);
        }

        self.cursor.advance(ROW_HEIGHT);
    }

    fn personal_information(&mut self) {
        let record = self.record;
        let info = &record.personal_info;
        let address = &info.address;

        self.section_header("Personal Information");
        self.field("Position Applied:", Some(record.position.as_str()));
        self.field("Full Name (Thai):", Some(info.fullname_th.as_str()));
        self.field("Full Name (English):", info.fullname_en.as_deref());
        self.field("Gender:", Some(gender_label(&info.gender)));

        // Age sits on the same row as the birth date.
        let age = format!("(Age: {} years)", or_placeholder(Some(info.age.as_str())));
        self.text(AGE_X, Font::Regular, BODY_SIZE, BODY, age);
        self.field("Date of Birth:", Some(info.birthdate.as_str()));

        self.field("Nationality:", info.nationality.as_deref());
        self.field("ID Card Number:", Some(info.id_card.as_str()));
        self.field("Phone:", Some(info.phone.as_str()));
        self.field("LINE ID:", Some(info.line_id.as_str()));
        self.field("Email:", Some(info.email.as_str()));
        self.field("Address:", address.full.as_deref());

        let location = format!(
            "{}, {}, {} {}",
            or_placeholder(address.subdistrict.as_deref()),
            or_placeholder(address.district.as_deref()),
            or_placeholder(address.province.as_deref()),
            or_placeholder(address.zipcode.as_deref()),
        );
        self.field("Location:", Some(location.as_str()));
        self.cursor.advance(10.0);
    }

    fn education(&mut self) {
        let record = self.record;
        self.section_header("Education");

        for (level, slot) in record.education.slots() {
            if !slot.is_present() {
                continue;
            }
            let summary = format!(
                "{} ({}) - {}",
                or_placeholder(slot.school.as_deref()),
                or_placeholder(slot.major.as_deref()),
                or_placeholder(slot.year.as_deref()),
            );
            self.field(level.label(), Some(summary.as_str()));
        }

        self.cursor.advance(10.0);
    }

    fn work_experience(&mut self) {
        let record = self.record;
        self.section_header("Work Experience");

        let entries = &record.work_experience;
        if entries.is_empty() {
            self.text(LABEL_X, Font::Regular, BODY_SIZE, MUTED, NO_EXPERIENCE);
            self.cursor.advance(25.0);
            return;
        }

        for (index, work) in entries.iter().enumerate() {
            let heading = format!("Experience {}:", index + 1);
            self.text(LABEL_X, Font::Bold, 11.0, ACCENT, heading);
            self.cursor.advance(SUBHEADING_HEIGHT);

            let duration = format!(
                "{} to {}",
                or_placeholder(work.start.as_deref()),
                or_placeholder(work.end.as_deref()),
            );
            self.field("Company:", Some(work.company.as_str()));
            self.field("Position:", work.position.as_deref());
            self.field("Duration:", Some(duration.as_str()));
            self.field("Reason for Leaving:", work.reason.as_deref());
            self.cursor.advance(5.0);

            self.cursor.break_if_past(OVERFLOW_THRESHOLD);
        }
    }

    fn additional_information(&mut self) {
        let record = self.record;
        let info = &record.additional_info;
        self.section_header("Additional Information");

        let salary = non_blank(info.expected_salary.as_deref()).map(|s| format!("{} THB", s));
        self.field("Special Skills:", info.special_skills.as_deref());
        self.field("Expected Salary:", salary.as_deref());
        self.field("Available Start Date:", info.start_date.as_deref());

        match non_blank(info.motivation.as_deref()) {
            Some(motivation) => {
                self.text(LABEL_X, Font::Bold, BODY_SIZE, BLACK, "Motivation:");
                self.cursor.advance(15.0);

                for line in wrap_text(motivation, Font::Regular, BODY_SIZE, PARAGRAPH_WIDTH) {
                    self.cursor.break_if_past(OVERFLOW_THRESHOLD);
                    self.text(LABEL_X, Font::Regular, BODY_SIZE, BODY, line);
                    self.cursor.advance(WRAPPED_LINE_HEIGHT);
                }
            }
            None => self.field("Motivation:", None),
        }
    }

    /// Drawn once, on the last page. A page is added when content already
    /// reaches into the footer band.
    fn footer(&mut self) {
        if self.cursor.check_overflow(FOOTER_CLEARANCE) {
            self.cursor.new_page();
        }
        let x = (PAGE_WIDTH - Font::Regular.text_width(FOOTER, 8.0)) / 2.0;
        self.text_at(x, FOOTER_Y, Font::Regular, 8.0, FAINT, FOOTER);
    }
}

fn gender_label(gender: &str) -> &str {
    match gender.trim().to_lowercase().as_str() {
        "male" => "Male",
        "female" => "Female",
        _ => or_placeholder(Some(gender)),
    }
}

pub fn footer_caption() -> &'static str {
    FOOTER
}
