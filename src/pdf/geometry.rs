// src/pdf/geometry.rs
//! Page geometry, colours and the Helvetica metrics used for line wrapping.

/// A4 in PDF user-space units.
pub const PAGE_WIDTH: f32 = 595.0;
pub const PAGE_HEIGHT: f32 = 842.0;
pub const MARGIN: f32 = 50.0;

pub const BANNER_HEIGHT: f32 = 100.0;
/// First free row on page one, below the banner.
pub const FIRST_PAGE_TOP: f32 = 130.0;
/// First free row on continuation pages.
pub const CONTINUATION_TOP: f32 = MARGIN;

pub const LABEL_X: f32 = 50.0;
pub const VALUE_X: f32 = 180.0;
pub const VALUE_WIDTH: f32 = 365.0;
pub const AGE_X: f32 = 300.0;
pub const DATE_X: f32 = 400.0;
pub const RULE_END_X: f32 = 545.0;
pub const PARAGRAPH_WIDTH: f32 = 495.0;

pub const ROW_HEIGHT: f32 = 20.0;
pub const WRAPPED_LINE_HEIGHT: f32 = 12.0;
pub const SUBHEADING_HEIGHT: f32 = 18.0;
pub const SECTION_HEADER_HEIGHT: f32 = 25.0;
pub const RULE_OFFSET: f32 = 18.0;
pub const FOOTER_Y: f32 = 750.0;

pub const OVERFLOW_THRESHOLD: f32 = 650.0;
pub const ADDITIONAL_INFO_THRESHOLD: f32 = 600.0;
/// Content below this row on the last page would collide with the footer.
pub const FOOTER_CLEARANCE: f32 = FOOTER_Y - 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn components(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

pub const ACCENT: Color = Color::rgb(0x4A, 0x7C, 0x4E);
pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
pub const BODY: Color = Color::rgb(0x33, 0x33, 0x33);
pub const MUTED: Color = Color::rgb(0x66, 0x66, 0x66);
pub const FAINT: Color = Color::rgb(0x99, 0x99, 0x99);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    /// Resource name used inside content streams.
    pub fn resource_name(&self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
        }
    }

    pub fn base_font(&self) -> &'static str {
        match self {
            Font::Regular => "Helvetica",
            Font::Bold => "Helvetica-Bold",
        }
    }

    /// Advance width of one character in thousandths of the font size.
    /// Characters outside WinAnsi are measured as the `?` the writer emits.
    fn glyph_width(&self, c: char) -> u16 {
        let (low, high) = match self {
            Font::Regular => (&HELVETICA_WIDTHS, &HELVETICA_HIGH_WIDTHS),
            Font::Bold => (&HELVETICA_BOLD_WIDTHS, &HELVETICA_BOLD_HIGH_WIDTHS),
        };
        match win_ansi_code(c).unwrap_or(b'?') {
            code @ 32..=126 => low[(code - 32) as usize],
            code @ 128..=255 => high[(code - 128) as usize],
            _ => low[(b'?' - 32) as usize],
        }
    }

    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| self.glyph_width(c) as u32).sum();
        units as f32 * size / 1000.0
    }
}

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// WinAnsi codes 128..=255. Zero marks codes with no glyph.
#[rustfmt::skip]
const HELVETICA_HIGH_WIDTHS: [u16; 128] = [
    556, 0, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
    0, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 0, 500, 667,
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_HIGH_WIDTHS: [u16; 128] = [
    556, 0, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
    0, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 0, 500, 667,
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

/// WinAnsiEncoding byte for `c`, if the standard fonts can draw it. Covers
/// printable ASCII, Latin-1 from U+00A0 and the cp1252 punctuation block.
pub fn win_ansi_code(c: char) -> Option<u8> {
    let code = match c {
        ' '..='~' | '\u{A0}'..='\u{FF}' => c as u32 as u8,
        '\u{20AC}' => 0x80,
        '\u{201A}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201E}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02C6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8A,
        '\u{2039}' => 0x8B,
        '\u{0152}' => 0x8C,
        '\u{017D}' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02DC}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9A,
        '\u{203A}' => 0x9B,
        '\u{0153}' => 0x9C,
        '\u{017E}' => 0x9E,
        '\u{0178}' => 0x9F,
        _ => return None,
    };
    Some(code)
}

/// Greedy word wrap to `max_width`. Words wider than a line are split by character.
/// Always returns at least one line.
pub fn wrap_text(text: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };

            if font.text_width(&candidate, size) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            if font.text_width(word, size) <= max_width {
                current = word.to_string();
            } else {
                for c in word.chars() {
                    current.push(c);
                    if font.text_width(&current, size) > max_width {
                        current.pop();
                        lines.push(std::mem::take(&mut current));
                        current.push(c);
                    }
                }
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_uses_afm_metrics() {
        // "Hi" = H(722) + i(222)
        assert!((Font::Regular.text_width("Hi", 10.0) - 9.44).abs() < 0.001);
        // Bold i is wider than regular i.
        assert!(Font::Bold.text_width("i", 10.0) > Font::Regular.text_width("i", 10.0));
    }

    #[test]
    fn test_non_latin_measured_as_placeholder_glyph() {
        let thai = Font::Regular.text_width("สม", 10.0);
        let question = Font::Regular.text_width("??", 10.0);
        assert_eq!(thai, question);
    }

    #[test]
    fn test_latin1_letters_use_their_own_widths() {
        // e-acute and u-umlaut are as wide as e and u in Helvetica.
        assert_eq!(
            Font::Regular.text_width("caf\u{E9} m\u{FC}de", 10.0),
            Font::Regular.text_width("cafe mude", 10.0)
        );
        // Em dash (1000) is wider than the '?' fallback (556).
        assert!(
            Font::Regular.text_width("\u{2014}", 10.0) > Font::Regular.text_width("?", 10.0)
        );
    }

    #[test]
    fn test_win_ansi_codes() {
        assert_eq!(win_ansi_code('A'), Some(b'A'));
        assert_eq!(win_ansi_code('\u{E9}'), Some(0xE9));
        assert_eq!(win_ansi_code('\u{2019}'), Some(0x92));
        assert_eq!(win_ansi_code('\u{20AC}'), Some(0x80));
        assert_eq!(win_ansi_code('\u{2013}'), Some(0x96));
        // C1 controls have no glyph even though they fit in a byte.
        assert_eq!(win_ansi_code('\u{85}'), None);
        assert_eq!(win_ansi_code('\t'), None);
        assert_eq!(win_ansi_code('\u{0E2A}'), None);
    }

    #[test]
    fn test_wrap_short_text_single_line() {
        let lines = wrap_text("Barista", Font::Regular, 10.0, VALUE_WIDTH);
        assert_eq!(lines, vec!["Barista".to_string()]);
    }

    #[test]
    fn test_wrap_respects_width() {
        let text = "clean ".repeat(60);
        let lines = wrap_text(&text, Font::Regular, 10.0, PARAGRAPH_WIDTH);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(Font::Regular.text_width(line, 10.0) <= PARAGRAPH_WIDTH);
        }
        let rejoined = lines.join(" ");
        assert_eq!(rejoined.split_whitespace().count(), 60);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let word = "x".repeat(200);
        let lines = wrap_text(&word, Font::Regular, 10.0, 100.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
    }

    #[test]
    fn test_wrap_empty_text_yields_one_line() {
        assert_eq!(wrap_text("", Font::Regular, 10.0, 100.0), vec![String::new()]);
    }
}
