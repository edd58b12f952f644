// src/pdf/writer.rs
//! Serializes a [`LaidOutDocument`] with `lopdf`. Builds the whole object
//! graph in memory, then writes it into a byte buffer.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};

use super::error::RenderError;
use super::geometry::{win_ansi_code, Color, Font, PAGE_HEIGHT, PAGE_WIDTH};
use super::page::{DrawOp, LaidOutDocument, Page};

/// Helvetica ascender; converts a top-of-text y into a baseline.
const ASCENT_RATIO: f32 = 0.718;
const PRODUCER: &str = "i-Clean Application System";

pub fn write_pdf(laid_out: &LaidOutDocument, title: &str) -> Result<Vec<u8>, RenderError> {
    let mut document = Document::with_version("1.7");
    let pages_id = document.new_object_id();

    let mut fonts = Dictionary::new();
    for font in [Font::Regular, Font::Bold] {
        let font_id = document.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(font.resource_name(), font_id);
    }
    let resources_id = document.add_object(dictionary! { "Font" => fonts });

    let mut page_ids: Vec<ObjectId> = Vec::with_capacity(laid_out.page_count());
    for page in &laid_out.pages {
        let content = page_content(page);
        let content_id = document.add_object(Stream::new(Dictionary::new(), content.encode()?));

        let page_id = document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        page_ids.push(page_id);
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::from(*id)).collect();
    document.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_ids.len() as i64,
        }),
    );

    let catalog_id = document.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = document.add_object(dictionary! {
        "Title" => Object::string_literal(to_win_ansi(title)),
        "Producer" => Object::string_literal(PRODUCER),
    });
    document.trailer.set("Root", catalog_id);
    document.trailer.set("Info", info_id);

    let mut buffer = Vec::new();
    document.save_to(&mut buffer)?;
    Ok(buffer)
}

fn page_content(page: &Page) -> Content {
    let mut operations = Vec::new();

    for op in &page.ops {
        match op {
            DrawOp::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => {
                operations.push(fill_color(color));
                operations.push(Operation::new(
                    "re",
                    vec![
                        (*x).into(),
                        (PAGE_HEIGHT - y - height).into(),
                        (*width).into(),
                        (*height).into(),
                    ],
                ));
                operations.push(Operation::new("f", vec![]));
            }
            DrawOp::Line {
                x1,
                x2,
                y,
                width,
                color,
            } => {
                let [r, g, b] = color.components();
                operations.push(Operation::new("RG", vec![r.into(), g.into(), b.into()]));
                operations.push(Operation::new("w", vec![(*width).into()]));
                operations.push(Operation::new("m", vec![(*x1).into(), (PAGE_HEIGHT - y).into()]));
                operations.push(Operation::new("l", vec![(*x2).into(), (PAGE_HEIGHT - y).into()]));
                operations.push(Operation::new("S", vec![]));
            }
            DrawOp::Text {
                x,
                y,
                font,
                size,
                color,
                text,
            } => {
                let baseline = PAGE_HEIGHT - y - size * ASCENT_RATIO;
                operations.push(fill_color(color));
                operations.push(Operation::new("BT", vec![]));
                operations.push(Operation::new(
                    "Tf",
                    vec![font.resource_name().into(), (*size).into()],
                ));
                operations.push(Operation::new("Td", vec![(*x).into(), baseline.into()]));
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::string_literal(to_win_ansi(text))],
                ));
                operations.push(Operation::new("ET", vec![]));
            }
        }
    }

    Content { operations }
}

fn fill_color(color: &Color) -> Operation {
    let [r, g, b] = color.components();
    Operation::new("rg", vec![r.into(), g.into(), b.into()])
}

/// Standard fonts only cover WinAnsi; anything else becomes `?`.
pub fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| win_ansi_code(c).unwrap_or(b'?'))
        .collect()
}
