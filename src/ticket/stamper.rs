//! PDF text stamping.
//!
//! Loads a template document, draws the ticket number onto its first page at
//! a fixed position, and re-serializes the whole document. The position and
//! style are static; only the text varies per ticket.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object};
use thiserror::Error;

/// x/y in PDF user-space points, measured from the lower-left corner.
const STAMP_X: f32 = 300.0;
const STAMP_Y: f32 = 150.0;
const STAMP_FONT_SIZE: f32 = 18.0;
const STAMP_FONT_KEY: &str = "FtTicket";

#[derive(Debug, Error)]
pub enum StampError {
    #[error("template is not a valid PDF: {0}")]
    Parse(#[source] lopdf::Error),
    #[error("template has no pages")]
    NoPages,
    #[error("malformed template structure: {0}")]
    Structure(#[source] lopdf::Error),
    #[error("failed to serialize stamped document: {0}")]
    Serialize(#[source] std::io::Error),
}

/// Stamp `text` onto the first page of the PDF in `template`, returning the
/// re-serialized document. Text is rendered in black Helvetica at size 18.
pub fn stamp_first_page(template: &[u8], text: &str) -> Result<Vec<u8>, StampError> {
    let mut doc = Document::load_mem(template).map_err(StampError::Parse)?;
    let page_id = *doc.get_pages().get(&1).ok_or(StampError::NoPages)?;

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources = doc
        .get_or_create_resources(page_id)
        .and_then(Object::as_dict_mut)
        .map_err(StampError::Structure)?;
    if !resources.has(b"Font") {
        resources.set("Font", Dictionary::new());
    }
    resources
        .get_mut(b"Font")
        .and_then(Object::as_dict_mut)
        .map_err(StampError::Structure)?
        .set(STAMP_FONT_KEY, Object::Reference(font_id));

    let page_content = doc
        .get_page_content(page_id)
        .map_err(StampError::Structure)?;
    let mut content = Content::decode(&page_content).map_err(StampError::Structure)?;
    content.operations.extend([
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![STAMP_FONT_KEY.into(), STAMP_FONT_SIZE.into()]),
        Operation::new("rg", vec![0.into(), 0.into(), 0.into()]),
        Operation::new("Td", vec![STAMP_X.into(), STAMP_Y.into()]),
        Operation::new("Tj", vec![Object::string_literal(text)]),
        Operation::new("ET", vec![]),
    ]);
    let encoded = content.encode().map_err(StampError::Structure)?;
    doc.change_page_content(page_id, encoded)
        .map_err(StampError::Structure)?;

    let mut out = Vec::new();
    doc.save_to(&mut out).map_err(StampError::Serialize)?;
    Ok(out)
}
