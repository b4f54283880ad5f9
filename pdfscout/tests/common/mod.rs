#![allow(dead_code)]

use lopdf::{
    dictionary, Document, EncryptionState, EncryptionVersion, Object, Permissions, Stream,
    StringFormat,
};
use std::fs;
use std::path::Path;

/// Builds a PDF with one page per entry; an empty entry gives a page without text
pub fn build_pdf(page_texts: &[&str]) -> Vec<u8> {
    save(build_document(page_texts))
}

/// Builds an RC4-encrypted PDF. An empty `user_password` leaves the
/// document readable without a password.
pub fn build_encrypted_pdf(
    page_texts: &[&str],
    owner_password: &str,
    user_password: &str,
) -> Vec<u8> {
    let mut doc = build_document(page_texts);
    let state = EncryptionState::try_from(EncryptionVersion::V2 {
        document: &doc,
        owner_password,
        user_password,
        key_length: 128,
        permissions: Permissions::all(),
    })
    .unwrap();
    doc.encrypt(&state).unwrap();
    save(doc)
}

fn save(mut doc: Document) -> Vec<u8> {
    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

fn build_document(page_texts: &[&str]) -> Document {
    let mut doc = Document::with_version("1.4");
    // Encryption keys are derived from the file ID
    doc.trailer.set(
        "ID",
        Object::Array(vec![
            Object::String(b"pdfscout-test-id".to_vec(), StringFormat::Literal),
            Object::String(b"pdfscout-test-id".to_vec(), StringFormat::Literal),
        ]),
    );

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut page_ids = Vec::new();
    for text in page_texts {
        let content = if text.is_empty() {
            String::new()
        } else {
            format!(
                "BT /F1 12 Tf 100 700 Td ({}) Tj ET",
                text.replace('\\', "\\\\")
                    .replace('(', "\\(")
                    .replace(')', "\\)")
            )
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Resources" => resources_id,
            "Contents" => content_id,
        });
        page_ids.push(page_id);
    }

    let kids: Vec<Object> = page_ids.iter().map(|&id| id.into()).collect();
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(page_texts.len() as i64),
    });

    for page_id in &page_ids {
        if let Ok(Object::Dictionary(dict)) = doc.get_object_mut(*page_id) {
            dict.set("Parent", pages_id);
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

/// Writes a generated PDF to `dir/name`
pub fn write_pdf(dir: &Path, name: &str, page_texts: &[&str]) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, build_pdf(page_texts)).unwrap();
}

/// Writes an encrypted PDF to `dir/name`
pub fn write_encrypted_pdf(
    dir: &Path,
    name: &str,
    page_texts: &[&str],
    owner_password: &str,
    user_password: &str,
) {
    fs::write(
        dir.join(name),
        build_encrypted_pdf(page_texts, owner_password, user_password),
    )
    .unwrap();
}

/// Writes bytes that do not form a PDF
pub fn write_corrupt(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"%PDX-garbage header\nnot a pdf at all").unwrap();
}
