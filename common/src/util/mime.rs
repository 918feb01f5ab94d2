use std::{path::Path, str::FromStr};

use mime::Mime;

static DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
static DOC: &str = "application/msword";

/// Resolves the content type of a downloaded document: a well-formed header
/// wins, otherwise the filename extension decides.
pub fn get_content_type(mime_type: Option<&str>, filename: &str) -> Mime {
    if let Some(mime_type) = mime_type {
        if let Ok(content_type) = Mime::from_str(mime_type) {
            return content_type;
        }
    }
    if let Some(extension) = Path::new(filename).extension() {
        if let Some(extension) = extension.to_str() {
            return match extension {
                "pdf" => mime::APPLICATION_PDF,
                "docx" => parse_or_octet_stream(DOCX),
                "doc" => parse_or_octet_stream(DOC),
                _ => mime::APPLICATION_OCTET_STREAM,
            };
        }
    }
    mime::APPLICATION_OCTET_STREAM
}

fn parse_or_octet_stream(mime_type: &str) -> Mime {
    Mime::from_str(mime_type).unwrap_or(mime::APPLICATION_OCTET_STREAM)
}
