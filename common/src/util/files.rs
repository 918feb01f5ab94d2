use std::path::Path;

use crate::models::Direction;

/// Derives the attachment filename of the converted document: the source
/// basename with only its last extension stripped, plus the target
/// extension. `notes.final.pdf` converted to DOCX becomes `notes.final.docx`.
pub fn output_file_name(source_name: &str, direction: Direction) -> String {
    let base = Path::new(source_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("converted");
    format!("{}.{}", base, direction.output_format())
}
