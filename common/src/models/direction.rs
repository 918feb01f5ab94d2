/// Conversion target selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    DocxToPdf,
    PdfToDocx,
}

impl Direction {
    /// Resolves the `direction` form field. A missing or unrecognized value
    /// falls back to DOCX→PDF instead of failing the request.
    pub fn from_field(field: Option<&str>) -> Direction {
        match field {
            Some("docx-to-pdf") => Direction::DocxToPdf,
            Some("pdf-to-docx") => Direction::PdfToDocx,
            _ => Direction::DocxToPdf,
        }
    }

    /// Format token sent to the provider. Doubles as the extension of the
    /// derived output filename.
    pub fn output_format(&self) -> &'static str {
        match self {
            Direction::DocxToPdf => "pdf",
            Direction::PdfToDocx => "docx",
        }
    }
}
