use thiserror::Error;

/// Everything that can go wrong between receiving an upload and streaming
/// the converted file back. Client input problems are separated from
/// provider failures so the routes can map them to 4xx and 5xx responses.
#[derive(Debug, Clone, Error)]
pub enum ConvertError {
    #[error("no file uploaded")]
    MissingFile,
    #[error("could not read the upload: {0}")]
    InvalidUpload(String),
    #[error("the file exceeds the upload limit of {limit} bytes")]
    PayloadTooLarge { limit: usize },
    #[error("the conversion provider reported a failure: {0}")]
    Provider(String),
    #[error("the conversion job produced no output file")]
    NoOutput,
}
