use serde::{Deserialize, Serialize};

use crate::models::ConvertError;

/// JSON body of every failed response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDto {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&ConvertError> for ErrorDto {
    fn from(err: &ConvertError) -> Self {
        let (error, details) = match err {
            ConvertError::MissingFile => ("No file uploaded", None),
            ConvertError::InvalidUpload(details) => ("Invalid upload", Some(details.clone())),
            ConvertError::PayloadTooLarge { limit } => ("File too large", Some(format!("the upload limit is {} bytes", limit))),
            ConvertError::Provider(details) => ("Conversion failed", Some(details.clone())),
            ConvertError::NoOutput => ("No output file found", None),
        };
        ErrorDto {
            error: error.to_string(),
            details,
        }
    }
}
