use axum::body::StreamBody;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::response::{AppendHeaders, IntoResponse};
use axum::routing::post;
use axum::{Json, Router};
use bytes::Bytes;
use reqwest::{header, StatusCode};

use common::dtos::ErrorDto;
use common::models::{ConvertError, Direction};
use common::util::files::output_file_name;

use crate::state::Services;

// Room for the multipart framing around the capped file payload.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn create_route(services: Services) -> Router {
    let body_limit = services.max_upload_bytes + MULTIPART_OVERHEAD;
    Router::new()
        .route("/convert", post(convert))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(services)
}

#[tracing::instrument(skip(services, multipart))]
pub async fn convert(State(services): State<Services>, multipart: Multipart) -> Result<impl IntoResponse, (StatusCode, Json<ErrorDto>)> {
    let upload = match read_upload(multipart, services.max_upload_bytes).await {
        Ok(upload) => upload,
        Err(err) => return Err(error_response(err)),
    };
    let file_name = output_file_name(&upload.file_name, upload.direction);
    match services.convert_service.convert(&upload.file_name, upload.content, upload.direction).await {
        Ok(document) => {
            let headers = AppendHeaders([
                (header::CONTENT_TYPE, document.content_type.to_string()),
                (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", file_name)),
            ]);
            Ok((headers, StreamBody::new(document.content)))
        }
        Err(err) => Err(error_response(err)),
    }
}

struct Upload {
    file_name: String,
    content: Bytes,
    direction: Direction,
}

/// Drains the multipart form. Presence and size of the file are validated
/// here, before any provider call is made.
async fn read_upload(mut multipart: Multipart, max_upload_bytes: usize) -> Result<Upload, ConvertError> {
    let mut file: Option<(String, Bytes)> = None;
    let mut direction: Option<String> = None;
    while let Some(field) = multipart.next_field().await.map_err(|err| ConvertError::InvalidUpload(err.to_string()))? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content = field.bytes().await.map_err(|err| ConvertError::InvalidUpload(err.to_string()))?;
                file = Some((file_name, content));
            }
            "direction" => {
                direction = Some(field.text().await.map_err(|err| ConvertError::InvalidUpload(err.to_string()))?);
            }
            _ => {}
        }
    }
    let (file_name, content) = file.ok_or(ConvertError::MissingFile)?;
    if content.len() >= max_upload_bytes {
        return Err(ConvertError::PayloadTooLarge { limit: max_upload_bytes });
    }
    Ok(Upload {
        file_name,
        content,
        direction: Direction::from_field(direction.as_deref()),
    })
}

fn error_response(err: ConvertError) -> (StatusCode, Json<ErrorDto>) {
    let status = match &err {
        ConvertError::MissingFile | ConvertError::InvalidUpload(_) => StatusCode::BAD_REQUEST,
        ConvertError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        ConvertError::Provider(_) | ConvertError::NoOutput => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorDto::from(&err)))
}
