use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use common::dtos::{RootDto, RootLinks};
use common::util::consts::{NAME, VERSION};

pub fn create_route() -> Router {
    Router::new().route("/", get(root_links)).route("/health", get(health))
}

pub async fn root_links() -> Json<RootDto> {
    Json(RootDto {
        version: VERSION,
        name: NAME,
        _links: RootLinks {
            convert: "/convert",
            ui: "/ui",
        },
    })
}

#[tracing::instrument]
pub async fn health() -> StatusCode {
    StatusCode::OK
}
