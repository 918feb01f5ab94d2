use axum::error_handling::HandleErrorLayer;
use axum::Router;
use reqwest::StatusCode;
use service::config;
use service::routes;
use service::state::{RelaySettings, ServiceCollection};
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::fmt().json().finish();
    tracing::subscriber::set_global_default(subscriber).expect("Could not init tracing.");

    let Some(api_key) = config::get_api_key() else {
        error!("Missing CLOUDCONVERT_API_KEY in environment");
        std::process::exit(1);
    };

    let settings = RelaySettings {
        api_key,
        api_base: config::get_api_base(),
        max_upload_bytes: config::get_max_upload_bytes(),
    };
    let port = config::get_port();
    let request_timeout = config::get_request_timeout();

    let services = ServiceCollection::build(settings).unwrap();

    let app = Router::new()
        .merge(routes::root::create_route())
        .merge(routes::ui::create_route())
        .merge(routes::convert::create_route(services))
        .layer(ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(HandleErrorLayer::new(|_| async {
                StatusCode::REQUEST_TIMEOUT
            }))
            .layer(TimeoutLayer::new(request_timeout)),
        );

    let addr = SocketAddr::new(IpAddr::V6(Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 0)), port);
    info!("listening on {}", &addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
