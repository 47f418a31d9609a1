pub mod config;
pub mod error;
pub mod games;
pub mod routes;
pub mod server;
pub mod sounds;
pub mod state;

use axum::Router;
use axum::http::{HeaderValue, header};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use config::ServerConfig;
use state::AppState;

/// Build the Axum router from a config.
pub fn build_app(config: ServerConfig) -> Router {
    let state = AppState::new(config);

    // Everything routes through the fallback dispatcher: the sound listing
    // matches on a path suffix, which a route table cannot express. The
    // header layers fire on every response, static files and errors included.
    Router::new()
        .fallback(routes::dispatch)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::EXPIRES,
            HeaderValue::from_static("0"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
