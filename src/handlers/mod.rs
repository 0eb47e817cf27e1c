pub mod error;
pub mod map;

use axum::{
    extract::DefaultBodyLimit,
    http::header,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use std::{sync::Arc, time::Duration};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{config::Config, services::MapTemplate};

pub use error::ApiError;

const INDEX_HTML: &str = include_str!("../../static/index.html");
const MAP_JS: &str = include_str!("../../static/map.js");

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub template: Arc<MapTemplate>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(template: MapTemplate, config: Config) -> Self {
        Self {
            template: Arc::new(template),
            config: Arc::new(config),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(index))
        .route("/map", post(map::map))
        .route("/map.js", get(map_script))
        .route("/health", get(health));

    with_middleware(routes, &state.config).with_state(state)
}

/// Request tracing, the request timeout and the upload size limit
pub fn with_middleware<S>(routes: Router<S>, config: &Config) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let timeout = Duration::from_secs(config.request_timeout_secs);

    routes.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(timeout))
            .layer(DefaultBodyLimit::max(config.max_upload_bytes)),
    )
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn map_script() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript")], MAP_JS)
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "track-viewer",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
