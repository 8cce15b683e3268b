mod response;
mod trends;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
        HeaderValue, StatusCode,
    },
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::{config::Config, trends::TrendsProvider};

pub struct AppState {
    pub config: Config,
    pub provider: Arc<dyn TrendsProvider>,
}

pub async fn run(config: Config, provider: Arc<dyn TrendsProvider>) -> eyre::Result<()> {
    let bind = config.bind;
    let app = router(Arc::new(AppState { config, provider }));

    info!("Listening on http://{bind}");

    let listener = tokio::net::TcpListener::bind(bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/trends", get(trends::region).options(preflight))
        // the path the serverless deployment used
        .route("/api/google-trends", get(trends::region).options(preflight))
        .route("/api/trends/all", get(trends::overview).options(preflight))
        .with_state(state)
        // anyone can call us from anywhere
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(TraceLayer::new_for_http())
}

async fn index(State(state): State<Arc<AppState>>) -> Response {
    let path = &state.config.index_path;
    match tokio::fs::read_to_string(path).await {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            error!("couldn't read {}: {err}", path.display());
            (StatusCode::INTERNAL_SERVER_ERROR, "index page is missing").into_response()
        }
    }
}

/// CORS preflight. The headers come from the layers in [`router`].
async fn preflight() -> StatusCode {
    StatusCode::OK
}
