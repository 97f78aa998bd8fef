pub mod routes;

use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// JSON API plus the static popup page as fallback.
pub fn router(state: Arc<AppState>) -> Router {
    let popup_dir = state.config.popup_dir.clone();

    Router::new()
        .route("/api/quote/{symbol}", get(routes::get_quote))
        .route("/api/put", post(routes::post_put))
        .route("/api/call", post(routes::post_call))
        .route(
            "/api/credential",
            get(routes::get_credential)
                .put(routes::put_credential)
                .delete(routes::delete_credential),
        )
        .route("/api/counters", get(routes::get_counters))
        .fallback_service(
            ServeDir::new(&popup_dir).fallback(ServeFile::new(popup_dir.join("index.html"))),
        )
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
