use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::db::repository::AdRepository;

/// Shared application state, cloned into every request handler.
///
/// The repository handle is built once during startup, before the listener
/// is bound, and never mutated afterwards. Handlers only ever read it, so
/// no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub ads: Arc<dyn AdRepository>,
}

/// Build the service router.
///
/// Shared by `main` and the integration tests so both exercise the same
/// routes and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/advertising",
            get(api::advertising::get_advertising_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
