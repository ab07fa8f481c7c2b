//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the concierge routes with request tracing and CORS.

pub mod concierge;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::ConciergeService;

pub use concierge::{concierge_routes, ConciergeHandlers};

/// Builds the full application router.
///
/// An empty `cors_origins` list allows any origin.
pub fn app_router(service: Arc<ConciergeService>, cors_origins: &[String]) -> Router {
    concierge_routes(ConciergeHandlers::new(service))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if allowed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(allowed))
    }
}
