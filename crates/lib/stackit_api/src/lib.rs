//! # stackit_api
//!
//! HTTP API library for the StackIt assistant.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use stackit_core::completion::CompletionProvider;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultOnFailure, TraceLayer};
use tracing::{Level, warn};

use crate::config::ApiConfig;
use crate::handlers::{chat, health, text};

/// Shared application state passed to all handlers.
///
/// Everything in here is read-only once the server starts.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: ApiConfig,
    /// Upstream completion client.
    pub completion: Arc<dyn CompletionProvider>,
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    // Only the /api group is reachable cross-origin.
    let api: Router<AppState> = Router::new()
        .route(routes::POST_API_CHAT, post(chat::chat_handler))
        .route(routes::POST_API_ENHANCE_TEXT, post(text::enhance_text_handler))
        .route(
            routes::POST_API_GENERATE_CONTENT,
            post(text::generate_content_handler),
        )
        .layer(cors_layer(&state.config.allowed_origins));

    Router::new()
        .route(routes::GET_HEALTH, get(health::health_check))
        .merge(api)
        // Upstream failures are already logged at ERROR by `AppError`.
        .layer(
            TraceLayer::new_for_http()
                .on_failure(DefaultOnFailure::new().level(Level::DEBUG)),
        )
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(usable_origins(allowed_origins)))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Exact origins the CORS layer can match.
///
/// `AllowOrigin::list` rejects `*`, so wildcards are dropped along with
/// values that are not valid header values.
fn usable_origins(allowed_origins: &[String]) -> Vec<HeaderValue> {
    allowed_origins
        .iter()
        .filter_map(|origin| {
            if origin.trim() == "*" {
                warn!(%origin, "ignoring wildcard CORS origin; list origins explicitly");
                return None;
            }
            match HeaderValue::from_str(origin) {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(origins: &[&str]) -> Vec<String> {
        origins.iter().map(|o| o.to_string()).collect()
    }

    #[test]
    fn wildcard_origin_is_dropped() {
        let origins = usable_origins(&owned(&["*", "http://localhost:3000", " * "]));
        assert_eq!(origins, vec![HeaderValue::from_static("http://localhost:3000")]);
    }

    #[test]
    fn invalid_origin_is_dropped() {
        let origins = usable_origins(&owned(&["http://bad\norigin", "http://localhost:3001"]));
        assert_eq!(origins, vec![HeaderValue::from_static("http://localhost:3001")]);
    }

    #[test]
    fn wildcard_only_list_builds_a_layer() {
        let _layer = cors_layer(&owned(&["*"]));
    }
}
