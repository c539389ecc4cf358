use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Router};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, limit::RequestBodyLimitLayer,
    set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

#[cfg(not(test))]
use {
    std::net::IpAddr,
    std::sync::Arc,
    tower_governor::{governor::GovernorConfigBuilder, key_extractor::KeyExtractor, GovernorLayer},
};

use crate::api::handlers::{self, AppState};
use crate::config::Settings;

/// Create the router with all endpoints
#[cfg_attr(test, allow(unused_variables))]
pub fn create_router(state: AppState, settings: &Settings) -> Router {
    // Public recipe routes - read-only, no authentication required
    #[cfg_attr(test, allow(unused_mut))]
    let mut recipe_routes = Router::new()
        .route("/recipes/search", get(handlers::search_recipes))
        .route("/recipes/random", get(handlers::random_recipes))
        .route("/recipes/mood", get(handlers::mood_recipes))
        .route("/recipes/:id", get(handlers::get_recipe))
        .route("/mealplan", get(handlers::meal_plan))
        .with_state(state.clone());

    // Apply rate limiting only in non-test builds
    // NOTE: Rate limiting uses a custom key extractor that:
    // 1. Tries to extract peer IP from connection
    // 2. Falls back to 127.0.0.1 for local testing when peer IP is unavailable
    // For production behind a reverse proxy, configure the proxy to set X-Real-IP or
    // X-Forwarded-For headers, and use PeerIpKeyExtractor instead.
    #[cfg(not(test))]
    {
        // Custom key extractor that provides fallback
        #[derive(Clone, Copy, Debug)]
        struct FallbackIpKeyExtractor;

        impl KeyExtractor for FallbackIpKeyExtractor {
            type Key = IpAddr;

            fn extract<B>(
                &self,
                req: &axum::http::Request<B>,
            ) -> Result<Self::Key, tower_governor::GovernorError> {
                // Try to get peer IP from extensions (set by axum)
                if let Some(addr) = req.extensions().get::<std::net::SocketAddr>() {
                    return Ok(addr.ip());
                }

                // Fall back to localhost for local development/testing
                Ok(IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)))
            }
        }

        let governor_conf = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(FallbackIpKeyExtractor)
                .per_second(settings.server.api_rate_limit)
                .burst_size(settings.server.api_rate_limit as u32 * 2)
                .finish()
                .unwrap(),
        );
        let governor_layer = GovernorLayer {
            config: governor_conf,
        };
        recipe_routes = recipe_routes.layer(governor_layer);
    }

    let recipe_routes = recipe_routes;

    // Health check routes
    let health_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .with_state(state.clone());

    // Main router with middleware
    Router::new()
        .merge(recipe_routes)
        .merge(health_routes)
        .layer(
            // Request body size limit - prevent memory exhaustion from large payloads
            RequestBodyLimitLayer::new(settings.server.max_request_body_size),
        )
        .layer(
            // CORS - allow all origins for read-only public API
            CorsLayer::new()
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .allow_origin(tower_http::cors::Any)
                .max_age(Duration::from_secs(3600)),
        )
        .layer(
            // Security headers
            SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ),
        )
        .layer(
            // Compression
            CompressionLayer::new(),
        )
        .layer(
            // Tracing
            TraceLayer::new_for_http(),
        )
}
