use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Router};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, limit::RequestBodyLimitLayer,
    services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

#[cfg(not(test))]
use {
    std::net::IpAddr,
    std::sync::Arc,
    tower_governor::{governor::GovernorConfigBuilder, key_extractor::KeyExtractor, GovernorLayer},
};

use crate::api::handlers::{self as api_handlers, AppState};
use crate::config::Settings;
use crate::web::handlers as web_handlers;

/// Create the router with all endpoints (API + Web UI)
#[cfg_attr(test, allow(unused_variables))]
pub fn create_router(state: AppState, settings: &Settings) -> Router {
    // Public API routes - read-only, no authentication required
    #[cfg_attr(test, allow(unused_mut))]
    let mut api_routes = Router::new()
        // Recommendations
        .route("/recommend", get(api_handlers::recommend))
        // Recipes
        .route("/recipes/:id", get(api_handlers::get_recipe))
        // Stats
        .route("/stats", get(api_handlers::get_stats))
        .with_state(state.clone());

    // Apply rate limiting only in non-test builds
    // NOTE: Rate limiting uses a custom key extractor that:
    // 1. Tries to extract peer IP from connection
    // 2. Falls back to 127.0.0.1 for local testing when peer IP is unavailable
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
        api_routes = api_routes.layer(governor_layer);
    }

    let api_routes = api_routes;

    // Web UI routes
    let web_routes = Router::new()
        .route("/", get(web_handlers::index))
        .route("/recipes/:id", get(web_handlers::recipe_detail))
        .route("/about", get(web_handlers::about_page))
        .with_state(state.clone());

    // Health check routes
    let health_routes = Router::new()
        .route("/health", get(api_handlers::health_check))
        .route("/ready", get(api_handlers::readiness_check))
        .with_state(state.clone());

    // Static file serving
    let static_routes = Router::new().nest_service("/static", ServeDir::new("src/web/static"));

    // Main router with middleware
    Router::new()
        .merge(web_routes)
        .merge(health_routes)
        .merge(static_routes)
        .nest("/api", api_routes)
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
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(
                "default-src 'self'; script-src 'self'; style-src 'self' 'unsafe-inline'; img-src 'self' data:; font-src 'self' data:; object-src 'none'; base-uri 'self'",
            ),
        ))
        .layer(
            // Compression
            CompressionLayer::new(),
        )
        .layer(
            // Tracing
            TraceLayer::new_for_http(),
        )
}
