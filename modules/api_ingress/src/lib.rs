//! HTTP ingress: wraps module routers with the shared middleware stack,
//! adds health and OpenAPI endpoints, and runs the server.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
    http::header,
    middleware::from_fn,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
};

mod config;
pub mod error;
pub mod request_id;
mod web;

pub use config::{ApiIngressConfig, DEFAULT_BODY_LIMIT_BYTES};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Owns the HTTP server: the middleware stack, the ingress-level routes and
/// the listener.
#[derive(Debug, Clone)]
pub struct ApiIngress {
    config: ApiIngressConfig,
    request_timeout: Duration,
}

impl Default for ApiIngress {
    fn default() -> Self {
        Self::new(ApiIngressConfig::default())
    }
}

impl ApiIngress {
    /// Create a new ApiIngress instance with the given configuration
    pub fn new(config: ApiIngressConfig) -> Self {
        Self {
            config,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Upper bound on handler time; slower requests get 408.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn config(&self) -> &ApiIngressConfig {
        &self.config
    }

    /// Merge `app` with the ingress routes and wrap everything in the
    /// middleware stack. `openapi` is served at `/openapi.json` when docs are
    /// enabled.
    pub fn build_router(
        &self,
        app: Router,
        openapi: Option<utoipa::openapi::OpenApi>,
    ) -> Result<Router> {
        tracing::debug!("Building ingress router");
        let mut router = Router::new()
            .route("/health", get(web::health_check))
            .route("/healthz", get(web::healthz))
            .merge(app);

        if self.config.enable_docs {
            if let Some(doc) = openapi {
                // Serialized once, served as static JSON
                let doc = Arc::new(serde_json::to_value(doc).context("serialize OpenAPI")?);
                router = router.route(
                    "/openapi.json",
                    get(move || {
                        let doc = doc.clone();
                        async move {
                            ([(header::CACHE_CONTROL, "no-store")], Json((*doc).clone()))
                                .into_response()
                        }
                    }),
                );
                tracing::info!("OpenAPI document available at /openapi.json");
            }
        }

        router = router.fallback(web::route_not_found);

        // Layers are added innermost first. Request flow (outer to inner):
        // CORS -> SetRequestId -> PropagateRequestId -> Trace -> push_req_id_to_extensions -> Timeout -> BodyLimit
        let x_request_id = request_id::header();

        router = router.layer(RequestBodyLimitLayer::new(self.config.body_limit_bytes));
        router = router.layer(TimeoutLayer::new(self.request_timeout));
        router = router.layer(from_fn(request_id::push_req_id_to_extensions));
        router = router.layer(request_id::create_trace_layer());
        router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));
        router = router.layer(SetRequestIdLayer::new(x_request_id, request_id::MakeReqId));

        if self.config.cors_enabled {
            router = router.layer(CorsLayer::permissive());
        }

        Ok(router)
    }

    /// Bind `bind_addr` and serve until `shutdown` resolves.
    pub async fn serve<F>(&self, router: Router, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = self.config.bind_addr.parse().map_err(|e| {
            anyhow::anyhow!("Invalid bind address '{}': {}", self.config.bind_addr, e)
        })?;

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("bind {addr}"))?;
        Self::serve_on(listener, router, shutdown).await
    }

    /// Serve on an already bound listener with graceful shutdown.
    pub async fn serve_on<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!("HTTP server bound on {}", listener.local_addr()?);

        let shutdown = async move {
            shutdown.await;
            tracing::info!("HTTP server shutting down gracefully");
        };

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| anyhow::anyhow!(e))
    }
}
