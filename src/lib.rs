//! Dispatch Demo API Library
//!
//! This crate serves synthetic order-to-dispatch data (orders, shipments,
//! warehouses, forecasts) over HTTP for the dashboard UI. All records are
//! generated in memory from a seeded random stream; nothing is persisted.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod errors;
pub mod generator;
pub mod handlers;
pub mod middleware_helpers;
pub mod openapi;
pub mod tracing;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::Router;
use http::HeaderValue;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
};
// The crate-local `tracing` module shadows the tracing crate here; use a
// leading `::` to reach the external crate.
use ::tracing::warn;

use errors::ApiError;
use generator::DataGenerator;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub config: config::AppConfig,
    generator: Arc<Mutex<DataGenerator>>,
}

impl AppState {
    pub fn new(config: config::AppConfig, generator: DataGenerator) -> Self {
        Self {
            config,
            generator: Arc::new(Mutex::new(generator)),
        }
    }

    /// Locks the shared data generator for the duration of one generation
    /// call. Handlers must not hold the guard across an await point.
    pub fn generator(&self) -> Result<MutexGuard<'_, DataGenerator>, ApiError> {
        self.generator
            .lock()
            .map_err(|_| ApiError::Internal("data generator lock poisoned".to_string()))
    }
}

/// Assembles the full application: routes, Swagger UI, and the middleware
/// stack (HTTP tracing, compression, CORS, request-id propagation).
pub fn build_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::<AppState>::new()
        .merge(handlers::routes())
        .merge(openapi::swagger_ui())
        // HTTP tracing layer for consistent request/response telemetry
        .layer(tracing::configure_http_tracing())
        .layer(CompressionLayer::new())
        .layer(cors)
        // Ensure every request carries a request id for traceability
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id::request_id_middleware,
        ))
        .with_state(state)
}

/// Builds the CORS layer from config. Explicit origins take precedence;
/// otherwise the development posture allows any origin, method, and header.
fn cors_layer(cfg: &config::AppConfig) -> CorsLayer {
    let configured_origins: Option<Vec<HeaderValue>> = cfg
        .cors_allowed_origins
        .as_ref()
        .map(|raw| {
            raw.split(',')
                .filter_map(|origin| {
                    let trimmed = origin.trim();
                    if trimmed.is_empty() {
                        None
                    } else {
                        HeaderValue::from_str(trimmed).ok()
                    }
                })
                .collect::<Vec<_>>()
        })
        .filter(|origins| !origins.is_empty());

    match configured_origins {
        Some(origins) => CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any),
        None => {
            if !cfg.is_development() {
                warn!(
                    "No CORS origins configured outside development; falling back to permissive CORS. Set APP__CORS_ALLOWED_ORIGINS to restrict."
                );
            }
            CorsLayer::permissive()
        }
    }
}
