//! # Vehicle Allocation Backend
//!
//! REST service for booking vehicles to employees by date.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (axum handlers, extractors, mappers)
//!     ↓
//! Domain Layer (AllocationService, business rules)
//!     ↓
//! Storage Layer (AllocationStorage, SQLite via sqlx)
//! ```
//!
//! Handlers keep no state of their own; the database pool is the only thing
//! shared between requests.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::domain::AllocationService;
use crate::storage::{AllocationRepository, DbConnection};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub allocation_service: AllocationService,
}

/// Wire the services on top of an open database connection
pub fn initialize_backend(db: DbConnection) -> AppState {
    info!("Setting up domain model");
    let repository = AllocationRepository::new(db);
    let allocation_service = AllocationService::new(Arc::new(repository));

    AppState { allocation_service }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .merge(io::rest::allocation_apis::router())
        .merge(io::rest::health_apis::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
