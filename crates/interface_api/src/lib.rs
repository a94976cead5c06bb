//! HTTP API Layer
//!
//! This crate provides the REST API for the employee records service using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: One handler per employee operation, plus health checks
//! - **Middleware**: Request access logging
//! - **DTOs**: Request/Response data transfer objects (camelCase on the wire)
//! - **Error Handling**: Consistent error responses
//!
//! Handlers never touch SQL. They call the `EmployeePort` held in
//! [`AppState`], which acquires and releases its own connection per call.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(pool);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use domain_employee::EmployeePort;
use infra_db::{DatabasePool, SqliteEmployeeAdapter};
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use crate::middleware::access_log_middleware;
use crate::handlers::{employees, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: DatabasePool,
    pub employees: Arc<dyn EmployeePort>,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `pool` - Database connection pool
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(pool: DatabasePool) -> Router {
    let employees: Arc<dyn EmployeePort> = Arc::new(SqliteEmployeeAdapter::new(pool.clone()));
    create_router_with_port(pool, employees)
}

/// Creates the API router around an explicit employee port
///
/// The pool is still needed for the readiness probe.
pub fn create_router_with_port(
    pool: DatabasePool,
    employees: Arc<dyn EmployeePort>,
) -> Router {
    let state = AppState { pool, employees };

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Employee routes; the static batch paths win over `/:id`
    let employee_routes = Router::new()
        .route(
            "/",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route("/increment-values", post(employees::increment_values))
        .route("/aggregate-abc-values", get(employees::aggregate_abc_values))
        .route(
            "/:id",
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        );

    let api_routes = Router::new()
        .nest("/employees", employee_routes)
        .layer(axum_middleware::from_fn(access_log_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
