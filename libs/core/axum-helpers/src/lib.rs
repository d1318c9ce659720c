//! # Axum Helpers
//!
//! Shared HTTP plumbing for the API binaries.
//!
//! - **[`server`]**: router assembly, OpenAPI docs, health checks, graceful shutdown
//! - **[`errors`]**: `AppError` and the `{ "error": "..." }` response body
//! - **[`extractors`]**: numeric path ids and JSON bodies that reject with `AppError`

pub mod errors;
pub mod extractors;
pub mod server;

pub use errors::{AppError, ErrorResponse, INTERNAL_ERROR_MESSAGE, describe_validation_errors};
pub use extractors::{ApiJson, IdPath};
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};
