//! Tasks Domain
//!
//! Task records with validation, two interchangeable stores and the HTTP
//! handlers that expose them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP ⇄ service calls, status codes
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │   Service   │  ← Trimming, validation, not-found mapping
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │ Repository  │  ← InMemoryTaskRepository | PgTaskRepository
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasks::{InMemoryTaskRepository, TaskService, handlers};
//!
//! let service = TaskService::new(InMemoryTaskRepository::new());
//! let routes: axum::Router = axum::Router::new().nest("/tasks", handlers::router(service));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{TaskError, TaskResult};
pub use handlers::{TASKS_PATH, TaskApiDoc};
pub use models::{
    CreateTask, DESCRIPTION_MAX_CHARS, NewTask, TITLE_MAX_CHARS, Task, TaskChanges, TaskStatus,
    UpdateTask,
};
pub use postgres::PgTaskRepository;
pub use repository::{InMemoryTaskRepository, TaskRepository};
pub use service::TaskService;
