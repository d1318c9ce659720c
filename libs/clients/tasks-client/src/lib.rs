//! Async HTTP client for the task API.
//!
//! Mirrors the server's five task operations plus PATCH, validates input
//! locally with the same rules, and reports failures as [`ClientError`].
//! [`display`] holds the orderings a UI shows tasks in.

mod client;
pub mod display;
mod error;

pub use client::{TasksClient, validate_create, validate_update};
pub use domain_tasks::{CreateTask, Task, TaskStatus, UpdateTask};
pub use error::{ClientError, ClientResult};
