use axum::{Router, routing::get};
use axum_helpers::server::{create_router, health_router};
use domain_tasks::{PgTaskRepository, TaskService, handlers};
use std::io;

use crate::openapi::ApiDoc;
use crate::state::{AppState, TaskStore};

pub mod health;

/// API routes without the `/api` prefix, which `create_router` adds.
pub fn routes(state: &AppState) -> Router {
    let tasks = match &state.store {
        TaskStore::Memory(repo) => handlers::router(TaskService::new(repo.clone())),
        TaskStore::Postgres(db) => {
            handlers::router(TaskService::new(PgTaskRepository::new(db.clone())))
        }
    };

    Router::new().nest("/tasks", tasks)
}

/// Router with the `/ready` endpoint checking the active store.
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

/// The complete application: API, docs, middleware, `/health` and `/ready`.
pub fn app(state: &AppState) -> io::Result<Router> {
    let router = create_router::<ApiDoc>(routes(state), &state.config.server)?;

    Ok(router
        .merge(health_router(state.config.app))
        .merge(ready_router(state.clone())))
}
