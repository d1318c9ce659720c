use domain_tasks::InMemoryTaskRepository;
use sea_orm::DatabaseConnection;

use crate::config::Config;

/// The task store selected at startup
#[derive(Clone, Debug)]
pub enum TaskStore {
    Memory(InMemoryTaskRepository),
    Postgres(DatabaseConnection),
}

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Config,
    pub store: TaskStore,
}
