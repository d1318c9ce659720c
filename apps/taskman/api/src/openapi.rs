use utoipa::OpenApi;

/// Root OpenAPI document; domain docs are nested under their mount paths.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taskman API",
        description = "Create, list, update and delete tasks"
    ),
    nest(
        (path = "/api/tasks", api = domain_tasks::TaskApiDoc)
    )
)]
pub struct ApiDoc;
