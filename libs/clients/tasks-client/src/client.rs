use domain_tasks::{CreateTask, Task, TaskError, UpdateTask};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use validator::Validate;

use crate::error::{ClientError, ClientResult};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const TASKS_PATH: &str = "/api/tasks";

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Typed client for the task API.
///
/// ```no_run
/// use domain_tasks::CreateTask;
/// use tasks_client::TasksClient;
///
/// # async fn example() -> Result<(), tasks_client::ClientError> {
/// let client = TasksClient::new("http://localhost:8080")?;
/// let task = client.create_task(&CreateTask::new("Buy milk")).await?;
/// client.delete_task(task.id).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TasksClient {
    http: Client,
    base_url: String,
}

impl TasksClient {
    /// Client with a 10 second request timeout
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let http = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Reuse an existing `reqwest::Client`
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_tasks(&self) -> ClientResult<Vec<Task>> {
        let response = self.http.get(self.collection_url()).send().await?;
        decode(response).await
    }

    pub async fn get_task(&self, id: i64) -> ClientResult<Task> {
        let response = self.http.get(self.task_url(id)).send().await?;
        decode(response).await
    }

    /// Validates locally first; invalid input never reaches the server
    pub async fn create_task(&self, input: &CreateTask) -> ClientResult<Task> {
        validate_create(input)?;

        let response = self
            .http
            .post(self.collection_url())
            .json(input)
            .send()
            .await?;
        decode(response).await
    }

    /// Full replace (PUT)
    pub async fn replace_task(&self, id: i64, input: &CreateTask) -> ClientResult<Task> {
        validate_create(input)?;

        let response = self.http.put(self.task_url(id)).json(input).send().await?;
        decode(response).await
    }

    /// Partial update (PATCH)
    pub async fn update_task(&self, id: i64, input: &UpdateTask) -> ClientResult<Task> {
        validate_update(input)?;

        let response = self
            .http
            .patch(self.task_url(id))
            .json(input)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete_task(&self, id: i64) -> ClientResult<()> {
        let response = self.http.delete(self.task_url(id)).send().await?;
        check(response).await.map(|_| ())
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, TASKS_PATH)
    }

    fn task_url(&self, id: i64) -> String {
        format!("{}{}/{}", self.base_url, TASKS_PATH, id)
    }
}

/// Apply the server's rules to a create/replace body without sending it
pub fn validate_create(input: &CreateTask) -> ClientResult<()> {
    input
        .clone()
        .normalize()
        .validate()
        .map_err(|e| ClientError::Invalid(TaskError::from(e).to_string()))
}

/// Apply the server's rules to the fields present in a patch body
pub fn validate_update(input: &UpdateTask) -> ClientResult<()> {
    input
        .clone()
        .normalize()
        .validate()
        .map_err(|e| ClientError::Invalid(TaskError::from(e).to_string()))
}

async fn check(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status.canonical_reason().unwrap_or("Unknown error").to_string(),
    };
    debug!(status = status.as_u16(), %message, "Request failed");

    Err(ClientError::from_status(status, message))
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    check(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}
