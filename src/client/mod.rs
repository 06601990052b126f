//! HTTP client for the remote tasks API.
//!
//! [`TasksClient`] is the adaptation layer between the wire schema and the
//! domain model: it issues exactly one network call per operation, maps
//! responses through the conversions in [`crate::types::wire`], and
//! collapses every failure (transport, non-2xx status, malformed body)
//! into the fixed error for that operation. No caching, no retry; the
//! server's ordering is returned as-is.

pub mod config;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Error, Result};
use crate::types::{ApiNewTask, ApiTask, NewTask, Task};

pub use config::ApiConfig;

/// Client for the tasks REST API.
///
/// # Example
///
/// ```rust,ignore
/// use tareas::client::{ApiConfig, TasksClient};
/// use tareas::types::NewTask;
///
/// let client = TasksClient::new(ApiConfig::from_env())?;
/// let created = client.create(&NewTask::new("Comprar leche")).await?;
/// println!("creada con id {}", created.id);
/// ```
#[derive(Debug, Clone)]
pub struct TasksClient {
    /// URL of the `/tasks` collection.
    tasks_url: Url,
    http: reqwest::Client,
}

impl TasksClient {
    /// Create a client from the given configuration.
    ///
    /// Fails with [`Error::Config`] when the base URL is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| Error::Config(format!("URL base inválida '{}': {}", config.base_url, e)))?;

        let mut tasks_url = base.clone();
        tasks_url
            .path_segments_mut()
            .map_err(|()| Error::Config(format!("URL base inválida '{}'", config.base_url)))?
            .pop_if_empty()
            .push("tasks");

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Config(format!("no se pudo crear el cliente HTTP: {}", e)))?;

        Ok(Self { tasks_url, http })
    }

    /// URL of a single task resource.
    fn task_url(&self, id: u64) -> Url {
        let mut url = self.tasks_url.clone();
        // The collection URL always has a valid path, push cannot fail.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(&id.to_string());
        }
        url
    }

    /// List all tasks, in the order the server returns them.
    pub async fn list(&self) -> Result<Vec<Task>> {
        tracing::debug!(url = %self.tasks_url, "listing tasks");
        let wire: Vec<ApiTask> = self
            .expect_json(self.http.get(self.tasks_url.clone()), Error::Connection)
            .await?;
        Ok(wire.into_iter().map(Task::from).collect())
    }

    /// Fetch a single task by id.
    ///
    /// A missing task is indistinguishable from a transport failure:
    /// both surface as [`Error::Fetch`].
    pub async fn get(&self, id: u64) -> Result<Task> {
        let url = self.task_url(id);
        tracing::debug!(%url, "fetching task");
        let wire: ApiTask = self.expect_json(self.http.get(url), Error::Fetch).await?;
        Ok(wire.into())
    }

    /// Create a task. Input is assumed already validated (see
    /// [`NewTask::validate`]); the id comes from the server.
    pub async fn create(&self, task: &NewTask) -> Result<Task> {
        tracing::debug!(titulo = %task.titulo, "creating task");
        let payload = ApiNewTask::from(task);
        let wire: ApiTask = self
            .expect_json(
                self.http.post(self.tasks_url.clone()).json(&payload),
                Error::Create,
            )
            .await?;
        Ok(wire.into())
    }

    /// Replace the task with the given id.
    pub async fn update(&self, id: u64, task: &NewTask) -> Result<Task> {
        let url = self.task_url(id);
        tracing::debug!(%url, "updating task");
        let payload = ApiNewTask::from(task);
        let wire: ApiTask = self
            .expect_json(self.http.put(url).json(&payload), Error::Update)
            .await?;
        Ok(wire.into())
    }

    /// Delete the task with the given id.
    pub async fn remove(&self, id: u64) -> Result<()> {
        let url = self.task_url(id);
        tracing::debug!(%url, "deleting task");
        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(|e| discard(Error::Delete, &e))?;
        if !response.status().is_success() {
            return Err(discard(Error::Delete, &response.status()));
        }
        Ok(())
    }

    /// Send a request and decode a 2xx JSON body, collapsing any failure
    /// into `error`.
    async fn expect_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        error: Error,
    ) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| discard(error.clone(), &e))?;
        if !response.status().is_success() {
            return Err(discard(error, &response.status()));
        }
        response.json().await.map_err(|e| discard(error, &e))
    }
}

/// Log the cause being discarded, then return the operation's fixed error.
fn discard(error: Error, cause: &dyn std::fmt::Display) -> Error {
    tracing::debug!(%error, %cause, "task API call failed");
    error
}
