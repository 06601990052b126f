//! Error types for the Tareas SDK.
//!
//! Every remote operation collapses its failures (transport, non-2xx
//! status, malformed body) into a single fixed, displayable message. The
//! underlying cause is logged at `debug` before being discarded; callers
//! that need finer-grained recovery must add it above this layer.

use thiserror::Error;

/// Result type alias using the SDK's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the Tareas SDK.
///
/// The remote-operation variants carry no structured cause: the message
/// is the whole contract, and it is stable for display to end users.
/// None of them is retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Listing tasks failed (transport, status or decode).
    #[error("No se pudo conectar con la API de tareas.")]
    Connection,

    /// Fetching a single task failed. Covers "not found" as well —
    /// the adapter does not distinguish it from transport failure.
    #[error("No se pudo obtener la tarea.")]
    Fetch,

    /// Creating a task failed.
    #[error("No se pudo crear la tarea.")]
    Create,

    /// Updating a task failed.
    #[error("No se pudo actualizar la tarea.")]
    Update,

    /// Deleting a task failed.
    #[error("No se pudo eliminar la tarea.")]
    Delete,

    /// Credential verification failed.
    #[error("Credenciales inválidas")]
    Auth,

    /// Invalid configuration (bad base URL, HTTP client build failure).
    /// Raised only while constructing a client, never by an operation.
    #[error("Configuración inválida: {0}")]
    Config(String),
}
