//! Wire schema for the remote tasks API and its domain mapping.
//!
//! The remote service speaks `id`/`title`/`description`/`completed`;
//! application code speaks `id`/`titulo`/`descripcion`/`completada`.
//! Mapping rules:
//!
//! - wire → domain: every field carried over, `description` preserved
//!   as-is including absence.
//! - domain → wire: an absent `descripcion` becomes `""` — the field is
//!   always present on outgoing payloads, never omitted.

use serde::{Deserialize, Serialize};

use super::task::{NewTask, Task};

/// A task in the remote API's schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiTask {
    /// Server-assigned identifier.
    pub id: u64,
    /// Task title.
    pub title: String,
    /// Optional description; the server may omit the field entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Completion flag.
    pub completed: bool,
}

/// Outgoing payload for create and update requests. No id: the server
/// assigns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiNewTask {
    /// Task title.
    pub title: String,
    /// Description, defaulted to the empty string when the domain payload
    /// has none. Always serialized.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
}

impl From<ApiTask> for Task {
    fn from(a: ApiTask) -> Self {
        Self {
            id: a.id,
            titulo: a.title,
            descripcion: a.description,
            completada: a.completed,
        }
    }
}

impl From<&NewTask> for ApiNewTask {
    fn from(t: &NewTask) -> Self {
        Self {
            title: t.titulo.clone(),
            description: t.descripcion.clone().unwrap_or_default(),
            completed: t.completada,
        }
    }
}

impl From<NewTask> for ApiNewTask {
    fn from(t: NewTask) -> Self {
        Self {
            title: t.titulo,
            description: t.descripcion.unwrap_or_default(),
            completed: t.completada,
        }
    }
}
