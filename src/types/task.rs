//! Domain task model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A task as seen by application code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identifier. Immutable once assigned; the client
    /// never sets it for new tasks.
    pub id: u64,
    /// Task title. Required, at least 3 characters (enforced at the
    /// caller boundary via [`NewTask::validate`], not here).
    pub titulo: String,
    /// Optional description. `None` when the wire omitted it.
    pub descripcion: Option<String>,
    /// Completion flag.
    pub completada: bool,
}

/// Payload for creating or updating a task: [`Task`] minus the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    /// Task title.
    pub titulo: String,
    /// Optional description.
    pub descripcion: Option<String>,
    /// Completion flag.
    pub completada: bool,
}

impl NewTask {
    /// Create a new payload with the given title.
    pub fn new(titulo: impl Into<String>) -> Self {
        Self {
            titulo: titulo.into(),
            ..Default::default()
        }
    }

    /// Set the description.
    pub fn with_descripcion(mut self, descripcion: impl Into<String>) -> Self {
        self.descripcion = Some(descripcion.into());
        self
    }

    /// Set the completion flag.
    pub fn with_completada(mut self, completada: bool) -> Self {
        self.completada = completada;
        self
    }

    /// Boundary validation: the title must be present and at least
    /// 3 characters long.
    ///
    /// This is the caller's check, run before a payload reaches
    /// [`TasksClient`](crate::client::TasksClient) — the adapter itself
    /// assumes validated input and never re-validates. A failure here is
    /// local form feedback, not part of the remote error vocabulary.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.titulo.chars().count() < 3 {
            return Err(ValidationError::TituloTooShort);
        }
        Ok(())
    }
}

/// Local validation failures, rejected before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The title is missing or shorter than 3 characters.
    #[error("El título debe tener al menos 3 caracteres.")]
    TituloTooShort,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_short_title() {
        assert_eq!(
            NewTask::new("ab").validate(),
            Err(ValidationError::TituloTooShort)
        );
        assert_eq!(
            NewTask::new("").validate(),
            Err(ValidationError::TituloTooShort)
        );
    }

    #[test]
    fn test_validate_accepts_three_chars() {
        assert!(NewTask::new("abc").validate().is_ok());
    }

    #[test]
    fn test_validate_counts_chars_not_bytes() {
        // "año" is 4 bytes but 3 characters.
        assert!(NewTask::new("año").validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let t = NewTask::new("Comprar leche")
            .with_descripcion("entera")
            .with_completada(true);
        assert_eq!(t.titulo, "Comprar leche");
        assert_eq!(t.descripcion.as_deref(), Some("entera"));
        assert!(t.completada);
    }
}
