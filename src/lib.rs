//! # tareas
//!
//! Rust client SDK for the Tareas task-management REST API.
//!
//! The crate has four pieces:
//!
//! - [`types`] — the domain model ([`Task`], [`NewTask`]) and the wire
//!   schema the remote API speaks, with the mapping between them.
//! - [`client`] — [`TasksClient`], the API adapter: one network call per
//!   operation, wire↔domain translation, and a small, fixed error
//!   vocabulary for every remote failure.
//! - [`session`] — [`SessionStore`], the single source of truth for the
//!   current actor's authentication state, backed by an injected
//!   [`CredentialsVerifier`].
//! - [`guard`] — [`NavigationGuard`], the predicate the router consults
//!   before entering a protected destination.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tareas::{ApiConfig, NavigationGuard, Route, SessionStore, TasksClient};
//!
//! let session = Arc::new(SessionStore::new(verifier));
//! let guard = NavigationGuard::new(session.clone());
//!
//! session.login("ana", "secreta").await?;
//! assert!(matches!(guard.check(Route::Tasks), tareas::GuardDecision::Allowed(_)));
//!
//! let client = TasksClient::new(ApiConfig::from_env())?;
//! for task in client.list().await? {
//!     println!("{} [{}]", task.titulo, task.completada);
//! }
//! ```

pub mod client;
pub mod error;
pub mod guard;
pub mod session;
pub mod types;

pub use client::{ApiConfig, TasksClient};
pub use error::{Error, Result};
pub use guard::{GuardDecision, NavigationGuard, Route};
pub use session::{AuthToken, CredentialsVerifier, SessionStore};
pub use types::{NewTask, Task, ValidationError};
