//! Domain and wire types for tasks.
//!
//! The domain model (`Task`, `NewTask`) is what application code works
//! with; the wire schema (`ApiTask`, `ApiNewTask`) is what the remote API
//! exchanges. The two are isomorphic under field renaming, and the
//! `From` conversions in [`wire`] own that mapping.

pub mod task;
pub mod wire;

pub use task::{NewTask, Task, ValidationError};
pub use wire::{ApiNewTask, ApiTask};
