//! Todo domain module.
//!
//! # Module Structure
//!
//! - `model`: The `Todo` entity and `TodoStatus`
//! - `repository`: Todo repository trait for persistence
//! - `service`: Todo service trait consumed by command handlers
//!
//! # Usage
//!
//! ```ignore
//! use todo_core::todo::{Todo, TodoStatus, TodoRepository, TodoService};
//! ```

mod model;
pub mod repository;
pub mod service;

// Re-export public API
pub use model::{DATE_FORMAT, Todo, TodoStatus};
pub use repository::TodoRepository;
pub use service::{TodoService, Todos};
