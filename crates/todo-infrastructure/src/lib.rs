pub mod config_service;
pub mod file_todo_repository;
pub mod paths;
pub mod record;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::file_todo_repository::FileTodoRepository;
pub use crate::paths::TodoPaths;
