//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **ResourceService**: generic existence-checked CRUD over a storage gateway
//! - **TodoService**: todo management, missing ids are errors
//! - **TotoService**: toto management, missing ids are `None` / `false`

pub mod resource_service;
pub mod todo_service;
pub mod toto_service;

pub use resource_service::ResourceService;

// Re-export todo service types
pub use todo_service::{TodoError, TodoService, TodoServiceImpl};

// Re-export toto service types
pub use toto_service::{TotoDto, TotoService, TotoServiceImpl};
