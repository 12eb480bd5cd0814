//! Repository Implementations
//!
//! Storage gateways for each resource kind.
//!
//! - **PgTodoRepository** / **PgTotoRepository** - PostgreSQL tables `todos` and `totos`
//! - **MemoryGateway** - in-memory tables with the same transactional contract,
//!   used by the test suite and the `memory` storage backend
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{PgTodoRepository, PgTotoRepository};
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let todo_repo = PgTodoRepository::new(pool.clone());
//!     let toto_repo = PgTotoRepository::new(pool);
//! }
//! ```

pub mod memory_repository;
pub mod todo_repository;
pub mod toto_repository;

pub use memory_repository::{MemoryGateway, MemoryTodoRepository, MemoryTotoRepository, MemoryTx};
pub use todo_repository::PgTodoRepository;
pub use toto_repository::PgTotoRepository;
