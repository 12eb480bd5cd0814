//! # Domain Layer
//!
//! The domain layer contains the resource entities and the storage contract
//! the services are written against. It is independent of any external
//! frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Todo and Toto, each with its not-yet-persisted draft
//! - **gateway**: `Resource` and `StorageGateway` traits plus the `Lookup` result

pub mod entities;
pub mod gateway;

// Re-export commonly used types
pub use entities::*;
pub use gateway::{Lookup, Resource, StorageGateway};
