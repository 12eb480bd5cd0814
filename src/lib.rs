//! # Todo API Library
//!
//! This crate serves two independent resource collections, Todo and Toto,
//! over HTTP with:
//! - RESTful create/read/update/delete endpoints per resource
//! - PostgreSQL for persistent storage (or in-memory tables for tests)
//! - One atomic transaction per mutating request
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Entities and the storage gateway contract
//! - **Application Layer**: Resource services and DTOs
//! - **Infrastructure Layer**: PostgreSQL and in-memory gateways, metrics
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! todo_api/
//! +-- config/         Configuration management
//! +-- domain/         Entities, Resource and StorageGateway traits
//! +-- application/    Resource services and DTOs
//! +-- infrastructure/ Database, gateways, metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
