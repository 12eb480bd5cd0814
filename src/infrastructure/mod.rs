//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database connection pool and schema bootstrap (PostgreSQL)
//! - Storage gateways for each resource kind (PostgreSQL and in-memory)
//! - Prometheus metrics

pub mod database;
pub mod metrics;
pub mod repositories;
