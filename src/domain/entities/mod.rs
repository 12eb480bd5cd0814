//! # Domain Entities
//!
//! Both entity kinds map directly to their database tables. A persisted
//! entity always carries its store-assigned `id`; the matching draft type
//! is the same record before the store has assigned one.
//!
//! - **Todo**: a task with title, optional description and completion flag
//! - **Toto**: a named item

mod todo;
mod toto;

pub use todo::{Todo, TodoDraft};
pub use toto::{Toto, TotoDraft};
