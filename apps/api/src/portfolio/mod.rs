//! Portfolio document persistence: a single schema-less JSON file on disk.

pub mod handlers;
pub mod store;
