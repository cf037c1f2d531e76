//! Record manager: upsert routing, logged pass-throughs and in-memory aggregates.

mod manager;
mod reports;

pub use manager::{Intent, RecordManager};
