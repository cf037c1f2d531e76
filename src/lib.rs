//! Fitness tracker: workout, muscle group, nutrition, recovery and equipment records
//! over PostgreSQL, served as a REST/JSON API.

pub mod config;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{Settings, StoreKind};
pub use error::{AppError, ConfigError};
pub use gateway::{Gateway, MemoryStore, PgStore, Store};
pub use routes::app;
pub use service::{Intent, RecordManager};
pub use state::AppState;
pub use store::{connect_lazy, ensure_tables};
