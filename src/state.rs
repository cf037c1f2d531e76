//! Shared application state for all routes.

use crate::service::RecordManager;

#[derive(Clone)]
pub struct AppState {
    pub manager: RecordManager,
}

impl AppState {
    pub fn new(manager: RecordManager) -> Self {
        Self { manager }
    }
}
