//! Application state shared across all request handlers.
//!
//! Built once at startup from the loaded configuration and the chosen store,
//! then cloned into every handler through axum's state extraction.

use std::sync::Arc;

use crate::booking::BookingPolicy;
use crate::config::AppConfig;
use crate::database::BookingStore;

#[derive(Clone)]
pub struct AppState {
    /// Booking persistence (PostgreSQL or in-memory)
    pub store: Arc<dyn BookingStore>,

    /// Configuration loaded at startup. Read-only for the process lifetime.
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn BookingStore>) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    pub fn policy(&self) -> &BookingPolicy {
        &self.config.booking
    }

    pub fn jwt_secret(&self) -> &str {
        &self.config.security.jwt_secret
    }
}
