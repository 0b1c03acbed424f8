//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! Handlers compute from the request body alone, so the state carries
//! nothing but the configuration.

use crate::config::{AppConfig, StatisticsConfig};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the calculation settings
    #[inline]
    pub fn statistics(&self) -> &StatisticsConfig {
        &self.config.statistics
    }
}
