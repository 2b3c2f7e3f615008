//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::chec::{ChecClient, ChecError};
use crate::config::StorefrontConfig;
use crate::controller::StorefrontController;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The controller sits behind an async mutex:
/// handlers take the lock, apply one operation, render from the resulting
/// state, and release. That serialization is the only coordination between
/// overlapping requests - mutations are applied in whatever order the lock
/// grants them.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    controller: Mutex<StorefrontController<ChecClient>>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the commerce API client cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self, ChecError> {
        let client = ChecClient::new(&config.chec)?;
        let controller = Mutex::new(StorefrontController::new(client));

        Ok(Self {
            inner: Arc::new(AppStateInner { config, controller }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the shared storefront controller.
    #[must_use]
    pub fn controller(&self) -> &Mutex<StorefrontController<ChecClient>> {
        &self.inner.controller
    }
}
