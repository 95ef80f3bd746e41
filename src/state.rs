//! Application state for Axum web framework.
//!
//! Contains shared services and configuration that are accessible
//! across all request handlers.

use crate::config::settings::Settings;
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// This struct is designed to be used with Axum's State extractor.
/// Cloning is cheap since the services use Arc internally. Settings are
/// read once at startup and never mutated; handlers and the pipeline see
/// one immutable configuration per process.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// The settings the process was started with
    pub settings: Settings,
}

impl AppState {
    /// Creates a new AppState from loaded settings.
    ///
    /// # Example
    /// ```ignore
    /// let settings = ConfigLoader::new()?.load()?;
    /// let state = AppState::new(settings);
    /// ```
    pub fn new(settings: Settings) -> Self {
        let services = Services::new(&settings);
        Self { services, settings }
    }
}
