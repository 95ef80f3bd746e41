//! Service layer for business logic operations.

pub mod relay;

pub use relay::{RelayOutcome, RelayService};

use crate::config::settings::Settings;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since the clients use `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub relay: RelayService,
}

impl Services {
    /// Creates a new Services instance from application settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            relay: RelayService::from_settings(settings),
        }
    }
}
