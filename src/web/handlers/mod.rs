//! API handlers for the Web API.

pub mod files;

pub use files::*;

use crate::media::MediaService;

/// Shared application state for the Web API.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Media service backing the file endpoints.
    pub service: MediaService,
}

impl AppState {
    /// Create a new application state.
    pub fn new(service: MediaService) -> Self {
        Self { service }
    }
}
