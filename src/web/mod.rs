//! Web API module for mediateca.
//!
//! This module provides the HTTP surface of the media repository: a JSON API
//! for listing, uploading, and downloading files, plus a health route and a
//! Swagger UI describing the operations.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use server::WebServer;
