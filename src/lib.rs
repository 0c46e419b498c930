//! mediateca - Networked media-file repository
//!
//! A server exposing list/upload/download operations over files classified by
//! extension into audio/video/image buckets, and a client façade that calls
//! them, implemented in Rust.

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod media;
pub mod web;

pub use client::{DownloadOutcome, MediaClient, UploadOutcome};
pub use config::Config;
pub use error::{MediatecaError, Result};
pub use media::{Category, FileBlob, FileRecord, MediaService, MediaStore};
pub use web::WebServer;
