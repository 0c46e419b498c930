//! Data Transfer Objects for the Web API.
//!
//! These types are the wire contract shared by the server handlers and the
//! client façade, which is why they derive both `Serialize` and
//! `Deserialize`. Field names (`nombre`, `tipo`, `ruta`, `datos`) are the
//! vocabulary existing clients speak and must not be renamed.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
