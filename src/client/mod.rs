//! Client façade for the mediateca server.
//!
//! Bridges user-selected local files and the remote operations. No business
//! logic lives here beyond encoding/decoding and downloads-directory
//! bookkeeping; listings must be refreshed after every mutating call to stay
//! consistent with the server.

mod facade;

pub use facade::{DownloadOutcome, MediaClient, UploadOutcome};
