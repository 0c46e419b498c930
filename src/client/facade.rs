//! HTTP client façade over the media server API.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::Client;
use url::Url;

use crate::web::dto::{
    ApiResponse, DownloadFileResponse, FileEntryResponse, UploadFileRequest, UploadFileResponse,
};
use crate::{MediatecaError, Result};

/// Connect timeout in seconds.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Total request timeout in seconds. Whole files travel in one response, so
/// this bounds the largest transferable file on a slow link.
const TOTAL_TIMEOUT_SECS: u64 = 120;

/// User agent string for client requests.
const USER_AGENT: &str = "mediateca-client/0.1";

/// Outcome of an upload, as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    /// Whether the server stored the file.
    pub success: bool,
    /// The server's message, verbatim.
    pub message: String,
}

/// Outcome of a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The file was fetched and persisted locally.
    Saved {
        /// Where the file was written.
        path: PathBuf,
        /// The server's message, verbatim.
        message: String,
    },
    /// The server reported no file for the requested id.
    NotFound {
        /// The server's message, verbatim.
        message: String,
    },
}

/// Client façade for the media server.
pub struct MediaClient {
    client: Client,
    base_url: Url,
    downloads_dir: PathBuf,
}

impl MediaClient {
    /// Create a new client for the given server base URL.
    ///
    /// Downloaded files are persisted under `downloads_dir`, which is created
    /// on first use.
    pub fn new(base_url: &str, downloads_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| MediatecaError::Config(format!("invalid server URL: {e}")))?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(TOTAL_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url,
            downloads_dir: downloads_dir.into(),
        })
    }

    /// The downloads directory this client persists into.
    pub fn downloads_dir(&self) -> &Path {
        &self.downloads_dir
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| MediatecaError::Config(format!("invalid endpoint path: {e}")))
    }

    /// Fetch the current listing from the server.
    ///
    /// The returned ids are only valid until the next mutation of the store;
    /// call again after every upload or download decision point.
    pub async fn refresh_listing(&self) -> Result<Vec<FileEntryResponse>> {
        let url = self.endpoint("api/files")?;
        let response: ApiResponse<Vec<FileEntryResponse>> = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.data)
    }

    /// Download the file with the given listing id and persist it under the
    /// downloads directory, using the server-provided name verbatim.
    ///
    /// A same-named earlier download is silently overwritten.
    pub async fn download_by_id(&self, id: u64) -> Result<DownloadOutcome> {
        let url = self.endpoint(&format!("api/files/{id}"))?;
        let response: DownloadFileResponse = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let Some(archivo) = response.archivo else {
            return Ok(DownloadOutcome::NotFound {
                message: response.message,
            });
        };

        let content = BASE64.decode(&archivo.datos)?;
        fs::create_dir_all(&self.downloads_dir)?;
        let save_path = self.downloads_dir.join(&archivo.nombre);
        fs::write(&save_path, content)?;

        tracing::info!(id, path = %save_path.display(), "file downloaded");

        Ok(DownloadOutcome::Saved {
            path: save_path,
            message: response.message,
        })
    }

    /// Read a local file fully, encode it, and upload it under its own
    /// filename. The server's outcome is surfaced verbatim.
    pub async fn upload_local_file(&self, path: &Path) -> Result<UploadOutcome> {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        // The file can vanish between selection and upload; the read error
        // surfaces as a typed Io failure.
        let content = fs::read(path)?;

        let request = UploadFileRequest {
            filename,
            file_data: BASE64.encode(&content),
            file_type: None,
        };

        let url = self.endpoint("api/files")?;
        let response: UploadFileResponse = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::info!(
            path = %path.display(),
            success = response.success,
            "upload finished"
        );

        Ok(UploadOutcome {
            success: response.success,
            message: response.message,
        })
    }
}
