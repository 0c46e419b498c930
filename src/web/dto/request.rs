//! Request DTOs for the Web API.

use serde::{Deserialize, Serialize};

/// File upload request.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UploadFileRequest {
    /// Original filename, used for classification and as the stored name.
    pub filename: String,
    /// Base64-encoded file content.
    pub file_data: String,
    /// Explicit category (`audio`, `video`, `imagen`). When absent the
    /// category is derived from the filename's extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_is_optional() {
        let req: UploadFileRequest =
            serde_json::from_str(r#"{"filename":"a.mp3","file_data":"QQ=="}"#).unwrap();
        assert_eq!(req.filename, "a.mp3");
        assert!(req.file_type.is_none());
    }

    #[test]
    fn test_explicit_file_type() {
        let req: UploadFileRequest = serde_json::from_str(
            r#"{"filename":"a.mp3","file_data":"QQ==","file_type":"video"}"#,
        )
        .unwrap();
        assert_eq!(req.file_type.as_deref(), Some("video"));
    }
}
