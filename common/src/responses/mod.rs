use serde::{Deserialize, Serialize};

/// Body returned by `POST /api/upload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub filename: String,
    pub message: String,
}

/// Body returned by `GET /api/files`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileList {
    pub files: Vec<String>,
}

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}
