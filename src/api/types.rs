// src/api/types.rs
use serde::{Deserialize, Serialize};

/// Request payload for `POST /process/`.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessRequest {
    pub video_url: String,
}

/// Response payload for `POST /process/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProcessResponse {
    /// Opaque identifier for the processed video content; required by
    /// every later `/ask/` call.
    pub doc_id: String,
    pub title: String,
}

/// Request payload for `POST /ask/`.
#[derive(Debug, Clone, Serialize)]
pub struct AskRequest {
    pub question: String,
    pub doc_id: String,
}

/// Response payload for `POST /ask/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}
