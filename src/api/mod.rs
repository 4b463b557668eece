// src/api/mod.rs
use std::sync::mpsc;
use std::thread;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

pub mod types;

pub use types::{AskRequest, AskResponse, ProcessRequest, ProcessResponse};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("error {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request worker exited before replying")]
    WorkerGone,
}

/// Blocking client for the two backend endpoints. Cheap to clone; each
/// in-flight request runs on its own worker thread.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn process_video(&self, video_url: &str) -> Result<ProcessResponse, ApiError> {
        self.post(
            "/process/",
            &ProcessRequest {
                video_url: video_url.to_string(),
            },
        )
    }

    pub fn ask_question(&self, question: &str, doc_id: &str) -> Result<AskResponse, ApiError> {
        self.post(
            "/ask/",
            &AskRequest {
                question: question.to_string(),
                doc_id: doc_id.to_string(),
            },
        )
    }

    /// Run `process_video` on a worker thread, returning the handle the
    /// UI polls.
    pub fn spawn_process(&self, video_url: String) -> PendingRequest<ProcessResponse> {
        let client = self.clone();
        PendingRequest::spawn(move || client.process_video(&video_url))
    }

    /// Run `ask_question` on a worker thread, returning the handle the
    /// UI polls.
    pub fn spawn_ask(&self, question: String, doc_id: String) -> PendingRequest<AskResponse> {
        let client = self.clone();
        PendingRequest::spawn(move || client.ask_question(&question, &doc_id))
    }

    fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self.http.post(&url).json(body).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            error!("POST {} returned {}", url, status);
            return Err(ApiError::Status { status, body });
        }

        Ok(response.json()?)
    }
}

/// Handle to a request running on a worker thread. Polled from the UI
/// loop each frame; never blocks.
#[derive(Debug)]
pub struct PendingRequest<T> {
    rx: mpsc::Receiver<Result<T, ApiError>>,
}

impl<T: Send + 'static> PendingRequest<T> {
    fn spawn<F>(job: F) -> Self
    where
        F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // The receiver side may already be gone; nothing to do then.
            let _ = tx.send(job());
        });
        Self { rx }
    }

    /// Non-blocking check for the result. `None` while still in flight.
    /// A worker that died without replying is reported as an error so
    /// the form is released instead of loading forever.
    pub fn poll(&self) -> Option<Result<T, ApiError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => Some(Err(ApiError::WorkerGone)),
        }
    }

    #[cfg(test)]
    pub(crate) fn test_pair() -> (mpsc::Sender<Result<T, ApiError>>, Self) {
        let (tx, rx) = mpsc::channel();
        (tx, Self { rx })
    }
}
