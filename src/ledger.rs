// src/ledger.rs
use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use tracing::{debug, error};

use crate::types::{ManifestBatchUploadRequest, ManifestBatchUploadResponse};

pub const LEDGER_TIMEOUT: Duration = Duration::from_secs(10);
pub const MANIFEST_BATCH_UPLOAD: &str = "fula-manifest-batch_upload";

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("failed to encode ledger request: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("ledger unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("ledger returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode ledger response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl LedgerError {
    /// Upstream HTTP status, when the ledger answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Raw ledger answer. Only parse `body` once `status` is known to be a success.
#[derive(Debug, Clone)]
pub struct LedgerReply {
    pub status: u16,
    pub body: Vec<u8>,
}

#[derive(Clone)]
pub struct LedgerClient {
    http: reqwest::Client,
    base_url: String,
}

impl LedgerClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Self::with_timeout(base_url, LEDGER_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Sends `payload` as JSON to `{base_url}/{action}`. A single attempt, no retries.
    pub async fn call<T: Serialize + ?Sized>(
        &self,
        method: Method,
        action: &str,
        payload: &T,
    ) -> Result<LedgerReply, LedgerError> {
        let body = serde_json::to_vec(payload).map_err(LedgerError::Serialize)?;
        let url = format!("{}/{}", self.base_url, action);
        debug!(%url, "calling ledger");

        let resp = self
            .http
            .request(method, url.as_str())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?.to_vec();
        Ok(LedgerReply { status, body })
    }

    /// Registers a manifest batch and returns the identifiers the ledger accepted.
    pub async fn upload_manifest_batch(
        &self,
        req: &ManifestBatchUploadRequest,
    ) -> Result<ManifestBatchUploadResponse, LedgerError> {
        let reply = self.call(Method::POST, MANIFEST_BATCH_UPLOAD, req).await?;
        if !(200..300).contains(&reply.status) {
            let body = String::from_utf8_lossy(&reply.body).into_owned();
            error!(status = reply.status, "failed to register CIDs on ledger");
            return Err(LedgerError::Status {
                status: reply.status,
                body,
            });
        }
        serde_json::from_slice(&reply.body).map_err(LedgerError::Decode)
    }
}
