// src/types.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// Pinning Service API `Pin` object as submitted by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    pub cid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origins: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<BTreeMap<String, String>>,
}

/// Pinning Service API `PinStatus` object returned for an accepted pin.
///
/// `pin` is the client's JSON exactly as received, not a re-encoding of [`Pin`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinStatus {
    pub requestid: String,
    pub status: String,
    pub created: String,
    pub pin: Box<RawValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub delegates: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub info: BTreeMap<String, String>,
}

/// Ledger batch envelope. `cid`, `replication_factor` and `manifest_metadata`
/// are index-aligned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestBatchUploadRequest {
    pub cid: Vec<String>,
    pub pool_id: i64,
    pub replication_factor: Vec<u32>,
    pub manifest_metadata: Vec<ManifestMetadata>,
}

impl ManifestBatchUploadRequest {
    /// Checks the parallel sequences describe the same non-empty set of identifiers.
    pub fn check_aligned(&self) -> Result<(), String> {
        let n = self.cid.len();
        if n == 0 {
            return Err("cid list is empty".into());
        }
        if self.replication_factor.len() != n || self.manifest_metadata.len() != n {
            return Err(format!(
                "misaligned batch: {} cid, {} replication_factor, {} manifest_metadata",
                n,
                self.replication_factor.len(),
                self.manifest_metadata.len()
            ));
        }
        Ok(())
    }
}

/// Ledger reply. Missing fields are zero-filled; a missing `pool_id` is left
/// for the caller to fill from the pool it submitted to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestBatchUploadResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_id: Option<i64>,
    #[serde(default)]
    pub storer: String,
    #[serde(default)]
    pub cid: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestMetadata {
    pub job: ManifestJob,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestJob {
    pub work: String,
    pub engine: String,
    pub uri: String,
}
