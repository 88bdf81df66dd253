// src/cluster.rs
use async_trait::async_trait;
use cid::Cid;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum ClusterError {
    #[error("invalid CID {cid:?}: {reason}")]
    InvalidCid { cid: String, reason: String },

    #[error("cluster unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("cluster returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Extra cluster pin parameters. Every pin is recursive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinOptions {
    pub name: Option<String>,
}

#[async_trait]
pub trait ClusterPinner: Send + Sync {
    async fn pin(&self, cid: &Cid, options: &PinOptions) -> Result<(), ClusterError>;
}

/// IPFS Cluster REST API client.
///
/// No request timeout is set: a pin call lasts as long as the cluster takes to
/// acknowledge it.
#[derive(Clone)]
pub struct ClusterClient {
    http: reqwest::Client,
    base_url: String,
}

impl ClusterClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ClusterPinner for ClusterClient {
    async fn pin(&self, cid: &Cid, options: &PinOptions) -> Result<(), ClusterError> {
        let url = format!("{}/pins/{}", self.base_url, cid);
        let mut query = vec![("mode", "recursive".to_string())];
        if let Some(name) = &options.name {
            query.push(("name", name.clone()));
        }

        let resp = self.http.post(url.as_str()).query(&query).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = match resp.text().await {
                Ok(body) => body,
                Err(e) => format!("<unreadable body: {e}>"),
            };
            return Err(ClusterError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterPinOutcome {
    Pinned { cid: String },
    Failed { cid: String, reason: String },
}

impl ClusterPinOutcome {
    pub fn is_pinned(&self) -> bool {
        matches!(self, Self::Pinned { .. })
    }
}

fn decode(cid: &str) -> Result<Cid, ClusterError> {
    Cid::try_from(cid).map_err(|e| ClusterError::InvalidCid {
        cid: cid.to_string(),
        reason: e.to_string(),
    })
}

/// Pins each ledger-accepted identifier in order, one at a time.
///
/// Best effort: an identifier that does not decode is skipped without
/// contacting the cluster, and a cluster failure is logged. No failure stops
/// the loop, and the outcomes never reach the HTTP response.
pub async fn pin_accepted(
    cluster: &dyn ClusterPinner,
    cids: &[String],
    options: &PinOptions,
) -> Vec<ClusterPinOutcome> {
    let mut outcomes = Vec::with_capacity(cids.len());

    for cid_str in cids {
        let result = match decode(cid_str) {
            Ok(cid) => cluster.pin(&cid, options).await,
            Err(e) => Err(e),
        };
        let outcome = match result {
            Ok(()) => {
                info!(cid = %cid_str, "submitted CID to cluster");
                ClusterPinOutcome::Pinned {
                    cid: cid_str.clone(),
                }
            }
            Err(e) => {
                warn!(cid = %cid_str, error = %e, "failed to pin CID");
                ClusterPinOutcome::Failed {
                    cid: cid_str.clone(),
                    reason: e.to_string(),
                }
            }
        };
        outcomes.push(outcome);
    }

    let pinned = outcomes.iter().filter(|o| o.is_pinned()).count();
    info!(total = cids.len(), pinned, "cluster pinning finished");
    outcomes
}
