// src/translate.rs
use tracing::warn;

use crate::error::ApiError;
use crate::types::{ManifestBatchUploadRequest, ManifestJob, ManifestMetadata, Pin};

pub const DEFAULT_REPLICATION_FACTOR: u32 = 1;
pub const DEFAULT_WORK: &str = "storage";
pub const DEFAULT_ENGINE: &str = "IPFS";

/// Parses the configured pool name as the ledger's numeric pool id.
pub fn parse_pool_id(pool_name: &str) -> Result<i64, ApiError> {
    pool_name.trim().parse::<i64>().map_err(|e| {
        warn!(pool_name, error = %e, "invalid pool ID in config");
        ApiError::Config("Invalid pool ID configuration".into())
    })
}

/// Builds a single-identifier batch for `pin`. Client input never influences the
/// replication factor or job description.
pub fn manifest_for_pin(pin: &Pin, pool_name: &str) -> Result<ManifestBatchUploadRequest, ApiError> {
    let pool_id = parse_pool_id(pool_name)?;
    Ok(ManifestBatchUploadRequest {
        cid: vec![pin.cid.clone()],
        pool_id,
        replication_factor: vec![DEFAULT_REPLICATION_FACTOR],
        manifest_metadata: vec![ManifestMetadata {
            job: ManifestJob {
                work: DEFAULT_WORK.to_string(),
                engine: DEFAULT_ENGINE.to_string(),
                uri: pin.cid.clone(),
            },
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pin(cid: &str) -> Pin {
        Pin {
            cid: cid.into(),
            name: Some("photo".into()),
            origins: None,
            meta: None,
        }
    }

    #[test]
    fn translates_one_pin_into_aligned_batch() {
        let req = manifest_for_pin(&pin("bafy123"), "7").unwrap();
        assert!(req.check_aligned().is_ok());
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "cid": ["bafy123"],
                "pool_id": 7,
                "replication_factor": [1],
                "manifest_metadata": [
                    {"job": {"work": "storage", "engine": "IPFS", "uri": "bafy123"}}
                ]
            })
        );
    }

    #[test]
    fn non_numeric_pool_is_a_config_error() {
        let err = manifest_for_pin(&pin("bafy123"), "my-pool").unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn empty_pool_is_a_config_error() {
        assert!(parse_pool_id("").is_err());
    }
}
