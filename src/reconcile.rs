// src/reconcile.rs
use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::value::RawValue;
use uuid::Uuid;

use crate::types::{ManifestBatchUploadResponse, PinStatus};

pub const STATUS_QUEUED: &str = "queued";

pub fn delegate_for_pool(pool_id: i64) -> String {
    format!("/dns4/pools{pool_id}.functionyard.fula.network/tcp/4001/p2p/QmServicePeerId")
}

/// Cluster outcomes are deliberately not an input: a pin accepted by the ledger
/// is reported as queued whatever the cluster did with it. `pool_id` is the
/// ledger's pool, or the submitted one when the ledger left it out.
pub fn pin_status(
    ledger: &ManifestBatchUploadResponse,
    pool_id: i64,
    pin: Box<RawValue>,
    created: DateTime<Utc>,
) -> PinStatus {
    PinStatus {
        requestid: Uuid::new_v4().to_string(),
        status: STATUS_QUEUED.to_string(),
        created: created.to_rfc3339_opts(SecondsFormat::Secs, true),
        pin,
        delegates: vec![delegate_for_pool(pool_id)],
        info: BTreeMap::from([("storer".to_string(), ledger.storer.clone())]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ledger() -> ManifestBatchUploadResponse {
        ManifestBatchUploadResponse {
            pool_id: Some(7),
            storer: "node-A".into(),
            cid: vec!["bafy".into()],
        }
    }

    const RAW_PIN: &str = r#"{"cid":"bafy","meta":{"z":"1","a":"2"},"name":null}"#;

    fn pin() -> Box<RawValue> {
        RawValue::from_string(RAW_PIN.to_string()).unwrap()
    }

    #[test]
    fn builds_queued_status_from_ledger_reply() {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let status = pin_status(&ledger(), 7, pin(), created);

        assert_eq!(status.status, "queued");
        assert_eq!(status.created, "2024-05-01T12:00:00Z");
        assert_eq!(status.pin.get(), RAW_PIN);
        assert_eq!(
            status.delegates,
            vec!["/dns4/pools7.functionyard.fula.network/tcp/4001/p2p/QmServicePeerId"]
        );
        assert_eq!(status.info.get("storer").map(String::as_str), Some("node-A"));
        assert_eq!(status.info.len(), 1);
    }

    #[test]
    fn request_ids_are_unique_within_a_pool() {
        let a = pin_status(&ledger(), 7, pin(), Utc::now());
        let b = pin_status(&ledger(), 7, pin(), Utc::now());
        assert_ne!(a.requestid, b.requestid);
        assert!(Uuid::parse_str(&a.requestid).is_ok());
    }

    #[test]
    fn serialized_status_echoes_pin_verbatim() {
        let status = pin_status(&ledger(), 7, pin(), Utc::now());
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains(&format!(r#""pin":{RAW_PIN}"#)));
    }
}
