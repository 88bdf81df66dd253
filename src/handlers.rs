// src/handlers.rs
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;
use serde_json::{json, Value};
use tracing::info;

use crate::cluster::{self, PinOptions};
use crate::error::{ApiError, ApiResult};
use crate::reconcile;
use crate::state::AppState;
use crate::translate;
use crate::types::{ManifestBatchUploadRequest, ManifestBatchUploadResponse, Pin, PinStatus};

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// `POST /pins`: register one pin with the ledger, then pin what it accepted.
pub async fn create_pin(State(state): State<AppState>, body: Bytes) -> ApiResult<Json<PinStatus>> {
    let raw: Box<RawValue> = decode_body(&body)?;
    let pin: Pin = decode_body(raw.get().as_bytes())?;
    if pin.cid.is_empty() {
        return Err(ApiError::BadRequest("cid is required".into()));
    }

    let manifest = translate::manifest_for_pin(&pin, &state.pool_name)?;
    let accepted = state.ledger.upload_manifest_batch(&manifest).await?;
    let pool_id = accepted.pool_id.unwrap_or(manifest.pool_id);
    info!(
        cid = %pin.cid,
        pool_id,
        storer = %accepted.storer,
        accepted = accepted.cid.len(),
        "ledger accepted pin request"
    );

    let options = PinOptions {
        name: pin.name.clone(),
    };
    cluster::pin_accepted(state.cluster.as_ref(), &accepted.cid, &options).await;

    Ok(Json(reconcile::pin_status(&accepted, pool_id, raw, Utc::now())))
}

/// `POST /manifest/batch_upload`: forward a full manifest batch, then pin what the ledger accepted.
pub async fn batch_upload(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<ManifestBatchUploadResponse>> {
    let req: ManifestBatchUploadRequest = decode_body(&body)?;
    req.check_aligned().map_err(ApiError::BadRequest)?;

    let mut accepted = state.ledger.upload_manifest_batch(&req).await?;
    let pool_id = *accepted.pool_id.get_or_insert(req.pool_id);
    info!(
        pool_id,
        submitted = req.cid.len(),
        accepted = accepted.cid.len(),
        "ledger accepted manifest batch"
    );

    cluster::pin_accepted(state.cluster.as_ref(), &accepted.cid, &PinOptions::default()).await;

    Ok(Json(accepted))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
