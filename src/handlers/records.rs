use axum::{Json, extract::State, http::StatusCode};
use tracing::debug;

use crate::middleware::record_request::{NamePayload, RecordId, RecordUpdate};
use crate::{NamestoreError, router::NamestoreState};

/// POST /data -> inserts a record, answers 201 with the new id.
pub async fn create_record(
    State(state): State<NamestoreState>,
    payload: NamePayload,
) -> Result<(StatusCode, Json<i64>), NamestoreError> {
    let id = state.records.insert(&payload.name).await?;
    debug!(id, "record created");
    Ok((StatusCode::CREATED, Json(id)))
}

/// GET /data/{id} -> the stored name as a JSON string.
pub async fn read_record(
    State(state): State<NamestoreState>,
    RecordId(id): RecordId,
) -> Result<Json<String>, NamestoreError> {
    let record = state
        .records
        .get_by_id(id)
        .await?
        .ok_or(NamestoreError::NotFound)?;
    Ok(Json(record.name))
}

/// DELETE /data/{id} (alias DELETE /delete/{id}).
pub async fn delete_record(
    State(state): State<NamestoreState>,
    RecordId(id): RecordId,
) -> Result<&'static str, NamestoreError> {
    if !state.records.delete_by_id(id).await? {
        return Err(NamestoreError::NotFound);
    }
    debug!(id, "record deleted");
    Ok("data deleted")
}

/// PUT /data/{id} (alias PUT /change/{id}) -> overwrites the name.
pub async fn update_record(
    State(state): State<NamestoreState>,
    RecordUpdate(RecordId(id), payload): RecordUpdate,
) -> Result<&'static str, NamestoreError> {
    if !state.records.update_name(id, &payload.name).await? {
        return Err(NamestoreError::NotFound);
    }
    debug!(id, "record changed");
    Ok("data changed")
}
