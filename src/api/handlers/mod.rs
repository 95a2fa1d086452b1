use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::Value;

use crate::catalog;
use crate::models::{BulkStatusResponse, RoadmapBranch, SetStatusResponse, StatusMap};
use crate::store::StatusStore;

// ============================================================
// Error Handling
// ============================================================

/// Log an internal error and return a sanitized response to the client.
/// The full error is logged server-side for debugging; clients only see a
/// generic message to avoid leaking filesystem details.
fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("Internal error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

fn bad_request(msg: &str) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, msg.to_string())
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Status Store
// ============================================================

/// Full status map. Read failures fall back to an empty map inside the
/// store, so this handler never reports a read error to the caller.
pub async fn get_status(State(store): State<StatusStore>) -> Json<StatusMap> {
    Json(store.get_all())
}

/// Set one item's completion flag.
///
/// The body is validated by hand from a raw JSON value rather than a typed
/// extractor, so a missing/empty `id` or a non-boolean `completed` yields a
/// plain 400 with a usable message and no state change.
pub async fn set_status(
    State(store): State<StatusStore>,
    Json(body): Json<Value>,
) -> Result<Json<SetStatusResponse>, (StatusCode, String)> {
    let id = body.get("id").and_then(Value::as_str).unwrap_or_default();
    let completed = body.get("completed").and_then(Value::as_bool);

    let Some(completed) = completed else {
        return Err(bad_request(
            "Invalid request. Required: id (string), completed (boolean)",
        ));
    };
    if id.is_empty() {
        return Err(bad_request(
            "Invalid request. Required: id (string), completed (boolean)",
        ));
    }

    store.set(id, completed).map_err(internal_error)?;

    Ok(Json(SetStatusResponse {
        success: true,
        id: id.to_string(),
        completed,
    }))
}

/// Bulk-merge completion flags.
///
/// The body must be a flat object; arrays and primitives are rejected.
/// Entries whose value is not a boolean are dropped silently, and keys absent
/// from the body keep their stored value.
pub async fn bulk_set_status(
    State(store): State<StatusStore>,
    Json(body): Json<Value>,
) -> Result<Json<BulkStatusResponse>, (StatusCode, String)> {
    let Value::Object(entries) = body else {
        return Err(bad_request(
            "Invalid request. Expected object with id: boolean pairs",
        ));
    };

    let valid = entries
        .into_iter()
        .filter_map(|(id, value)| value.as_bool().map(|completed| (id, completed)));

    let status = store.set_bulk(valid).map_err(internal_error)?;

    Ok(Json(BulkStatusResponse {
        success: true,
        status,
    }))
}

// ============================================================
// Catalog
// ============================================================

pub async fn get_catalog() -> Json<&'static [RoadmapBranch]> {
    Json(catalog::branches())
}
