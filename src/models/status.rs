use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The persisted id → completed record.
///
/// A `BTreeMap` keeps the serialized file layout deterministic, so repeated
/// writes of the same logical state produce byte-identical files.
pub type StatusMap = BTreeMap<String, bool>;

/// Response body for a single-item status write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetStatusResponse {
    pub success: bool,
    pub id: String,
    pub completed: bool,
}

/// Response body for a bulk status write. Carries the full resulting map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkStatusResponse {
    pub success: bool,
    pub status: StatusMap,
}
