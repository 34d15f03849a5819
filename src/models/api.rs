use serde::{Deserialize, Serialize};

/// Response for `POST /receipts/process`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessResponse {
    pub id: String,
}

/// Response for `GET /receipts/{id}/points`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PointsResponse {
    pub points: u64,
}
