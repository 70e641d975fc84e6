use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `action/findOne`.
#[derive(Debug, Clone, Serialize)]
pub struct FindOneRequest {
    #[serde(rename = "dataSource")]
    pub data_source: String,
    pub database: String,
    pub collection: String,
    pub filter: Value,
}

/// Response body for `action/findOne`.
///
/// `document` is `null` when nothing matched.
#[derive(Debug, Clone, Deserialize)]
pub struct FindOneResponse {
    pub document: Option<Value>,
}

/// Request body for `action/insertOne`.
#[derive(Debug, Clone, Serialize)]
pub struct InsertOneRequest {
    #[serde(rename = "dataSource")]
    pub data_source: String,
    pub database: String,
    pub collection: String,
    pub document: Value,
}

/// Response body for `action/insertOne`.
#[derive(Debug, Clone, Deserialize)]
pub struct InsertOneResponse {
    #[serde(rename = "insertedId")]
    pub inserted_id: String,
}
