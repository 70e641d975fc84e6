//! Pure MongoDB Atlas Data API client.
//!
//! A minimal client for the two Data API actions a harvester needs:
//! `findOne` (duplicate check) and `insertOne` (persist). Document ids are
//! generated server-side and returned from `insert_one`.
//!
//! # Example
//!
//! ```rust,ignore
//! use atlas_client::AtlasClient;
//! use serde_json::json;
//!
//! let client = AtlasClient::new(
//!     "https://data.mongodb-api.com/app/myapp/endpoint/data/v1".into(),
//!     "your-api-key".into(),
//!     "Cluster0".into(),
//!     "vocab".into(),
//! );
//!
//! let existing = client.find_one("words", json!({"term": "cat"})).await?;
//! if existing.is_none() {
//!     let id = client.insert_one("words", json!({"term": "cat", "translation": "猫"})).await?;
//!     println!("inserted {}", id);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{AtlasError, Result};
pub use types::{FindOneRequest, FindOneResponse, InsertOneRequest, InsertOneResponse};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub struct AtlasClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    data_source: String,
    database: String,
}

impl AtlasClient {
    pub fn new(base_url: String, api_key: String, data_source: String, database: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            data_source,
            database,
        }
    }

    async fn action<B: Serialize, R: DeserializeOwned>(&self, action: &str, body: &B) -> Result<R> {
        let url = format!("{}/action/{}", self.base_url, action);
        let resp = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AtlasError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(resp.json().await?)
    }

    /// Find one document matching `filter`, or `None`.
    pub async fn find_one(&self, collection: &str, filter: Value) -> Result<Option<Value>> {
        let request = FindOneRequest {
            data_source: self.data_source.clone(),
            database: self.database.clone(),
            collection: collection.to_string(),
            filter,
        };
        let resp: FindOneResponse = self.action("findOne", &request).await?;
        Ok(resp.document)
    }

    /// Insert one document; returns the server-generated id.
    pub async fn insert_one(&self, collection: &str, document: Value) -> Result<String> {
        let request = InsertOneRequest {
            data_source: self.data_source.clone(),
            database: self.database.clone(),
            collection: collection.to_string(),
            document,
        };
        let resp: InsertOneResponse = self.action("insertOne", &request).await?;
        tracing::debug!(collection, id = %resp.inserted_id, "Inserted document");
        Ok(resp.inserted_id)
    }
}
