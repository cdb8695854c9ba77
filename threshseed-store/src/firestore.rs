//! Firestore adapter using the Cloud Firestore REST API.
//!
//! This adapter writes documents by PATCHing
//! `projects/{project}/databases/{database}/documents/{collection}/{device_id}`
//! with an `updateMask` restricted to the `threshold` field. The mask gives
//! the upsert semantics the seeder relies on: a missing document is created,
//! an existing document keeps all of its other fields.
//!
//! Credentials are supplied out of band. Against the real service an OAuth2
//! access token is required; against the Firestore emulator no token is
//! needed and the endpoint is plain HTTP.
//!
//! ## Example
//!
//! ```rust,no_run
//! use threshseed_store::{DocumentStore, FirestoreStore};
//! use threshseed_types::DeviceRecord;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = FirestoreStore::builder()
//!         .endpoint("http://localhost:8080")
//!         .project("demo-project")
//!         .build();
//!
//!     store.upsert_threshold(&DeviceRecord::new("device1", 17)).await?;
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use threshseed_types::DeviceRecord;

use crate::{DocumentStore, StoreError, DEFAULT_COLLECTION};

/// Firestore-backed document store.
#[derive(Debug, Clone)]
pub struct FirestoreStore {
    client: Client,
    endpoint: String,
    project: String,
    database: String,
    collection: String,
    access_token: Option<String>,
}

impl FirestoreStore {
    /// Create a new builder for configuring the store.
    pub fn builder() -> FirestoreStoreBuilder {
        FirestoreStoreBuilder::default()
    }

    /// Collection documents are written to.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    fn document_url(&self, device_id: &str) -> String {
        format!(
            "{}/v1/projects/{}/databases/{}/documents/{}/{}?updateMask.fieldPaths=threshold",
            self.endpoint, self.project, self.database, self.collection, device_id
        )
    }
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    async fn upsert_threshold(&self, record: &DeviceRecord) -> Result<(), StoreError> {
        let url = self.document_url(&record.device_id);
        let body = patch_body(record.threshold);

        let mut request = self.client.patch(&url).json(&body);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(StoreError::Auth("Invalid credentials".to_string()));
        }
        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(StoreError::Auth("Permission denied".to_string()));
        }
        if !status.is_success() {
            return Err(StoreError::Http(format!("API returned status {status}")));
        }

        debug!(
            target: "threshseed_store",
            device_id = %record.device_id,
            threshold = record.threshold,
            "document upserted"
        );

        Ok(())
    }
}

/// Builder for FirestoreStore.
#[derive(Debug, Default)]
pub struct FirestoreStoreBuilder {
    endpoint: Option<String>,
    project: Option<String>,
    database: Option<String>,
    collection: Option<String>,
    access_token: Option<String>,
    timeout: Option<Duration>,
}

impl FirestoreStoreBuilder {
    /// Set the API endpoint (default: `https://firestore.googleapis.com`).
    ///
    /// Point this at `http://host:port` to target the Firestore emulator.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the GCP project id.
    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Set the database id (default: `(default)`).
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Set the collection to write to (default: `Devices`).
    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    /// Set the OAuth2 bearer token. Not needed against the emulator.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set the request timeout (default: 10 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the store.
    pub fn build(self) -> FirestoreStore {
        let timeout = self.timeout.unwrap_or(Duration::from_secs(10));

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        FirestoreStore {
            client,
            endpoint: self
                .endpoint
                .unwrap_or_else(|| "https://firestore.googleapis.com".to_string()),
            project: self.project.unwrap_or_else(|| "demo-project".to_string()),
            database: self.database.unwrap_or_else(|| "(default)".to_string()),
            collection: self
                .collection
                .unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
            access_token: self.access_token,
        }
    }
}

// Firestore encodes 64-bit integers as strings on the wire.
fn patch_body(threshold: i64) -> serde_json::Value {
    serde_json::json!({
        "fields": {
            "threshold": { "integerValue": threshold.to_string() }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let store = FirestoreStore::builder().build();
        assert_eq!(store.endpoint, "https://firestore.googleapis.com");
        assert_eq!(store.project, "demo-project");
        assert_eq!(store.database, "(default)");
        assert_eq!(store.collection, "Devices");
        assert!(store.access_token.is_none());
    }

    #[test]
    fn test_builder_custom() {
        let store = FirestoreStore::builder()
            .endpoint("http://localhost:8080")
            .project("alerts-prod")
            .database("alerts")
            .collection("Sensors")
            .access_token("ya29.token")
            .build();

        assert_eq!(store.endpoint, "http://localhost:8080");
        assert_eq!(store.project, "alerts-prod");
        assert_eq!(store.database, "alerts");
        assert_eq!(store.collection, "Sensors");
        assert_eq!(store.access_token.as_deref(), Some("ya29.token"));
    }

    #[test]
    fn test_document_url() {
        let store = FirestoreStore::builder().project("my-project").build();

        assert_eq!(
            store.document_url("device1"),
            "https://firestore.googleapis.com/v1/projects/my-project/databases/(default)\
             /documents/Devices/device1?updateMask.fieldPaths=threshold"
        );
    }

    #[test]
    fn test_patch_body_encodes_integer_as_string() {
        let body = patch_body(17);
        assert_eq!(body["fields"]["threshold"]["integerValue"], "17");
    }
}
