use crate::models::MemberProfile;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when reading from the document store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid API key or token")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Collection IDs in the document store
#[derive(Debug, Clone)]
pub struct StoreCollections {
    pub member_profiles: String,
}

/// Read-only client for member profile documents
///
/// Speaks the hosted database's REST document API: every listing is a
/// `GET .../collections/{id}/documents?query=[...]` returning
/// `{"total": n, "documents": [...]}`.
pub struct DocumentStoreClient {
    base_url: String,
    api_key: String,
    project_id: String,
    database_id: String,
    client: Client,
    collections: StoreCollections,
}

impl DocumentStoreClient {
    /// Create a new document store client
    pub fn new(
        base_url: String,
        api_key: String,
        project_id: String,
        database_id: String,
        collections: StoreCollections,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            project_id,
            database_id,
            client,
            collections,
        })
    }

    /// Fetch a single member profile
    ///
    /// Looks the member up by `memberId` first. Documents that only carry the
    /// member ID as their document `$id` are fetched directly as a fallback.
    pub async fn get_profile(&self, member_id: &str) -> Result<MemberProfile, StoreError> {
        tracing::debug!("Fetching profile for member: {}", member_id);

        let queries = vec![
            equal_query("memberId", &[member_id]),
            "limit(1)".to_string(),
        ];
        let documents = self.list_documents(&queries).await?;

        let doc = match documents.into_iter().next() {
            Some(doc) => doc,
            None => self.get_document(member_id).await?,
        };

        parse_profile(&doc)
            .map_err(|e| StoreError::InvalidResponse(format!("Failed to parse profile: {}", e)))
    }

    /// Fetch profiles for an explicit set of member IDs
    ///
    /// Unknown IDs are silently absent from the result.
    pub async fn get_profiles(&self, member_ids: &[String]) -> Result<Vec<MemberProfile>, StoreError> {
        if member_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<&str> = member_ids.iter().map(String::as_str).collect();
        let queries = vec![
            equal_query("memberId", &ids),
            format!("limit({})", member_ids.len()),
        ];
        let documents = self.list_documents(&queries).await?;

        Ok(parse_profiles(&documents))
    }

    /// List up to `limit` member profiles as a recommendation pool
    pub async fn list_profiles(&self, limit: usize) -> Result<Vec<MemberProfile>, StoreError> {
        let queries = vec![format!("limit({})", limit)];
        let documents = self.list_documents(&queries).await?;

        let profiles = parse_profiles(&documents);
        tracing::debug!("Listed {} candidate profiles", profiles.len());

        Ok(profiles)
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.base_url.trim_end_matches('/'),
            self.database_id,
            self.collections.member_profiles
        )
    }

    /// Fetch one document by its document ID
    async fn get_document(&self, document_id: &str) -> Result<Value, StoreError> {
        let url = format!("{}/{}", self.documents_url(), urlencoding::encode(document_id));

        let response = self
            .client
            .get(&url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(format!("Profile not found for member {}", document_id)));
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(StoreError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Document fetch failed: {} - {}", status, body);
            return Err(StoreError::ApiError(format!("Failed to fetch document: {}", status)));
        }

        Ok(response.json().await?)
    }

    async fn list_documents(&self, queries: &[String]) -> Result<Vec<Value>, StoreError> {
        let url = self.documents_url();

        let queries_json = serde_json::to_string(queries)
            .map_err(|e| StoreError::InvalidResponse(format!("Failed to encode queries: {}", e)))?;
        let full_url = format!("{}?query={}", url, urlencoding::encode(&queries_json));

        let response = self
            .client
            .get(&full_url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(StoreError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Document query failed: {} - {}", status, body);
            return Err(StoreError::ApiError(format!("Failed to query documents: {}", status)));
        }

        let json: Value = response.json().await?;

        json.get("documents")
            .and_then(|d| d.as_array())
            .cloned()
            .ok_or_else(|| StoreError::InvalidResponse("Missing documents array".into()))
    }
}

/// Build an `equal("field", [...])` query with JSON-escaped values
fn equal_query(field: &str, values: &[&str]) -> String {
    let values = serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string());
    format!("equal(\"{}\", {})", field, values)
}

/// Parse a stored document, falling back to `$id` when `memberId` is absent
fn parse_profile(doc: &Value) -> Result<MemberProfile, serde_json::Error> {
    let mut data = doc.get("data").unwrap_or(doc).clone();

    if let Some(obj) = data.as_object_mut() {
        if !obj.contains_key("memberId") {
            if let Some(id) = doc.get("$id").cloned() {
                obj.insert("memberId".to_string(), id);
            }
        }
    }

    serde_json::from_value(data)
}

fn parse_profiles(documents: &[Value]) -> Vec<MemberProfile> {
    documents
        .iter()
        .filter_map(|doc| match parse_profile(doc) {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!("Skipping malformed profile document: {}", e);
                None
            }
        })
        .collect()
}
