//! Mock logistics API client for testing
//!
//! Keeps collections in memory keyed by resource path so command logic can
//! be exercised without HTTP.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value, json};
use tokio::sync::Mutex;

use super::api::{AuthApi, ResourceApi};
use super::models::{AuthResponse, Credentials, RegisterRequest, UserProfile};
use super::resource::Resource;
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockGateway::new()
///     .with_records::<Partners>(vec![partner])
///     .await;
///
/// let partners = mock.partners().get_all().await?;
/// assert_eq!(partners.len(), 1);
/// ```
#[derive(Default)]
pub struct MockGateway {
    /// Stored records per collection path
    records: Arc<Mutex<HashMap<&'static str, Vec<Value>>>>,
    /// Errors returned by every call on a collection path
    failures: Arc<Mutex<HashMap<&'static str, ApiError>>>,
    /// Response for login/register
    auth: Arc<Mutex<Option<AuthResponse>>>,
    /// Error for the next login/register call, consumed on use
    auth_error: Arc<Mutex<Option<ApiError>>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
    /// Counter for generated IDs
    next_id: Arc<Mutex<usize>>,
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRequest {
    /// HTTP method the real client would use
    pub method: &'static str,
    /// Request path
    pub path: String,
}

fn not_found() -> ApiError {
    ApiError::Status {
        status: 404,
        body: Some(json!({"message": "Not found"})),
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()).into())
}

fn record_id(value: &Value) -> Option<&str> {
    value.get("id").and_then(Value::as_str)
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a collection
    pub async fn with_records<R: Resource>(self, records: Vec<R::Record>) -> Self {
        let values = records
            .iter()
            .map(|r| serde_json::to_value(r).expect("record serializes"))
            .collect();
        self.records.lock().await.insert(R::PATH, values);
        self
    }

    /// Make every call on a collection fail
    pub async fn with_failure<R: Resource>(self, error: ApiError) -> Self {
        self.failures.lock().await.insert(R::PATH, error);
        self
    }

    /// Configure the login/register response
    pub async fn with_auth(self, auth: AuthResponse) -> Self {
        *self.auth.lock().await = Some(auth);
        self
    }

    /// Fail the next login/register call
    pub async fn with_auth_error(self, error: ApiError) -> Self {
        *self.auth_error.lock().await = Some(error);
        self
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    async fn capture(&self, method: &'static str, path: String) {
        self.captured_requests
            .lock()
            .await
            .push(CapturedRequest { method, path });
    }

    async fn check_failure<R: Resource>(&self) -> Result<()> {
        match self.failures.lock().await.get(R::PATH) {
            Some(e) => Err(e.clone().into()),
            None => Ok(()),
        }
    }

    async fn auth_response(&self, email: &str, name: &str) -> Result<AuthResponse> {
        if let Some(e) = self.auth_error.lock().await.take() {
            return Err(e.into());
        }

        let auth = self.auth.lock().await;
        Ok(auth.clone().unwrap_or_else(|| AuthResponse {
            token: "mock-token".to_string(),
            user: UserProfile {
                name: name.to_string(),
                email: email.to_string(),
                role: "admin".to_string(),
                avatar: None,
            },
        }))
    }
}

#[async_trait]
impl AuthApi for MockGateway {
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        self.capture("POST", "/auth/register".to_string()).await;
        self.auth_response(&request.email, &request.name).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse> {
        self.capture("POST", "/auth/login".to_string()).await;
        self.auth_response(&credentials.email, "Mock User").await
    }
}

#[async_trait]
impl ResourceApi for MockGateway {
    async fn get_all<R: Resource>(&self) -> Result<Vec<R::Record>> {
        self.capture("GET", R::collection_path()).await;
        self.check_failure::<R>().await?;

        let records = self.records.lock().await;
        let values = records.get(R::PATH).cloned().unwrap_or_default();
        decode(Value::Array(values))
    }

    async fn get_by_id<R: Resource>(&self, id: &str) -> Result<R::Record> {
        self.capture("GET", R::item_path(id)).await;
        self.check_failure::<R>().await?;

        let records = self.records.lock().await;
        let found = records
            .get(R::PATH)
            .and_then(|values| values.iter().find(|v| record_id(v) == Some(id)))
            .cloned()
            .ok_or_else(not_found)?;
        decode(found)
    }

    async fn create<R: Resource>(&self, draft: &R::Draft) -> Result<R::Record> {
        self.capture("POST", R::collection_path()).await;
        self.check_failure::<R>().await?;

        let mut fields = match serde_json::to_value(draft)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        let id = {
            let mut next = self.next_id.lock().await;
            *next += 1;
            format!("mock-{}", *next)
        };
        fields.insert("id".to_string(), Value::String(id));

        let value = Value::Object(fields);
        let record: R::Record = decode(value.clone())?;
        self.records
            .lock()
            .await
            .entry(R::PATH)
            .or_default()
            .push(value);
        Ok(record)
    }

    async fn update<R: Resource>(&self, id: &str, draft: &R::Draft) -> Result<R::Record> {
        self.capture("PUT", R::item_path(id)).await;
        self.check_failure::<R>().await?;

        let changes = match serde_json::to_value(draft)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        let mut records = self.records.lock().await;
        let existing = records
            .get_mut(R::PATH)
            .and_then(|values| values.iter_mut().find(|v| record_id(v) == Some(id)))
            .ok_or_else(not_found)?;

        if let Value::Object(map) = existing {
            map.extend(changes);
        }
        decode(existing.clone())
    }

    async fn delete<R: Resource>(&self, id: &str) -> Result<()> {
        self.capture("DELETE", R::item_path(id)).await;
        self.check_failure::<R>().await?;

        let mut records = self.records.lock().await;
        let values = records.get_mut(R::PATH).ok_or_else(not_found)?;
        let before = values.len();
        values.retain(|v| record_id(v) != Some(id));

        if values.len() == before {
            return Err(not_found().into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::api::ResourceGroups;
    use crate::client::models::{Hub, HubDraft};
    use crate::client::resource::Hubs;

    fn hub(id: &str, name: &str) -> Hub {
        serde_json::from_value(json!({"id": id, "name": name})).unwrap()
    }

    #[tokio::test]
    async fn test_mock_crud_cycle() {
        let mock = MockGateway::new()
            .with_records::<Hubs>(vec![hub("h-1", "North")])
            .await;

        let created = mock
            .hubs()
            .create(&HubDraft {
                name: Some("South".to_string()),
                capacity: Some(8),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(created.id, "mock-1");

        let updated = mock
            .hubs()
            .update(
                "h-1",
                &HubDraft {
                    name: Some("North Annex".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "North Annex");

        mock.hubs().delete("mock-1").await.unwrap();
        let all = mock.hubs().get_all().await.unwrap();
        assert_eq!(all.len(), 1);

        let requests = mock.captured_requests().await;
        assert_eq!(requests.len(), 4);
        assert_eq!(requests[2].method, "DELETE");
        assert_eq!(requests[2].path, "/hubs/mock-1");
    }

    #[tokio::test]
    async fn test_mock_missing_record() {
        let mock = MockGateway::new();
        let err = mock.hubs().get_by_id("nope").await.unwrap_err();
        assert_eq!(crate::error::describe_error(&err), "Error 404: Not found");
    }

    #[tokio::test]
    async fn test_mock_create_with_incomplete_draft_fails_decode() {
        let mock = MockGateway::new();
        let err = mock.hubs().create(&HubDraft::default()).await.unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Api(ApiError::Decode(_))
        ));
    }
}
