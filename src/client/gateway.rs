//! HTTP implementation of the logistics API

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client as HttpClient, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::api::{AuthApi, ResourceApi};
use super::models::{AuthResponse, Credentials, RegisterRequest};
use super::request::RequestContext;
use super::resource::Resource;
use crate::error::{ApiError, Result};
use crate::session::SessionStore;

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// API gateway client.
///
/// The base URL is fixed at construction. The bearer token is read from the
/// session store on every call, so a login or logout takes effect on the
/// next request without rebuilding the client. Anonymous calls still go
/// out; the server decides whether to reject them.
pub struct GatewayClient {
    http: HttpClient,
    base_url: String,
    session: Arc<SessionStore>,
}

impl GatewayClient {
    /// Create a client with the default timeout
    #[cfg(test)]
    pub fn new(base_url: impl Into<String>, session: Arc<SessionStore>) -> Result<Self> {
        Self::with_timeout(
            base_url,
            session,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(
        base_url: impl Into<String>,
        session: Arc<SessionStore>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("slotctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        log::debug!("API gateway at {}", base_url);

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    /// Resolved API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the context for one call, picking up the current token
    fn context(&self, method: Method, path: impl Into<String>) -> RequestContext {
        RequestContext::new(method, path).authorize(self.session.token())
    }

    /// Send a request and return the parsed JSON body (`None` when empty)
    async fn send(&self, ctx: RequestContext) -> Result<Option<Value>> {
        log::debug!("-> {:?}", ctx);

        let url = format!("{}{}", self.base_url, ctx.path);
        let mut request = self
            .http
            .request(ctx.method.clone(), &url)
            .header(ACCEPT, "application/json");

        if let Some(auth) = ctx.authorization() {
            request = request.header(AUTHORIZATION, auth);
        }
        if let Some(body) = &ctx.body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();
        let text = response.text().await.map_err(ApiError::from)?;

        log::debug!("<- {} {} ({} bytes)", status.as_u16(), ctx.path, text.len());

        if !status.is_success() {
            let body = serde_json::from_str::<Value>(&text).ok().or_else(|| {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| Value::String(trimmed.to_string()))
            });
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        if text.trim().is_empty() {
            return Ok(None);
        }

        let value = serde_json::from_str(&text).map_err(|e| {
            ApiError::Decode(format!("{} {}: body is not JSON: {}", ctx.method, ctx.path, e))
        })?;
        Ok(Some(value))
    }

    /// Send a request and decode the body into `T`
    async fn fetch<T: DeserializeOwned>(&self, ctx: RequestContext) -> Result<T> {
        let what = format!("{} {}", ctx.method, ctx.path);
        let value = self
            .send(ctx)
            .await?
            .ok_or_else(|| ApiError::Decode(format!("{}: empty response body", what)))?;

        let decoded = serde_json::from_value(unwrap_envelope(value))
            .map_err(|e| ApiError::Decode(format!("{}: {}", what, e)))?;
        Ok(decoded)
    }
}

/// Accept both bare payloads and `{ "data": ... }` envelopes
fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map)
            if matches!(map.get("data"), Some(Value::Array(_) | Value::Object(_))) =>
        {
            map.remove("data").unwrap_or_default()
        }
        other => other,
    }
}

#[async_trait]
impl AuthApi for GatewayClient {
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        let ctx = self
            .context(Method::POST, "/auth/register")
            .with_body(serde_json::to_value(request)?);
        self.fetch(ctx).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse> {
        let ctx = self
            .context(Method::POST, "/auth/login")
            .with_body(serde_json::to_value(credentials)?);
        self.fetch(ctx).await
    }
}

#[async_trait]
impl ResourceApi for GatewayClient {
    async fn get_all<R: Resource>(&self) -> Result<Vec<R::Record>> {
        self.fetch(self.context(Method::GET, R::collection_path()))
            .await
    }

    async fn get_by_id<R: Resource>(&self, id: &str) -> Result<R::Record> {
        self.fetch(self.context(Method::GET, R::item_path(id))).await
    }

    async fn create<R: Resource>(&self, draft: &R::Draft) -> Result<R::Record> {
        let ctx = self
            .context(Method::POST, R::collection_path())
            .with_body(serde_json::to_value(draft)?);
        self.fetch(ctx).await
    }

    async fn update<R: Resource>(&self, id: &str, draft: &R::Draft) -> Result<R::Record> {
        let ctx = self
            .context(Method::PUT, R::item_path(id))
            .with_body(serde_json::to_value(draft)?);
        self.fetch(ctx).await
    }

    async fn delete<R: Resource>(&self, id: &str) -> Result<()> {
        self.send(self.context(Method::DELETE, R::item_path(id)))
            .await?;
        Ok(())
    }
}
