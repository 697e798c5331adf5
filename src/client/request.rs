//! Per-call request context

use std::fmt;

use reqwest::Method;
use serde_json::Value;

/// Everything one outgoing call carries. Built per call, never stored.
#[derive(Clone)]
pub struct RequestContext {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub bearer: Option<String>,
}

impl RequestContext {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            bearer: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach the bearer token, if there is one
    pub fn authorize(mut self, token: Option<String>) -> Self {
        self.bearer = token;
        self
    }

    /// `Authorization` header value
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|t| format!("Bearer {}", t))
    }
}

// Keeps the token out of debug logs
impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("body", &self.body.is_some())
            .field("bearer", &self.bearer.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_authorization_header() {
        let ctx = RequestContext::new(Method::GET, "/hubs").authorize(Some("abc".to_string()));
        assert_eq!(ctx.authorization().as_deref(), Some("Bearer abc"));

        let anon = RequestContext::new(Method::GET, "/hubs").authorize(None);
        assert_eq!(anon.authorization(), None);
    }

    #[test]
    fn test_debug_redacts_token() {
        let ctx = RequestContext::new(Method::POST, "/partners")
            .with_body(json!({"name": "Acme"}))
            .authorize(Some("super-secret".to_string()));

        let rendered = format!("{:?}", ctx);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("/partners"));
    }
}
