//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{AuthResponse, Credentials, RegisterRequest};
use crate::error::Result;

/// Authentication operations for the logistics API.
///
/// Both calls return a token and profile; storing them in the session is
/// the caller's job.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Create an account (`POST /auth/register`)
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse>;

    /// Exchange credentials for a token (`POST /auth/login`)
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse>;
}
