//! Auth glue
//!
//! The auth endpoints are outside the storefront core; they are consumed
//! only as opaque success/failure signals that yield a [`SessionContext`].

use shared::api::{AuthResponse, LoginRequest, SignupRequest};

use crate::session::SessionContext;
use crate::{ClientError, ClientResult, HttpClient};

/// Client for the opaque auth endpoints
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: HttpClient,
}

impl AuthClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Login; a success yields a hydratable session
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<SessionContext> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: AuthResponse = self.http.post("/api/auth/login", &request).await?;
        Self::into_session(response)
    }

    /// Signup; treated exactly like login on success
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> ClientResult<SessionContext> {
        let request = SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: AuthResponse = self.http.post("/api/auth/signup", &request).await?;
        Self::into_session(response)
    }

    fn into_session(response: AuthResponse) -> ClientResult<SessionContext> {
        if !response.success {
            return Err(ClientError::rejected(response.message));
        }
        match (response.user_id, response.token) {
            (Some(user_id), Some(token)) => Ok(SessionContext {
                user_id: Some(user_id),
                token: Some(token),
                is_admin: response.is_admin.unwrap_or(false),
                verified: response.verified.unwrap_or(false),
            }),
            _ => Err(ClientError::InvalidResponse(
                "Auth succeeded without user id and token".to_string(),
            )),
        }
    }
}
