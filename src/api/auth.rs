//! Authentication endpoints.
//!
//! Login, register, refresh, verify-email, forgot-password, and
//! reset-password are exempt from refresh-on-401 (see
//! [`DEFAULT_EXEMPT_PATHS`](crate::DEFAULT_EXEMPT_PATHS)); a 401 from them
//! is a terminal answer. `/auth/me` and `/auth/sessions` are ordinary
//! protected endpoints.

use serde_json::json;

use crate::client::{ApiRequest, PricewatchClient};
use crate::error::Result;
use crate::types::*;

impl PricewatchClient {
    /// Log in with email and password; session credentials arrive as
    /// cookies on the shared store.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        self.send_json(ApiRequest::post("/auth/login").json(request)?).await
    }

    /// Register a new account.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        self.send_json(ApiRequest::post("/auth/register").json(request)?).await
    }

    /// End the current session.
    pub async fn logout(&self) -> Result<()> {
        self.send_unit(ApiRequest::post("/auth/logout")).await
    }

    /// End every session for this account.
    pub async fn logout_all(&self) -> Result<()> {
        self.send_unit(ApiRequest::post("/auth/logout-all")).await
    }

    /// Explicitly renew the session credential.
    ///
    /// Rarely needed by callers: `send` performs this automatically behind
    /// the single-flight gate when a protected request hits a 401.
    pub async fn refresh(&self) -> Result<()> {
        self.send_unit(ApiRequest::post(crate::client::REFRESH_PATH)).await
    }

    /// Current user's profile.
    pub async fn me(&self) -> Result<UserProfile> {
        self.send_json(ApiRequest::get("/auth/me")).await
    }

    /// Active sessions for the current account.
    pub async fn sessions(&self) -> Result<Vec<SessionInfo>> {
        self.send_json(ApiRequest::get("/auth/sessions")).await
    }

    /// Redeem an email-verification token.
    pub async fn verify_email(&self, token: &str) -> Result<ActionResponse> {
        self.send_json(ApiRequest::post("/auth/verify-email").json(&json!({ "token": token }))?)
            .await
    }

    /// Re-send the verification email.
    pub async fn resend_verification(&self, email: &str) -> Result<ActionResponse> {
        self.send_json(
            ApiRequest::post("/auth/resend-verification").json(&json!({ "email": email }))?,
        )
        .await
    }

    /// Whether the current account's email is verified.
    pub async fn verification_status(&self) -> Result<VerificationStatus> {
        self.send_json(ApiRequest::get("/auth/verification-status")).await
    }

    /// Start a password reset for `email`.
    pub async fn forgot_password(&self, email: &str) -> Result<ActionResponse> {
        self.send_json(ApiRequest::post("/auth/forgot-password").json(&json!({ "email": email }))?)
            .await
    }

    /// Complete a password reset with the emailed token.
    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<ActionResponse> {
        self.send_json(ApiRequest::post("/auth/reset-password").json(request)?).await
    }
}
