//! Account settings endpoints (all require a session).

use crate::client::{ApiRequest, PricewatchClient};
use crate::error::Result;
use crate::types::*;

impl PricewatchClient {
    /// The current user's profile.
    pub async fn profile(&self) -> Result<UserProfile> {
        self.send_json(ApiRequest::get("/settings/profile")).await
    }

    /// Partially update the profile.
    ///
    /// The API takes these fields as query parameters with an empty body.
    pub async fn profile_update(&self, request: &UpdateProfileRequest) -> Result<UserProfile> {
        let mut api_request = ApiRequest::patch("/settings/profile");
        if let Some(name) = &request.name {
            api_request = api_request.query("name", name);
        }
        if let Some(email) = &request.email {
            api_request = api_request.query("email", email);
        }
        self.send_json(api_request).await
    }

    /// Change the account password (query parameters, empty body).
    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<ActionResponse> {
        self.send_json(
            ApiRequest::post("/settings/change-password")
                .query("current_password", &request.current_password)
                .query("new_password", &request.new_password),
        )
        .await
    }

    /// Alert delivery preferences.
    pub async fn alert_preferences(&self) -> Result<AlertPreferences> {
        self.send_json(ApiRequest::get("/settings/alert-preferences")).await
    }

    /// Pause every alert without deleting them.
    pub async fn disable_all_alerts(&self) -> Result<ActionResponse> {
        self.send_json(ApiRequest::post("/settings/disable-all-alerts")).await
    }

    /// Re-activate every alert.
    pub async fn enable_all_alerts(&self) -> Result<ActionResponse> {
        self.send_json(ApiRequest::post("/settings/enable-all-alerts")).await
    }

    /// Delete every alert.
    pub async fn delete_all_alerts(&self) -> Result<()> {
        self.send_unit(ApiRequest::delete("/settings/delete-all-alerts")).await
    }

    /// Empty the wishlist.
    pub async fn clear_wishlist(&self) -> Result<()> {
        self.send_unit(ApiRequest::delete("/settings/clear-wishlist")).await
    }

    /// Export the account's data as raw JSON.
    pub async fn export_data(&self) -> Result<serde_json::Value> {
        self.send_json(ApiRequest::get("/settings/export-data")).await
    }

    /// Permanently delete the account. Requires the password and an
    /// explicit confirmation flag.
    pub async fn delete_account(&self, password: &str) -> Result<()> {
        self.send_unit(
            ApiRequest::delete("/settings/delete-account")
                .query("password", password)
                .query("confirm", true),
        )
        .await
    }

    /// Unsubscribe an email address from alert mail (query parameter,
    /// empty body).
    pub async fn unsubscribe(&self, email: &str) -> Result<ActionResponse> {
        self.send_json(ApiRequest::post("/settings/unsubscribe").query("email", email)).await
    }
}
