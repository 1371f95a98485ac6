//! Request and response types for the Pricewatch API.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ---------- Auth ----------

/// Request body for `/auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `/auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Response from login/register; session credentials arrive as cookies.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Current user (from `/auth/me` or `/settings/profile`).
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<String>,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_verified: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One active session (from `/auth/sessions`).
#[derive(Debug, Clone, Deserialize)]
pub struct SessionInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_seen_at: Option<String>,
    #[serde(default)]
    pub current: Option<bool>,
}

/// Email verification status (from `/auth/verification-status`).
#[derive(Debug, Clone, Deserialize)]
pub struct VerificationStatus {
    pub verified: bool,
    #[serde(default)]
    pub email: Option<String>,
}

/// Request body for `/auth/reset-password`.
#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

/// Parameters for `/settings/change-password` (sent as query parameters).
#[derive(Debug, Clone)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

// ---------- Products ----------

/// One product model with its per-platform offers.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub model_id: String,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub lowest_price: Option<f64>,
    #[serde(default)]
    pub offers: Vec<PriceOffer>,
}

/// One platform's listing for a product model.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceOffer {
    pub platform: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub in_stock: Option<bool>,
}

/// Paged envelope used by catalog listings.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct Page<T> {
    #[serde(default)]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
}

/// Catalog filter/sort parameters; unset fields are omitted from the query.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub brand: Option<String>,
    pub platform: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: Option<String>,
}

impl ProductQuery {
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        let mut push = |key: &str, value: Option<String>| {
            if let Some(value) = value {
                query.push((key.to_string(), value));
            }
        };
        push("page", self.page.map(|v| v.to_string()));
        push("page_size", self.page_size.map(|v| v.to_string()));
        push("brand", self.brand.clone());
        push("platform", self.platform.clone());
        push("min_price", self.min_price.map(|v| v.to_string()));
        push("max_price", self.max_price.map(|v| v.to_string()));
        push("sort", self.sort.clone());
        query
    }
}

/// Cross-platform comparison for one model (from `/products/compare`).
#[derive(Debug, Clone, Deserialize)]
pub struct CompareResult {
    pub model_id: String,
    #[serde(default)]
    pub product: Option<Product>,
    #[serde(default)]
    pub offers: Vec<PriceOffer>,
}

/// Catalog-wide price range (from `/filters/price-range`).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

// ---------- Price history ----------

/// One point on a price-history curve.
#[derive(Debug, Clone, Deserialize)]
pub struct PricePoint {
    pub date: String,
    pub price: f64,
    #[serde(default)]
    pub platform: Option<String>,
}

/// One labeled curve of a price-history chart.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartSeries {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub points: Vec<PricePoint>,
}

/// Chart payload for a model (per-platform history or best-price line).
#[derive(Debug, Clone, Deserialize)]
pub struct PriceHistory {
    #[serde(default)]
    pub model_id: Option<String>,
    #[serde(default)]
    pub days: Option<u32>,
    #[serde(default)]
    pub series: Vec<ChartSeries>,
}

// ---------- Wishlist ----------

/// One wishlist entry.
#[derive(Debug, Clone, Deserialize)]
pub struct WishlistEntry {
    pub model_id: String,
    #[serde(default)]
    pub product: Option<Product>,
    #[serde(default)]
    pub added_at: Option<String>,
}

/// Membership check for one model (from `/wishlist/check/{model_id}`).
#[derive(Debug, Clone, Deserialize)]
pub struct WishlistStatus {
    pub in_wishlist: bool,
}

/// Bulk membership check: model id to membership.
pub type WishlistBulkStatus = HashMap<String, bool>;

// ---------- Price alerts ----------

/// One price-drop alert.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceAlert {
    pub id: String,
    pub model_id: String,
    pub target_price: f64,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub product: Option<Product>,
}

/// Request body for creating an alert.
#[derive(Debug, Clone, Serialize)]
pub struct CreateAlertRequest {
    pub model_id: String,
    pub target_price: f64,
}

/// Partial update of an alert; unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateAlertRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Alert check for one model (from `/alerts/check/{model_id}`).
#[derive(Debug, Clone, Deserialize)]
pub struct AlertStatus {
    pub has_alert: bool,
    #[serde(default)]
    pub alert: Option<PriceAlert>,
}

/// One triggered-alert notification.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertNotification {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

// ---------- Settings ----------

/// Partial profile update; unset fields are omitted from the query and
/// left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Alert delivery preferences (from `/settings/alert-preferences`).
#[derive(Debug, Clone, Deserialize)]
pub struct AlertPreferences {
    #[serde(default)]
    pub alerts_enabled: Option<bool>,
    #[serde(default)]
    pub email_notifications: Option<bool>,
}

// ---------- Shared ----------

/// Generic acknowledgement body.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Count envelope used by wishlist and alert counters.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}
