//! Wishlist endpoints (all require a session).

use crate::client::{ApiRequest, PricewatchClient};
use crate::error::Result;
use crate::types::*;

impl PricewatchClient {
    /// The current user's wishlist.
    pub async fn wishlist(&self) -> Result<Vec<WishlistEntry>> {
        self.send_json(ApiRequest::get("/wishlist")).await
    }

    /// Add a model to the wishlist.
    pub async fn wishlist_add(&self, model_id: &str) -> Result<ActionResponse> {
        self.send_json(
            ApiRequest::post("/wishlist").json(&serde_json::json!({ "model_id": model_id }))?,
        )
        .await
    }

    /// Remove a model from the wishlist.
    pub async fn wishlist_remove(&self, model_id: &str) -> Result<()> {
        self.send_unit(ApiRequest::delete(format!("/wishlist/{model_id}"))).await
    }

    /// Whether one model is wishlisted.
    pub async fn wishlist_check(&self, model_id: &str) -> Result<WishlistStatus> {
        self.send_json(ApiRequest::get(format!("/wishlist/check/{model_id}"))).await
    }

    /// Membership check for many models at once.
    pub async fn wishlist_check_bulk(&self, model_ids: &[String]) -> Result<WishlistBulkStatus> {
        self.send_json(ApiRequest::post("/wishlist/check-bulk").json(&model_ids)?).await
    }

    /// Add the model if absent, remove it if present.
    pub async fn wishlist_toggle(&self, model_id: &str) -> Result<WishlistStatus> {
        self.send_json(ApiRequest::post(format!("/wishlist/toggle/{model_id}"))).await
    }

    /// Number of wishlisted models.
    pub async fn wishlist_count(&self) -> Result<CountResponse> {
        self.send_json(ApiRequest::get("/wishlist/count")).await
    }
}
