//! Price-drop alert endpoints (all require a session).

use crate::client::{ApiRequest, PricewatchClient};
use crate::error::Result;
use crate::types::*;

impl PricewatchClient {
    /// The current user's alerts.
    pub async fn alerts(&self) -> Result<Vec<PriceAlert>> {
        self.send_json(ApiRequest::get("/alerts")).await
    }

    /// Create a price-drop alert for a model.
    pub async fn alert_create(&self, request: &CreateAlertRequest) -> Result<PriceAlert> {
        self.send_json(ApiRequest::post("/alerts").json(request)?).await
    }

    /// Partially update an alert (target price and/or active flag).
    pub async fn alert_update(
        &self,
        alert_id: &str,
        request: &UpdateAlertRequest,
    ) -> Result<PriceAlert> {
        self.send_json(ApiRequest::patch(format!("/alerts/{alert_id}")).json(request)?).await
    }

    /// Delete an alert.
    pub async fn alert_delete(&self, alert_id: &str) -> Result<()> {
        self.send_unit(ApiRequest::delete(format!("/alerts/{alert_id}"))).await
    }

    /// Whether one model has an alert, and which.
    pub async fn alert_check(&self, model_id: &str) -> Result<AlertStatus> {
        self.send_json(ApiRequest::get(format!("/alerts/check/{model_id}"))).await
    }

    /// Flip an alert between active and paused.
    pub async fn alert_toggle(&self, alert_id: &str) -> Result<AlertStatus> {
        self.send_json(ApiRequest::post(format!("/alerts/toggle/{alert_id}"))).await
    }

    /// Recent triggered-alert notifications, newest first.
    pub async fn alert_notifications(&self, limit: u32) -> Result<Vec<AlertNotification>> {
        self.send_json(ApiRequest::get("/alerts/notifications").query("limit", limit)).await
    }

    /// Number of alerts.
    pub async fn alert_count(&self) -> Result<CountResponse> {
        self.send_json(ApiRequest::get("/alerts/count")).await
    }
}
