//! Catalog, comparison, and price-history endpoints. All public reads.

use crate::client::{ApiRequest, PricewatchClient};
use crate::error::Result;
use crate::types::*;

impl PricewatchClient {
    /// Browse the catalog with optional filters and paging.
    pub async fn products(&self, query: &ProductQuery) -> Result<Page<Product>> {
        let mut request = ApiRequest::get("/products");
        request.query = query.to_query();
        self.send_json(request).await
    }

    /// Filtered catalog view (server-side filter pipeline).
    pub async fn filter_products(&self, query: &ProductQuery) -> Result<Page<Product>> {
        let mut request = ApiRequest::get("/products/filter");
        request.query = query.to_query();
        self.send_json(request).await
    }

    /// Full-text product search.
    pub async fn search_products(&self, q: &str) -> Result<Page<Product>> {
        self.send_json(ApiRequest::get("/products/search").query("q", q)).await
    }

    /// Cross-platform price comparison for one model.
    pub async fn compare_by_model(&self, model_id: &str) -> Result<CompareResult> {
        self.send_json(ApiRequest::get("/products/compare").query("model_id", model_id)).await
    }

    /// Products with the largest current discounts.
    pub async fn best_deals(&self, limit: Option<u32>) -> Result<Page<Product>> {
        let mut request = ApiRequest::get("/products/best-deals");
        if let Some(limit) = limit {
            request = request.query("limit", limit);
        }
        self.send_json(request).await
    }

    /// Per-platform price-history chart series for one model.
    pub async fn price_history_chart(&self, model_id: &str, days: u32) -> Result<PriceHistory> {
        self.send_json(
            ApiRequest::get(format!("/products/{model_id}/charts/price-history"))
                .query("days", days),
        )
        .await
    }

    /// Best-price-over-time chart series for one model.
    pub async fn best_price_chart(&self, model_id: &str, days: u32) -> Result<PriceHistory> {
        self.send_json(
            ApiRequest::get(format!("/products/{model_id}/charts/best-price")).query("days", days),
        )
        .await
    }

    /// Raw price-history points for one model.
    pub async fn price_history_data(&self, model_id: &str, days: u32) -> Result<PriceHistory> {
        self.send_json(
            ApiRequest::get(format!("/products/{model_id}/price-history-data")).query("days", days),
        )
        .await
    }

    /// Platforms the catalog aggregates.
    pub async fn platforms(&self) -> Result<Vec<String>> {
        self.send_json(ApiRequest::get("/platforms/list")).await
    }

    /// Brands listed on one platform.
    pub async fn brands_by_platform(&self, platform: &str) -> Result<Vec<String>> {
        self.send_json(ApiRequest::get(format!("/platforms/{platform}/brands"))).await
    }

    /// Models of one brand on one platform, paged.
    pub async fn models_by_platform_brand(
        &self,
        platform: &str,
        brand: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Page<Product>> {
        self.send_json(
            ApiRequest::get(format!("/platforms/{platform}/brands/{brand}/models"))
                .query("page", page)
                .query("page_size", page_size),
        )
        .await
    }

    /// Every brand in the catalog (filter metadata).
    pub async fn all_brands(&self) -> Result<Vec<String>> {
        self.send_json(ApiRequest::get("/filters/brands")).await
    }

    /// Catalog-wide price range (filter metadata).
    pub async fn price_range(&self) -> Result<PriceRange> {
        self.send_json(ApiRequest::get("/filters/price-range")).await
    }
}
