use async_trait::async_trait;

use crate::{CategorySource, CoinMarketCapClient};
use interface::{CategoryDetail, CategoryRecord, ProviderError};

#[async_trait]
impl CategorySource for CoinMarketCapClient {
    async fn fetch_categories(&self, limit: u32) -> Result<Vec<CategoryRecord>, ProviderError> {
        self.get(
            "/v1/cryptocurrency/categories",
            &[("limit", limit.to_string())],
        )
        .await
    }

    async fn fetch_category(
        &self,
        id: &str,
        convert: &str,
    ) -> Result<CategoryDetail, ProviderError> {
        self.get(
            "/v1/cryptocurrency/category",
            &[("id", id.to_string()), ("convert", convert.to_string())],
        )
        .await
    }
}
