use std::collections::HashMap;

use async_trait::async_trait;

use interface::{CategoryDetail, CategoryRecord, ProviderError, QuoteEntry};

pub mod coinmarketcap;

#[async_trait]
pub trait CategorySource: Send + Sync {
    /// 카테고리 목록 조회
    async fn fetch_categories(&self, limit: u32) -> Result<Vec<CategoryRecord>, ProviderError>;

    /// 카테고리 상세 (섹터 합계) 조회
    /// convert: 합계를 표시할 통화 (예: "USD")
    async fn fetch_category(
        &self,
        id: &str,
        convert: &str,
    ) -> Result<CategoryDetail, ProviderError>;
}

#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// 심볼 집합의 시세를 한 통화 기준으로 조회
    /// 응답에 없는 심볼은 결과 맵에 들어가지 않음 (키는 대문자 심볼)
    async fn fetch_quotes(
        &self,
        symbols: &[String],
        convert: &str,
    ) -> Result<HashMap<String, QuoteEntry>, ProviderError>;
}

// Convenience re-exports
pub use coinmarketcap::CoinMarketCapClient;
