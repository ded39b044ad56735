use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::{CoinMarketCapClient, QuoteSource};
use interface::{ProviderError, QuoteEntry};

#[async_trait]
impl QuoteSource for CoinMarketCapClient {
    async fn fetch_quotes(
        &self,
        symbols: &[String],
        convert: &str,
    ) -> Result<HashMap<String, QuoteEntry>, ProviderError> {
        if symbols.is_empty() {
            return Ok(HashMap::new());
        }

        let data: HashMap<String, Value> = self
            .get(
                "/v1/cryptocurrency/quotes/latest",
                &[
                    ("symbol", symbols.join(",")),
                    ("convert", convert.to_string()),
                ],
            )
            .await?;

        Ok(parse_quote_map(data))
    }
}

/// 심볼별 항목을 하나씩 파싱, 실패한 항목만 건너뜀
/// v2 형식처럼 배열로 내려오면 첫 번째로 파싱되는 항목 사용
pub(crate) fn parse_quote_map(data: HashMap<String, Value>) -> HashMap<String, QuoteEntry> {
    let mut out = HashMap::with_capacity(data.len());

    for (key, value) in data {
        let candidates = match value {
            Value::Array(items) => items,
            other => vec![other],
        };

        let entry = candidates
            .into_iter()
            .find_map(|v| serde_json::from_value::<QuoteEntry>(v).ok());

        match entry {
            Some(entry) => {
                out.insert(key.to_uppercase(), entry);
            }
            None => warn!("quote entry for {} could not be parsed, skipping", key),
        }
    }

    out
}
