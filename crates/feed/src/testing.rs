//! 테스트용 메모리 데이터 소스

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;

use interface::{CategoryDetail, CategoryRecord, Coin, ProviderError, QuoteEntry, QuoteValues};
use providers::{CategorySource, QuoteSource};

#[derive(Default)]
pub(crate) struct FakeSource {
    /// None이면 목록 조회 실패
    pub categories: Option<Vec<CategoryRecord>>,
    /// None이면 상세 조회 실패
    pub detail: Option<CategoryDetail>,
    pub quotes: HashMap<String, QuoteEntry>,
    /// 심볼 2개 이상 요청은 실패
    pub fail_batches: bool,
    /// 이 심볼이 포함된 요청은 실패 (잘못된 심볼에 대한 400 응답 흉내)
    pub failing_symbols: Vec<String>,
    /// 이 통화로의 요청은 모두 실패
    pub failing_currencies: Vec<String>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn with_quotes(entries: Vec<QuoteEntry>) -> Self {
        Self {
            quotes: entries
                .into_iter()
                .map(|entry| (entry.symbol.clone(), entry))
                .collect(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl CategorySource for FakeSource {
    async fn fetch_categories(&self, limit: u32) -> Result<Vec<CategoryRecord>, ProviderError> {
        self.record(format!("categories:{limit}"));
        self.categories.clone().ok_or(ProviderError::Status {
            status: 500,
            body: "listing unavailable".to_string(),
        })
    }

    async fn fetch_category(
        &self,
        id: &str,
        convert: &str,
    ) -> Result<CategoryDetail, ProviderError> {
        self.record(format!("category:{id}:{convert}"));
        self.detail
            .clone()
            .ok_or_else(|| ProviderError::Other("category detail unavailable".to_string()))
    }
}

#[async_trait]
impl QuoteSource for FakeSource {
    async fn fetch_quotes(
        &self,
        symbols: &[String],
        convert: &str,
    ) -> Result<HashMap<String, QuoteEntry>, ProviderError> {
        self.record(format!("quotes:{}:{}", symbols.join(","), convert));

        if self.failing_currencies.iter().any(|c| c == convert) {
            return Err(ProviderError::Other(format!("{convert} unavailable")));
        }
        if self.fail_batches && symbols.len() > 1 {
            return Err(ProviderError::Status {
                status: 400,
                body: "Invalid value for \"symbol\"".to_string(),
            });
        }
        if symbols.iter().any(|s| self.failing_symbols.contains(s)) {
            return Err(ProviderError::Status {
                status: 400,
                body: "Invalid value for \"symbol\"".to_string(),
            });
        }

        Ok(symbols
            .iter()
            .filter_map(|s| self.quotes.get(s).map(|entry| (s.clone(), entry.clone())))
            .collect())
    }
}

pub(crate) fn record(id: Option<&str>, name: Option<&str>, slug: Option<&str>) -> CategoryRecord {
    CategoryRecord {
        id: id.map(str::to_string),
        name: name.map(str::to_string),
        slug: slug.map(str::to_string),
    }
}

pub(crate) fn values(price: f64, market_cap: f64, volume_24h: f64) -> QuoteValues {
    QuoteValues {
        price: Some(price),
        market_cap: Some(market_cap),
        volume_24h: Some(volume_24h),
        percent_change_24h: Some(1.5),
        percent_change_7d: Some(-3.25),
    }
}

pub(crate) fn entry(
    symbol: &str,
    name: &str,
    usd: QuoteValues,
    btc: Option<QuoteValues>,
) -> QuoteEntry {
    let mut quote = HashMap::new();
    quote.insert("USD".to_string(), usd);
    if let Some(btc) = btc {
        quote.insert("BTC".to_string(), btc);
    }
    QuoteEntry {
        symbol: symbol.to_string(),
        name: Some(name.to_string()),
        quote,
    }
}

pub(crate) fn coin(symbol: &str, market_cap: Option<f64>, volume_24h: Option<f64>) -> Coin {
    Coin {
        symbol: symbol.to_string(),
        name: symbol.to_string(),
        market_cap_usd: market_cap,
        volume_24h_usd: volume_24h,
        price_usd: Some(1.0),
        pct_24h_usd: None,
        pct_7d_usd: None,
        price_btc: None,
        pct_24h_btc: None,
        pct_7d_btc: None,
    }
}

pub(crate) fn symbols(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
