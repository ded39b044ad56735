use std::{collections::HashMap, sync::Arc};

use futures::future::join_all;
use tracing::{info, warn};

use interface::{Coin, QuoteEntry, PRIMARY_CURRENCY, REFERENCE_CURRENCY};
use providers::QuoteSource;

/// 가격 표시 소수 자릿수
pub const PRICE_DECIMALS: i32 = 8;

/// 추적 심볼들의 시세 조회
///
/// 통화마다 한 번씩 묶음 요청을 보내고, 묶음 요청이 통째로 실패하면
/// 그 통화만 심볼별 요청으로 나눠서 실패를 심볼 단위로 가둡니다.
/// 결과는 항상 입력 심볼 순서를 따르고, 실패한 심볼은 빠집니다.
pub struct QuoteFetcher {
    source: Arc<dyn QuoteSource>,
    symbols: Vec<String>,
    include_reference: bool,
}

impl QuoteFetcher {
    pub fn new(
        source: Arc<dyn QuoteSource>,
        symbols: Vec<String>,
        include_reference: bool,
    ) -> Self {
        Self {
            source,
            symbols,
            include_reference,
        }
    }

    pub async fn fetch(&self) -> Vec<Coin> {
        let primary = self.fetch_currency(PRIMARY_CURRENCY).await;
        if primary.is_empty() {
            warn!("no {} quotes received for {:?}", PRIMARY_CURRENCY, self.symbols);
            return Vec::new();
        }

        let reference = if self.include_reference {
            self.fetch_currency(REFERENCE_CURRENCY).await
        } else {
            HashMap::new()
        };

        let coins = build_coins(&self.symbols, &primary, &reference);
        info!("quotes fetched: {}/{} coins", coins.len(), self.symbols.len());
        coins
    }

    async fn fetch_currency(&self, currency: &str) -> HashMap<String, QuoteEntry> {
        match self.source.fetch_quotes(&self.symbols, currency).await {
            Ok(quotes) => quotes,
            Err(e) => {
                warn!(
                    "batched quotes request in {} failed: {}, splitting per symbol",
                    currency, e
                );
                self.fetch_each(currency).await
            }
        }
    }

    async fn fetch_each(&self, currency: &str) -> HashMap<String, QuoteEntry> {
        let requests = self.symbols.iter().map(|symbol| async move {
            match self
                .source
                .fetch_quotes(std::slice::from_ref(symbol), currency)
                .await
            {
                Ok(quotes) => lookup(&quotes, symbol).cloned(),
                Err(e) => {
                    warn!("quote for {} in {} failed: {}", symbol, currency, e);
                    None
                }
            }
        });

        // join_all은 입력 순서대로 결과를 돌려줌
        let results = join_all(requests).await;

        self.symbols
            .iter()
            .zip(results)
            .filter_map(|(symbol, entry)| entry.map(|entry| (symbol.clone(), entry)))
            .collect()
    }
}

/// 입력 심볼 순서대로 Coin 생성
/// 기본 통화 시세가 없는 심볼은 건너뛰고, 기준 통화 시세가 없으면 해당 필드만 비움
pub fn build_coins(
    symbols: &[String],
    primary: &HashMap<String, QuoteEntry>,
    reference: &HashMap<String, QuoteEntry>,
) -> Vec<Coin> {
    let mut coins = Vec::with_capacity(symbols.len());

    for symbol in symbols {
        let Some(entry) = lookup(primary, symbol) else {
            warn!("{} missing from quotes response, skipping", symbol);
            continue;
        };
        let Some(usd) = entry.quote_in(PRIMARY_CURRENCY) else {
            warn!("{} has no {} quote, skipping", symbol, PRIMARY_CURRENCY);
            continue;
        };
        let btc = lookup(reference, symbol).and_then(|e| e.quote_in(REFERENCE_CURRENCY));

        let name = entry
            .name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| symbol.clone());

        coins.push(Coin {
            symbol: symbol.clone(),
            name,
            market_cap_usd: usd.market_cap,
            volume_24h_usd: usd.volume_24h,
            price_usd: usd.price.map(round_price),
            pct_24h_usd: usd.percent_change_24h,
            pct_7d_usd: usd.percent_change_7d,
            price_btc: btc.and_then(|q| q.price).map(round_price),
            pct_24h_btc: btc.and_then(|q| q.percent_change_24h),
            pct_7d_btc: btc.and_then(|q| q.percent_change_7d),
        });
    }

    coins
}

/// 가격을 소수 8자리로 반올림
/// 반올림 결과가 유한하지 않으면 원래 값 유지
pub fn round_price(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(PRICE_DECIMALS);
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

fn lookup<'a>(quotes: &'a HashMap<String, QuoteEntry>, symbol: &str) -> Option<&'a QuoteEntry> {
    quotes.get(symbol).or_else(|| {
        quotes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(symbol))
            .map(|(_, entry)| entry)
    })
}
