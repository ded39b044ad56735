use std::sync::Arc;

use tracing::{info, warn};

use interface::{CategoryDetail, Coin, FallbackReason, Sector, SectorSource, PRIMARY_CURRENCY};
use providers::CategorySource;

/// 섹터 합계 계산
/// 카테고리 상세를 쓸 수 없으면 추적 코인 합산으로 대체
pub struct SectorAggregator {
    source: Arc<dyn CategorySource>,
    default_name: String,
}

impl SectorAggregator {
    pub fn new(source: Arc<dyn CategorySource>, default_name: impl Into<String>) -> Self {
        Self {
            source,
            default_name: default_name.into(),
        }
    }

    pub async fn aggregate(&self, category_id: Option<&str>, coins: &[Coin]) -> Sector {
        let Some(id) = category_id else {
            return fallback_sector(&self.default_name, FallbackReason::NoCategoryId, coins);
        };

        match self.source.fetch_category(id, PRIMARY_CURRENCY).await {
            Ok(detail) => sector_from_detail(&self.default_name, detail, coins),
            Err(e) => {
                warn!("category detail for {} failed: {}", id, e);
                fallback_sector(
                    &self.default_name,
                    FallbackReason::CategoryEndpointFailed,
                    coins,
                )
            }
        }
    }
}

/// 시가총액, 거래량 둘 다 양수일 때만 직접 값 사용
pub fn sector_from_detail(default_name: &str, detail: CategoryDetail, coins: &[Coin]) -> Sector {
    let name = detail
        .name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| default_name.to_string());

    match (usable(detail.market_cap), usable(detail.volume_24h)) {
        (Some(market_cap), Some(volume_24h)) => {
            info!(
                "sector totals from category endpoint: market_cap={}, volume_24h={}",
                market_cap, volume_24h
            );
            Sector {
                name,
                market_cap,
                volume_24h,
                source: SectorSource::CategoryEndpoint,
                fallback_reason: None,
            }
        }
        _ => {
            warn!(
                "category totals missing (market_cap={:?}, volume_24h={:?})",
                detail.market_cap, detail.volume_24h
            );
            fallback_sector(&name, FallbackReason::MissingTotals, coins)
        }
    }
}

/// 코인별 값 합산 (없는 값은 0)
/// 합산할 코인이 없으면 0 합계와 Unavailable
pub fn fallback_sector(name: &str, reason: FallbackReason, coins: &[Coin]) -> Sector {
    if coins.is_empty() {
        warn!("no coins to sum for sector fallback ({:?})", reason);
        return Sector {
            name: name.to_string(),
            market_cap: 0.0,
            volume_24h: 0.0,
            source: SectorSource::Unavailable,
            fallback_reason: Some(reason),
        };
    }

    let market_cap: f64 = coins.iter().map(|c| c.market_cap_usd.unwrap_or(0.0)).sum();
    let volume_24h: f64 = coins.iter().map(|c| c.volume_24h_usd.unwrap_or(0.0)).sum();

    info!(
        "sector totals summed over {} coins ({:?}): market_cap={}, volume_24h={}",
        coins.len(),
        reason,
        market_cap,
        volume_24h
    );

    Sector {
        name: name.to_string(),
        market_cap,
        volume_24h,
        source: SectorSource::FallbackSum,
        fallback_reason: Some(reason),
    }
}

fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}
