use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// 추적 대상 코인 한 개의 시세 정보
///
/// 필드 이름은 기존 `latest.json` 소비자와 맞추기 위해 통화별 평면 키를 사용합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    #[serde(rename = "sym")]
    pub symbol: String,
    pub name: String,
    pub market_cap_usd: Option<f64>,
    #[serde(rename = "volume24_usd")]
    pub volume_24h_usd: Option<f64>,
    pub price_usd: Option<f64>,
    pub pct_24h_usd: Option<f64>,
    pub pct_7d_usd: Option<f64>,
    pub price_btc: Option<f64>,
    pub pct_24h_btc: Option<f64>,
    pub pct_7d_btc: Option<f64>,
}

/// 섹터 합계를 만든 방법
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectorSource {
    /// 카테고리 상세 API 값 그대로
    CategoryEndpoint,
    /// 추적 코인 합산
    FallbackSum,
    /// 합산할 코인조차 없음
    Unavailable,
}

/// fallback이 일어난 이유
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    NoCategoryId,
    CategoryEndpointFailed,
    MissingTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub name: String,
    pub market_cap: f64,
    pub volume_24h: f64,
    pub source: SectorSource,
    pub fallback_reason: Option<FallbackReason>,
}

impl Sector {
    pub fn is_direct(&self) -> bool {
        self.source == SectorSource::CategoryEndpoint
    }
}

/// 한 번의 실행으로 만들어지는 최종 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub timestamp: DateTime<FixedOffset>,
    pub sector: Sector,
    pub coins: Vec<Coin>,
}
