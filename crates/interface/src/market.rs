use std::collections::HashMap;

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// 카테고리 목록의 한 항목
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryRecord {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// 카테고리 상세 (섹터 합계)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryDetail {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub volume_24h: Option<f64>,
}

/// quotes/latest 응답의 심볼별 항목
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuoteEntry {
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quote: HashMap<String, QuoteValues>,
}

impl QuoteEntry {
    /// 통화 코드로 시세 조회 (대소문자 무시)
    pub fn quote_in(&self, currency: &str) -> Option<&QuoteValues> {
        self.quote.get(currency).or_else(|| {
            self.quote
                .iter()
                .find(|(code, _)| code.eq_ignore_ascii_case(currency))
                .map(|(_, values)| values)
        })
    }
}

/// 특정 통화 기준 시세
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuoteValues {
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub volume_24h: Option<f64>,
    #[serde(default)]
    pub percent_change_24h: Option<f64>,
    #[serde(default)]
    pub percent_change_7d: Option<f64>,
}

// id가 문자열 또는 숫자로 내려옴
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(de::Error::custom(format!("unexpected id value: {other}"))),
    }
}
