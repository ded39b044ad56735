use std::time::Duration;

use reqwest::header::ACCEPT;
use serde::{de::DeserializeOwned, Deserialize};
use tracing::debug;

use interface::ProviderError;

mod category;
mod quotes;

pub const DEFAULT_BASE_URL: &str = "https://pro-api.coinmarketcap.com";
pub const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

/// 에러 응답 본문은 로그용으로 앞부분만 보관
const ERROR_BODY_LIMIT: usize = 500;

#[derive(Debug, Deserialize)]
struct CmcResponse<T> {
    #[serde(default)]
    status: Option<CmcStatus>,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct CmcStatus {
    #[serde(default)]
    error_code: i64,
    #[serde(default)]
    error_message: Option<String>,
}

/// CoinMarketCap Pro API 클라이언트
#[derive(Clone)]
pub struct CoinMarketCapClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_key: String,
}

impl CoinMarketCapClient {
    /// timeout: 요청 하나당 제한 시간
    pub fn new(
        api_key: impl Into<String>,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .header(ACCEPT, "application/json")
            .query(query)
            .send()
            .await?;

        // text()는 바디를 소비하므로 status 먼저
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: body.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        decode_envelope(&body)
    }
}

/// `{"status": {...}, "data": ...}` 형식 응답에서 data 추출
/// HTTP 200이어도 error_code가 0이 아니면 실패로 처리
pub(crate) fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ProviderError> {
    let response: CmcResponse<T> = serde_json::from_str(body)?;

    if let Some(status) = &response.status {
        if status.error_code != 0 {
            return Err(ProviderError::Api {
                code: status.error_code,
                message: status.error_message.clone().unwrap_or_default(),
            });
        }
    }

    response
        .data
        .ok_or_else(|| ProviderError::Other("response has no data".to_string()))
}
