use thiserror::Error;

/// 데이터 제공자 호출 결과의 실패 사유
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("api error {code}: {message}")]
    Api { code: i64, message: String },
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("other error: {0}")]
    Other(String),
}
