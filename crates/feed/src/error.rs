use thiserror::Error;

use interface::ProviderError;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("missing {0} env var")]
    MissingCredential(&'static str),
    #[error("quotes fetch returned no usable coins, cannot produce a snapshot")]
    NoQuotes,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("provider error: {0}")]
    Client(#[from] ProviderError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl FeedError {
    /// 프로세스 종료 코드
    /// 1: 인증키 없음, 2: 시세 전부 실패, 3: 그 외
    pub fn exit_code(&self) -> u8 {
        match self {
            FeedError::MissingCredential(_) => 1,
            FeedError::NoQuotes => 2,
            _ => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let missing = FeedError::MissingCredential("CMC_API_KEY");
        let no_quotes = FeedError::NoQuotes;
        let other = FeedError::InvalidConfig("bad timezone".to_string());

        assert_eq!(missing.exit_code(), 1);
        assert_eq!(no_quotes.exit_code(), 2);
        assert_eq!(other.exit_code(), 3);
        assert_eq!(missing.to_string(), "missing CMC_API_KEY env var");
    }
}
