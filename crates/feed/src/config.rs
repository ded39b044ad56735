use std::{env, fmt, path::PathBuf, time::Duration};

use chrono_tz::Tz;
use structopt::StructOpt;

use crate::FeedError;
use providers::coinmarketcap::DEFAULT_BASE_URL;

pub const API_KEY_ENV: &str = "CMC_API_KEY";

/// 기본 추적 대상 (프라이버시 코인 12종)
pub const DEFAULT_SYMBOLS: [&str; 12] = [
    "XMR", "ZEC", "BDX", "DASH", "ZANO", "ROSE", "SCRT", "XVG", "PIVX", "FIRO", "ARRR", "BEAM",
];

pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Warsaw;
pub const DEFAULT_SECTOR_NAME: &str = "Privacy (CMC)";
pub const DEFAULT_OUTPUT: &str = "latest.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 45;
pub const DEFAULT_CATEGORY_LIMIT: u32 = 5000;

/// 지정하지 않은 옵션은 `DEFAULT_*` 값을 사용
#[derive(Debug, StructOpt)]
#[structopt(
    name = "privacy-feed",
    about = "프라이버시 코인 섹터 시세를 모아 JSON 스냅샷으로 저장"
)]
pub struct Options {
    /// 스냅샷 파일 경로 (기본 latest.json)
    #[structopt(long, parse(from_os_str))]
    pub output: Option<PathBuf>,

    /// 추적할 심볼 목록 (쉼표 구분, 비우면 기본 12종)
    #[structopt(long, use_delimiter = true)]
    pub symbols: Vec<String>,

    /// 타임스탬프 기준 시간대 (IANA 이름, 기본 Europe/Warsaw)
    #[structopt(long)]
    pub timezone: Option<String>,

    /// 요청당 제한 시간 (초, 기본 45)
    #[structopt(long)]
    pub timeout_secs: Option<u64>,

    /// 카테고리 목록 조회 개수 (기본 5000)
    #[structopt(long)]
    pub category_limit: Option<u32>,

    #[structopt(long)]
    pub base_url: Option<String>,

    /// BTC 기준 시세 생략
    #[structopt(long)]
    pub no_reference: bool,

    /// 지정 시 날짜별 로그 파일도 기록
    #[structopt(long, parse(from_os_str))]
    pub log_dir: Option<PathBuf>,
}

/// 한 번의 실행에 필요한 설정 전부
#[derive(Clone)]
pub struct FeedConfig {
    pub api_key: String,
    pub base_url: String,
    pub symbols: Vec<String>,
    pub include_reference: bool,
    pub timezone: Tz,
    pub timeout: Duration,
    pub category_limit: u32,
    pub output: PathBuf,
    pub sector_name: String,
}

impl FeedConfig {
    /// 기본값 설정
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            include_reference: true,
            timezone: DEFAULT_TIMEZONE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            category_limit: DEFAULT_CATEGORY_LIMIT,
            output: PathBuf::from(DEFAULT_OUTPUT),
            sector_name: DEFAULT_SECTOR_NAME.to_string(),
        }
    }

    pub fn with_symbols<S: AsRef<str>>(mut self, symbols: &[S]) -> Result<Self, FeedError> {
        self.symbols = normalize_symbols(symbols)?;
        Ok(self)
    }

    /// CLI 옵션과 인증키로 설정 생성
    /// 인증키 확인이 가장 먼저 (네트워크 호출 전에 중단)
    pub fn from_options(options: Options, api_key: Option<String>) -> Result<Self, FeedError> {
        let api_key = parse_api_key(api_key).ok_or(FeedError::MissingCredential(API_KEY_ENV))?;

        let mut config = Self::new(api_key);

        if let Some(name) = options.timezone {
            config.timezone = name.parse().map_err(|e| {
                FeedError::InvalidConfig(format!("unknown timezone {}: {}", name, e))
            })?;
        }

        if let Some(secs) = options.timeout_secs {
            if secs == 0 {
                return Err(FeedError::InvalidConfig(
                    "timeout must be at least 1 second".to_string(),
                ));
            }
            config.timeout = Duration::from_secs(secs);
        }

        if !options.symbols.is_empty() {
            config = config.with_symbols(&options.symbols)?;
        }
        if let Some(base_url) = options.base_url {
            config.base_url = base_url;
        }
        if let Some(limit) = options.category_limit {
            config.category_limit = limit;
        }
        if let Some(output) = options.output {
            config.output = output;
        }
        config.include_reference = !options.no_reference;

        Ok(config)
    }
}

// api_key는 로그에 남기지 않음
impl fmt::Debug for FeedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedConfig")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("symbols", &self.symbols)
            .field("include_reference", &self.include_reference)
            .field("timezone", &self.timezone)
            .field("timeout", &self.timeout)
            .field("category_limit", &self.category_limit)
            .field("output", &self.output)
            .field("sector_name", &self.sector_name)
            .finish()
    }
}

/// 환경변수에서 인증키 읽기
pub fn api_key_from_env() -> Option<String> {
    parse_api_key(env::var(API_KEY_ENV).ok())
}

/// 앞뒤 공백 제거, 빈 값은 없음으로 취급
pub fn parse_api_key(raw: Option<String>) -> Option<String> {
    raw.map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

/// 대문자로 맞추고 빈 값과 중복 제거 (순서 유지)
pub fn normalize_symbols<S: AsRef<str>>(symbols: &[S]) -> Result<Vec<String>, FeedError> {
    let mut out: Vec<String> = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        let symbol = symbol.as_ref().trim().to_uppercase();
        if symbol.is_empty() || out.contains(&symbol) {
            continue;
        }
        out.push(symbol);
    }

    if out.is_empty() {
        return Err(FeedError::InvalidConfig("symbol list is empty".to_string()));
    }
    Ok(out)
}
