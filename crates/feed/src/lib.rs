pub mod category;
pub mod config;
mod error;
pub mod logger;
pub mod output;
pub mod pipeline;
pub mod quotes;
pub mod sector;
pub mod snapshot;

#[cfg(test)]
pub(crate) mod testing;

use std::{path::PathBuf, sync::Arc};

pub use config::{FeedConfig, Options};
pub use error::FeedError;

use providers::CoinMarketCapClient;

/// CLI 옵션으로 한 번 실행하고 스냅샷 파일 경로를 돌려줌
/// 시세가 하나도 없으면 파일을 쓰지 않음
pub async fn run_from_options(options: Options) -> Result<PathBuf, FeedError> {
    let config = FeedConfig::from_options(options, config::api_key_from_env())?;

    let client = Arc::new(CoinMarketCapClient::new(
        config.api_key.clone(),
        &config.base_url,
        config.timeout,
    )?);

    let snapshot = pipeline::run(&config, client.clone(), client).await?;
    output::write_snapshot(&config.output, &snapshot)?;

    Ok(config.output)
}
