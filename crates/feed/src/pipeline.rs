use std::sync::Arc;

use tracing::info;

use crate::{
    category::CategoryResolver, config::FeedConfig, quotes::QuoteFetcher,
    sector::SectorAggregator, snapshot::SnapshotAssembler, FeedError,
};
use interface::Snapshot;
use providers::{CategorySource, QuoteSource};

/// 카테고리 → 시세 → 섹터 → 스냅샷 순서로 한 번 실행
/// 사용 가능한 코인이 하나도 없을 때만 중단
pub async fn run(
    config: &FeedConfig,
    categories: Arc<dyn CategorySource>,
    quotes: Arc<dyn QuoteSource>,
) -> Result<Snapshot, FeedError> {
    info!(
        "privacy feed run: {} symbols, reference={}",
        config.symbols.len(),
        config.include_reference
    );

    let resolver = CategoryResolver::new(categories.clone(), config.category_limit);
    let category_id = resolver.resolve().await;

    let fetcher = QuoteFetcher::new(quotes, config.symbols.clone(), config.include_reference);
    let coins = fetcher.fetch().await;
    if coins.is_empty() {
        return Err(FeedError::NoQuotes);
    }

    let aggregator = SectorAggregator::new(categories, config.sector_name.clone());
    let sector = aggregator.aggregate(category_id.as_deref(), &coins).await;

    let snapshot = SnapshotAssembler::new(config.timezone).assemble(sector, coins);

    info!(
        "snapshot ready: {} coins, sector market_cap={} ({:?})",
        snapshot.coins.len(),
        snapshot.sector.market_cap,
        snapshot.sector.source
    );
    Ok(snapshot)
}
