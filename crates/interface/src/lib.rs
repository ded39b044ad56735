mod error;
mod market;
mod snapshot;

pub use error::ProviderError;
pub use market::{CategoryDetail, CategoryRecord, QuoteEntry, QuoteValues};
pub use snapshot::{Coin, FallbackReason, Sector, SectorSource, Snapshot};

/// 기본 표시 통화
pub const PRIMARY_CURRENCY: &str = "USD";
/// 교차 환율 표시용 기준 통화
pub const REFERENCE_CURRENCY: &str = "BTC";
