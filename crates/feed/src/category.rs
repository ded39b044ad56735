use std::sync::Arc;

use tracing::{info, warn};

use interface::CategoryRecord;
use providers::CategorySource;

const PRIVACY_KEYWORD: &str = "privacy";

/// 카테고리 목록에서 프라이버시 섹터 id를 찾음
pub struct CategoryResolver {
    source: Arc<dyn CategorySource>,
    limit: u32,
}

impl CategoryResolver {
    pub fn new(source: Arc<dyn CategorySource>, limit: u32) -> Self {
        Self { source, limit }
    }

    /// 목록 조회 실패도 "없음"으로 처리 (섹터는 fallback 합산으로 진행)
    pub async fn resolve(&self) -> Option<String> {
        let records = match self.source.fetch_categories(self.limit).await {
            Ok(records) => records,
            Err(e) => {
                warn!("category listing failed: {}", e);
                return None;
            }
        };

        let Some(record) = find_privacy_category(&records) else {
            warn!(
                "no privacy category among {} categories, sector totals will be summed",
                records.len()
            );
            return None;
        };

        match &record.id {
            Some(id) => {
                info!(
                    "privacy category found: {} (id={})",
                    record.name.as_deref().unwrap_or("-"),
                    id
                );
                Some(id.clone())
            }
            None => {
                warn!("privacy category has no id: {:?}", record);
                None
            }
        }
    }
}

/// name 또는 slug에 "privacy"가 들어간 첫 항목 (대소문자 무시)
pub fn find_privacy_category(records: &[CategoryRecord]) -> Option<&CategoryRecord> {
    records.iter().find(|record| {
        [record.name.as_deref(), record.slug.as_deref()]
            .into_iter()
            .flatten()
            .any(|text| text.to_lowercase().contains(PRIVACY_KEYWORD))
    })
}
