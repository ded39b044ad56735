use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use interface::{Coin, Sector, Snapshot};

/// 섹터와 코인 목록에 현재 시각을 붙여 스냅샷 생성
pub struct SnapshotAssembler {
    timezone: Tz,
}

impl SnapshotAssembler {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    pub fn assemble(&self, sector: Sector, coins: Vec<Coin>) -> Snapshot {
        self.assemble_at(Utc::now(), sector, coins)
    }

    pub fn assemble_at(&self, now: DateTime<Utc>, sector: Sector, coins: Vec<Coin>) -> Snapshot {
        Snapshot {
            timestamp: now.with_timezone(&self.timezone).fixed_offset(),
            sector,
            coins,
        }
    }
}
