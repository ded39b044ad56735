use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::info;
use uuid::Uuid;

use crate::FeedError;
use interface::Snapshot;

/// 스냅샷을 JSON 파일로 저장
/// 같은 폴더의 임시 파일에 쓴 뒤 rename해서, 실패해도 기존 파일이 깨지지 않음
pub fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), FeedError> {
    let content = serde_json::to_string_pretty(snapshot)?;

    let tmp = temp_path(path);
    replace_via(&tmp, path, content.as_bytes())?;

    info!(
        "snapshot written to {} ({} coins, sector source {:?})",
        path.display(),
        snapshot.coins.len(),
        snapshot.sector.source
    );
    Ok(())
}

/// tmp에 쓰고 target으로 rename, 어느 단계에서 실패하든 tmp는 지움
fn replace_via(tmp: &Path, target: &Path, content: &[u8]) -> io::Result<()> {
    let result = fs::write(tmp, content).and_then(|_| fs::rename(tmp, target));
    if result.is_err() {
        let _ = fs::remove_file(tmp);
    }
    result
}

fn temp_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "snapshot".to_string());
    let tmp_name = format!(".{}.{}.tmp", file_name, Uuid::new_v4().simple());

    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(tmp_name),
        _ => PathBuf::from(tmp_name),
    }
}
