use std::{fs, fs::OpenOptions, io, path::Path};

use chrono::Local;
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_PREFIX: &str = "privacy-feed";

/// 이 구조체가 drop되기 전까지 파일 로깅이 계속 작동합니다
pub struct TracingGuards {
    _file: Option<WorkerGuard>,
}

/// Tracing 초기화
/// 진단 로그는 stderr로, log_dir가 있으면 파일에도 기록합니다
pub fn init_tracing(log_dir: Option<&Path>) -> io::Result<TracingGuards> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, file_guard) = match log_dir {
        Some(dir) => {
            let (writer, guard) = daily_file_writer(dir, LOG_PREFIX)?;
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr))
        .with(file_layer)
        .init();

    Ok(TracingGuards { _file: file_guard })
}

/// `logs/privacy-feed.2025-11-29.log` 형식으로 파일을 엽니다
fn daily_file_writer(
    base_dir: &Path,
    prefix: &str,
) -> io::Result<(non_blocking::NonBlocking, WorkerGuard)> {
    fs::create_dir_all(base_dir)?;

    let date = Local::now().format("%Y-%m-%d").to_string();
    let path = base_dir.join(format!("{prefix}.{date}.log"));

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Ok(tracing_appender::non_blocking(file))
}
