use std::process::ExitCode;

use color_eyre::eyre;
use structopt::StructOpt;
use tracing::error;

use feed::{logger, Options};

#[tokio::main]
async fn main() -> eyre::Result<ExitCode> {
    // init error reporting
    color_eyre::install()?;

    // .env가 있으면 CMC_API_KEY를 먼저 로드
    dotenv::dotenv().ok();

    let options = Options::from_args();

    // init logging
    let _guards = match logger::init_tracing(options.log_dir.as_deref()) {
        Ok(guards) => guards,
        Err(e) => {
            eprintln!("failed to open log file: {}", e);
            return Ok(ExitCode::from(3));
        }
    };

    match feed::run_from_options(options).await {
        Ok(path) => {
            println!("ok: wrote {}", path.display());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("{}", e);
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}
