use std::process::ExitCode;

use clap::Parser;
use rankine_cycle_toolbox::{app, cli::Cli, config};
use tracing::Level;

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 스윕을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match try_run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: &Cli) -> Result<(), app::AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    cli.apply(&mut cfg)?;
    let reheats = cli.reheat_configurations(&cfg);
    app::run(&cfg, &reheats)?;
    Ok(())
}
