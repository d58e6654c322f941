use std::process::ExitCode;

use anyhow::Result;
use html_submission_check::{logging, App, Config};

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<bool> {
    // 加载配置
    let config = Config::from_env()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let app = App::initialize(config)?;
    let report = app.run();
    println!("{}", app.render(&report)?);

    Ok(report.is_success())
}
