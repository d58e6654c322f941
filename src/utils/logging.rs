//! 日志工具模块
//!
//! 提供日志初始化和运行横幅

use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::models::ValidationReport;

/// 初始化日志
///
/// `RUST_LOG` 优先；否则默认 `info`，详细模式为 `debug`。
/// 日志写到 stderr，stdout 只留给报告。重复调用不会出错。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `submission_dir`: 提交目录
pub fn log_startup(submission_dir: &Path) {
    info!("{}", "=".repeat(60));
    info!("🚀 HTML 提交检查 - {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("📁 提交目录: {}", submission_dir.display());
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(report: &ValidationReport) {
    info!("{}", "─".repeat(60));
    info!("✅ 通过: {}/{}", report.passed_count(), report.results.len());
    info!("❌ 失败: {}", report.failed_count());
    if !report.skipped.is_empty() {
        warn!("⏭️ 未执行: {}", report.skipped.len());
    }
    info!("{}", "─".repeat(60));
}
