//! 应用入口 - 编排层
//!
//! 负责：加载配置相关的资源（模板、解析器）、解析提交目录、运行流程、渲染报告。
//! 不做任何检查判断。

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use crate::config::Config;
use crate::infrastructure::parser_for;
use crate::models::{load_messages, ValidationReport};
use crate::services::reporter;
use crate::utils::logging::{log_startup, print_final_stats};
use crate::workflow::ValidationFlow;

/// 应用主结构
pub struct App {
    config: Config,
    submission_dir: PathBuf,
    flow: ValidationFlow,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        let submission_dir = config
            .resolve_submission_dir()
            .context("无法确定提交目录")?;

        log_startup(&submission_dir);

        let messages = load_messages(&config).context("无法加载消息模板")?;
        let parser = parser_for(config.strict_parse);
        info!("解析模式: {}", parser.name());

        Ok(Self {
            config,
            submission_dir,
            flow: ValidationFlow::new(messages, parser),
        })
    }

    /// 运行校验，返回报告
    pub fn run(&self) -> ValidationReport {
        let report = self.flow.run(&self.submission_dir);
        print_final_stats(&report);
        report
    }

    /// 按配置的格式渲染报告
    pub fn render(&self, report: &ValidationReport) -> Result<String> {
        reporter::render(report, self.flow.messages(), self.config.report_format)
            .context("无法渲染报告")
    }
}
