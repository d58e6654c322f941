//! 报告输出服务
//!
//! 只负责把报告渲染成文本或 JSON，不负责打印

use crate::config::ReportFormat;
use crate::error::Result;
use crate::models::{Messages, ValidationReport};

/// 按格式渲染报告
pub fn render(report: &ValidationReport, messages: &Messages, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(report, messages)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// 逐项列出的文本报告
pub fn render_text(report: &ValidationReport, messages: &Messages) -> String {
    let mut lines = Vec::new();

    match &report.file {
        Some(file) => lines.push(format!("{} ({})", report.directory, file)),
        None => lines.push(report.directory.clone()),
    }

    for result in &report.results {
        let mark = if result.passed { "✓" } else { "✗" };
        lines.push(format!("  {} {}{}", mark, number_prefix(result.id.number()), result.name));
        if !result.passed {
            lines.push(format!("      → {}", result.message));
        }
    }

    for id in &report.skipped {
        lines.push(format!("  - {}{}", number_prefix(id.number()), messages.title(*id)));
    }

    lines.push(String::new());
    lines.push(messages.summary(
        report.passed_count(),
        report.failed_count(),
        report.skipped.len(),
    ));

    lines.join("\n")
}

fn number_prefix(number: Option<u8>) -> String {
    number.map(|n| format!("[{}] ", n)).unwrap_or_default()
}
