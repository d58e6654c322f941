use serde::Serialize;

use crate::models::check::{CheckId, CheckResult};

/// 一次运行的完整结果
///
/// 不含时间戳：同一个目录跑两次得到相同的报告。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// 提交目录
    pub directory: String,
    /// 被检查的文件（通过数量检查时才有）
    pub file: Option<String>,
    /// 已执行的检查，按报告顺序
    pub results: Vec<CheckResult>,
    /// 因前置检查失败而未执行的检查
    pub skipped: Vec<CheckId>,
}

impl ValidationReport {
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn failed_count(&self) -> usize {
        self.results.len() - self.passed_count()
    }

    /// 全部执行且全部通过
    pub fn is_success(&self) -> bool {
        self.skipped.is_empty() && self.results.iter().all(|r| r.passed)
    }

    /// 查找某个检查项的结果
    pub fn result(&self, id: CheckId) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.id == id)
    }

    /// 失败的检查项
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| !r.passed)
    }
}
