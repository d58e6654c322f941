//! 校验流程 - 流程层
//!
//! 两个阶段：
//! 1. 准入（数量检查 + 读取 + 解析），失败则终止
//! 2. 结构检查，全部执行，互不影响

use std::path::Path;
use tracing::{debug, info};

use crate::infrastructure::{DocumentParser, SubmissionDocument};
use crate::models::check::{CheckId, CheckResult, Violation};
use crate::models::{Messages, ValidationReport};
use crate::services::run_check;
use crate::workflow::gate::{admit, AbortReason, GateOutcome};

/// 校验流程
///
/// - 持有消息模板和解析器
/// - 不持有任何运行状态，同一目录重复运行结果相同
pub struct ValidationFlow {
    messages: Messages,
    parser: Box<dyn DocumentParser>,
}

impl ValidationFlow {
    pub fn new(messages: Messages, parser: Box<dyn DocumentParser>) -> Self {
        Self { messages, parser }
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// 对提交目录执行完整校验
    pub fn run(&self, dir: &Path) -> ValidationReport {
        let directory = dir.display().to_string();

        let doc = match admit(dir, self.parser.as_ref()) {
            GateOutcome::Proceed(doc) => doc,
            GateOutcome::Abort(reason) => return self.aborted(directory, reason),
        };

        let mut results = vec![self.pass(CheckId::SingleFile)];
        results.extend(self.run_battery(&doc));

        ValidationReport {
            directory,
            file: Some(doc.file_name().to_string()),
            results,
            skipped: Vec::new(),
        }
    }

    /// 执行全部结构检查
    pub fn run_battery(&self, doc: &SubmissionDocument) -> Vec<CheckResult> {
        info!("🔍 开始检查 {}", doc.file_name());
        CheckId::BATTERY
            .iter()
            .map(|&id| match run_check(id, doc) {
                Ok(()) => self.pass(id),
                Err(violation) => self.fail(id, violation),
            })
            .collect()
    }

    fn aborted(&self, directory: String, reason: AbortReason) -> ValidationReport {
        let mut results = Vec::new();
        let file = match &reason {
            AbortReason::FileCount { .. } => None,
            AbortReason::Unreadable { file, .. } => {
                // 数量检查本身已经通过
                results.push(self.pass(CheckId::SingleFile));
                Some(file.clone())
            }
        };

        let gate = match reason {
            AbortReason::FileCount { .. } => CheckId::SingleFile,
            AbortReason::Unreadable { .. } => CheckId::ReadFile,
        };
        results.push(self.fail(gate, reason.violation()));
        debug!("准入失败，跳过 {} 项结构检查", CheckId::BATTERY.len());

        ValidationReport {
            directory,
            file,
            results,
            skipped: CheckId::BATTERY.to_vec(),
        }
    }

    fn pass(&self, id: CheckId) -> CheckResult {
        CheckResult::pass(id, self.messages.title(id))
    }

    fn fail(&self, id: CheckId, violation: Violation) -> CheckResult {
        let message = self.messages.describe(&violation);
        CheckResult::fail(id, self.messages.title(id), message, violation)
    }
}
