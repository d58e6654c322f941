//! 准入阶段
//!
//! 扫描目录、检查文件数量、读取并解析文件。
//! 任何一步失败都会终止本次运行的结构检查。

use std::path::Path;
use tracing::{info, warn};

use crate::infrastructure::{DocumentParser, SubmissionDocument};
use crate::models::check::Violation;
use crate::services::{load_document, scan_candidates};

/// 期望的候选文件数量
pub const EXPECTED_FILE_COUNT: usize = 1;

/// 终止原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// 候选文件数量不是 1
    FileCount { found: Vec<String> },
    /// 唯一的候选文件无法读取
    Unreadable { file: String, error: String },
}

impl AbortReason {
    /// 对应的失败原因
    pub fn violation(&self) -> Violation {
        match self {
            AbortReason::FileCount { found } => Violation::FileCount {
                expected: EXPECTED_FILE_COUNT,
                found: found.clone(),
            },
            AbortReason::Unreadable { file, error } => Violation::ReadFailed {
                file: file.clone(),
                error: error.clone(),
            },
        }
    }
}

/// 准入结果
pub enum GateOutcome {
    /// 可以继续执行结构检查
    Proceed(SubmissionDocument),
    /// 终止
    Abort(AbortReason),
}

/// 数量检查：恰好一个候选文件时返回它
pub fn single_candidate(candidates: &[String]) -> Result<&str, AbortReason> {
    match candidates {
        [only] => Ok(only.as_str()),
        _ => Err(AbortReason::FileCount {
            found: candidates.to_vec(),
        }),
    }
}

/// 执行准入阶段
pub fn admit(dir: &Path, parser: &dyn DocumentParser) -> GateOutcome {
    let candidates = scan_candidates(dir);
    info!("📁 在 {} 中找到 {} 个 .html 文件", dir.display(), candidates.len());

    let file = match single_candidate(&candidates) {
        Ok(file) => file,
        Err(reason) => {
            warn!("⚠️ 候选文件数量不是 {}: {:?}", EXPECTED_FILE_COUNT, candidates);
            return GateOutcome::Abort(reason);
        }
    };

    match load_document(dir, file, parser) {
        Ok(doc) => {
            info!("✓ 已加载 {}（{} 解析）", file, parser.name());
            GateOutcome::Proceed(doc)
        }
        Err(e) => {
            warn!("❌ 读取 {} 失败: {}", file, e);
            GateOutcome::Abort(AbortReason::Unreadable {
                file: file.to_string(),
                error: e.to_string(),
            })
        }
    }
}
