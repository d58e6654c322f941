//! 目录扫描服务
//!
//! 只负责"列出候选文件"，不判断数量是否合法

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// 候选文件扩展名
pub const CANDIDATE_EXTENSION: &str = ".html";

/// 是否是候选文件名：以 `.html` 结尾且不是隐藏文件
pub fn is_candidate_name(name: &str) -> bool {
    name.ends_with(CANDIDATE_EXTENSION) && !name.starts_with('.')
}

/// 列出目录中的候选文件名，按文件名排序
///
/// 目录不存在或无法读取时返回空列表，由数量检查报告失败。
pub fn scan_candidates(dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("无法读取提交目录 {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("读取目录项失败 {}: {}", dir.display(), e);
                continue;
            }
        };

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                debug!("跳过非 UTF-8 文件名: {:?}", raw);
                continue;
            }
        };

        if !is_candidate_name(&name) {
            continue;
        }

        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            debug!("跳过目录: {}", name);
            continue;
        }

        debug!("找到候选文件: {}", name);
        candidates.push(name);
    }

    candidates.sort();
    candidates
}
