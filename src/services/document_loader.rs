//! 文档加载服务
//!
//! 读取候选文件的全部文本并交给解析器

use std::path::Path;
use tracing::debug;

use crate::error::{Result, ValidatorError};
use crate::infrastructure::{DocumentParser, SubmissionDocument};

/// 读取文件文本，非 UTF-8 字节替换为 U+FFFD
pub fn read_source(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).map_err(|e| ValidatorError::read_failed(path.display().to_string(), e))?;
    debug!("读取 {} 共 {} 字节", path.display(), bytes.len());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// 读取并解析提交文件
pub fn load_document(
    dir: &Path,
    file_name: &str,
    parser: &dyn DocumentParser,
) -> Result<SubmissionDocument> {
    let source = read_source(&dir.join(file_name))?;
    Ok(parser.parse(file_name, source))
}
