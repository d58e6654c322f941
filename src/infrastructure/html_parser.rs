//! HTML 解析适配器
//!
//! 解析永远不会失败：错误被记录在文档上，由检查项去查询。

use scraper::Html;
use tracing::debug;

use crate::infrastructure::document::SubmissionDocument;

/// 解析能力
pub trait DocumentParser {
    /// 把原始文本解析成文档
    fn parse(&self, file_name: &str, source: String) -> SubmissionDocument;

    /// 用于日志的名称
    fn name(&self) -> &'static str;
}

/// html5ever 解析器，保留所有解析错误
#[derive(Debug, Default, Clone, Copy)]
pub struct StrictParser;

impl DocumentParser for StrictParser {
    fn parse(&self, file_name: &str, source: String) -> SubmissionDocument {
        let tree = Html::parse_document(&source);
        let errors: Vec<String> = tree.errors.iter().map(|e| e.to_string()).collect();
        debug!("解析 {} 完成，记录到 {} 个解析错误", file_name, errors.len());
        SubmissionDocument::new(file_name, source, tree, errors)
    }

    fn name(&self) -> &'static str {
        "strict"
    }
}

/// 浏览器式的宽松解析：丢弃解析器错误，只有 `<parsererror>` 元素会被视为错误
#[derive(Debug, Default, Clone, Copy)]
pub struct LenientParser;

impl DocumentParser for LenientParser {
    fn parse(&self, file_name: &str, source: String) -> SubmissionDocument {
        let tree = Html::parse_document(&source);
        if !tree.errors.is_empty() {
            debug!("宽松模式，忽略 {} 的 {} 个解析错误", file_name, tree.errors.len());
        }
        SubmissionDocument::new(file_name, source, tree, Vec::new())
    }

    fn name(&self) -> &'static str {
        "lenient"
    }
}

/// 按配置选择解析器
pub fn parser_for(strict: bool) -> Box<dyn DocumentParser> {
    if strict {
        Box::new(StrictParser)
    } else {
        Box::new(LenientParser)
    }
}
