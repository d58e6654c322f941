use serde::Serialize;

/// 检查项编号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckId {
    /// 1. 恰好一个 .html 文件
    SingleFile,
    /// 读取文件（只在读取失败时出现）
    ReadFile,
    /// 2. 解析无错误
    ValidParse,
    /// 3. html/head/body 齐全
    BasicStructure,
    /// 4. DOCTYPE
    Doctype,
    /// 5. body 的直接子元素只能是 h1/p
    BodyChildren,
    /// 6. 至少一个 h1 和一个 p
    RequiredTags,
    /// 7. body 中没有其他标签
    NoExtraTags,
    /// 8. 标签闭合
    WellFormed,
    /// 9. h1/p 内容非空
    NonEmptyContent,
}

impl CheckId {
    /// 结构检查，按报告顺序
    pub const BATTERY: [CheckId; 8] = [
        CheckId::ValidParse,
        CheckId::BasicStructure,
        CheckId::Doctype,
        CheckId::BodyChildren,
        CheckId::RequiredTags,
        CheckId::NoExtraTags,
        CheckId::WellFormed,
        CheckId::NonEmptyContent,
    ];

    /// 稳定的标识符，也是模板文件中 `[titles]` 的键
    pub fn slug(self) -> &'static str {
        match self {
            CheckId::SingleFile => "single-file",
            CheckId::ReadFile => "read-file",
            CheckId::ValidParse => "valid-parse",
            CheckId::BasicStructure => "basic-structure",
            CheckId::Doctype => "doctype",
            CheckId::BodyChildren => "body-children",
            CheckId::RequiredTags => "required-tags",
            CheckId::NoExtraTags => "no-extra-tags",
            CheckId::WellFormed => "well-formed",
            CheckId::NonEmptyContent => "non-empty-content",
        }
    }

    /// 报告中的序号；读取文件不占序号
    pub fn number(self) -> Option<u8> {
        match self {
            CheckId::SingleFile => Some(1),
            CheckId::ReadFile => None,
            CheckId::ValidParse => Some(2),
            CheckId::BasicStructure => Some(3),
            CheckId::Doctype => Some(4),
            CheckId::BodyChildren => Some(5),
            CheckId::RequiredTags => Some(6),
            CheckId::NoExtraTags => Some(7),
            CheckId::WellFormed => Some(8),
            CheckId::NonEmptyContent => Some(9),
        }
    }
}

impl std::fmt::Display for CheckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// 带位置的标签（位置从 1 开始）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagPosition {
    pub index: usize,
    pub tag: String,
}

impl TagPosition {
    pub fn new(index: usize, tag: impl Into<String>) -> Self {
        Self {
            index,
            tag: tag.into(),
        }
    }
}

/// 检查失败的具体原因
///
/// 只保存信息字段，文字由模板渲染。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Violation {
    /// 候选文件数量不是 1
    FileCount { expected: usize, found: Vec<String> },
    /// 文件读取失败
    ReadFailed { file: String, error: String },
    /// 存在解析错误
    ParserError { count: usize, first: Option<String> },
    /// 缺少 html/head/body
    MissingStructure { missing: Vec<String> },
    /// 原始文本中没有 `<!doctype html>`
    MissingDoctype,
    /// body 的直接子元素不在白名单内
    DisallowedChildren { offenders: Vec<TagPosition> },
    /// 文档中缺少 h1 或 p
    MissingTags { tags: Vec<String> },
    /// body 中出现了不允许的后代元素
    DisallowedDescendant { tag: String },
    /// 序列化后的 body 以未闭合的标签结尾
    UnclosedTag { fragment: String },
    /// h1/p 内容为空
    EmptyTags { offenders: Vec<TagPosition> },
    /// 检查本身无法执行（选择器、正则）
    Internal { error: String },
}

impl From<crate::error::ValidatorError> for Violation {
    fn from(err: crate::error::ValidatorError) -> Self {
        Violation::Internal {
            error: err.to_string(),
        }
    }
}

/// 单个检查项的结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub id: CheckId,
    pub name: String,
    pub passed: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<Violation>,
}

impl CheckResult {
    pub fn pass(id: CheckId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            passed: true,
            message: String::new(),
            violation: None,
        }
    }

    pub fn fail(
        id: CheckId,
        name: impl Into<String>,
        message: impl Into<String>,
        violation: Violation,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            passed: false,
            message: message.into(),
            violation: Some(violation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_battery_numbers_follow_report_order() {
        let numbers: Vec<_> = CheckId::BATTERY.iter().filter_map(|c| c.number()).collect();
        assert_eq!(numbers, vec![2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(CheckId::ReadFile.number(), None);
    }

    #[test]
    fn test_violation_serializes_with_kind() {
        let violation = Violation::DisallowedDescendant {
            tag: "div".to_string(),
        };
        let json = serde_json::to_value(&violation).unwrap();

        assert_eq!(json["kind"], "disallowed-descendant");
        assert_eq!(json["tag"], "div");
    }

    #[test]
    fn test_check_id_serializes_as_slug() {
        for id in CheckId::BATTERY {
            let json = serde_json::to_value(id).unwrap();
            assert_eq!(json, id.slug());
        }
    }
}
