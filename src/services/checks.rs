//! 结构检查 - 业务能力层
//!
//! 每个检查只读取文档，互不依赖，返回 `Err(Violation)` 表示失败。

use phf::phf_set;
use regex::Regex;
use tracing::debug;

use crate::error::ValidatorError;
use crate::infrastructure::{Element, SubmissionDocument};
use crate::models::check::{CheckId, TagPosition, Violation};

/// body 中允许的标签
pub static ALLOWED_TAGS: phf::Set<&'static str> = phf_set! {
    "h1",
    "p",
};

/// 原始文本中必须出现的 DOCTYPE（小写比较）
pub const DOCTYPE_MARKER: &str = "<!doctype html>";

/// 以未闭合标签结尾的粗略判断
const UNCLOSED_TAIL_PATTERN: &str = r"<[^>]+$";

/// 报告中保留的未闭合片段长度
const FRAGMENT_PREVIEW_LEN: usize = 40;

pub type CheckOutcome = Result<(), Violation>;

/// 执行一个结构检查
pub fn run_check(id: CheckId, doc: &SubmissionDocument) -> CheckOutcome {
    let outcome = match id {
        CheckId::ValidParse => check_valid_parse(doc),
        CheckId::BasicStructure => check_basic_structure(doc),
        CheckId::Doctype => check_doctype(doc),
        CheckId::BodyChildren => check_body_children(doc),
        CheckId::RequiredTags => check_required_tags(doc),
        CheckId::NoExtraTags => check_no_extra_tags(doc),
        CheckId::WellFormed => check_well_formed(doc),
        CheckId::NonEmptyContent => check_non_empty_content(doc),
        CheckId::SingleFile | CheckId::ReadFile => Err(Violation::Internal {
            error: format!("{} 不是结构检查", id),
        }),
    };
    debug!("检查 {} -> {}", id, if outcome.is_ok() { "通过" } else { "失败" });
    outcome
}

fn is_allowed(el: &Element<'_>) -> bool {
    ALLOWED_TAGS.contains(el.tag_name())
}

fn require_body<'a>(doc: &'a SubmissionDocument) -> Result<Element<'a>, Violation> {
    doc.body().ok_or_else(|| Violation::MissingStructure {
        missing: vec!["body".to_string()],
    })
}

/// 2. 没有解析错误
pub fn check_valid_parse(doc: &SubmissionDocument) -> CheckOutcome {
    if doc.has_parser_error()? {
        let errors = doc.parse_errors();
        return Err(Violation::ParserError {
            count: errors.len().max(1),
            first: errors.first().cloned(),
        });
    }
    Ok(())
}

/// 3. html、head、body 都存在
pub fn check_basic_structure(doc: &SubmissionDocument) -> CheckOutcome {
    let mut missing = Vec::new();
    if doc.root_element().is_none() {
        missing.push("html".to_string());
    }
    if doc.head().is_none() {
        missing.push("head".to_string());
    }
    if doc.body().is_none() {
        missing.push("body".to_string());
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Violation::MissingStructure { missing })
    }
}

/// 4. 原始文本包含 `<!doctype html>`
pub fn check_doctype(doc: &SubmissionDocument) -> CheckOutcome {
    if doc.source().to_lowercase().contains(DOCTYPE_MARKER) {
        Ok(())
    } else {
        Err(Violation::MissingDoctype)
    }
}

/// 5. body 的直接子元素只能是 h1 或 p，报告所有违规位置
pub fn check_body_children(doc: &SubmissionDocument) -> CheckOutcome {
    let body = require_body(doc)?;

    let offenders: Vec<TagPosition> = body
        .children()
        .iter()
        .enumerate()
        .filter(|(_, child)| !is_allowed(child))
        .map(|(i, child)| TagPosition::new(i + 1, child.tag_name()))
        .collect();

    if offenders.is_empty() {
        Ok(())
    } else {
        Err(Violation::DisallowedChildren { offenders })
    }
}

/// 6. 文档中至少有一个 h1 和一个 p
pub fn check_required_tags(doc: &SubmissionDocument) -> CheckOutcome {
    let mut tags = Vec::new();
    for tag in ["h1", "p"] {
        if doc.select_first(tag)?.is_none() {
            tags.push(tag.to_string());
        }
    }

    if tags.is_empty() {
        Ok(())
    } else {
        Err(Violation::MissingTags { tags })
    }
}

/// 7. body 中的元素要么是 h1/p，要么直接位于 h1/p 之内
///
/// 遇到第一个违规元素即结束。
pub fn check_no_extra_tags(doc: &SubmissionDocument) -> CheckOutcome {
    let body = require_body(doc)?;

    for el in body.select_all("*")? {
        let inside_allowed = el.parent().map(|p| is_allowed(&p)).unwrap_or(false);
        if !is_allowed(&el) && !inside_allowed {
            return Err(Violation::DisallowedDescendant {
                tag: el.tag_name().to_string(),
            });
        }
    }
    Ok(())
}

/// 8. 序列化后的 body 不以未闭合的标签结尾
pub fn check_well_formed(doc: &SubmissionDocument) -> CheckOutcome {
    let body = require_body(doc)?;
    let serialized = body.inner_html();

    let re = Regex::new(UNCLOSED_TAIL_PATTERN).map_err(ValidatorError::from)?;
    match re.find(&serialized) {
        Some(m) => Err(Violation::UnclosedTag {
            fragment: preview_fragment(m.as_str()),
        }),
        None => Ok(()),
    }
}

/// 报告用的片段预览：空白折叠成单个空格，超长部分截断
///
/// 文本报告每条消息只占一行，片段里的换行不能原样输出。
fn preview_fragment(fragment: &str) -> String {
    let collapsed = fragment.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() > FRAGMENT_PREVIEW_LEN {
        collapsed.chars().take(FRAGMENT_PREVIEW_LEN).collect::<String>() + "..."
    } else {
        collapsed
    }
}

/// 9. 每个 h1 和 p 去掉首尾空白后都不为空
///
/// 位置按标签种类分别从 1 计数，先列 h1 再列 p。
pub fn check_non_empty_content(doc: &SubmissionDocument) -> CheckOutcome {
    let mut offenders = Vec::new();
    for tag in ["h1", "p"] {
        for (i, el) in doc.select_all(tag)?.iter().enumerate() {
            if el.text_content().trim().is_empty() {
                offenders.push(TagPosition::new(i + 1, tag));
            }
        }
    }

    if offenders.is_empty() {
        Ok(())
    } else {
        Err(Violation::EmptyTags { offenders })
    }
}
