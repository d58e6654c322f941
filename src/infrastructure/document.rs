//! 已解析的提交文档 - 基础设施层
//!
//! 把解析器的树包装成固定的节点接口：标签名、子元素、父元素、文本、内部标记和选择器查询。
//! 检查逻辑只依赖这里暴露的能力，不直接接触 `scraper`。

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ValidatorError};

/// 解析器用来表示解析失败的哨兵元素
pub const PARSER_ERROR_TAG: &str = "parsererror";

/// 提交文档
///
/// 同时持有原始文本（用于 DOCTYPE 这类文本检查）和解析树（用于结构检查）。
/// 创建后只读。
#[derive(Debug)]
pub struct SubmissionDocument {
    file_name: String,
    source: String,
    tree: Html,
    parse_errors: Vec<String>,
}

impl SubmissionDocument {
    pub fn new(
        file_name: impl Into<String>,
        source: String,
        tree: Html,
        parse_errors: Vec<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            source,
            tree,
            parse_errors,
        }
    }

    /// 文件名（不含目录）
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// 原始文本
    pub fn source(&self) -> &str {
        &self.source
    }

    /// 解析器记录的错误
    pub fn parse_errors(&self) -> &[String] {
        &self.parse_errors
    }

    /// 是否存在解析错误
    ///
    /// 解析器报告的错误，或者树中能查询到 `parsererror` 元素，都算。
    pub fn has_parser_error(&self) -> Result<bool> {
        if !self.parse_errors.is_empty() {
            return Ok(true);
        }
        Ok(self.select_first(PARSER_ERROR_TAG)?.is_some())
    }

    /// 根元素（`<html>`）
    pub fn root_element(&self) -> Option<Element<'_>> {
        self.tree
            .tree
            .root()
            .children()
            .find_map(ElementRef::wrap)
            .map(Element)
    }

    /// `<head>` 元素
    pub fn head(&self) -> Option<Element<'_>> {
        self.root_element()?.child_named("head")
    }

    /// `<body>` 元素
    pub fn body(&self) -> Option<Element<'_>> {
        self.root_element()?.child_named("body")
    }

    /// 整个文档中第一个匹配选择器的元素
    pub fn select_first(&self, css: &str) -> Result<Option<Element<'_>>> {
        let selector = compile(css)?;
        Ok(self.tree.select(&selector).next().map(Element))
    }

    /// 整个文档中所有匹配选择器的元素，按文档顺序
    pub fn select_all(&self, css: &str) -> Result<Vec<Element<'_>>> {
        let selector = compile(css)?;
        Ok(self.tree.select(&selector).map(Element).collect())
    }
}

/// 元素节点
#[derive(Clone, Copy, Debug)]
pub struct Element<'a>(ElementRef<'a>);

impl<'a> Element<'a> {
    /// 小写标签名
    pub fn tag_name(&self) -> &'a str {
        self.0.value().name()
    }

    /// 直接子元素，按文档顺序（不含文本节点）
    pub fn children(&self) -> Vec<Element<'a>> {
        self.0.children().filter_map(ElementRef::wrap).map(Element).collect()
    }

    /// 父元素；父节点不是元素时为 `None`
    pub fn parent(&self) -> Option<Element<'a>> {
        self.0.parent().and_then(ElementRef::wrap).map(Element)
    }

    /// 递归拼接的文本内容
    pub fn text_content(&self) -> String {
        self.0.text().collect()
    }

    /// 序列化后的内部标记
    pub fn inner_html(&self) -> String {
        self.0.inner_html()
    }

    /// 子树中所有匹配选择器的后代元素，不含自身
    pub fn select_all(&self, css: &str) -> Result<Vec<Element<'a>>> {
        let selector = compile(css)?;
        let own_id = self.0.id();
        Ok(self
            .0
            .select(&selector)
            .filter(|el| el.id() != own_id)
            .map(Element)
            .collect())
    }

    fn child_named(&self, name: &str) -> Option<Element<'a>> {
        self.children().into_iter().find(|c| c.tag_name() == name)
    }
}

fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ValidatorError::invalid_selector(css, format!("{:?}", e)))
}
