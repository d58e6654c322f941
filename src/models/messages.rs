//! 消息模板
//!
//! 标题和失败消息都来自可替换的模板集合，占位符写作 `{name}`。

use serde::Deserialize;

use crate::models::check::{CheckId, TagPosition, Violation};

/// 每个检查项的标题，键与 `CheckId::slug` 一致
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Titles {
    pub single_file: String,
    pub read_file: String,
    pub valid_parse: String,
    pub basic_structure: String,
    pub doctype: String,
    pub body_children: String,
    pub required_tags: String,
    pub no_extra_tags: String,
    pub well_formed: String,
    pub non_empty_content: String,
}

/// 失败消息模板
#[derive(Debug, Clone, Deserialize)]
pub struct Templates {
    pub file_count: String,
    pub no_files: String,
    pub read_failed: String,
    pub parser_error: String,
    pub missing_structure: String,
    pub missing_doctype: String,
    pub disallowed_child: String,
    pub missing_tag: String,
    pub disallowed_descendant: String,
    pub unclosed_tag: String,
    pub empty_tag: String,
    pub internal: String,
    pub summary: String,
}

/// 模板集合
#[derive(Debug, Clone, Deserialize)]
pub struct Messages {
    pub titles: Titles,
    pub templates: Templates,
}

impl Messages {
    /// 检查项标题
    pub fn title(&self, id: CheckId) -> &str {
        let t = &self.titles;
        match id {
            CheckId::SingleFile => &t.single_file,
            CheckId::ReadFile => &t.read_file,
            CheckId::ValidParse => &t.valid_parse,
            CheckId::BasicStructure => &t.basic_structure,
            CheckId::Doctype => &t.doctype,
            CheckId::BodyChildren => &t.body_children,
            CheckId::RequiredTags => &t.required_tags,
            CheckId::NoExtraTags => &t.no_extra_tags,
            CheckId::WellFormed => &t.well_formed,
            CheckId::NonEmptyContent => &t.non_empty_content,
        }
    }

    /// 把失败原因渲染成消息，多个违规用空格连接
    pub fn describe(&self, violation: &Violation) -> String {
        let t = &self.templates;
        match violation {
            Violation::FileCount { expected, found } => {
                let files = if found.is_empty() {
                    t.no_files.clone()
                } else {
                    found.join(", ")
                };
                fill(
                    &t.file_count,
                    &[
                        ("expected", expected.to_string()),
                        ("count", found.len().to_string()),
                        ("files", files),
                    ],
                )
            }
            Violation::ReadFailed { file, error } => fill(
                &t.read_failed,
                &[("file", file.clone()), ("error", error.clone())],
            ),
            Violation::ParserError { count, first } => fill(
                &t.parser_error,
                &[
                    ("count", count.to_string()),
                    ("error", first.clone().unwrap_or_else(|| "parsererror".to_string())),
                ],
            ),
            Violation::MissingStructure { missing } => {
                let tags = missing.iter().map(|m| format!("<{}>", m)).collect::<Vec<_>>();
                fill(&t.missing_structure, &[("tags", tags.join(", "))])
            }
            Violation::MissingDoctype => t.missing_doctype.clone(),
            Violation::DisallowedChildren { offenders } => {
                join_positions(&t.disallowed_child, offenders)
            }
            Violation::MissingTags { tags } => tags
                .iter()
                .map(|tag| fill(&t.missing_tag, &[("tag", tag.clone())]))
                .collect::<Vec<_>>()
                .join(" "),
            Violation::DisallowedDescendant { tag } => {
                fill(&t.disallowed_descendant, &[("tag", tag.clone())])
            }
            Violation::UnclosedTag { fragment } => {
                fill(&t.unclosed_tag, &[("tag", fragment.clone())])
            }
            Violation::EmptyTags { offenders } => join_positions(&t.empty_tag, offenders),
            Violation::Internal { error } => fill(&t.internal, &[("error", error.clone())]),
        }
    }

    /// 汇总行
    pub fn summary(&self, passed: usize, failed: usize, skipped: usize) -> String {
        fill(
            &self.templates.summary,
            &[
                ("passed", passed.to_string()),
                ("failed", failed.to_string()),
                ("skipped", skipped.to_string()),
            ],
        )
    }
}

fn join_positions(template: &str, offenders: &[TagPosition]) -> String {
    offenders
        .iter()
        .map(|o| {
            fill(
                template,
                &[("index", o.index.to_string()), ("tag", o.tag.clone())],
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 替换模板中的 `{name}` 占位符，未知占位符保持原样
fn fill(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let replacement = tail.find('}').and_then(|end| {
            values
                .iter()
                .find(|(key, _)| *key == &tail[1..end])
                .map(|(_, value)| (end, value))
        });
        match replacement {
            Some((end, value)) => {
                out.push_str(value);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
