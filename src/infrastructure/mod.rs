//! 基础设施层
//!
//! 持有解析器和解析树，只向上暴露能力

pub mod document;
pub mod html_parser;

pub use document::{Element, SubmissionDocument, PARSER_ERROR_TAG};
pub use html_parser::{parser_for, DocumentParser, LenientParser, StrictParser};
