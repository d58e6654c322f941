use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// 报告输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    /// 逐项列出的文本
    Text,
    /// 完整报告的 JSON
    Json,
}

impl ReportFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 提交目录（相对于当前工作目录）
    pub submission_dir: String,
    /// 内置消息模板语言
    pub message_locale: String,
    /// 自定义消息模板文件，设置后替代内置模板
    pub message_file: Option<String>,
    /// 是否保留解析器报告的全部错误；默认只把 `parsererror` 元素当作解析失败
    pub strict_parse: bool,
    /// 报告格式
    pub report_format: ReportFormat,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            submission_dir: "resposta".to_string(),
            message_locale: "pt".to_string(),
            message_file: None,
            strict_parse: false,
            report_format: ReportFormat::Text,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从环境变量读取配置，无法解析的值回退到默认值
    ///
    /// `REPORT_FORMAT` 是例外：未知的格式直接报错，避免静默输出错误格式。
    pub fn from_env() -> Result<Self> {
        let default = Self::default();

        let report_format = match std::env::var("REPORT_FORMAT") {
            Ok(value) => ReportFormat::parse(&value).ok_or_else(|| {
                ConfigError::invalid_value("REPORT_FORMAT", value.clone(), &["text", "json"])
            })?,
            Err(_) => default.report_format,
        };

        Ok(Self {
            submission_dir: std::env::var("SUBMISSION_DIR").unwrap_or(default.submission_dir),
            message_locale: std::env::var("MESSAGE_LOCALE").unwrap_or(default.message_locale),
            message_file: std::env::var("MESSAGE_FILE").ok().filter(|v| !v.is_empty()),
            strict_parse: std::env::var("STRICT_PARSE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.strict_parse),
            report_format,
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        })
    }

    /// 解析提交目录的绝对路径，只在启动时调用一次
    pub fn resolve_submission_dir(&self) -> Result<PathBuf> {
        let cwd = std::env::current_dir().map_err(ConfigError::WorkingDirectory)?;
        Ok(cwd.join(&self.submission_dir))
    }
}
