use thiserror::Error;

/// 校验器自身的错误类型
///
/// 提交内容的问题不走这里，而是转换成失败的检查项；
/// 只有配置、模板、选择器这类"校验器无法继续"的情况才是错误。
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    /// 消息模板错误
    #[error("消息模板错误: {0}")]
    Messages(#[from] MessagesError),

    /// 读取提交文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// CSS 选择器无法编译
    #[error("无效的选择器 '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// 正则表达式无法编译
    #[error("正则表达式错误: {0}")]
    Regex(#[from] regex::Error),

    /// 报告序列化失败
    #[error("报告序列化失败: {0}")]
    Report(#[from] serde_json::Error),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量的值不在允许范围内
    #[error("环境变量 {var_name} 的值 '{value}' 无效，可选值: {expected}")]
    InvalidValue {
        var_name: String,
        value: String,
        expected: String,
    },

    /// 无法确定当前工作目录
    #[error("无法获取当前工作目录: {0}")]
    WorkingDirectory(#[source] std::io::Error),
}

/// 消息模板错误
#[derive(Debug, Error)]
pub enum MessagesError {
    /// 没有该语言的内置模板
    #[error("未知的内置模板语言: {0}")]
    UnknownLocale(String),

    /// 模板文件读取失败
    #[error("无法读取模板文件 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 模板 TOML 解析失败
    #[error("无法解析模板 ({origin}): {source}")]
    TomlParseFailed {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl ValidatorError {
    /// 创建文件读取错误
    pub fn read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        ValidatorError::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// 创建选择器错误
    pub fn invalid_selector(selector: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidatorError::InvalidSelector {
            selector: selector.into(),
            reason: reason.into(),
        }
    }
}

impl ConfigError {
    pub fn invalid_value(
        var_name: impl Into<String>,
        value: impl Into<String>,
        expected: &[&str],
    ) -> Self {
        ConfigError::InvalidValue {
            var_name: var_name.into(),
            value: value.into(),
            expected: expected.join(", "),
        }
    }
}

// ========== Result 类型别名 ==========

/// 校验器结果类型
pub type Result<T> = std::result::Result<T, ValidatorError>;
