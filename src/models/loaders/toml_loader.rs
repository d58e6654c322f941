use crate::config::Config;
use crate::error::{MessagesError, Result};
use crate::models::messages::Messages;
use phf::phf_map;
use std::path::Path;

/// 内置模板，按语言代码查找
static BUILTIN: phf::Map<&'static str, &'static str> = phf_map! {
    "pt" => include_str!("../../../messages/pt.toml"),
    "en" => include_str!("../../../messages/en.toml"),
};

/// 从 TOML 文本解析模板集合
fn parse_messages(content: &str, origin: &str) -> Result<Messages> {
    let messages = toml::from_str(content).map_err(|source| MessagesError::TomlParseFailed {
        origin: origin.to_string(),
        source,
    })?;
    Ok(messages)
}

/// 加载内置模板
pub fn builtin_messages(locale: &str) -> Result<Messages> {
    let content = BUILTIN
        .get(locale)
        .ok_or_else(|| MessagesError::UnknownLocale(locale.to_string()))?;
    parse_messages(content, &format!("builtin:{}", locale))
}

/// 从文件加载模板
pub fn load_messages_file(path: &Path) -> Result<Messages> {
    let content = std::fs::read_to_string(path).map_err(|source| MessagesError::ReadFailed {
        path: path.display().to_string(),
        source,
    })?;

    tracing::info!("使用自定义消息模板: {}", path.display());
    parse_messages(&content, &path.display().to_string())
}

/// 按配置加载模板：设置了模板文件时使用文件，否则使用内置语言
pub fn load_messages(config: &Config) -> Result<Messages> {
    match &config.message_file {
        Some(file) => load_messages_file(Path::new(file)),
        None => builtin_messages(&config.message_locale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidatorError;
    use crate::models::check::CheckId;

    #[test]
    fn test_all_builtin_locales_parse() {
        for locale in BUILTIN.keys() {
            let messages = builtin_messages(locale).unwrap();
            assert!(!messages.templates.no_files.is_empty());
        }
        assert_eq!(builtin_messages("en").unwrap().templates.no_files, "none");
    }

    #[test]
    fn test_unknown_locale_is_rejected() {
        let err = builtin_messages("zz").unwrap_err();
        assert!(matches!(
            err,
            ValidatorError::Messages(MessagesError::UnknownLocale(ref l)) if l == "zz"
        ));
    }

    #[test]
    fn test_message_file_replaces_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let content = BUILTIN
            .get("en")
            .unwrap()
            .replace("must contain DOCTYPE html", "needs a doctype");
        std::fs::write(&path, content).unwrap();

        let config = Config {
            message_file: Some(path.to_string_lossy().to_string()),
            ..Config::default()
        };
        let messages = load_messages(&config).unwrap();
        assert_eq!(messages.title(CheckId::Doctype), "needs a doctype");
    }

    #[test]
    fn test_incomplete_message_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[titles]\ndoctype = \"x\"\n").unwrap();

        let err = load_messages_file(&path).unwrap_err();
        assert!(matches!(
            err,
            ValidatorError::Messages(MessagesError::TomlParseFailed { .. })
        ));
    }

    #[test]
    fn test_missing_message_file_fails() {
        let err = load_messages_file(Path::new("/nonexistent/messages.toml")).unwrap_err();
        assert!(matches!(
            err,
            ValidatorError::Messages(MessagesError::ReadFailed { .. })
        ));
    }
}
