use html_submission_check::infrastructure::parser_for;
use html_submission_check::models::{builtin_messages, load_messages};
use html_submission_check::{
    CheckId, Config, StrictParser, ValidationFlow, ValidationReport, Violation,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MINIMAL: &str =
    "<!doctype html><html><head></head><body><h1>T</h1><p>C</p></body></html>";

/// 创建只包含给定文件的提交目录
fn submission(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    for (name, content) in files {
        fs::write(dir.path().join(name), content).expect("写入文件失败");
    }
    dir
}

/// 按默认配置组装流程，与程序启动时一致
fn validate(dir: &Path) -> ValidationReport {
    let config = Config::default();
    let flow = ValidationFlow::new(
        load_messages(&config).unwrap(),
        parser_for(config.strict_parse),
    );
    flow.run(dir)
}

fn failed_ids(report: &ValidationReport) -> Vec<CheckId> {
    report.failures().map(|r| r.id).collect()
}

#[test]
fn test_minimal_document_passes_all_nine_checks() {
    let dir = submission(&[("index.html", MINIMAL)]);
    let report = validate(dir.path());

    assert_eq!(report.results.len(), 9);
    assert!(report.is_success(), "失败项: {:?}", failed_ids(&report));
    assert!(report.skipped.is_empty());
}

#[test]
fn test_realistic_submission_passes() {
    let html = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <title>Minha página</title>
</head>
<body>
    <h1>Olá, mundo</h1>
    <p>Este é o meu <strong>primeiro</strong> parágrafo.</p>
    <p>Segundo parágrafo com <a href="https://example.com">link</a>.</p>
</body>
</html>
"#;
    let dir = submission(&[("pagina.html", html), ("notas.txt", "ignorado")]);
    let report = validate(dir.path());

    assert!(report.is_success(), "失败项: {:?}", failed_ids(&report));
    assert_eq!(report.file.as_deref(), Some("pagina.html"));
}

#[test]
fn test_zero_files_fails_first_check_and_skips_the_rest() {
    let dir = submission(&[("readme.md", "x"), (".escondido.html", MINIMAL)]);
    let report = validate(dir.path());

    assert_eq!(report.results.len(), 1);
    let first = &report.results[0];
    assert_eq!(first.id, CheckId::SingleFile);
    assert!(!first.passed);
    assert!(first.message.contains("encontrados 0"));
    assert!(first.message.contains("nenhum"));
    assert_eq!(report.skipped, CheckId::BATTERY.to_vec());
}

#[test]
fn test_missing_directory_counts_as_zero_files() {
    let dir = tempfile::tempdir().unwrap();
    let report = validate(&dir.path().join("resposta"));

    assert_eq!(
        report.results[0].violation,
        Some(Violation::FileCount {
            expected: 1,
            found: Vec::new()
        })
    );
    assert!(!report.is_success());
}

#[test]
fn test_two_files_lists_both_names() {
    let dir = submission(&[("a.html", MINIMAL), ("b.html", MINIMAL)]);
    let report = validate(dir.path());

    assert_eq!(report.results.len(), 1);
    let message = &report.results[0].message;
    assert!(message.contains("encontrados 2"));
    assert!(message.contains("a.html"));
    assert!(message.contains("b.html"));
    assert_eq!(report.skipped.len(), 8);
}

#[test]
fn test_div_wrapping_heading_fails_children_and_descendant_checks() {
    let html = "<!doctype html><html><head></head><body><div><h1>T</h1></div><p>C</p></body></html>";
    let dir = submission(&[("index.html", html)]);
    let report = validate(dir.path());

    assert_eq!(
        failed_ids(&report),
        vec![CheckId::BodyChildren, CheckId::NoExtraTags]
    );

    let children = report.result(CheckId::BodyChildren).unwrap();
    assert!(children.message.contains("posição 1: <div>"));

    let descendants = report.result(CheckId::NoExtraTags).unwrap();
    assert_eq!(
        descendants.violation,
        Some(Violation::DisallowedDescendant {
            tag: "div".to_string()
        })
    );
    assert!(descendants.message.contains("<div>"));
}

#[test]
fn test_empty_heading_fails_only_content_check() {
    let html = "<!doctype html><html><head></head><body><h1></h1><p>text</p></body></html>";
    let dir = submission(&[("index.html", html)]);
    let report = validate(dir.path());

    assert_eq!(failed_ids(&report), vec![CheckId::NonEmptyContent]);
    let result = report.result(CheckId::NonEmptyContent).unwrap();
    assert_eq!(
        result.message,
        "Tag <h1> na posição 1 não pode estar vazia."
    );
}

#[test]
fn test_missing_doctype_fails_only_doctype_check() {
    let html = "<html><head></head><body><h1>T</h1><p>C</p></body></html>";
    let dir = submission(&[("index.html", html)]);
    let report = validate(dir.path());

    assert_eq!(failed_ids(&report), vec![CheckId::Doctype]);
    for id in [
        CheckId::ValidParse,
        CheckId::BasicStructure,
        CheckId::BodyChildren,
        CheckId::RequiredTags,
    ] {
        assert!(report.result(id).unwrap().passed, "{} 应该通过", id);
    }
}

#[test]
fn test_stray_end_tag_is_recovered_by_default() {
    // </br> 被解析为 p 内的 <br>，不算解析失败
    let html = "<!doctype html><html><head></head><body><h1>T</h1><p>linha</br>outra</p></body></html>";
    let dir = submission(&[("index.html", html)]);
    let report = validate(dir.path());

    assert_eq!(failed_ids(&report), Vec::<CheckId>::new());
    assert!(report.is_success());
}

#[test]
fn test_self_closing_paragraph_is_an_empty_paragraph() {
    // 非空元素的 /> 被忽略，<p/> 打开一个空段落
    let html = "<!doctype html><html><head></head><body><h1>T</h1><p>C</p><p/></body></html>";
    let dir = submission(&[("index.html", html)]);
    let report = validate(dir.path());

    assert_eq!(failed_ids(&report), vec![CheckId::NonEmptyContent]);
    assert_eq!(
        report.result(CheckId::NonEmptyContent).unwrap().message,
        "Tag <p> na posição 2 não pode estar vazia."
    );
}

#[test]
fn test_strict_parser_also_fails_valid_parse_on_missing_doctype() {
    let html = "<html><head></head><body><h1>T</h1><p>C</p></body></html>";
    let dir = submission(&[("index.html", html)]);
    let flow = ValidationFlow::new(builtin_messages("pt").unwrap(), Box::new(StrictParser));
    let report = flow.run(dir.path());

    assert_eq!(
        failed_ids(&report),
        vec![CheckId::ValidParse, CheckId::Doctype]
    );
}

#[test]
fn test_independent_checks_all_report() {
    let html = "<html><body><ul><li>x</li></ul><p> </p></body></html>";
    let dir = submission(&[("index.html", html)]);
    let report = validate(dir.path());

    let failed = failed_ids(&report);
    for id in [
        CheckId::Doctype,
        CheckId::BodyChildren,
        CheckId::RequiredTags,
        CheckId::NoExtraTags,
        CheckId::NonEmptyContent,
    ] {
        assert!(failed.contains(&id), "{} 应该失败", id);
    }
    assert_eq!(report.results.len(), 9);
}

#[test]
fn test_running_twice_is_idempotent() {
    let html = "<!doctype html><html><body><div>x</div><h1></h1></body></html>";
    let dir = submission(&[("index.html", html)]);

    assert_eq!(validate(dir.path()), validate(dir.path()));
}

#[test]
fn test_english_messages() {
    let dir = submission(&[]);
    let flow = ValidationFlow::new(builtin_messages("en").unwrap(), Box::new(StrictParser));
    let report = flow.run(dir.path());

    assert_eq!(
        report.results[0].message,
        "Expected 1 .html file, but found 0. Files found: none"
    );
}
