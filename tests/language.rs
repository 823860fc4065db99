use std::fs;

use calcula::calculate;
use walkdir::WalkDir;

/// Renders the outcome of a calculation the way the case files spell it:
/// the value itself, or `error: <message>`.
fn outcome(source: &str) -> String {
    match calculate(source) {
        Ok(value) => value.to_string(),
        Err(e) => format!("error: {e}"),
    }
}

#[test]
fn case_files_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((source, expected)) = line.split_once("=>") else {
                panic!("{path:?}:{} is missing '=>': {line}", i + 1);
            };

            count += 1;
            let actual = outcome(source.trim());
            assert_eq!(actual,
                       expected.trim(),
                       "{path:?}:{}: {}",
                       i + 1,
                       source.trim());
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn assert_success(src: &str) {
    if let Err(e) = calculate(src) {
        panic!("Expression {src:?} failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = calculate(src) {
        panic!("Expression {src:?} evaluated to {value} but was expected to fail")
    }
}

#[test]
fn combined_expressions() {
    assert_success("2√9 + sin(30) * 3!");
    assert_success("log(1000) - ln(e) + 2^10");
    assert_success("(1 + 2.5) * 4E2 / 7");
    assert_success("√(arctan(1) + 2e)");
}

#[test]
fn malformed_input_fails() {
    assert_failure("");
    assert_failure("(1 + 2");
    assert_failure("1 +");
    assert_failure("sin 30");
    assert_failure("2 sin(30)");
    assert_failure("3.4.5");
    assert_failure("x + 1");
    assert_failure("1 $ 2");
}

#[test]
fn evaluation_failures() {
    assert_failure("1 / 0");
    assert_failure("2.5!");
    assert_failure("21!");
    assert_failure("2E1.5");
}

#[test]
fn parse_failures_report_every_diagnostic() {
    let message = outcome("(1 + 2");
    assert_eq!(message, "error: next token expected to be ), got EOF instead");

    let message = outcome("* 1 + )");
    assert_eq!(message.lines().count(), 2, "{message}");
}
