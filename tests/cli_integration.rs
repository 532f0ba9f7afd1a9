/// End-to-end tests for junit-monorepo-go
///
/// These run the built binary against the JUnit fixtures under test-fixtures/
/// with commenting disabled, so no network access is needed.
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const CONFIG: &str = r#"
test:
  title: Test
  type: gotestsum
  directories: [go/app1, go/app2]
  fileName: test.xml
lint:
  title: Lint
  type: golangci-lint
  directories: [go/app1, go/app3]
  fileName: lint.xml
"#;

// Helper to get the test fixtures directory
fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("test-fixtures")
}

// Helper to run the binary from the fixtures root with a clean environment
fn run_tool(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_junit-monorepo-go"))
        .env_clear()
        .args(["--repository", "owner/repo", "--sha", "abcdef123456", "--run-id", "456", "--actor", "actor"])
        .args(args)
        .current_dir(fixtures_dir())
        .output()
        .unwrap_or_else(|e| panic!("Failed to run junit-monorepo-go {}: {}", args.join(" "), e))
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "exited with {:?}\nstdout: {}\nstderr: {}",
        output.status.code(),
        stdout(output),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_fixtures_exist() {
    let fixtures = fixtures_dir();
    assert!(fixtures.join("go/app1/test.xml").exists());
    assert!(fixtures.join("go/app1/lint.xml").exists());
    assert!(fixtures.join("go/app2/test.xml").exists());
    assert!(fixtures.join("go/app3/lint.xml").exists());
}

#[test]
fn test_full_report() {
    let out = tempfile::tempdir().unwrap();
    let summary = out.path().join("summary.md");
    let outputs = out.path().join("outputs");
    let json = out.path().join("report.json");

    let output = run_tool(&[
        "--config",
        CONFIG,
        "--no-comment",
        "--pull-request-number",
        "123",
        "--step-summary",
        summary.to_str().unwrap(),
        "--output",
        outputs.to_str().unwrap(),
        "--json-report",
        json.to_str().unwrap(),
    ]);
    assert_success(&output);

    // a failing run is reported, not turned into a failing exit
    let console = stdout(&output);
    let annotations: Vec<&str> = console.lines().filter(|l| l.starts_with("::error ")).collect();
    assert_eq!(
        annotations,
        vec![
            "::error file=go/app1/pkg/math_test.go,line=15::math_test.go:15: expected 1, got 2",
            "::error file=go/app3/pkg/array.go,line=7::func `first` is unused",
        ]
    );

    let body = std::fs::read_to_string(&summary).unwrap();
    let blob = "https://github.com/owner/repo/blob/abcdef123456";
    assert!(body.starts_with("## \u{1F97D} Go Test Report <sup>[CI](https://github.com/owner/repo/actions/runs/456)</sup>"));
    assert!(body.contains("#### Result: `Failed`"));
    assert!(body.contains("| Module | Version | Test | Passed | Failed | Time | Lint |"));
    assert!(body.contains("| :--- | ---: | :--- | ---: | ---: | ---: | :--- |"));
    assert!(body.contains(&format!("| [go/app1]({}/go/app1) | 1.22.1 | ❌Failed | 2 | 1 | 1.2s | ✅Passed |", blob)));
    assert!(body.contains(&format!("| [go/app2]({}/go/app2) | 1.21.8 | ✅Passed | 1 | 0 | 0.5s | - |", blob)));
    assert!(!body.contains("[go/app3]("), "modules outside the first group get no summary row");
    assert!(body.contains(&format!(
        "| [go/app3/pkg/array.go:7]({}/go/app3/pkg/array.go#L7) | golangci-lint | unused | func `first` is unused |",
        blob
    )));
    assert!(body.contains("<summary> Failures </summary>"));
    assert!(body.contains("[abcdef1](https://github.com/owner/repo/pull/123/commits/abcdef123456) pushed by @actor."));

    let step_output = std::fs::read_to_string(&outputs).unwrap();
    assert!(step_output.starts_with("body<<ghadelimiter_"));
    assert!(step_output.contains(body.trim_end()));

    let report: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(report["result"], "failed");
    assert_eq!(report["failures"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_all_passing_modules() {
    let config = "test:\n  title: Test\n  type: gotestsum\n  directories: [go/app2]\n  fileName: test.xml\n";
    let out = tempfile::tempdir().unwrap();
    let summary = out.path().join("summary.md");

    let output = run_tool(&["--config", config, "--no-comment", "--step-summary", summary.to_str().unwrap()]);
    assert_success(&output);
    assert!(!stdout(&output).contains("::error "));

    let body = std::fs::read_to_string(&summary).unwrap();
    assert!(body.contains("#### Result: `Passed`"));
    assert!(!body.contains("<details open>"));
    assert!(body.contains("[abcdef1](https://github.com/owner/repo/commit/abcdef123456)"));
}

#[test]
fn test_empty_config() {
    let out = tempfile::tempdir().unwrap();
    let summary = out.path().join("summary.md");

    let output = run_tool(&["--config", "{}", "--no-comment", "--step-summary", summary.to_str().unwrap()]);
    assert_success(&output);
    assert!(std::fs::read_to_string(&summary).unwrap().contains("No test results found."));
}

#[test]
fn test_config_file() {
    let out = tempfile::tempdir().unwrap();
    let config = out.path().join("config.yml");
    std::fs::write(&config, CONFIG).unwrap();

    let output = run_tool(&["--config-file", config.to_str().unwrap(), "--no-comment"]);
    assert_success(&output);
    assert_eq!(stdout(&output).lines().filter(|l| l.starts_with("::error ")).count(), 2);
}

#[test]
fn test_missing_report_fails_without_partial_output() {
    let config = "test:\n  title: Test\n  type: gotestsum\n  directories: [go/app1, go/missing]\n  fileName: test.xml\n";
    let out = tempfile::tempdir().unwrap();
    let summary = out.path().join("summary.md");

    let output = run_tool(&["--config", config, "--no-comment", "--step-summary", summary.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("go/missing/test.xml"), "{}", stdout(&output));
    assert!(!stdout(&output).contains("::error "));
    assert!(!summary.exists());
}

#[test]
fn test_invalid_config() {
    let output = run_tool(&["--config", "test:\n  type: jest\n", "--no-comment"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Invalid config"));
}

#[test]
fn test_missing_repository_context() {
    let output = Command::new(env!("CARGO_BIN_EXE_junit-monorepo-go"))
        .env_clear()
        .args(["--config", "{}", "--no-comment"])
        .current_dir(fixtures_dir())
        .output()
        .expect("run binary");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("--repository"));
}
