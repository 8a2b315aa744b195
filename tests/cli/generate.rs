use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, OUTPUT_FILE};

#[test]
fn test_prints_document_without_writing() -> Result<()> {
    let test = CliTest::with_repository()?;

    let output = test.command().output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("// This file has been automatically generated."));
    assert!(stdout.contains("const Map<String, dynamic> dateSymbols = <String, dynamic>{"));
    assert!(stdout.contains(
        "const Map<String, Map<String, String>> datePatterns = <String, Map<String, String>>{"
    ));
    assert_eq!(stdout.matches("r'''en''': ").count(), 2);
    assert!(!stdout.contains("'''fr'''"));
    assert!(!test.root().join(OUTPUT_FILE).exists());

    Ok(())
}

#[test]
fn test_overwrite_writes_identical_output() -> Result<()> {
    let test = CliTest::with_repository()?;
    test.write_file(OUTPUT_FILE, "// stale\n")?;

    let printed = test.command().output()?;
    let written = test.command().args(["--overwrite", "--no-format"]).output()?;
    assert!(written.status.success());
    assert!(written.stdout.is_empty());

    let first = test.read_file(OUTPUT_FILE)?;
    assert_eq!(first, String::from_utf8(printed.stdout)?);

    let again = test.command().args(["-w", "--no-format"]).output()?;
    assert!(again.status.success());
    assert_eq!(test.read_file(OUTPUT_FILE)?, first);

    let stderr = String::from_utf8(again.stderr)?;
    assert!(stderr.contains("(1 supported locales)"), "stderr: {stderr}");

    Ok(())
}

#[test]
fn test_formatter_failure_is_not_fatal() -> Result<()> {
    let test = CliTest::with_repository()?;
    test.write_file(
        ".datagenrc.json",
        r#"{"formatter": ["definitely-missing-formatter"]}"#,
    )?;

    let output = test.command().arg("-w").output()?;
    assert!(output.status.success());
    assert!(test.root().join(OUTPUT_FILE).exists());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("formatter failed"), "stderr: {stderr}");

    Ok(())
}

#[test]
fn test_requires_repository_root() -> Result<()> {
    let test = CliTest::with_repository()?;
    std::fs::remove_dir(test.root().join(".git"))?;

    let output = test.command().arg("-w").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("must be run from the repository root"), "stderr: {stderr}");
    assert!(!test.root().join(OUTPUT_FILE).exists());

    Ok(())
}

#[test]
fn test_missing_dependency_record_entry() -> Result<()> {
    let test = CliTest::with_repository()?;
    test.write_file(
        "packages/flutter_localizations/.packages",
        "collection:../../third_party/collection/lib/\n",
    )?;

    let output = test.command().output()?;
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("'intl' dependency not found"), "stderr: {stderr}");

    Ok(())
}

#[test]
fn test_intl_dir_flag_bypasses_dependency_record() -> Result<()> {
    let test = CliTest::with_repository()?;
    std::fs::remove_file(test.root().join("packages/flutter_localizations/.packages"))?;

    let output = test
        .command()
        .args(["--intl-dir", "third_party/intl/lib"])
        .output()?;
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.contains("dateSymbols"));

    Ok(())
}

#[test]
fn test_unsupported_pattern_value_aborts() -> Result<()> {
    let test = CliTest::with_repository()?;
    test.write_patterns("en", r#"{"d": ["not", "a", "string"]}"#)?;

    let output = test.command().args(["-w", "--no-format"]).output()?;
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("unsupported JSON type in patterns/en"), "stderr: {stderr}");
    assert!(!test.root().join(OUTPUT_FILE).exists());

    Ok(())
}

#[test]
fn test_missing_resource_directory() -> Result<()> {
    let test = CliTest::with_repository()?;
    std::fs::remove_dir_all(test.root().join("packages/flutter_localizations/lib"))?;

    let output = test.command().output()?;
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("does not exist"), "stderr: {stderr}");

    Ok(())
}

#[test]
fn test_root_check_precedes_config_errors() -> Result<()> {
    let test = CliTest::with_repository()?;
    test.write_file(".datagenrc.json", r#"{"resourceExtension": "a/b"}"#)?;

    let output = test
        .command()
        .current_dir(test.root().join("packages"))
        .output()?;
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("must be run from the repository root"), "stderr: {stderr}");
    assert!(!stderr.contains("resourceExtension"), "stderr: {stderr}");

    Ok(())
}
