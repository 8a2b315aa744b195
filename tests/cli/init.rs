use anyhow::{Context, Result};
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for key in ["localizationPackage", "lockFile", "dependency", "formatter"] {
        assert!(parsed.get(key).is_some(), "Config should have '{}' field", key);
    }
    assert_eq!(parsed["dependency"], "intl");

    // 2-space indentation
    assert!(content.contains("\n  \""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("Created .datagenrc.json"));

    assert!(test.root().join(".datagenrc.json").exists());
    let content = test.read_file(".datagenrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".datagenrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.contains(".datagenrc.json already exists"));
    assert_eq!(test.read_file(".datagenrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_repository()?;

    test.command().arg("init").output()?;

    let output = test.command().output()?;
    assert!(
        output.status.success(),
        "Generation should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}
