use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert!(
        parsed.get("primaryLanguage").is_some(),
        "Config should have 'primaryLanguage' field"
    );
    assert!(
        parsed.get("otherLanguages").is_some(),
        "Config should have 'otherLanguages' field"
    );
    assert!(
        parsed.get("localesFolder").is_some(),
        "Config should have 'localesFolder' field"
    );

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (output, stdout, _) = run(&mut test.command().arg("init"))?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Created .locsyncrc.json"));
    assert!(test.root().join(".locsyncrc.json").exists());

    let content = test.read_file(".locsyncrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".locsyncrc.json", "{}")?;

    let (output, _, stderr) = run(&mut test.command().arg("init"))?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("already exists"));

    Ok(())
}
