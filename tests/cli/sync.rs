use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_sync_fills_secondary_languages() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en/common.json", r#"{"test": "bla"}"#)?;
    test.write_file("locales/en/front.json", "{}")?;
    test.write_file("locales/de/common.json", r#"{"test": "bla-de"}"#)?;

    let (output, stdout, _) = run(test.sync_command().args(["--languages", "de,ja"]))?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Synced 3 languages, 2 namespaces"));

    // Existing translations are untouched, byte for byte.
    assert_eq!(
        test.read_file("locales/de/common.json")?,
        r#"{"test": "bla-de"}"#
    );

    // Previously absent files exist as empty documents.
    assert_eq!(test.read_file("locales/ja/common.json")?, "{}\n");
    assert_eq!(test.read_file("locales/ja/front.json")?, "{}\n");
    assert_eq!(test.read_file("locales/de/front.json")?, "{}\n");

    Ok(())
}

#[test]
fn test_sync_flat_layout_to_output_folder() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en.json", r#"{"test": "bla"}"#)?;

    let (output, _, _) = run(test
        .sync_command()
        .args(["--languages", "ja,he", "--output-folder", "dist"]))?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_file("dist/en.json")?,
        "{\n  \"test\": \"bla\"\n}\n"
    );
    assert_eq!(test.read_file("dist/ja.json")?, "{}\n");
    assert_eq!(test.read_file("dist/he.json")?, "{}\n");

    // The source folder is untouched.
    assert!(!test.root().join("locales/ja.json").exists());

    Ok(())
}

#[test]
fn test_sync_is_idempotent() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en/nested/a.json", r#"{"a": "bla"}"#)?;
    test.write_file("locales/de/common.json", r#"{"x": "y"}"#)?;
    test.write_file("locales/en/common.json", r#"{"x": "z"}"#)?;

    run(test.sync_command().args(["--languages", "de"]))?;
    let first_a = test.read_file("locales/de/nested/a.json")?;

    let (output, stdout, _) = run(test.sync_command().args(["--languages", "de"]))?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("created 0 files"));
    assert_eq!(test.read_file("locales/de/nested/a.json")?, first_a);

    Ok(())
}

#[test]
fn test_sync_missing_primary_language() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en.json", r#"{"test": "bla"}"#)?;

    let (output, _, stderr) = run(test
        .sync_command()
        .args(["--primary-language", "ja", "--languages", "en"]))?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("There are no files for your primary language"));

    Ok(())
}

#[test]
fn test_sync_rejects_mixed_layout() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en.json", r#"{"test": "bla"}"#)?;
    test.write_file("locales/en/common.json", r#"{"test": "bla"}"#)?;

    let (output, _, stderr) = run(&mut test.sync_command())?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Unsupported locale folder layout"));

    Ok(())
}

#[test]
fn test_sync_reports_unparseable_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en.json", "{ broken")?;

    let (output, _, stderr) = run(&mut test.sync_command())?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Failed to read locale file"));
    assert!(stderr.contains("en.json"));

    Ok(())
}

#[test]
fn test_sync_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".locsyncrc.json",
        r#"{
          "primaryLanguage": "en",
          "otherLanguages": ["ja"],
          "localesFolder": "./i18n"
        }"#,
    )?;
    test.write_file("i18n/en.json", r#"{"test": "bla"}"#)?;

    let (output, _, _) = run(&mut test.command().arg("sync"))?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_file("i18n/ja.json")?, "{}\n");

    Ok(())
}

#[test]
fn test_sync_verbose_lists_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en/common.json", r#"{"test": "bla"}"#)?;

    let (output, stdout, _) = run(test.sync_command().args(["--languages", "ja", "--verbose"]))?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("created"));
    assert!(stdout.contains("preserved"));
    assert!(stdout.contains("ja"));

    Ok(())
}

#[test]
fn test_help_without_command() -> Result<()> {
    let test = CliTest::new()?;

    let (output, stdout, _) = run(&mut test.command())?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("sync"));

    Ok(())
}
