use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_check_reports_missing_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en/common.json", r#"{"test": "bla"}"#)?;
    test.write_file("locales/de/common.json", r#"{"test": "bla-de"}"#)?;
    test.write_file("locales/de/front.json", r#"{"x": "y"}"#)?;

    let (output, stdout, _) = run(test.check_command().args(["--languages", "de,ja"]))?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("missing: "));
    assert!(stdout.contains("en/front.json"));
    assert!(stdout.contains("ja/common.json"));
    assert!(stdout.contains("ja/front.json"));

    // Nothing was written.
    assert!(!test.root().join("locales/ja").exists());
    assert!(!test.root().join("locales/en/front.json").exists());

    Ok(())
}

#[test]
fn test_check_passes_on_complete_tree() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en/common.json", r#"{"test": "bla"}"#)?;
    test.write_file("locales/ja/common.json", "{}")?;

    let (output, stdout, _) = run(test.check_command().args(["--languages", "ja"]))?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("nothing to create"));

    Ok(())
}

#[test]
fn test_check_after_sync_passes() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en/common.json", r#"{"test": "bla"}"#)?;

    let (output, _, _) = run(test.check_command().args(["--languages", "ja"]))?;
    assert_eq!(output.status.code(), Some(1));

    run(test.sync_command().args(["--languages", "ja"]))?;

    let (output, _, _) = run(test.check_command().args(["--languages", "ja"]))?;
    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_check_missing_primary_language() -> Result<()> {
    let test = CliTest::new()?;

    let (output, _, stderr) = run(&mut test.check_command())?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("There are no files for your primary language"));

    Ok(())
}
