use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["translationsRoot"], "./translations");
    assert_eq!(parsed["baseLocale"], "en");
    assert_eq!(
        parsed["namespaces"],
        serde_json::json!(["common", "settings", "games", "profile", "create", "auth"])
    );
    assert!(
        parsed.get("locales").is_some(),
        "Config should have 'locales' field"
    );

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );
    assert!(content.ends_with("}\n"));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .catalogrc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".catalogrc.json").exists());
    let content = test.read_file(".catalogrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".catalogrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: .catalogrc.json already exists
    ");

    assert_eq!(test.read_file(".catalogrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_file("sv.json", r#"{"common": {"ok": "Klar"}}"#)?;

    test.command().arg("init").output()?;

    let (code, stdout, stderr) = run(test.write_command("sv", "sv.json"))?;
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stdout.contains("to ./translations"), "{stdout}");
    assert!(test.root().join("translations/sv/common.json").exists());

    Ok(())
}

#[test]
fn test_init_records_flags() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.args([
        "init",
        "--translations-root",
        "./public/locales",
        "--base-locale",
        "sv",
        "--locales",
        "de,fi",
    ]);
    let (code, _, stderr) = run(cmd)?;

    assert_eq!(code, 0, "stderr: {stderr}");
    let parsed = test.read_json(".catalogrc.json")?;
    assert_eq!(parsed["translationsRoot"], "./public/locales");
    assert_eq!(parsed["baseLocale"], "sv");
    assert_eq!(parsed["locales"], serde_json::json!(["de", "fi"]));

    Ok(())
}

#[test]
fn test_init_rejects_invalid_locale_flag() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.args(["init", "--locales", "de,../fi"]);
    let (code, _, _) = run(cmd)?;

    assert_eq!(code, 2);
    assert!(!test.root().join(".catalogrc.json").exists());

    Ok(())
}
