use anyhow::Result;

use crate::{CliTest, run};

fn project() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file(
        "translations/en/common.json",
        r#"{"greeting": "Hello {{name}}", "ok": "OK", "buttons": {"add": "Add"}}"#,
    )?;
    test.write_file(
        "translations/en/auth.json",
        r#"{"login": {"or": "or"}}"#,
    )?;
    Ok(test)
}

fn check(test: &CliTest, args: &[&str]) -> Result<(i32, String, String)> {
    let mut cmd = test.command();
    cmd.arg("check").args(args);
    run(cmd)
}

#[test]
fn test_check_clean_locale() -> Result<()> {
    let test = project()?;
    test.write_file(
        "translations/sv/common.json",
        r#"{"greeting": "Hej {{name}}", "ok": "Okej", "buttons": {"add": "Lägg till"}}"#,
    )?;
    test.write_file("translations/sv/auth.json", r#"{"login": {"or": "eller"}}"#)?;

    let (code, stdout, stderr) = check(&test, &[])?;

    assert_eq!(code, 0, "stderr: {stderr}");
    assert_eq!(stdout, "✓ Checked 1 locale, 2 files - no issues found\n");

    Ok(())
}

#[test]
fn test_check_reports_problems() -> Result<()> {
    let test = project()?;
    test.write_file(
        "translations/sv/common.json",
        r#"{"greeting": "Hej {{namn}}", "ok": "OK", "extra": "Extra"}"#,
    )?;

    let (code, stdout, _) = check(&test, &[])?;

    assert_eq!(code, 1);
    assert!(
        stdout.contains(
            "error: namespace file auth.json is missing  missing-file\n  --> ./translations/sv/auth.json"
        ),
        "{stdout}"
    );
    assert!(stdout.contains("error: missing key \"buttons.add\"  missing-key"), "{stdout}");
    assert!(
        stdout.contains(
            "error: placeholders of \"greeting\" differ from en: expected {{name}}, found {{namn}}  placeholder-mismatch"
        ),
        "{stdout}"
    );
    assert!(
        stdout.contains("warning: \"ok\" is identical to en: \"OK\"  untranslated"),
        "{stdout}"
    );
    assert!(
        stdout.contains("warning: key \"extra\" does not exist in en  orphan-key"),
        "{stdout}"
    );
    assert!(stdout.ends_with("✘ 5 problems (3 errors, 2 warnings)\n"), "{stdout}");

    Ok(())
}

#[test]
fn test_check_warnings_only_succeeds() -> Result<()> {
    let test = project()?;
    test.write_file(
        "translations/sv/common.json",
        r#"{"greeting": "Hej {{name}}", "ok": "OK", "buttons": {"add": "Lägg till"}}"#,
    )?;
    test.write_file("translations/sv/auth.json", r#"{"login": {"or": "eller"}}"#)?;

    let (code, stdout, _) = check(&test, &[])?;

    assert_eq!(code, 0);
    assert!(stdout.contains("1 problem (0 errors, 1 warning)"), "{stdout}");

    Ok(())
}

#[test]
fn test_check_after_scaffold_only_notes() -> Result<()> {
    let test = project()?;

    let mut scaffold = test.command();
    scaffold.args(["scaffold", "sv"]);
    let (code, _, _) = run(scaffold)?;
    assert_eq!(code, 0);

    let (code, stdout, _) = check(&test, &[])?;

    assert_eq!(code, 0);
    assert!(!stdout.contains("untranslated"), "{stdout}");
    assert_eq!(stdout.matches("scaffold-note").count(), 2, "{stdout}");

    Ok(())
}

#[test]
fn test_check_parse_error() -> Result<()> {
    let test = project()?;
    test.write_file("translations/sv/common.json", r#"{"ok": 1}"#)?;
    test.write_file("translations/sv/auth.json", r#"{"login": {"or": "eller"}}"#)?;

    let (code, stdout, _) = check(&test, &["sv"])?;

    assert_eq!(code, 1);
    assert!(stdout.contains("Failed to parse namespace file"), "{stdout}");
    assert!(stdout.contains("parse-error"), "{stdout}");
    assert!(!stdout.contains("missing-key"), "{stdout}");

    Ok(())
}

#[test]
fn test_check_only_listed_locales() -> Result<()> {
    let test = project()?;
    test.write_file("translations/sv/common.json", r#"{"ok": "Okej"}"#)?;
    test.write_file("translations/de/common.json", "{}")?;
    test.write_file("translations/de/auth.json", "{}")?;

    let (_, stdout, _) = check(&test, &["de"])?;

    assert!(!stdout.contains("translations/sv"), "{stdout}");
    assert!(stdout.contains("translations/de/common.json"), "{stdout}");

    Ok(())
}

#[test]
fn test_check_without_base_locale() -> Result<()> {
    let test = CliTest::with_file("translations/sv/common.json", "{}")?;

    let (code, _, stderr) = check(&test, &[])?;

    assert_eq!(code, 2);
    assert!(
        stderr.contains("No namespace files found for base locale en"),
        "{stderr}"
    );

    Ok(())
}

#[test]
fn test_check_without_translations_dir() -> Result<()> {
    let test = CliTest::new()?;

    let (code, _, stderr) = check(&test, &[])?;

    assert_eq!(code, 2);
    assert!(stderr.contains("Translations directory not found"), "{stderr}");

    Ok(())
}

#[test]
fn test_check_base_locale_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("translations/sv/common.json", r#"{"ok": "Klar"}"#)?;
    test.write_file("translations/da/common.json", r#"{"ok": "Færdig"}"#)?;

    let (code, stdout, _) = check(&test, &["--base-locale", "sv"])?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "✓ Checked 1 locale, 1 file - no issues found\n");

    Ok(())
}
