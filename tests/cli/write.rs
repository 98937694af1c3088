use anyhow::Result;
use insta::assert_snapshot;
use serde_json::json;

use crate::{CliTest, run};

const SWEDISH: &str = r#"{
  "common": {
    "buttons": {"add": "Lägg till", "done": "Klar"},
    "counts": {"wordCount": "{{count}} ord", "wordCount_other": "{{count}} ord"}
  },
  "settings": {
    "title": "Inställningar"
  }
}"#;

#[test]
fn test_write_creates_namespace_files() -> Result<()> {
    let test = CliTest::with_file("sv.json", SWEDISH)?;

    let (code, stdout, stderr) = run(test.write_command("sv", "sv.json"))?;

    assert_eq!(code, 0, "stderr: {stderr}");
    assert_snapshot!(stdout, @r"
✓ sv/common.json
✓ sv/settings.json
Wrote 2 files for 1 locale to ./translations
");

    assert_eq!(
        test.read_file("translations/sv/settings.json")?,
        "{\n  \"title\": \"Inställningar\"\n}\n"
    );
    assert_eq!(
        test.read_json("translations/sv/common.json")?,
        json!({
            "buttons": {"add": "Lägg till", "done": "Klar"},
            "counts": {"wordCount": "{{count}} ord", "wordCount_other": "{{count}} ord"}
        })
    );

    Ok(())
}

#[test]
fn test_write_keeps_key_order() -> Result<()> {
    let test = CliTest::with_file(
        "sv.json",
        r#"{"games": {"zeta": "Z", "alpha": "A", "mid": {"y": "Y", "b": "B"}}}"#,
    )?;

    run(test.write_command("sv", "sv.json"))?;

    let content = test.read_file("translations/sv/games.json")?;
    let zeta = content.find("\"zeta\"").unwrap();
    let alpha = content.find("\"alpha\"").unwrap();
    let y = content.find("\"y\"").unwrap();
    let b = content.find("\"b\"").unwrap();
    assert!(zeta < alpha && y < b, "{content}");

    Ok(())
}

#[test]
fn test_write_twice_is_byte_identical() -> Result<()> {
    let test = CliTest::with_file("sv.json", SWEDISH)?;

    run(test.write_command("sv", "sv.json"))?;
    let first = test.read_file("translations/sv/common.json")?;
    run(test.write_command("sv", "sv.json"))?;
    let second = test.read_file("translations/sv/common.json")?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_write_replaces_existing_file_and_keeps_others() -> Result<()> {
    let test = CliTest::with_file("sv.json", SWEDISH)?;
    test.write_file("translations/sv/common.json", r#"{"stale": "gammal"}"#)?;
    test.write_file("translations/sv/auth.json", r#"{"keep": "me"}"#)?;
    test.write_file("translations/de/common.json", r#"{"keep": "too"}"#)?;

    let (code, _, _) = run(test.write_command("sv", "sv.json"))?;

    assert_eq!(code, 0);
    let common = test.read_json("translations/sv/common.json")?;
    assert!(common.get("stale").is_none());
    assert_eq!(test.read_file("translations/sv/auth.json")?, r#"{"keep": "me"}"#);
    assert_eq!(test.read_file("translations/de/common.json")?, r#"{"keep": "too"}"#);

    Ok(())
}

#[test]
fn test_write_rejects_non_string_leaf() -> Result<()> {
    let test = CliTest::with_file(
        "sv.json",
        r#"{"common": {"ok": "Klar"}, "games": {"maxWords": 20}}"#,
    )?;

    let (code, _, stderr) = run(test.write_command("sv", "sv.json"))?;

    assert_eq!(code, 2);
    assert!(stderr.contains("Failed to parse catalog source"), "{stderr}");
    assert!(stderr.contains("expected a translation string"), "{stderr}");
    assert!(!test.root().join("translations").exists());

    Ok(())
}

#[test]
fn test_write_rejects_duplicate_key() -> Result<()> {
    let test = CliTest::with_file(
        "sv.json",
        r#"{"common": {"buttons": {"add": "Lägg till", "add": "Lägg"}}}"#,
    )?;

    let (code, _, stderr) = run(test.write_command("sv", "sv.json"))?;

    assert_eq!(code, 2);
    assert!(stderr.contains("duplicate key \"add\""), "{stderr}");

    Ok(())
}

#[test]
fn test_write_rejects_unsafe_locale() -> Result<()> {
    let test = CliTest::with_file("sv.json", SWEDISH)?;

    let (code, _, stderr) = run(test.write_command("sv/../de", "sv.json"))?;

    assert_eq!(code, 2);
    assert!(stderr.contains("unsafe character"), "{stderr}");
    assert!(!test.root().join("translations").exists());

    Ok(())
}

#[test]
fn test_write_missing_source() -> Result<()> {
    let test = CliTest::new()?;

    let (code, _, stderr) = run(test.write_command("sv", "nope.json"))?;

    assert_eq!(code, 2);
    assert!(stderr.starts_with("Error: Failed to read catalog source"), "{stderr}");

    Ok(())
}

#[test]
fn test_write_uses_configured_root() -> Result<()> {
    let test = CliTest::with_file("sv.json", SWEDISH)?;
    test.write_file(".catalogrc.json", r#"{ "translationsRoot": "./locales" }"#)?;

    let (code, stdout, _) = run(test.write_command("sv", "sv.json"))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("to ./locales"), "{stdout}");
    assert!(test.root().join("locales/sv/common.json").exists());

    Ok(())
}

#[test]
fn test_write_translations_root_flag() -> Result<()> {
    let test = CliTest::with_file("sv.json", SWEDISH)?;

    let mut cmd = test.write_command("sv", "sv.json");
    cmd.args(["--translations-root", "out", "--verbose"]);
    let (code, stdout, stderr) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(test.root().join("out/sv/settings.json").exists());
    assert!(stdout.contains("bytes)"), "{stdout}");
    assert!(stderr.contains("No .catalogrc.json found"), "{stderr}");

    Ok(())
}

#[test]
fn test_write_warns_about_unlisted_namespace() -> Result<()> {
    let test = CliTest::with_file("sv.json", r#"{"onboarding": {"hello": "Hej"}}"#)?;

    let (code, _, stderr) = run(test.write_command("sv", "sv.json"))?;

    assert_eq!(code, 0);
    assert!(
        stderr.contains("warning: namespace \"onboarding\" is not listed"),
        "{stderr}"
    );
    assert!(test.root().join("translations/sv/onboarding.json").exists());

    Ok(())
}

#[test]
fn test_write_all_bundle() -> Result<()> {
    let test = CliTest::with_file(
        "bundle.json",
        r#"{
          "sv": {"common": {"ok": "Klar"}, "auth": {"or": "eller"}},
          "ja": {"common": {"ok": "完了"}}
        }"#,
    )?;

    let mut cmd = test.command();
    cmd.args(["write-all", "--source", "bundle.json"]);
    let (code, stdout, stderr) = run(cmd)?;

    assert_eq!(code, 0, "stderr: {stderr}");
    assert_snapshot!(stdout, @r"
✓ sv/common.json
✓ sv/auth.json
✓ ja/common.json
Wrote 3 files for 2 locales to ./translations
");
    assert_eq!(
        test.read_file("translations/ja/common.json")?,
        "{\n  \"ok\": \"完了\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_write_all_rejects_bad_locale_key() -> Result<()> {
    let test = CliTest::with_file("bundle.json", r#"{"sv": {}, "s v": {}}"#)?;

    let mut cmd = test.command();
    cmd.args(["write-all", "--source", "bundle.json"]);
    let (code, _, stderr) = run(cmd)?;

    assert_eq!(code, 2);
    assert!(stderr.contains("unsafe character"), "{stderr}");
    assert!(!test.root().join("translations").exists());

    Ok(())
}

#[test]
fn test_write_all_reports_files_written_before_a_failure() -> Result<()> {
    let test = CliTest::with_file(
        "bundle.json",
        r#"{"sv": {"common": {"ok": "Klar"}}, "de": {"common": {"ok": "Fertig"}}}"#,
    )?;
    test.write_file("translations/de", "file in the way")?;

    let mut cmd = test.command();
    cmd.args(["write-all", "--source", "bundle.json"]);
    let (code, stdout, stderr) = run(cmd)?;

    assert_eq!(code, 2);
    assert_eq!(stdout, "✓ sv/common.json\n");
    assert!(
        stderr.starts_with("Error: Failed to write catalog for locale de"),
        "{stderr}"
    );
    assert!(test.root().join("translations/sv/common.json").exists());

    Ok(())
}
