use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

/// Replaces the temp project path in report lines.
const ROOT_FILTER: (&str, &str) = (r"\S*\.tmp[0-9A-Za-z]+", "[ROOT]");

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("--help"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command());

    Ok(())
}

#[test]
fn test_exact_duplicate() -> Result<()> {
    let test = CliTest::new()?;
    test.write_strings("app", &[("app_name", "MyApp")])?;
    test.write_strings("core", &[("app_name", "MyApp")])?;

    assert_cmd_snapshot!(test.scan_command());

    Ok(())
}

#[test]
fn test_conflict() -> Result<()> {
    let test = CliTest::new()?;
    test.write_strings("app", &[("btn_label", "Submit")])?;
    test.write_strings("core", &[("btn_label", "Send")])?;

    assert_cmd_snapshot!(test.scan_command());

    Ok(())
}

#[test]
fn test_value_duplicate() -> Result<()> {
    let test = CliTest::new()?;
    test.write_strings("app", &[("title_a", "Settings")])?;
    test.write_strings("core", &[("title_b", "Settings")])?;

    assert_cmd_snapshot!(test.scan_command());

    Ok(())
}

#[test]
fn test_preference_duplicate() -> Result<()> {
    let test = CliTest::new()?;
    test.write_strings("app", &[("enable_feature_x", "Enable feature X")])?;
    test.write_strings("core", &[("enable_feature_x", "Enable feature X")])?;

    assert_cmd_snapshot!(test.scan_command());

    Ok(())
}

#[test]
fn test_preference_conflict() -> Result<()> {
    let test = CliTest::new()?;
    test.write_strings("app", &[("show_graph", "Show graph")])?;
    test.write_strings("core", &[("show_graph", "Display graph")])?;

    assert_cmd_snapshot!(test.scan_command());

    Ok(())
}

#[test]
fn test_malformed_file_does_not_abort() -> Result<()> {
    let test = CliTest::new()?;
    test.write_strings("app", &[("app_name", "MyApp")])?;
    test.write_strings("core", &[("app_name", "MyApp")])?;
    test.write_file(
        "broken/src/main/res/values/strings.xml",
        "<resources><string name=\"oops\">never closed",
    )?;

    // The XML parser's wording is not ours to pin down
    insta::with_settings!({
        filters => vec![(r"(?m)^(error: failed to parse \S+): .*$", "${1}: [PARSE ERROR]")]
    }, {
        assert_cmd_snapshot!(test.scan_command());
    });

    Ok(())
}

#[test]
fn test_stoplisted_value_is_not_counted() -> Result<()> {
    let test = CliTest::new()?;
    for (i, module) in ["a", "b", "c", "d"].iter().enumerate() {
        let name = format!("ok_button_{}", i);
        test.write_strings(module, &[(name.as_str(), "OK")])?;
    }

    assert_cmd_snapshot!(test.scan_command());

    Ok(())
}

#[test]
fn test_missing_root_reports_zero() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.scan_command().arg("does-not-exist"));

    Ok(())
}

#[test]
fn test_absolute_root_argument() -> Result<()> {
    let test = CliTest::new()?;
    test.write_strings("app", &[("app_name", "MyApp")])?;
    test.write_strings("core", &[("app_name", "MyApp")])?;

    insta::with_settings!({ filters => vec![ROOT_FILTER] }, {
        assert_cmd_snapshot!(test.scan_command().arg(test.root()));
    });

    Ok(())
}

#[test]
fn test_output_is_stable_across_runs() -> Result<()> {
    let test = CliTest::new()?;
    test.write_strings("app", &[("app_name", "MyApp"), ("title_a", "Settings")])?;
    test.write_strings("core", &[("app_name", "MyApp"), ("title_b", "Settings")])?;
    test.write_strings("wear", &[("app_name", "MyApp Wear")])?;

    let first = test.scan_command().output()?;
    let second = test.scan_command().output()?;

    assert!(first.status.success());
    assert!(!first.stdout.is_empty());
    assert_eq!(
        String::from_utf8(first.stdout)?,
        String::from_utf8(second.stdout)?
    );

    Ok(())
}

#[test]
fn test_config_min_value_length() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".resdupe.json", r#"{ "minValueLength": 10 }"#)?;
    test.write_strings("app", &[("title_a", "Settings")])?;
    test.write_strings("core", &[("title_b", "Settings")])?;

    assert_cmd_snapshot!(test.scan_command());

    Ok(())
}

#[test]
fn test_min_value_length_flag_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".resdupe.json", r#"{ "minValueLength": 10 }"#)?;
    test.write_strings("app", &[("title_a", "Settings")])?;
    test.write_strings("core", &[("title_b", "Settings")])?;

    assert_cmd_snapshot!(test.scan_command().args(["--min-value-length", "3"]));

    Ok(())
}

#[test]
fn test_display_limits_from_flags() -> Result<()> {
    let test = CliTest::new()?;
    // "Widespread value" has 12 occurrences, "Paired value" has 4
    for i in 0..12 {
        let module = format!("m{:02}", i);
        let wide = format!("wide_{}", i);
        let pair = format!("pair_{}", i % 2);
        let mut entries = vec![(wide.as_str(), "Widespread value")];
        if i < 4 {
            entries.push((pair.as_str(), "Paired value"));
        }
        test.write_strings(&module, &entries)?;
    }

    assert_cmd_snapshot!(
        test.scan_command()
            .args(["--max-occurrences-for-display", "4"])
    );

    Ok(())
}

#[test]
fn test_config_glob_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".resdupe.json", r#"{ "ignores": ["**/build/**"] }"#)?;
    test.write_strings("app", &[("app_name", "MyApp")])?;
    test.write_strings("app/build/generated", &[("app_name", "MyApp")])?;

    assert_cmd_snapshot!(test.scan_command());

    Ok(())
}

#[test]
fn test_config_literal_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".resdupe.json", r#"{ "ignores": ["app/build"] }"#)?;
    test.write_strings("app", &[("app_name", "MyApp")])?;
    test.write_strings("app/build/generated", &[("app_name", "MyApp")])?;

    assert_cmd_snapshot!(test.scan_command());

    Ok(())
}

#[test]
fn test_config_relative_glob_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".resdupe.json", r#"{ "ignores": ["app/build/**"] }"#)?;
    test.write_strings("app", &[("app_name", "MyApp")])?;
    test.write_strings("app/build/generated", &[("app_name", "MyApp")])?;

    assert_cmd_snapshot!(test.scan_command());

    Ok(())
}

#[test]
fn test_invalid_config_is_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".resdupe.json", "{ not json")?;

    let output = test.scan_command().output()?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.starts_with("Error: Failed to parse config file"));
    assert!(output.stdout.is_empty());

    Ok(())
}
