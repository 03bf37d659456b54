use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"));

    let content = test.read_file(".resdupe.json")?;
    assert!(content.contains("\"prefMarkers\""));
    assert!(content.contains("\"minValueLength\": 5"));

    Ok(())
}

#[test]
fn test_init_existing_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".resdupe.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"));
    assert_eq!(test.read_file(".resdupe.json")?, "{}");

    Ok(())
}
