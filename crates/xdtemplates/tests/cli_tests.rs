//! Integration tests for the top-level CLI surface

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use xdtemplates_testkit::{JobFixture, temp_dir_in_workspace, write_catalog};

fn xdtemplates() -> Command {
    let mut cmd = Command::cargo_bin("xdtemplates").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("XDTEMPLATES_OPTIONS");
    cmd
}

#[test]
fn test_help() {
    xdtemplates()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("gen"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_version() {
    xdtemplates()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_gen_direct_help_shows_flags() {
    xdtemplates()
        .args(["gen", "direct", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--template-folder"))
        .stdout(predicate::str::contains("--vars"))
        .stdout(predicate::str::contains("--deny-unresolved"));
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    xdtemplates().assert().failure().code(2);
}

#[test]
fn test_list_prints_options() {
    let temp = temp_dir_in_workspace();
    let fixture = JobFixture::new(temp.path());
    let catalog = write_catalog(&fixture, &[("1", "Site", "*.html"), ("7", "Mail", "*.txt")]);

    xdtemplates()
        .arg("list")
        .arg("--options")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("[1]. Site"))
        .stdout(predicate::str::contains("[7]. Mail"))
        .stdout(predicate::str::contains("Placeholders: {{KEY}}  {{||KEY||}}"))
        .stdout(predicate::str::contains("*.txt"));
}

#[test]
fn test_list_empty_catalog() {
    let temp = temp_dir_in_workspace();
    let fixture = JobFixture::new(temp.path());
    let catalog = write_catalog(&fixture, &[]);

    xdtemplates()
        .arg("list")
        .arg("--options")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("No options configured"));
}

#[test]
fn test_list_rejects_duplicate_ids() {
    let temp = temp_dir_in_workspace();
    let fixture = JobFixture::new(temp.path());
    let catalog = write_catalog(&fixture, &[("1", "Site", "*.html"), ("1", "Again", "*.txt")]);

    xdtemplates()
        .arg("list")
        .arg("--options")
        .arg(&catalog)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("CATALOG_INVALID"));
}

#[test]
fn test_list_shows_catalog_delimiters() {
    let temp = temp_dir_in_workspace();
    let catalog = temp.path().join("Options.xml");
    std::fs::write(
        &catalog,
        r#"<Settings>
  <Prefixes>
    <Prefix Id="NORMAL" Prefix="[[" Postfix="]]" />
    <Prefix Id="HTMLENC" Prefix="[[||" Postfix="||]]" />
  </Prefixes>
  <Options>
    <Option Id="1" Name="Site" TemplateFolder="t" OutputFolder="o" VariableFile="v" SearchPattern="*" />
  </Options>
</Settings>"#,
    )
    .unwrap();

    xdtemplates()
        .arg("list")
        .arg("--options")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("Placeholders: [[KEY]]  [[||KEY||]]"));
}
