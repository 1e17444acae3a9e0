//! End-to-end tests for the `aws-switcher` binary.
//!
//! Each test runs the real binary against a config file in a temporary
//! directory, with `HOME` and `XDG_CONFIG_HOME` pointed at that directory so
//! no settings from the machine running the tests leak in.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CONFIG: &str = "\
[default]
region = us-east-1

## BEGIN COMPANY_A
[profile default]
sso_region = eu-west-1
## END COMPANY_A

## BEGIN PERSONAL
#[profile default]
#region = us-west-2
## END PERSONAL
";

fn setup() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config");
    std::fs::write(&config, CONFIG).unwrap();
    (dir, config)
}

fn switcher(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("aws-switcher");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("AWS_CONFIG_FILE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn interactive_switch_updates_file_and_backup() {
    let (dir, config) = setup();

    switcher(dir.path())
        .arg("--config-file")
        .arg(&config)
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Current active organization")
                .and(predicate::str::contains("Successfully switched to Personal")),
        );

    let content = std::fs::read_to_string(&config).unwrap();
    assert!(content.contains("## BEGIN COMPANY_A\n#[profile default]\n#sso_region = eu-west-1\n"));
    assert!(content.contains("## BEGIN PERSONAL\n[profile default]\nregion = us-west-2\n"));
    let backup = std::fs::read_to_string(dir.path().join("config.backup")).unwrap();
    assert_eq!(backup, CONFIG);
}

#[test]
fn quit_exits_zero_without_changes() {
    let (dir, config) = setup();

    switcher(dir.path())
        .arg("--config-file")
        .arg(&config)
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bye!"));

    assert_eq!(std::fs::read_to_string(&config).unwrap(), CONFIG);
}

#[test]
fn out_of_range_choice_exits_one_without_changes() {
    let (dir, config) = setup();

    switcher(dir.path())
        .arg("--config-file")
        .arg(&config)
        .write_stdin("9\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("between 1 and 2"));

    assert_eq!(std::fs::read_to_string(&config).unwrap(), CONFIG);
}

#[test]
fn non_numeric_choice_exits_one() {
    let (dir, config) = setup();

    switcher(dir.path())
        .arg("--config-file")
        .arg(&config)
        .write_stdin("abc\n")
        .assert()
        .code(1);

    assert_eq!(std::fs::read_to_string(&config).unwrap(), CONFIG);
}

#[test]
fn already_active_choice_exits_zero_without_backup() {
    let (dir, config) = setup();

    switcher(dir.path())
        .arg("--config-file")
        .arg(&config)
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("already active"));

    assert!(!dir.path().join("config.backup").exists());
}

#[test]
fn org_flag_switches_without_prompt() {
    let (dir, config) = setup();

    switcher(dir.path())
        .args(["--org", "personal"])
        .arg("--config-file")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter your choice").not());

    let content = std::fs::read_to_string(&config).unwrap();
    assert!(content.contains("## BEGIN PERSONAL\n[profile default]\n"));
}

#[test]
fn aws_config_file_env_is_honoured() {
    let (dir, config) = setup();

    switcher(dir.path())
        .env("AWS_CONFIG_FILE", &config)
        .arg("--list")
        .assert()
        .success()
        .stdout("✓ 1. Company A\n  2. Personal\n");
}

#[test]
fn default_path_is_under_home() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join(".aws")).unwrap();
    std::fs::write(dir.path().join(".aws").join("config"), CONFIG).unwrap();

    switcher(dir.path())
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2. Personal"));
}

#[test]
fn missing_config_file_exits_one() {
    let dir = tempfile::tempdir().unwrap();

    switcher(dir.path())
        .arg("--config-file")
        .arg(dir.path().join("nope"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("AWS config file not found"));
}

#[test]
fn file_without_markers_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config");
    std::fs::write(&config, "[default]\nregion = us-east-1\n").unwrap();

    switcher(dir.path())
        .arg("--config-file")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("## BEGIN ORGANIZATION_NAME"));
}

#[test]
fn settings_static_list_and_backup_suffix_are_used() {
    // Arrange: a settings file limiting the menu and changing the suffix
    let (dir, config) = setup();
    let settings = dir.path().join("settings.toml");
    std::fs::write(
        &settings,
        "[switcher]\nbackup_suffix = \".bak\"\n\n[groups]\norganizations = [\"PERSONAL\", \"COMPANY_A\"]\n",
    )
    .unwrap();

    // Act: menu entry 1 is now PERSONAL
    switcher(dir.path())
        .arg("--settings")
        .arg(&settings)
        .arg("--config-file")
        .arg(&config)
        .write_stdin("1\n")
        .assert()
        .success();

    // Assert
    assert!(dir.path().join("config.bak").exists());
    let content = std::fs::read_to_string(&config).unwrap();
    assert!(content.contains("## BEGIN PERSONAL\n[profile default]\n"));
}

#[test]
fn init_settings_writes_default_file() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("out").join("settings.toml");

    switcher(dir.path())
        .arg("--init-settings")
        .arg("--settings")
        .arg(&settings)
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings written to"));

    let content = std::fs::read_to_string(&settings).unwrap();
    assert!(content.contains("backup_suffix = \".backup\""));
}

#[test]
fn non_utf8_config_is_switched_byte_for_byte() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config");
    std::fs::write(
        &config,
        b"## BEGIN A\n# caf\xe9 note\n[profile a]\n## END A\n## BEGIN B\n#[profile b]\n## END B\n",
    )
    .unwrap();

    switcher(dir.path())
        .args(["--org", "B"])
        .arg("--config-file")
        .arg(&config)
        .assert()
        .success();

    assert_eq!(
        std::fs::read(&config).unwrap(),
        b"## BEGIN A\n# caf\xe9 note\n#[profile a]\n## END A\n## BEGIN B\n[profile b]\n## END B\n"
    );
}
