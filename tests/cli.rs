use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn drawpad_cmd() -> Command {
    Command::cargo_bin("drawpad").expect("binary exists")
}

#[test]
fn drawpad_help_prints_usage() {
    drawpad_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Freehand drawing pad configuration tool",
        ));
}

#[test]
fn config_flag_requires_show_config() {
    drawpad_cmd()
        .args(["--config", "somewhere.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn init_config_writes_into_config_home() {
    let temp = TempDir::new().unwrap();

    drawpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let written = temp.path().join("drawpad").join("config.toml");
    let contents = std::fs::read_to_string(written).unwrap();
    assert!(contents.contains("eraser_size = 10.0"));

    drawpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn show_config_prints_clamped_values() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pad.toml");
    std::fs::write(&path, "[pad]\neraser_size = 1000.0\ncolors = [\"red\"]\n").unwrap();

    drawpad_cmd()
        .arg("--show-config")
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("eraser_size = 200.0"))
        .stdout(predicate::str::contains("\"red\""));
}

#[test]
fn show_config_without_file_uses_defaults() {
    let temp = TempDir::new().unwrap();

    drawpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("#2ecc71"))
        .stdout(predicate::str::contains("line_cap = \"round\""));
}
