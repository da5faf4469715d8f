use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn erp_landing() -> assert_cmd::Command {
    cargo_bin_cmd!("erp-landing")
}

#[test]
fn writes_index_html_into_out_dir() {
    let temp = TempDir::new().expect("temp dir");
    let out = temp.path().join("public");

    erp_landing()
        .current_dir(temp.path())
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let html = fs::read_to_string(out.join("index.html")).expect("index.html written");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("@keyframes headline-enter"));
}

#[test]
fn static_stdout_has_no_keyframes() {
    let temp = TempDir::new().expect("temp dir");

    erp_landing()
        .current_dir(temp.path())
        .args(["--static", "--stdout"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("<!DOCTYPE html>")
                .and(predicate::str::contains("下一代企业资源规划研发平台"))
                .and(predicate::str::contains("@keyframes").not()),
        );

    assert!(!temp.path().join("dist").exists());
}

#[test]
fn picks_up_landing_toml_from_working_directory() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(
        temp.path().join("landing.toml"),
        "[page]\ntitle = \"Acme ERP\"\n\n[motion]\nenabled = false\n",
    )
    .expect("write config");

    erp_landing()
        .current_dir(temp.path())
        .arg("--stdout")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("<title>Acme ERP</title>")
                .and(predicate::str::contains("@keyframes").not()),
        );
}

#[test]
fn explicit_missing_config_fails() {
    let temp = TempDir::new().expect("temp dir");

    erp_landing()
        .current_dir(temp.path())
        .args(["--config", "missing.toml", "--stdout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading config missing.toml"));
}
