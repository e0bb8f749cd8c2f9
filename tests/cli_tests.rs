//! End-to-end tests for the oddslib binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary with a clean environment rooted in `dir`
fn oddslib(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("oddslib").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("INPUT_ODDS_FORMAT")
        .env_remove("OUTPUT_ODDS_FORMAT")
        .env_remove("ODDSLIB_CONFIG")
        .env_remove("ODDSLIB_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_convert_american_to_fractional() {
    let dir = TempDir::new().unwrap();
    oddslib(&dir)
        .args(["convert", "--from", "american", "--to", "fractional", "110", "-200"])
        .assert()
        .success()
        .stdout("11/10\n1/2\n");
}

#[test]
fn test_convert_defaults_to_american() {
    let dir = TempDir::new().unwrap();
    oddslib(&dir)
        .args(["convert", "-110"])
        .assert()
        .success()
        .stdout("-110\n");
}

#[test]
fn test_convert_reads_environment() {
    let dir = TempDir::new().unwrap();
    oddslib(&dir)
        .env("INPUT_ODDS_FORMAT", "fractional")
        .env("OUTPUT_ODDS_FORMAT", "DECIMAL")
        .args(["convert", "5/2", "1/4"])
        .assert()
        .success()
        .stdout("3.5\n1.25\n");
}

#[test]
fn test_flag_beats_environment_and_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("oddslib.toml"),
        "[odds]\ninput_format = \"fractional\"\noutput_format = \"fractional\"\n",
    )
    .unwrap();

    oddslib(&dir)
        .args(["convert", "3/2"])
        .assert()
        .success()
        .stdout("3/2\n");

    oddslib(&dir)
        .env("OUTPUT_ODDS_FORMAT", "american")
        .args(["convert", "3/2"])
        .assert()
        .success()
        .stdout("+150\n");

    oddslib(&dir)
        .env("OUTPUT_ODDS_FORMAT", "american")
        .args(["convert", "--to", "decimal", "3/2"])
        .assert()
        .success()
        .stdout("2.5\n");
}

#[test]
fn test_config_path_is_logged() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("oddslib.toml"), "[log]\nlevel = \"info\"\n").unwrap();

    oddslib(&dir)
        .args(["convert", "-110"])
        .assert()
        .success()
        .stdout("-110\n")
        .stderr(predicate::str::contains("Loaded configuration from"));
}

#[test]
fn test_convert_json_output() {
    let dir = TempDir::new().unwrap();
    let output = oddslib(&dir)
        .args(["convert", "--from", "decimal", "--to", "fractional", "--json", "3.5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["from"], "decimal");
    assert_eq!(report["to"], "fractional");
    assert_eq!(report["results"][0]["input"], "3.5");
    assert_eq!(report["results"][0]["decimal"], 3.5);
    assert_eq!(report["results"][0]["output"], "5/2");
}

#[test]
fn test_convert_rejects_bad_quotes() {
    let dir = TempDir::new().unwrap();
    oddslib(&dir)
        .args(["convert", "--from", "american", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "American odds must be <= -100 or >= 100; received: 50.0",
        ));

    oddslib(&dir)
        .args(["convert", "--from", "decimal", "0.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Decimal odds must be >= 1.0"));
}

#[test]
fn test_unknown_format_rejected() {
    let dir = TempDir::new().unwrap();
    oddslib(&dir)
        .args(["convert", "--from", "hongkong", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported odds format: hongkong"));
}

#[test]
fn test_implied_summary() {
    let dir = TempDir::new().unwrap();
    oddslib(&dir)
        .args(["implied", "--from", "decimal", "2", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("50.00%"))
        .stdout(predicate::str::contains("Overround: 0.00%"));
}

#[test]
fn test_implied_json() {
    let dir = TempDir::new().unwrap();
    let output = oddslib(&dir)
        .args(["implied", "--json", "-110", "-110"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["legs"].as_array().unwrap().len(), 2);
    let fair = summary["legs"][0]["fair_probability"].as_f64().unwrap();
    assert!((fair - 0.5).abs() < 1e-12);
}

#[test]
fn test_docs_dry_run_plans() {
    let dir = TempDir::new().unwrap();
    oddslib(&dir)
        .args(["docs", "build", "--dry-run"])
        .assert()
        .success()
        .stdout("sphinx-build -b html docs docs/_build/html\n");

    oddslib(&dir)
        .args(["docs", "multiversion", "--dry-run"])
        .assert()
        .success()
        .stdout("rm -rf docs/_build\nsphinx-multiversion docs docs/_build/html\n");

    oddslib(&dir)
        .args(["docs", "live", "--dry-run", "--source-dir", "site", "--build-dir", "out"])
        .assert()
        .success()
        .stdout("sphinx-autobuild site out/html\n");
}

#[test]
fn test_docs_clean_removes_build_dir() {
    let dir = TempDir::new().unwrap();
    let html = dir.path().join("docs").join("_build").join("html");
    std::fs::create_dir_all(&html).unwrap();
    std::fs::write(html.join("index.html"), "<html></html>").unwrap();

    oddslib(&dir).args(["docs", "clean"]).assert().success();
    assert!(!dir.path().join("docs").join("_build").exists());
    assert!(dir.path().join("docs").exists());

    // Already clean
    oddslib(&dir).args(["docs", "clean"]).assert().success();
}

#[test]
fn test_docs_missing_builder_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("oddslib.toml"),
        "[docs]\nsphinx_build = \"oddslib-no-such-sphinx-build\"\n",
    )
    .unwrap();

    oddslib(&dir)
        .args(["docs", "build"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Documentation tool not found"));
}
