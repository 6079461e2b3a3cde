/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Write a config file that pins both sources to stub commands, so the
/// tests never depend on pacman/yay being installed.
fn write_stub_config(dir: &TempDir, official: &str, aur: &str) -> String {
    let path = dir.path().join("pacbar.config.yml");
    fs::write(
        &path,
        format!("official_command: {}\naur_command: {}\n", official, aur),
    )
    .unwrap();
    path.to_str().unwrap().to_string()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("pacbar").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("pacbar").arg("--version").assert().code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("pacbar")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("pacbar")
            .args(["-f", "invalid_format"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - explicitly named config file missing
    #[test]
    fn test_exit_code_application_error_missing_config() {
        cargo_bin_cmd!("pacbar")
            .args(["-c", "/nonexistent/pacbar.config.yml"])
            .assert()
            .code(3);
    }
}

#[test]
fn test_e2e_pending_updates_payload() {
    let dir = TempDir::new().unwrap();
    let config = write_stub_config(
        &dir,
        r#"["echo", "firefox 121.0-1 -> 122.0-1"]"#,
        r#"["true"]"#,
    );

    cargo_bin_cmd!("pacbar")
        .args(["-c", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\":\"🔄1\""))
        .stdout(predicate::str::contains("\"alt\":\"Updates: 1\""))
        .stdout(predicate::str::contains("\"class\":\"has-updates\""))
        .stdout(predicate::str::contains("firefox: 121.0-1 -> 122.0-1"));
}

#[test]
fn test_e2e_vendor_update_escalates_class() {
    let dir = TempDir::new().unwrap();
    let config = write_stub_config(
        &dir,
        r#"["echo", "nvidia-utils 550.54-1 -> 550.67-1"]"#,
        r#"["true"]"#,
    );

    cargo_bin_cmd!("pacbar")
        .args(["-c", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"class\":\"vendor-warning\""))
        .stdout(predicate::str::contains("NVIDIA DRIVER UPDATES"));
}

#[test]
fn test_e2e_no_updates_payload() {
    let dir = TempDir::new().unwrap();
    // `true` exits 0 with no output, `false` exits with the tooling's
    // "nothing pending" code
    let config = write_stub_config(&dir, r#"["true"]"#, r#"["false"]"#);

    cargo_bin_cmd!("pacbar")
        .args(["-c", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\":\"✅0\""))
        .stdout(predicate::str::contains("\"class\":\"no-updates\""))
        .stdout(predicate::str::contains("✅ System is up to date"));
}

#[test]
fn test_e2e_missing_tools_produce_clean_payload() {
    let dir = TempDir::new().unwrap();
    let config = write_stub_config(
        &dir,
        r#"["pacbar-e2e-no-such-tool"]"#,
        r#"["pacbar-e2e-no-such-tool-either"]"#,
    );

    cargo_bin_cmd!("pacbar")
        .args(["-c", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"class\":\"no-updates\""))
        .stderr(predicate::str::contains("Error").not());
}

#[test]
fn test_e2e_source_failure_logged_but_exit_zero() {
    let dir = TempDir::new().unwrap();
    let config = write_stub_config(
        &dir,
        r#"["sh", "-c", "echo boom >&2; exit 7"]"#,
        r#"["echo", "bat 0.24.0-1 -> 0.24.0-2"]"#,
    );

    cargo_bin_cmd!("pacbar")
        .args(["-c", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\":\"🔄1\""))
        .stderr(predicate::str::contains("official"))
        .stderr(predicate::str::contains("boom"));
}

#[test]
fn test_e2e_text_format_lists_everything() {
    let dir = TempDir::new().unwrap();
    let config = write_stub_config(
        &dir,
        r#"["echo", "firefox 121.0-1 -> 122.0-1"]"#,
        r#"["echo", "bat 0.24.0-1 -> 0.24.0-2"]"#,
    );

    cargo_bin_cmd!("pacbar")
        .args(["-c", &config, "-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Official Repository Updates:"))
        .stdout(predicate::str::contains("AUR Updates:"))
        .stdout(predicate::str::contains("Total updates available:"))
        .stdout(predicate::str::contains("- Official: 1"))
        .stdout(predicate::str::contains("- AUR: 1"));
}

#[test]
fn test_e2e_payload_is_single_json_line() {
    let dir = TempDir::new().unwrap();
    let config = write_stub_config(
        &dir,
        r#"["echo", "firefox 121.0-1 -> 122.0-1"]"#,
        r#"["true"]"#,
    );

    let output = cargo_bin_cmd!("pacbar")
        .args(["-c", &config])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end().lines().count(), 1);
    let value: serde_json::Value = serde_json::from_str(stdout.trim_end()).unwrap();
    assert_eq!(value["class"], "has-updates");
}
