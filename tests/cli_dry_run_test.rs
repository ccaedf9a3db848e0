//! Dry-run output of the `replace` command
//!
//! These tests verify that:
//! - `--dry-run --json` writes only the JSON report to stdout
//! - Status lines still reach the operator on stderr
//! - Nothing is written under the output root

mod common;

use common::Workspace;
use std::process::Command;
use tempfile::TempDir;

fn replace_command(ws: &Workspace, root: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_phi-surrogates"));
    cmd.arg("--config")
        .arg(root.join("absent.toml"))
        .arg("replace")
        .arg("--input-dir")
        .arg(&ws.input)
        .arg("--output-dir")
        .arg(&ws.output)
        .arg("--list-dir")
        .arg(&ws.lists)
        .arg("--dry-run");
    cmd
}

#[test]
fn test_json_dry_run_stdout_is_only_the_report() {
    let temp_dir = TempDir::new().unwrap();
    let ws = Workspace::new(temp_dir.path());
    common::write_corpus(
        &ws.input,
        &[
            ("01/a.txt", b"Seen at [**Hospital1 4**] on [**2150-3-5**]."),
            ("02/b.txt", b"[**Mystery**] and [**Street Address**]"),
        ],
    );

    let output = replace_command(&ws, temp_dir.path())
        .arg("--json")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_documents"], 2);
    assert_eq!(report["total_placeholders"], 4);
    assert_eq!(report["unrecognized"], 1);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DRY RUN MODE"));
    assert!(stderr.contains("Replace completed successfully"));
    assert!(!ws.output.exists());
}

#[test]
fn test_console_dry_run_keeps_banner_on_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let ws = Workspace::new(temp_dir.path());
    common::write_corpus(&ws.input, &[("a.txt", b"[**Hospital1 4**]")]);

    let output = replace_command(&ws, temp_dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("🔍 DRY RUN MODE"));
    assert!(serde_json::from_slice::<serde_json::Value>(&output.stdout).is_err());
}
