//! Batch replace runs over a corpus on disk
//!
//! These tests verify that:
//! - Outputs mirror the corpus layout with every placeholder replaced
//! - A failing document does not affect the others
//! - Run-level problems abort before anything is written
//! - Seeded runs are reproducible regardless of worker count
//! - Audit, verification and dry-run modes behave as configured

mod common;

use common::Workspace;
use phi_surrogates::config::PhiSurrogatesConfig;
use phi_surrogates::core::replace::{ReplaceCoordinator, ReplaceErrorType, ReplaceSummary};
use phi_surrogates::domain::SurrogateError;
use phi_surrogates::surrogate::rewriter::has_residual_placeholders;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tokio::sync::watch;

const NOTE_A: &str = "Admitted to [**Hospital1 4**] on [**2150-3-5**].\n\
                      Discharged from [**Hospital1 4**] by Dr. [**Last Name (NamePattern1) 12**].\n";
const NOTE_B: &str = "Age: [**Age over 90 1**]\r\nCall [**Telephone/Fax (1) 3**]\r\n";
const NOTE_C: &str = "No placeholders in this note.\n";

fn seed_corpus(ws: &Workspace) {
    common::write_corpus(
        &ws.input,
        &[
            ("01/00042/a.txt", NOTE_A.as_bytes()),
            ("01/00042/b.txt", NOTE_B.as_bytes()),
            ("02/00007/c.txt", NOTE_C.as_bytes()),
            ("02/00007/skip.csv", b"[**Hospital1 4**]"),
        ],
    );
}

async fn run(config: PhiSurrogatesConfig) -> ReplaceSummary {
    let (_tx, rx) = watch::channel(false);
    ReplaceCoordinator::new(config, rx)
        .unwrap()
        .execute_replace()
        .await
        .unwrap()
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

#[tokio::test]
async fn test_full_run_mirrors_corpus() {
    let temp_dir = TempDir::new().unwrap();
    let ws = Workspace::new(temp_dir.path());
    seed_corpus(&ws);

    let summary = run(ws.config()).await;

    assert!(summary.is_successful());
    assert_eq!(summary.total_documents, 3);
    assert_eq!(summary.successful_documents, 3);
    assert_eq!(summary.total_placeholders, 6);
    assert_eq!(summary.written_documents.len(), 3);

    let a = read(&ws.output, "01/00042/a.txt");
    let b = read(&ws.output, "01/00042/b.txt");
    let c = read(&ws.output, "02/00007/c.txt");

    assert!(!has_residual_placeholders(&a).unwrap());
    assert!(!has_residual_placeholders(&b).unwrap());
    assert_eq!(c, NOTE_C);
    assert!(a.contains(" on 2150-3-5.\n"));
    assert!(b.starts_with("Age: ") && b.contains("\r\nCall "));
    assert!(!ws.output.join("02/00007/skip.csv").exists());

    // The input corpus is never modified
    assert_eq!(read(&ws.input, "01/00042/a.txt"), NOTE_A);
}

#[tokio::test]
async fn test_repeated_placeholder_consistent_in_output() {
    let temp_dir = TempDir::new().unwrap();
    let ws = Workspace::new(temp_dir.path());
    seed_corpus(&ws);

    run(ws.config()).await;

    let a = read(&ws.output, "01/00042/a.txt");
    let first = a
        .lines()
        .next()
        .and_then(|l| l.strip_prefix("Admitted to "))
        .and_then(|l| l.split(" on ").next())
        .unwrap();
    let second = a
        .lines()
        .nth(1)
        .and_then(|l| l.strip_prefix("Discharged from "))
        .and_then(|l| l.split(" by Dr. ").next())
        .unwrap();

    assert_eq!(first, second);
    assert!(common::hospitals().contains(&first));
}

#[tokio::test]
async fn test_invalid_document_is_isolated() {
    let temp_dir = TempDir::new().unwrap();
    let ws = Workspace::new(temp_dir.path());
    seed_corpus(&ws);
    common::write_corpus(&ws.input, &[("03/bad.txt", &[0x66, 0xff, 0xfe, 0x0a])]);

    let summary = run(ws.config()).await;

    assert!(!summary.is_successful());
    assert_eq!(summary.total_documents, 4);
    assert_eq!(summary.successful_documents, 3);
    assert_eq!(summary.failed_documents, 1);
    assert_eq!(summary.errors[0].error_type, ReplaceErrorType::Decode);
    assert_eq!(summary.errors[0].document.as_deref(), Some("03/bad.txt"));
    assert!(!ws.output.join("03/bad.txt").exists());
    assert!(ws.output.join("01/00042/a.txt").exists());
}

#[tokio::test]
async fn test_empty_list_fails_only_documents_needing_it() {
    let temp_dir = TempDir::new().unwrap();
    let ws = Workspace::new(temp_dir.path());
    seed_corpus(&ws);
    fs::write(ws.lists.join("data.medicare.gov/hospitals.lst"), "").unwrap();

    let summary = run(ws.config()).await;

    assert_eq!(summary.successful_documents, 2);
    assert_eq!(summary.failed_documents, 1);
    assert_eq!(summary.errors[0].error_type, ReplaceErrorType::Rewrite);
    assert_eq!(summary.errors[0].document.as_deref(), Some("01/00042/a.txt"));
}

#[tokio::test]
async fn test_missing_list_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let ws = Workspace::new(temp_dir.path());
    seed_corpus(&ws);
    fs::remove_file(ws.lists.join("misc/holidays.lst")).unwrap();

    let (_tx, rx) = watch::channel(false);
    let err = ReplaceCoordinator::new(ws.config(), rx).err().unwrap();

    assert!(err.is_fatal());
    assert!(!ws.output.exists());
}

#[tokio::test]
async fn test_existing_output_dir_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let ws = Workspace::new(temp_dir.path());
    seed_corpus(&ws);
    fs::create_dir_all(&ws.output).unwrap();
    fs::write(ws.output.join("keep.txt"), "previous run").unwrap();

    let (_tx, rx) = watch::channel(false);
    let err = ReplaceCoordinator::new(ws.config(), rx)
        .unwrap()
        .execute_replace()
        .await
        .unwrap_err();

    assert!(err.is_fatal());
    assert_eq!(read(&ws.output, "keep.txt"), "previous run");
    assert!(!ws.output.join("01").exists());
}

#[tokio::test]
async fn test_audit_log_inside_output_dir_rejected_before_any_write() {
    let temp_dir = TempDir::new().unwrap();
    let ws = Workspace::new(temp_dir.path());
    seed_corpus(&ws);

    let mut config = ws.config();
    config.audit.enabled = true;
    config.audit.log_path = ws.output.join("audit/surrogates.log");

    let (_tx, rx) = watch::channel(false);
    let err = ReplaceCoordinator::new(config, rx).err().unwrap();

    assert!(matches!(err, SurrogateError::Configuration(_)));
    assert!(!ws.output.exists());
}

#[tokio::test]
async fn test_seeded_runs_reproducible_across_worker_counts() {
    let temp_dir = TempDir::new().unwrap();
    let ws = Workspace::new(temp_dir.path());
    seed_corpus(&ws);

    let mut single = ws.config();
    single.surrogate.seed = Some(42);
    single.replace.workers = 1;
    single.replace.output_dir = Some(temp_dir.path().join("out-1"));

    let mut many = ws.config();
    many.surrogate.seed = Some(42);
    many.replace.workers = 8;
    many.replace.output_dir = Some(temp_dir.path().join("out-8"));

    run(single).await;
    run(many).await;

    for relative in ["01/00042/a.txt", "01/00042/b.txt", "02/00007/c.txt"] {
        assert_eq!(
            read(&temp_dir.path().join("out-1"), relative),
            read(&temp_dir.path().join("out-8"), relative),
            "{relative}"
        );
    }
}

#[tokio::test]
async fn test_audit_log_records_documents_without_text() {
    let temp_dir = TempDir::new().unwrap();
    let ws = Workspace::new(temp_dir.path());
    seed_corpus(&ws);

    let audit_path = temp_dir.path().join("audit/surrogates.log");
    let mut config = ws.config();
    config.audit.enabled = true;
    config.audit.log_path = audit_path.clone();

    run(config).await;

    let content = fs::read_to_string(&audit_path).unwrap();
    let entries: Vec<serde_json::Value> = content
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(entries.len(), 3);
    let a = entries
        .iter()
        .find(|e| e["document"] == "01/00042/a.txt")
        .unwrap();
    assert_eq!(a["placeholders"], 4);
    assert_eq!(a["input_sha256"].as_str().unwrap().len(), 64);

    assert!(!content.contains("[**"));
    assert!(!content.contains("Hospital1"));
    for hospital in common::hospitals() {
        assert!(!content.contains(hospital));
    }
}

#[tokio::test]
async fn test_verification_passes_on_clean_run() {
    let temp_dir = TempDir::new().unwrap();
    let ws = Workspace::new(temp_dir.path());
    seed_corpus(&ws);

    let mut config = ws.config();
    config.verification.enable_verification = true;

    let summary = run(config).await;
    let report = summary.verification_report.as_ref().unwrap();

    assert_eq!(report.total_verified, 3);
    assert_eq!(report.passed, 3);
    assert!(report.is_success());
    assert!(summary.is_successful());
}

#[tokio::test]
async fn test_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let ws = Workspace::new(temp_dir.path());
    seed_corpus(&ws);
    common::write_corpus(&ws.input, &[("03/odd.txt", b"[**Mystery**] [**Hospital1 4**]")]);

    let mut config = ws.config();
    config.application.dry_run = true;
    config.audit.enabled = true;
    config.audit.log_path = temp_dir.path().join("audit/surrogates.log");

    let summary = run(config).await;
    let report = summary.dry_run_report.as_ref().unwrap();

    assert!(!ws.output.exists());
    assert!(!temp_dir.path().join("audit").exists());
    assert_eq!(report.total_documents, 4);
    assert_eq!(report.documents_with_placeholders, 3);
    assert_eq!(report.total_placeholders, 8);
    assert_eq!(report.unrecognized, 1);
    assert_eq!(report.unrecognized_samples, vec!["[**Mystery**]".to_string()]);
}

#[tokio::test]
async fn test_empty_corpus() {
    let temp_dir = TempDir::new().unwrap();
    let ws = Workspace::new(temp_dir.path());

    let summary = run(ws.config()).await;

    assert!(summary.is_successful());
    assert_eq!(summary.total_documents, 0);
    assert!(ws.output.is_dir());
}
