//! End-to-end tests for `run_export`.

use tempfile::TempDir;
use whois_csv::whois::CONTACT_ROW_COUNT;
use whois_csv::{run_export, Config, CsvQuoting};

#[path = "helpers.rs"]
mod helpers;

use helpers::{assert_row_shape, offline_config, write_input, SAMPLE_WHOIS};

#[test]
fn test_run_export_from_saved_input() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(temp_dir.path(), "example.com.txt", SAMPLE_WHOIS);
    let config = offline_config("example.com", input, temp_dir.path());

    let report = run_export(&config).expect("run_export should succeed");

    assert_eq!(report.domain, "example.com");
    assert_eq!(report.output_path, temp_dir.path().join("example.com.csv"));
    assert_eq!(report.rows, CONTACT_ROW_COUNT);
    assert_eq!(report.populated_fields, 15);
    assert!(report.lookup_succeeded);

    let csv = std::fs::read_to_string(&report.output_path).expect("Failed to read CSV");
    assert_eq!(csv.lines().count(), CONTACT_ROW_COUNT);
    assert!(csv.starts_with("Registrant Name,Jane Doe\n"));
    assert_row_shape(&csv);
}

#[test]
fn test_run_export_twice_is_byte_identical() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(temp_dir.path(), "in.txt", SAMPLE_WHOIS);
    let config = offline_config("example.com", input, temp_dir.path());

    let first = run_export(&config).expect("first run");
    let first_bytes = std::fs::read(&first.output_path).expect("read first");
    let second = run_export(&config).expect("second run");
    let second_bytes = std::fs::read(&second.output_path).expect("read second");

    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_run_export_missing_input_writes_empty_template() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = offline_config(
        "example.org",
        temp_dir.path().join("does-not-exist.txt"),
        temp_dir.path(),
    );

    let report = run_export(&config).expect("lookup failure is not fatal");

    assert!(!report.lookup_succeeded);
    assert_eq!(report.populated_fields, 0);
    let csv = std::fs::read_to_string(&report.output_path).expect("Failed to read CSV");
    assert_eq!(csv.lines().count(), CONTACT_ROW_COUNT);
    assert!(csv.lines().all(|line| line.ends_with(',')));
}

#[test]
fn test_run_export_missing_whois_program_writes_empty_template() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config {
        domain: "example.net".to_string(),
        whois_command: "whois-csv-test-no-such-program".to_string(),
        output_dir: temp_dir.path().to_path_buf(),
        ..Default::default()
    };

    let report = run_export(&config).expect("missing client is not fatal");

    assert!(!report.lookup_succeeded);
    assert!(report.output_path.exists());
    let csv = std::fs::read_to_string(&report.output_path).expect("Failed to read CSV");
    assert_eq!(csv.lines().count(), CONTACT_ROW_COUNT);
}

#[test]
fn test_run_export_empty_domain_writes_dot_csv() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(temp_dir.path(), "in.txt", "");
    let config = offline_config("", input, temp_dir.path());

    let report = run_export(&config).expect("empty domain is not validated");

    assert_eq!(report.output_path, temp_dir.path().join(".csv"));
    assert!(report.output_path.exists());
}

#[test]
fn test_run_export_unwritable_destination_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(temp_dir.path(), "in.txt", SAMPLE_WHOIS);
    let config = offline_config("example.com", input, &temp_dir.path().join("missing-dir"));

    let err = run_export(&config).expect_err("missing output directory should fail");
    assert!(format!("{:#}", err).contains("example.com.csv"));
}

#[test]
fn test_run_export_rfc4180_quoting() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(
        temp_dir.path(),
        "in.txt",
        "Registrant Organization: Example, Inc.\n",
    );
    let config = Config {
        quoting: CsvQuoting::Rfc4180,
        ..offline_config("example.com", input, temp_dir.path())
    };

    let report = run_export(&config).expect("run_export should succeed");
    let csv = std::fs::read_to_string(&report.output_path).expect("Failed to read CSV");
    assert!(csv.contains("Registrant Organization,\"Example, Inc.\"\n"));
}

#[cfg(unix)]
#[test]
fn test_run_export_through_whois_command() {
    // A stub client that ignores its argument and prints a fixed record
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let script = write_input(
        temp_dir.path(),
        "fake-whois.sh",
        "#!/bin/sh\nprintf 'Admin Name: Stub for %s\\nAdmin Email: admin@example.com\\n' \"$1\"\n",
    );
    let mut perms = std::fs::metadata(&script).expect("stat script").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&script, perms).expect("chmod script");

    let config = Config {
        domain: "example.com".to_string(),
        whois_command: script.to_string_lossy().into_owned(),
        output_dir: temp_dir.path().to_path_buf(),
        ..Default::default()
    };

    let report = run_export(&config).expect("run_export should succeed");
    assert!(report.lookup_succeeded);
    assert_eq!(report.populated_fields, 2);

    let csv = std::fs::read_to_string(&report.output_path).expect("Failed to read CSV");
    assert!(csv.contains("Admin Name,Stub for example.com\n"));
    assert!(csv.contains("Admin Email,admin@example.com\n"));
}
