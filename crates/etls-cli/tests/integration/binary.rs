//! End-to-end tests running the compiled `etls` binary.

use crate::common::{SAMPLE_CONFIG, SAMPLE_LISTING, TestHarness};

#[test]
fn test_binary_list_success() {
    let harness = TestHarness::new();
    let path = harness.write_config("jobs.toml", SAMPLE_CONFIG);

    let output = harness.run_etls(&["--config", path.to_str().unwrap(), "list"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), SAMPLE_LISTING);
}

#[test]
fn test_binary_list_uses_local_file() {
    let harness = TestHarness::new();
    harness.write_config("etls.toml", "[etls.etl_classes]\nMyCoolEtl = 'App\\Etls\\MyCoolEtl'\n");

    let output = harness.run_etls(&["list"]);

    assert!(output.status.success());
    assert_eq!(
        output.stdout,
        b"my-cool-etl found in class App\\Etls\\MyCoolEtl\n"
    );
}

#[test]
fn test_binary_list_alias() {
    let harness = TestHarness::new();
    let path = harness.write_config("etls.toml", SAMPLE_CONFIG);

    let output = harness.run_etls(&["etls:list", "-c", path.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), SAMPLE_LISTING);
}

#[test]
fn test_binary_empty_registry_exits_zero() {
    let harness = TestHarness::new();
    let path = harness.write_config("etls.toml", "[etls.etl_classes]\n");

    let output = harness.run_etls(&["--config", path.to_str().unwrap(), "list"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_binary_missing_key_exits_nonzero() {
    let harness = TestHarness::new();
    let path = harness.write_config("etls.toml", "[etls]\n");

    let output = harness.run_etls(&["--config", path.to_str().unwrap(), "list"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("etls.etl_classes"));
}

#[test]
fn test_binary_missing_file_exits_nonzero() {
    let harness = TestHarness::new();
    let missing = harness.dir.path().join("absent.toml");

    let output = harness.run_etls(&["--config", missing.to_str().unwrap(), "list"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr).unwrap().contains("does not exist"));
}

#[test]
fn test_binary_verbose_logs_to_stderr_only() {
    let harness = TestHarness::new();
    let path = harness.write_config("etls.toml", SAMPLE_CONFIG);

    let output = harness.run_etls(&["-v", "--config", path.to_str().unwrap(), "list"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), SAMPLE_LISTING);
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_binary_config_path_explicit() {
    let harness = TestHarness::new();
    let path = harness.write_config("etls.toml", SAMPLE_CONFIG);

    let output = harness.run_etls(&["config", "path", "--config", path.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap().trim_end(),
        path.to_str().unwrap()
    );
}
