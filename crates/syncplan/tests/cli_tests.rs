use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const HELLO_SHA256: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

fn syncplan() -> Command {
    Command::cargo_bin("syncplan").unwrap()
}

/// Local tree plus a manifest covering every decision-table row.
fn fixture() -> (TempDir, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("root");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("same.txt"), "hello").unwrap();
    fs::write(root.join("changed.txt"), "hello").unwrap();
    fs::write(root.join("new.txt"), "hello").unwrap();

    let manifest = tmp.path().join("remote.toml");
    fs::write(
        &manifest,
        format!(
            "[files]\n\"same.txt\" = \"{HELLO_SHA256}\"\n\"changed.txt\" = \"0000\"\n\"gone.txt\" = \"{HELLO_SHA256}\"\n"
        ),
    )
    .unwrap();

    (tmp, manifest)
}

fn root(tmp: &TempDir) -> std::path::PathBuf {
    tmp.path().join("root")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_help_output() {
    syncplan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("File Synchronization Planner"))
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version_output() {
    syncplan()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_plan_text_output() {
    let (tmp, manifest) = fixture();
    let root = root(&tmp);

    syncplan()
        .args(["--no-config", "plan", "--root", path_arg(&root)])
        .args(["--remote", path_arg(&manifest), "new.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing  same.txt"))
        .stdout(predicate::str::contains("upload   changed.txt"))
        .stdout(predicate::str::contains("upload   new.txt"))
        .stdout(predicate::str::contains("delete   gone.txt"))
        .stdout(predicate::str::contains("Upload:   2"))
        .stdout(predicate::str::contains("Delete:   1"))
        .stdout(predicate::str::contains("Nothing:  1"))
        .stdout(predicate::str::contains("✓ Success"));
}

#[test]
fn test_plan_json_output() {
    let (tmp, manifest) = fixture();
    let root = root(&tmp);

    let output = syncplan()
        .args(["--no-config", "plan", "--format", "json", "--root", path_arg(&root)])
        .args(["--remote", path_arg(&manifest), "new.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 4);

    let action_of = |name: &str| {
        entries
            .iter()
            .find(|e| e["path"] == name)
            .map(|e| e["action"].as_str().unwrap().to_string())
            .unwrap()
    };
    assert_eq!(action_of("same.txt"), "nothing");
    assert_eq!(action_of("changed.txt"), "upload");
    assert_eq!(action_of("new.txt"), "upload");
    assert_eq!(action_of("gone.txt"), "delete");
    assert!(json["errors"].as_array().unwrap().is_empty());
}

#[test]
fn test_plan_json_manifest() {
    let tmp = TempDir::new().unwrap();
    let manifest = tmp.path().join("remote.json");
    fs::write(&manifest, r#"{"files": {"only-remote.txt": "abc"}}"#).unwrap();

    syncplan()
        .args(["--no-config", "plan", "--root", path_arg(tmp.path())])
        .args(["--remote", path_arg(&manifest)])
        .assert()
        .success()
        .stdout(predicate::str::contains("delete   only-remote.txt"));
}

#[test]
fn test_plan_without_manifest_fails() {
    syncplan()
        .args(["--no-config", "plan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No remote manifest"));
}

#[test]
fn test_plan_with_unreadable_manifest_fails() {
    let tmp = TempDir::new().unwrap();

    syncplan()
        .args(["--no-config", "plan", "--remote"])
        .arg(tmp.path().join("missing.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn test_plan_uses_manifest_from_config() {
    let (tmp, manifest) = fixture();
    let root = root(&tmp);
    let config = tmp.path().join("syncplan.toml");
    fs::write(
        &config,
        format!("remote_manifest = {:?}\n", path_arg(&manifest)),
    )
    .unwrap();

    syncplan()
        .args(["--config", path_arg(&config), "plan", "--root", path_arg(&root)])
        .assert()
        .success()
        .stdout(predicate::str::contains("delete   gone.txt"));
}

#[test]
fn test_plan_cur_dir_candidate_is_one_file() {
    let (tmp, manifest) = fixture();
    let root = root(&tmp);

    let output = syncplan()
        .args(["--no-config", "plan", "--format", "json", "--root", path_arg(&root)])
        .args(["--remote", path_arg(&manifest), "./same.txt", "./new.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = json["entries"].as_array().unwrap();
    let same: Vec<_> = entries
        .iter()
        .filter(|e| e["path"].as_str().unwrap().ends_with("same.txt"))
        .collect();
    assert_eq!(same.len(), 1);
    assert_eq!(same[0]["path"], "same.txt");
    assert_eq!(same[0]["action"], "nothing");
    assert_eq!(entries.len(), 4);
}

#[test]
fn test_plan_rejects_candidate_outside_root() {
    let (tmp, manifest) = fixture();
    let root = root(&tmp);

    syncplan()
        .args(["--no-config", "plan", "--root", path_arg(&root)])
        .args(["--remote", path_arg(&manifest), "../remote.toml"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Errors (1):"))
        .stdout(predicate::str::contains(".."))
        .stderr(predicate::str::contains("1 file(s) could not be planned"));
}

#[test]
fn test_config_manifest_is_relative_to_config_file() {
    let (tmp, _manifest) = fixture();
    let root = root(&tmp);
    let config_dir = tmp.path().join("conf");
    fs::create_dir_all(&config_dir).unwrap();
    let config = config_dir.join("syncplan.toml");
    fs::write(&config, "remote_manifest = \"../remote.toml\"\n").unwrap();

    syncplan()
        .current_dir(&root)
        .args(["--config", path_arg(&config), "plan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("delete   gone.txt"));
}

#[test]
fn test_invalid_format() {
    syncplan()
        .args(["plan", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'xml'"));
}

#[test]
fn test_config_command_defaults() {
    syncplan()
        .args(["--no-config", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hash_buffer_size = 8192"))
        .stdout(predicate::str::contains("remote_manifest").not());
}

#[test]
fn test_config_command_reads_file() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("custom.toml");
    fs::write(&config, "hash_buffer_size = 4096\n").unwrap();

    syncplan()
        .args(["--config", path_arg(&config), "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hash_buffer_size = 4096"));
}

#[test]
fn test_invalid_config_file_fails() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("custom.toml");
    fs::write(&config, "hash_buffer_size = 0\n").unwrap();

    syncplan()
        .args(["--config", path_arg(&config), "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hash_buffer_size"));
}

#[test]
fn test_config_and_no_config_conflict() {
    syncplan()
        .args(["--config", "x.toml", "--no-config", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
