use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn tasklist(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tasklist").unwrap();
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("TASKLIST_LOG");
    cmd
}

#[test]
fn add_print_delete_end_persists_empty_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    tasklist(temp_dir.path())
        .write_stdin("add\nH\n2999-06-20\n09:00\nBuy milk\n\nprint\ndelete\n1\nend\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("|{:<44}|", "Buy milk")))
        .stdout(predicate::str::contains("The task is deleted"))
        .stdout(predicate::str::contains("Tasklist exiting!"));

    let saved = fs::read_to_string(temp_dir.path().join("tasklist.json")).unwrap();
    assert_eq!(saved, "[]");
}

#[test]
fn tasks_survive_a_restart() {
    let temp_dir = tempfile::tempdir().unwrap();

    tasklist(temp_dir.path())
        .write_stdin("add\nc\n2999-01-02\n23:59\nFile taxes\n\nend\n")
        .assert()
        .success();

    let saved = fs::read_to_string(temp_dir.path().join("tasklist.json")).unwrap();
    assert!(saved.contains(r#""priority":"C""#));
    assert!(saved.contains(r#""date":[2999,1,2]"#));
    assert!(saved.contains(r#""time":[23,59]"#));

    tasklist(temp_dir.path())
        .args(["--no-color"])
        .write_stdin("print\nend\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "| 1  | 2999-01-02 | 23:59 |   |   |File taxes",
        ));
}

#[test]
fn file_flag_selects_backing_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let custom = temp_dir.path().join("lists").join("work.json");

    tasklist(temp_dir.path())
        .arg("--file")
        .arg(&custom)
        .write_stdin("add\nL\n2999-03-15\n14:30\nShip it\n\nend\n")
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!temp_dir.path().join("tasklist.json").exists());
}

#[test]
fn invalid_input_is_reported_and_retried() {
    let temp_dir = tempfile::tempdir().unwrap();

    tasklist(temp_dir.path())
        .write_stdin("jump\nadd\nQ\nN\n2023-13-01\n2023-03-15\n25:00\n14:30\nRead\n\nend\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The input action is invalid"))
        .stdout(predicate::str::contains("The input date is invalid"))
        .stdout(predicate::str::contains("The input time is invalid"));
}

#[test]
fn empty_list_print_reports_no_tasks() {
    let temp_dir = tempfile::tempdir().unwrap();

    tasklist(temp_dir.path())
        .write_stdin("print\nedit\nend\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks have been input"))
        .stdout(predicate::str::contains("Input the task number").not());
}

#[test]
fn malformed_file_fails_at_startup() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("tasklist.json"), "not json").unwrap();

    tasklist(temp_dir.path())
        .write_stdin("end\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Serialization error"));

    let untouched = fs::read_to_string(temp_dir.path().join("tasklist.json")).unwrap();
    assert_eq!(untouched, "not json");
}

#[test]
fn closed_stdin_exits_without_saving() {
    let temp_dir = tempfile::tempdir().unwrap();

    tasklist(temp_dir.path())
        .write_stdin("add\nH\n2999-06-20\n09:00\nBuy milk\n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input closed"));

    assert!(!temp_dir.path().join("tasklist.json").exists());
}

#[test]
fn config_file_sets_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = temp_dir.path().join("tasklist-config.json");
    fs::write(&config, r#"{"file": "from-config.json", "color": false}"#).unwrap();

    tasklist(temp_dir.path())
        .arg("--config")
        .arg(&config)
        .write_stdin("end\n")
        .assert()
        .success();

    assert!(temp_dir.path().join("from-config.json").exists());
}

#[test]
fn rejects_out_of_range_offset() {
    let temp_dir = tempfile::tempdir().unwrap();

    tasklist(temp_dir.path())
        .args(["--utc-offset", "40"])
        .write_stdin("end\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("utc offset"));
}

#[test]
fn rejects_overflowing_offset_without_panicking() {
    let temp_dir = tempfile::tempdir().unwrap();

    tasklist(temp_dir.path())
        .args(["--utc-offset", "1000000"])
        .write_stdin("end\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("utc offset"));
}

#[test]
fn undecodable_input_is_an_invalid_action() {
    let temp_dir = tempfile::tempdir().unwrap();

    tasklist(temp_dir.path())
        .write_stdin(b"add\nH\n2999-06-20\n09:00\nBuy milk\n\n\xff\xfe\nend\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("The input action is invalid"))
        .stdout(predicate::str::contains("Tasklist exiting!"));

    let saved = fs::read_to_string(temp_dir.path().join("tasklist.json")).unwrap();
    assert!(saved.contains("Buy milk"));
}
