use nk_factory::compiler::{cleanup_artifacts, poll_status_file};
use std::fs;
use std::path::PathBuf;

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("nk_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn status_file_success_roundtrip() {
    let dir = test_dir("status_ok");
    let file = dir.join("status.txt");
    fs::write(&file, "SUCCESS\n").unwrap();

    assert_eq!(poll_status_file(&file), Some(true));
    // Consumed on read.
    assert!(!file.exists());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn status_file_failure_roundtrip() {
    let dir = test_dir("status_fail");
    let file = dir.join("status.txt");
    fs::write(&file, "FAILED").unwrap();

    assert_eq!(poll_status_file(&file), Some(false));
    assert!(!file.exists());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn status_file_ignores_partial_content() {
    let dir = test_dir("status_partial");
    let file = dir.join("status.txt");
    fs::write(&file, "RUNNING").unwrap();

    assert_eq!(poll_status_file(&file), None);
    // Left in place until a final token appears.
    assert!(file.exists());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn status_file_absent_is_not_an_outcome() {
    let dir = test_dir("status_absent");
    assert_eq!(poll_status_file(&dir.join("nope.txt")), None);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn cleanup_removes_intermediate_directories() {
    let dir = test_dir("cleanup");
    fs::create_dir_all(dir.join("build")).unwrap();
    fs::create_dir_all(dir.join("app.build")).unwrap();
    fs::create_dir_all(dir.join("__pycache__")).unwrap();
    fs::create_dir_all(dir.join("app.dist")).unwrap();
    fs::write(dir.join("app.py"), "print('hi')\n").unwrap();

    cleanup_artifacts(&dir);

    assert!(!dir.join("build").exists());
    assert!(!dir.join("app.build").exists());
    assert!(!dir.join("__pycache__").exists());
    // The distributable output and the script stay.
    assert!(dir.join("app.dist").exists());
    assert!(dir.join("app.py").exists());
    let _ = fs::remove_dir_all(&dir);
}
