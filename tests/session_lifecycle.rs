// End-to-end startup and write-back scenarios against a scratch directory.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;
use xdg_history_shell::{Error, Session, SessionConfig};

fn config_for(data_home: &Path) -> SessionConfig {
    SessionConfig::resolve(Some(data_home.as_os_str().to_owned()), None).unwrap()
}

fn entries(session: &Session) -> Vec<String> {
    session.entries().cloned().collect()
}

// Saved history lines, without the line editor's format header.
fn saved_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| *l != "#V2")
        .map(String::from)
        .collect()
}

#[test]
fn missing_data_home_is_created_with_empty_history() {
    let root = tempdir().unwrap();
    let data_home = root.path().join("testhome/data");

    let session = Session::open(config_for(&data_home)).unwrap();

    let expected = data_home.join("python_history");
    assert_eq!(session.history_path(), expected.as_path());
    assert!(expected.is_file());
    assert_eq!(session.len(), 0);
}

#[test]
fn existing_data_home_gets_the_file_directly_under_it() {
    let root = tempdir().unwrap();

    let session = Session::open(config_for(root.path())).unwrap();

    assert_eq!(session.history_path(), root.path().join("python_history").as_path());
    let children: Vec<PathBuf> = fs::read_dir(root.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(children, [root.path().join("python_history")]);
}

#[test]
fn unset_data_home_uses_local_share_under_home() {
    let home = tempdir().unwrap();
    let config = SessionConfig::resolve(None, Some(home.path().to_path_buf())).unwrap();
    assert_eq!(
        config.history_path,
        home.path().join(".local/share/python_history")
    );

    let session = Session::open(config).unwrap();
    assert!(session.history_path().is_file());
}

#[test]
fn new_entries_are_appended_after_loaded_ones() {
    let root = tempdir().unwrap();
    let path = root.path().join("python_history");
    fs::write(&path, "import os\nos.getcwd()\nexit()\n").unwrap();

    let mut session = Session::open(config_for(root.path())).unwrap();
    assert_eq!(entries(&session), ["import os", "os.getcwd()", "exit()"]);
    session.add_entry("x = 1").unwrap();
    session.add_entry("print(x)").unwrap();
    session.close().unwrap();

    assert_eq!(
        saved_lines(&path),
        ["import os", "os.getcwd()", "exit()", "x = 1", "print(x)"]
    );
    let reopened = Session::open(config_for(root.path())).unwrap();
    assert_eq!(
        entries(&reopened),
        ["import os", "os.getcwd()", "exit()", "x = 1", "print(x)"]
    );
}

#[test]
fn oversized_history_keeps_the_most_recent_entries() {
    let root = tempdir().unwrap();
    let path = root.path().join("python_history");
    let lines: Vec<String> = (0..6000).map(|i| format!("line {i}")).collect();
    fs::write(&path, lines.join("\n") + "\n").unwrap();

    let session = Session::open(config_for(root.path())).unwrap();
    assert_eq!(session.len(), 5000);
    assert_eq!(session.entries().next().unwrap(), "line 1000");
    session.close().unwrap();

    let saved = saved_lines(&path);
    assert_eq!(saved.len(), 5000);
    assert_eq!(saved, lines[1000..]);
}

#[test]
fn in_memory_history_never_exceeds_the_cap() {
    let root = tempdir().unwrap();
    let mut session = Session::open(config_for(root.path())).unwrap();
    for i in 0..5100 {
        session.add_entry(&format!("cmd {i}")).unwrap();
    }
    assert_eq!(session.len(), 5000);
    assert_eq!(session.entries().last().unwrap(), "cmd 5099");
}

#[test]
fn dropping_the_session_saves_like_close() {
    let root = tempdir().unwrap();
    let path = root.path().join("python_history");
    {
        let mut session = Session::open(config_for(root.path())).unwrap();
        session.add_entry("dropped").unwrap();
    }
    assert_eq!(saved_lines(&path), ["dropped"]);
}

#[test]
fn blocked_data_home_aborts_startup() {
    let root = tempdir().unwrap();
    let blocker = root.path().join("not-a-dir");
    fs::write(&blocker, "").unwrap();

    let err = Session::open(config_for(&blocker.join("data"))).err().unwrap();
    assert!(
        matches!(err, Error::CreateFile { .. } | Error::CreateDir { .. }),
        "unexpected error: {err}"
    );
}
