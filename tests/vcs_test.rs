mod common;

use tempfile::TempDir;
use yginit::error::Error;
use yginit::vcs::{read_commit, CommitIdentity};

#[test]
fn test_read_commit() {
    let ws = common::workspace_without_git();
    let sha = common::commit_all(&ws.lib_root());

    let commit = read_commit(ws.lib_root()).unwrap();
    assert_eq!(commit.as_str(), sha);
    assert_eq!(commit.to_string().len(), 40);
}

#[test]
fn test_not_a_repository() {
    let temp_dir = TempDir::new().unwrap();
    match read_commit(temp_dir.path()) {
        Err(Error::VcsUnavailable { root, .. }) => {
            assert_eq!(root, temp_dir.path().display().to_string())
        }
        other => panic!("Expected VcsUnavailable, got {other:?}"),
    }
}

#[test]
fn test_subdirectory_of_repository_is_not_searched_upwards() {
    let ws = common::workspace();
    assert!(matches!(
        read_commit(ws.lib_root().join("init")),
        Err(Error::VcsUnavailable { .. })
    ));
}

#[test]
fn test_unborn_head() {
    let temp_dir = TempDir::new().unwrap();
    git2::Repository::init(temp_dir.path()).unwrap();
    assert!(matches!(read_commit(temp_dir.path()), Err(Error::VcsUnavailable { .. })));
}

#[test]
fn test_commit_identity_display() {
    assert_eq!(CommitIdentity::new("abc123").to_string(), "abc123");
}
