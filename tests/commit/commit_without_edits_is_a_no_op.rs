use crate::common::command::{committed_repository_dir, repository_dir, svcs_commit};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn commit_without_edits_is_a_no_op(committed_repository_dir: TempDir) {
    svcs_commit(committed_repository_dir.path(), "Nothing changed")
        .assert()
        .success()
        .stdout("Nothing to commit.\n");

    let snapshots = std::fs::read_dir(committed_repository_dir.path().join("vcs/commits"))
        .unwrap()
        .count();
    pretty_assertions::assert_eq!(snapshots, 1);
}

#[rstest]
fn commit_with_nothing_tracked_is_a_no_op(repository_dir: TempDir) {
    svcs_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success()
        .stdout("Nothing to commit.\n");
}
