use crate::common::command::{committed_repository_dir, svcs_commit};
use crate::common::file::read_file;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use rstest::rstest;
use svcs::artifacts::objects::commit_id::CommitId;

#[rstest]
fn one_edited_file_resnapshots_every_tracked_file(committed_repository_dir: TempDir) {
    committed_repository_dir
        .child("a/2.txt")
        .write_str("two, edited")
        .unwrap();

    svcs_commit(committed_repository_dir.path(), "Edit 2.txt")
        .assert()
        .success()
        .stdout("Changes are committed.\n");

    let snapshot = committed_repository_dir
        .path()
        .join("vcs/commits")
        .join(CommitId::from_message("Edit 2.txt").as_ref());
    pretty_assertions::assert_eq!(read_file(&snapshot.join("1.txt")), "one");
    pretty_assertions::assert_eq!(read_file(&snapshot.join("2.txt")), "two, edited");
}
