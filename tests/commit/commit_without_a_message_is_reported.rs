use crate::common::command::{repository_dir, run_svcs_command};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use rstest::rstest;

#[rstest]
fn commit_without_a_message_is_reported(repository_dir: TempDir) {
    repository_dir.child("1.txt").write_str("one").unwrap();
    run_svcs_command(repository_dir.path(), &["add", "1.txt"])
        .assert()
        .success();

    run_svcs_command(repository_dir.path(), &["commit"])
        .assert()
        .success()
        .stdout("Message was not passed.\n");

    run_svcs_command(repository_dir.path(), &["log"])
        .assert()
        .success()
        .stdout("No commits yet.\n");
}
