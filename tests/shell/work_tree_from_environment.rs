use crate::common::command::{repository_dir, run_svcs_command};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use rstest::rstest;

#[rstest]
fn work_tree_from_environment(repository_dir: TempDir) {
    let elsewhere = TempDir::new().unwrap();
    repository_dir.child("1.txt").write_str("one").unwrap();

    run_svcs_command(elsewhere.path(), &["add", "1.txt"])
        .env("SVCS_WORK_TREE", repository_dir.path())
        .assert()
        .success()
        .stdout("The file '1.txt' is tracked.\n");

    repository_dir
        .child("vcs/index.txt")
        .assert("Tracked files:\n1.txt\n");
    elsewhere.child("vcs").assert(predicates::path::missing());
}
