use crate::common::command::{repository_dir, run_svcs_command};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use rstest::rstest;

#[rstest]
fn tracking_a_file_twice_keeps_one_entry(repository_dir: TempDir) {
    repository_dir.child("notes.txt").write_str("notes").unwrap();

    for _ in 0..2 {
        run_svcs_command(repository_dir.path(), &["add", "notes.txt"])
            .assert()
            .success()
            .stdout("The file 'notes.txt' is tracked.\n");
    }

    repository_dir
        .child("vcs/index.txt")
        .assert("Tracked files:\nnotes.txt\n");
}
