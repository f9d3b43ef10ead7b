use crate::common::command::{repository_dir, run_svcs_command};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use rstest::rstest;

#[rstest]
#[case("missing.txt")]
#[case("a")]
#[case("vcs/log.txt")]
fn adding_a_missing_file_is_reported(repository_dir: TempDir, #[case] path: &str) {
    repository_dir.child("a/nested.txt").write_str("nested").unwrap();

    run_svcs_command(repository_dir.path(), &["add", path])
        .assert()
        .success()
        .stdout(format!("Can't find '{path}'.\n"));

    run_svcs_command(repository_dir.path(), &["add"])
        .assert()
        .success()
        .stdout("Add a file to the index.\n");
}
