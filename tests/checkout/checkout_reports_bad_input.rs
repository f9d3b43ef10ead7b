use crate::common::command::{committed_repository_dir, run_svcs_command};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use rstest::rstest;

#[rstest]
#[case::unknown_id(&["checkout", "0123456789abcdef0123456789abcdef01234567"], "Commit does not exist.\n")]
#[case::malformed_id(&["checkout", "../../etc"], "Commit does not exist.\n")]
#[case::missing_id(&["checkout"], "Commit id was not passed.\n")]
fn checkout_reports_bad_input(
    committed_repository_dir: TempDir,
    #[case] args: &[&str],
    #[case] expected: &str,
) {
    committed_repository_dir
        .child("1.txt")
        .write_str("edited")
        .unwrap();

    run_svcs_command(committed_repository_dir.path(), args)
        .assert()
        .success()
        .stdout(expected.to_string());

    committed_repository_dir.child("1.txt").assert("edited");
}
