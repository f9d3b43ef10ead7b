use crate::common::command::{repository_dir, run_svcs_command, svcs_commit};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use rstest::rstest;
use svcs::artifacts::objects::commit_id::CommitId;

#[rstest]
fn retry_after_a_failed_commit(repository_dir: TempDir) {
    repository_dir.child("a.txt").write_str("alpha").unwrap();
    repository_dir.child("b.txt").write_str("beta").unwrap();
    for path in ["a.txt", "b.txt"] {
        run_svcs_command(repository_dir.path(), &["add", path])
            .assert()
            .success();
    }
    std::fs::remove_file(repository_dir.child("b.txt").path()).unwrap();

    svcs_commit(repository_dir.path(), "init").assert().failure();
    run_svcs_command(repository_dir.path(), &["log"])
        .assert()
        .success()
        .stdout("No commits yet.\n");

    repository_dir.child("b.txt").write_str("beta").unwrap();
    svcs_commit(repository_dir.path(), "init")
        .assert()
        .success()
        .stdout("Changes are committed.\n");

    run_svcs_command(repository_dir.path(), &["log"])
        .assert()
        .success()
        .stdout(format!(
            "commit {}\nAuthor: \ninit\n\n",
            CommitId::from_message("init")
        ));
}
