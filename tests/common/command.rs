use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Working root with `1.txt` and `a/2.txt` tracked and committed as "Initial commit"
#[fixture]
pub fn committed_repository_dir(repository_dir: TempDir) -> TempDir {
    let file1 = FileSpec::new(repository_dir.path().join("1.txt"), "one".to_string());
    write_file(file1);

    let file2 = FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    );
    write_file(file2);

    for path in ["1.txt", "a/2.txt"] {
        run_svcs_command(repository_dir.path(), &["add", path])
            .assert()
            .success();
    }

    svcs_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success()
        .stdout("Changes are committed.\n");

    repository_dir
}

pub fn run_svcs_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("svcs").expect("Failed to find svcs binary");
    cmd.env_remove("SVCS_WORK_TREE");
    cmd.env("RUST_LOG", "off");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn svcs_commit(dir: &Path, message: &str) -> Command {
    run_svcs_command(dir, &["commit", message])
}

pub fn svcs_config(dir: &Path, name: &str) -> Command {
    run_svcs_command(dir, &["config", name])
}

/// Stdout of a successful `svcs` invocation
pub fn svcs_stdout(dir: &Path, args: &[&str]) -> String {
    let output = run_svcs_command(dir, args)
        .output()
        .expect("Failed to run svcs");
    assert!(output.status.success(), "svcs {:?} failed: {:?}", args, output);

    String::from_utf8(output.stdout).expect("svcs printed invalid UTF-8")
}
