use crate::common::command::{repository_dir, run_svcs_command, svcs_config};
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::name::en::Name;
use rstest::rstest;

#[rstest]
fn config_without_a_name_asks_who_you_are(repository_dir: TempDir) {
    run_svcs_command(repository_dir.path(), &["config"])
        .assert()
        .success()
        .stdout("Please, tell me who you are.\n");
}

#[rstest]
fn config_gets_and_sets_the_username(repository_dir: TempDir) {
    let name = Name().fake::<String>();

    svcs_config(repository_dir.path(), &name)
        .assert()
        .success()
        .stdout(format!("The username is {name}.\n"));

    run_svcs_command(repository_dir.path(), &["config"])
        .assert()
        .success()
        .stdout(format!("The username is {name}.\n"));
}
