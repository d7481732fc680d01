use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from the user's config and log settings.
fn todofmt(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("todofmt");
    cmd.env("HOME", home.path())
        .env_remove("RUST_LOG")
        .env_remove("TODOFMT_CONFIG");
    cmd
}

#[test]
fn formats_stdin() {
    let home = TempDir::new().unwrap();
    todofmt(&home)
        .args(["--today", "2022-01-01"])
        .write_stdin("due:tomorrow call dentist\n")
        .assert()
        .success()
        .stdout("# Inbox\n\n  2022-01-01 due:2022-01-02 call dentist\n");
}

#[test]
fn formats_file_argument() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("todo.txt");
    std::fs::write(&path, "# Inbox\n\nx 2022-01-01 2021-12-01 buy milk\n").unwrap();

    todofmt(&home)
        .arg("-f")
        .arg(&path)
        .args(["--today", "2022-01-02"])
        .assert()
        .success()
        .stdout("# Logged\n\nx 2022-01-01 2021-12-01 buy milk\n");

    // The file itself is left alone.
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "# Inbox\n\nx 2022-01-01 2021-12-01 buy milk\n"
    );
}

#[test]
fn reads_file_from_config() {
    let home = TempDir::new().unwrap();
    let todo = home.path().join("todo.txt");
    std::fs::write(&todo, "  2021-12-01 stays\n").unwrap();
    let config = home.path().join("config.yaml");
    std::fs::write(
        &config,
        format!("general:\n  file: {}\n  color: never\n", todo.display()),
    )
    .unwrap();

    todofmt(&home)
        .arg("--config")
        .arg(&config)
        .args(["--today", "2022-01-01"])
        .assert()
        .success()
        .stdout("# Inbox\n\n  2021-12-01 stays\n");
}

#[test]
fn parse_failure_echoes_input() {
    let home = TempDir::new().unwrap();
    let input = "# Inbox +oops\n  2021-12-01 keep me\n";

    todofmt(&home)
        .write_stdin(input)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("1:9").and(predicate::str::contains("keep me")));
}

#[test]
fn prints_grammar() {
    let home = TempDir::new().unwrap();
    todofmt(&home)
        .arg("--ebnf")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Document = ").and(predicate::str::contains("Tag = /")));
}

#[test]
fn verbose_dumps_json_to_stderr() {
    let home = TempDir::new().unwrap();
    todofmt(&home)
        .args(["-v", "--today", "2022-01-01"])
        .write_stdin("  2021-12-01 read book\n")
        .assert()
        .success()
        .stdout("# Inbox\n\n  2021-12-01 read book\n")
        .stderr(predicate::str::contains("\"creationDate\": \"2021-12-01\""));
}

#[test]
fn missing_file_is_an_error() {
    let home = TempDir::new().unwrap();
    todofmt(&home)
        .arg("-f")
        .arg(home.path().join("nope.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nope.txt"));
}

#[test]
fn rejects_bad_today() {
    let home = TempDir::new().unwrap();
    todofmt(&home)
        .args(["--today", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}
