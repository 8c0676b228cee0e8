use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn capgains() -> Command {
    Command::cargo_bin("capgains").expect("binary should build")
}

#[test]
fn stdin_single_batch_prints_one_json_line() {
    capgains()
        .write_stdin(
            r#"[{"operation":"buy","unit-cost":10.00,"quantity":100},
                {"operation":"sell","unit-cost":15.00,"quantity":50}]"#,
        )
        .assert()
        .success()
        .stdout("[{\"tax\":\"0.00\"},{\"tax\":\"0.00\"}]\n");
}

#[test]
fn stdin_carried_loss_scenario() {
    capgains()
        .write_stdin(
            r#"[{"operation":"buy","unit-cost":10.00,"quantity":10000},
                {"operation":"sell","unit-cost":8.00,"quantity":2000},
                {"operation":"sell","unit-cost":12.00,"quantity":3000},
                {"operation":"sell","unit-cost":15.00,"quantity":5000}]"#,
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"[{"tax":"0.00"},{"tax":"0.00"},{"tax":"400.00"},{"tax":"5000.00"}]"#,
        ));
}

#[test]
fn stdin_multiple_batches_print_one_line_each() {
    capgains()
        .write_stdin(
            "[{\"operation\":\"buy\",\"unit-cost\":10.00,\"quantity\":100}]\n\
             [{\"operation\":\"buy\",\"unit-cost\":20.00,\"quantity\":50}]\n",
        )
        .assert()
        .success()
        .stdout("[{\"tax\":\"0.00\"}]\n[{\"tax\":\"0.00\"}]\n");
}

#[test]
fn invalid_operations_surface_as_null() {
    capgains()
        .write_stdin(
            r#"[{"operation":"hold","unit-cost":10.00,"quantity":100},
                {"operation":"sell","unit-cost":"20.00","quantity":50},
                {"operation":"buy","unit-cost":15.00,"quantity":50}]"#,
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"[{"tax":null},{"tax":null},{"tax":"0.00"}]"#,
        ));
}

#[test]
fn empty_input_fails_with_nonzero_exit() {
    capgains().write_stdin("").assert().failure();
}

#[test]
fn unparseable_batch_is_dropped_but_run_succeeds() {
    capgains()
        .write_stdin(
            "[{\"operation\":\"buy\",\"unit-cost\":10.00,\"quantity\":100}]\n\
             [broken]\n",
        )
        .assert()
        .success()
        .stdout("[{\"tax\":\"0.00\"}]\n");
}

#[test]
fn reads_operations_from_file_argument() {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(
        file,
        r#"[{{"operation":"buy","unit-cost":10.00,"quantity":100}}]"#
    )
    .expect("failed to write temp file");

    capgains()
        .arg(file.path())
        .assert()
        .success()
        .stdout("[{\"tax\":\"0.00\"}]\n");
}

#[test]
fn missing_file_fails() {
    capgains()
        .arg("does-not-exist.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.json"));
}

#[test]
fn summary_mode_prints_table_without_ansi_when_no_color() {
    capgains()
        .arg("--summary")
        .arg("--no-color")
        .write_stdin(
            r#"[{"operation":"buy","unit-cost":10.00,"quantity":100},
                {"operation":"sell","unit-cost":15.00,"quantity":500}]"#,
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Batch #1"))
        .stdout(predicate::str::contains("buy"))
        .stdout(predicate::str::contains("\u{001b}[").not());
}
