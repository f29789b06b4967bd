//! Integration tests for import, export and cleanup.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_import_reports_skipped_lines() {
    let env = TestEnv::new();
    let file = env.write_file(
        "batch.txt",
        "\
10,Abe,2099-01-01T18:00:00,2,A1
11,Baba,2099-01-01T18:00:00,2,A2
abc,Chiba,2099-01-01T18:00:00,2,A3
12,Doi,2099-01-01T18:00:00,2,A4
",
    );

    env.command()
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Imported 3 reservation(s), skipped 1 line(s)",
        ))
        .stderr(predicate::str::contains("WARN"));

    assert_eq!(env.list_ids(&[]), vec![10, 11, 12]);
    // New ids continue after the imported ones
    assert_eq!(env.add("Endo", "B1"), 13);
}

#[test]
fn test_import_from_stdin() {
    let env = TestEnv::new();
    env.command()
        .args(["import", "-"])
        .write_stdin("5,Abe,2099-01-01T18:00,2,A1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1"));

    assert_eq!(env.list_ids(&[]), vec![5]);
}

#[test]
fn test_import_skips_existing() {
    let env = TestEnv::new();
    env.add("Abe", "A1");

    let file = env.write_file(
        "batch.txt",
        "1,Other,2099-02-01T18:00:00,2,B1\n7,ABE,2099-01-01T18:00:00,4,a1\n",
    );
    env.command()
        .arg("--verbose")
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped 2 line(s)"))
        .stderr(predicate::str::contains("id 1 already exists"));

    assert_eq!(env.list_ids(&[]), vec![1]);
}

#[test]
fn test_import_missing_file_is_io_error() {
    let env = TestEnv::new();
    env.command()
        .arg("import")
        .arg(env.path().join("nope.txt"))
        .assert()
        .code(5);
}

#[test]
fn test_export_to_stdout() {
    let env = TestEnv::new();
    env.add("Abe", "A1");
    env.add("Baba", "A2");

    env.command().arg("export").assert().success().stdout(
        "ID,Name,ReservationTime,PartyCount,Seats\n\
         1,Abe,2099-01-01T18:00:00,2,A1\n\
         2,Baba,2099-01-01T18:00:00,2,A2\n",
    );
}

#[test]
fn test_export_to_file() {
    let env = TestEnv::new();
    env.add("Abe", "A1");
    let out = env.path().join("export.csv");

    env.command()
        .args(["export", "--output"])
        .arg(&out)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.starts_with("ID,Name,ReservationTime,PartyCount,Seats\n"));
    assert!(contents.contains("1,Abe,2099-01-01T18:00:00,2,A1"));
}

#[test]
fn test_cleanup_removes_past_only() {
    let env = TestEnv::new();
    env.import(
        "\
1,Old,2000-01-01T10:00:00,2,A1
2,New,2099-01-01T10:00:00,2,A2
3,Older,1999-12-31T10:00:00,2,A3
",
    );

    env.command()
        .args(["cleanup", "--dry-run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Would remove 2 past reservation(s)"));
    assert_eq!(env.list_ids(&[]), vec![1, 2, 3]);

    env.command()
        .arg("cleanup")
        .assert()
        .success()
        .stderr(predicate::str::contains("Removed 2 past reservation(s)"));
    assert_eq!(env.list_ids(&[]), vec![2]);
}

#[test]
fn test_cleanup_quiet_prints_count() {
    let env = TestEnv::new();
    env.import("1,Old,2000-01-01T10:00:00,2,A1\n");

    env.command()
        .args(["--quiet", "cleanup"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_cleanup_with_nothing_to_remove_leaves_file_alone() {
    let env = TestEnv::new();
    env.command()
        .arg("cleanup")
        .assert()
        .success()
        .stderr(predicate::str::contains("Removed 0 past reservation(s)"));
    assert!(!env.data_file().exists());

    env.add("New", "A1");
    let before = std::fs::metadata(env.data_file()).unwrap().modified().unwrap();
    std::thread::sleep(std::time::Duration::from_millis(20));
    env.command().arg("cleanup").assert().success();
    let after = std::fs::metadata(env.data_file()).unwrap().modified().unwrap();
    assert_eq!(before, after);
}
