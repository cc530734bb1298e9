// tests/roster_input.rs
//
// Roster CSV reading: required columns, pass-through, missing usernames.
use std::fs;

use lc_stats::roster::{self, RosterError};

#[test]
fn extra_columns_ignored_and_order_kept() {
    let csv = "\
S.NO,ROLL NUM,NAME,SECTION,LEETCODE USERNAME
1,21CS001,Ada Lovelace,A,ada_l
2,21CS002,\"Hopper, Grace\",B,
3,21CS003,Alan Turing,A,NaN
";
    let r = roster::read_bytes(csv.as_bytes()).unwrap();
    assert_eq!(r.len(), 3);

    let names: Vec<&str> = r.records.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Ada Lovelace", "Hopper, Grace", "Alan Turing"]);

    assert_eq!(r.records[0].roll_num, "21CS001");
    assert_eq!(r.records[0].username.as_deref(), Some("ada_l"));
    assert_eq!(r.records[1].username, None);
    assert_eq!(r.records[2].username, None);
    assert_eq!(r.with_username(), 1);
}

#[test]
fn missing_username_column_is_reported_by_name() {
    let csv = "ROLL NUM,NAME\n1,Ada\n";
    match roster::read_bytes(csv.as_bytes()) {
        Err(RosterError::MissingColumns(cols)) => assert_eq!(cols, ["LEETCODE USERNAME"]),
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}

#[test]
fn header_only_file_is_an_empty_roster() {
    let r = roster::read_bytes(b"ROLL NUM,NAME,LEETCODE USERNAME\n").unwrap();
    assert!(r.is_empty());
}

#[test]
fn roll_numbers_pass_through_verbatim() {
    let csv = "ROLL NUM,NAME,LEETCODE USERNAME\n007,Bond,jb\n 12 ,Moneypenny,mp\n";
    let r = roster::read_bytes(csv.as_bytes()).unwrap();
    assert_eq!(r.records[0].roll_num, "007");
    assert_eq!(r.records[1].roll_num, " 12 ");
}

#[test]
fn unreadable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.csv");
    assert!(matches!(roster::read_path(&missing), Err(RosterError::Io { .. })));
}

#[test]
fn reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("students.csv");
    fs::write(&p, "ROLL NUM,NAME,LEETCODE USERNAME\r\n1,Ada,ada_l\r\n").unwrap();
    let r = roster::read_path(&p).unwrap();
    assert_eq!(r.records[0].username.as_deref(), Some("ada_l"));
}
