// tests/session_flow.rs
//
// Idle → FileLoaded → Running → Completed | Failed
mod common;

use chrono::{Local, TimeZone};
use common::{FixtureSource, BODY_5_3_1};
use lc_stats::{
    config::options::FetchOptions,
    runner::{self, RunSummary},
    session::{Notice, Phase, RunEvent, Session, SessionProgress},
};

const ROSTER: &[u8] = b"ROLL NUM,NAME,LEETCODE USERNAME\n1,Ada,ada_l\n2,Bo,\n";

#[test]
fn fresh_session_cannot_start_or_export() {
    let mut s = Session::new();
    assert_eq!(s.phase(), &Phase::Idle);
    assert!(!s.can_start());
    assert!(!s.can_export());
    assert!(s.start().is_none());
}

#[test]
fn bad_upload_fails_and_blocks_start() {
    let mut s = Session::new();
    assert!(s.load_bytes("bad.csv", b"ROLL NUM,NAME\n1,Ada\n").is_err());
    match s.phase() {
        Phase::Failed(msg) => assert!(msg.starts_with("Error processing file:")),
        other => panic!("expected Failed, got {other:?}"),
    }
    assert!(!s.can_start());
    assert!(matches!(s.notices(), [Notice::Error(_)]));
}

#[test]
fn full_run_through_session_progress() {
    let mut s = Session::new();
    s.load_bytes("students.csv", ROSTER).unwrap();
    assert_eq!(s.phase(), &Phase::FileLoaded);
    assert!(s.can_start());

    let roster = s.start().unwrap();
    assert!(s.is_running());
    assert!(!s.can_start());

    let src = FixtureSource::new().with_body("ada_l", BODY_5_3_1);
    let opts = FetchOptions::unpaced("http://127.0.0.1:9/graphql");
    let summary = {
        let mut p = SessionProgress::new(&mut s);
        runner::run_batch(&roster, &src, &opts, Some(&mut p))
    };
    assert_eq!(s.progress(), 1.0);
    assert_eq!(s.warning_count(), 1);

    let at = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
    s.apply_at(RunEvent::Finished(summary), at);

    assert_eq!(s.phase(), &Phase::Completed);
    assert!(s.can_export());
    assert_eq!(s.results().map(|t| t.len()), Some(2));
    assert_eq!(s.export_name(), Some("leetcode_stats_20240309_1405.csv"));
    // re-run allowed from Completed
    assert!(s.can_start());
}

#[test]
fn empty_results_fail_with_no_data() {
    let mut s = Session::new();
    s.load_bytes("empty.csv", b"ROLL NUM,NAME,LEETCODE USERNAME\n").unwrap();
    s.start().unwrap();
    s.apply(RunEvent::Finished(RunSummary::default()));

    assert_eq!(s.phase(), &Phase::Failed("No data was collected!".into()));
    assert!(!s.can_export());
}

#[test]
fn crash_clears_results() {
    let mut s = Session::new();
    s.load_bytes("students.csv", ROSTER).unwrap();
    s.start().unwrap();
    s.apply(RunEvent::Warning("w".into()));
    s.apply(RunEvent::Crashed("worker stopped unexpectedly".into()));

    assert!(matches!(s.phase(), Phase::Failed(m) if m.contains("worker stopped")));
    assert!(s.results().is_none());
    assert!(!s.can_export());
}

#[test]
fn events_outside_a_run_are_ignored() {
    let mut s = Session::new();
    s.apply(RunEvent::Warning("stray".into()));
    s.apply(RunEvent::Advance { done: 1, total: 2 });
    assert!(s.notices().is_empty());
    assert_eq!(s.progress(), 0.0);
    assert_eq!(s.phase(), &Phase::Idle);
}

#[test]
fn upload_ignored_while_running() {
    let mut s = Session::new();
    s.load_bytes("students.csv", ROSTER).unwrap();
    s.start().unwrap();
    s.load_bytes("other.csv", b"garbage").unwrap();
    assert!(s.is_running());
    assert_eq!(s.source_name(), Some("students.csv"));
}
