// src/session.rs
//
// Operator-facing state of one collector window, passed explicitly instead of
// living in globals:
//
//   Idle → FileLoaded → (Fetch) Running → Completed | Failed
//
// The batch itself runs elsewhere (worker thread, CLI loop); it reports back
// through `RunEvent`s which `Session::apply` folds in.

use std::path::Path;

use chrono::{DateTime, Local};

use crate::{
    data::ResultTable,
    file,
    progress::{fraction, Progress},
    roster::{self, Roster, RosterError},
    runner::RunSummary,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FileLoaded,
    Running,
    Completed,
    Failed(String),
}

/// One message from a running batch.
#[derive(Clone, Debug, PartialEq)]
pub enum RunEvent {
    Begin { total: usize },
    Status(String),
    Warning(String),
    Error(String),
    Advance { done: usize, total: usize },
    Finished(RunSummary),
    /// The worker went away without finishing.
    Crashed(String),
}

/// Inline operator message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Warning(String),
    Error(String),
}

#[derive(Clone, Debug)]
pub struct Session {
    phase: Phase,
    source_name: Option<String>,
    roster: Option<Roster>,
    status: String,
    progress: f32,
    notices: Vec<Notice>,
    results: Option<ResultTable>,
    export_name: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            source_name: None,
            roster: None,
            status: s!("Idle"),
            progress: 0.0,
            notices: Vec::new(),
            results: None,
            export_name: None,
        }
    }
}

impl Session {
    pub fn new() -> Self { Self::default() }

    /* ---------- read side ---------- */

    #[inline] pub fn phase(&self) -> &Phase { &self.phase }
    #[inline] pub fn status(&self) -> &str { &self.status }
    #[inline] pub fn progress(&self) -> f32 { self.progress }
    #[inline] pub fn notices(&self) -> &[Notice] { &self.notices }
    #[inline] pub fn results(&self) -> Option<&ResultTable> { self.results.as_ref() }
    #[inline] pub fn roster(&self) -> Option<&Roster> { self.roster.as_ref() }
    #[inline] pub fn source_name(&self) -> Option<&str> { self.source_name.as_deref() }

    /// Suggested download name, fixed when the run completed.
    #[inline] pub fn export_name(&self) -> Option<&str> { self.export_name.as_deref() }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Trigger is enabled once a roster is loaded and nothing is running.
    pub fn can_start(&self) -> bool {
        self.roster.is_some() && !self.is_running()
    }

    pub fn can_export(&self) -> bool {
        self.phase == Phase::Completed && self.results.as_ref().is_some_and(|t| !t.is_empty())
    }

    pub fn warning_count(&self) -> usize {
        self.notices.iter().filter(|n| matches!(n, Notice::Warning(_))).count()
    }

    /* ---------- transitions ---------- */

    pub fn load_path(&mut self, path: &Path) -> Result<(), RosterError> {
        let name = path.display().to_string();
        let res = roster::read_path(path);
        self.accept_roster(name, res)
    }

    pub fn load_bytes(&mut self, name: &str, bytes: &[u8]) -> Result<(), RosterError> {
        let res = roster::read_bytes(bytes);
        self.accept_roster(s!(name), res)
    }

    fn accept_roster(&mut self, name: String, res: Result<Roster, RosterError>) -> Result<(), RosterError> {
        if self.is_running() {
            logd!("Session: load ignored while running");
            return Ok(());
        }
        self.reset_run();
        match res {
            Ok(roster) => {
                logf!("Session: FileLoaded {} (rows={})", name, roster.len());
                self.status = format!("File uploaded successfully! {} student(s)", roster.len());
                self.source_name = Some(name);
                self.roster = Some(roster);
                self.phase = Phase::FileLoaded;
                Ok(())
            }
            Err(e) => {
                loge!("Session: load failed {}: {}", name, e);
                let msg = format!("Error processing file: {e}");
                self.source_name = None;
                self.roster = None;
                self.notices.push(Notice::Error(msg.clone()));
                self.status = msg.clone();
                self.phase = Phase::Failed(msg);
                Err(e)
            }
        }
    }

    /// Enter `Running` and hand out the roster to process.
    pub fn start(&mut self) -> Option<Roster> {
        if !self.can_start() {
            return None;
        }
        self.reset_run();
        self.phase = Phase::Running;
        self.status = s!("Starting…");
        self.roster.clone()
    }

    pub fn apply(&mut self, ev: RunEvent) {
        self.apply_at(ev, Local::now());
    }

    /// `apply` with an explicit clock, for the export stamp.
    pub fn apply_at(&mut self, ev: RunEvent, now: DateTime<Local>) {
        if !self.is_running() {
            logd!("Session: event after run ended: {:?}", ev);
            return;
        }
        match ev {
            RunEvent::Begin { total } => {
                self.progress = 0.0;
                self.status = format!("Fetching statistics for {total} student(s)…");
            }
            RunEvent::Status(msg) => self.status = msg,
            RunEvent::Warning(msg) => self.notices.push(Notice::Warning(msg)),
            RunEvent::Error(msg) => self.notices.push(Notice::Error(msg)),
            RunEvent::Advance { done, total } => self.progress = fraction(done, total),
            RunEvent::Finished(summary) => {
                self.progress = 1.0;
                if summary.table.is_empty() {
                    let msg = s!("No data was collected!");
                    self.notices.push(Notice::Error(msg.clone()));
                    self.status = msg.clone();
                    self.phase = Phase::Failed(msg);
                } else {
                    self.status = format!(
                        "Statistics collection completed! {} row(s), {} warning(s)",
                        summary.table.len(), summary.warnings
                    );
                    self.export_name = Some(file::export_file_name(now));
                    self.results = Some(summary.table);
                    self.phase = Phase::Completed;
                }
            }
            RunEvent::Crashed(reason) => {
                let msg = format!("Error processing file: {reason}");
                self.notices.push(Notice::Error(msg.clone()));
                self.status = msg.clone();
                self.results = None;
                self.phase = Phase::Failed(msg);
            }
        }
    }

    fn reset_run(&mut self) {
        self.progress = 0.0;
        self.notices.clear();
        self.results = None;
        self.export_name = None;
    }
}

/// Progress sink that feeds a `Session` directly (same thread).
pub struct SessionProgress<'a> {
    session: &'a mut Session,
}

impl<'a> SessionProgress<'a> {
    pub fn new(session: &'a mut Session) -> Self { Self { session } }
}

impl Progress for SessionProgress<'_> {
    fn begin(&mut self, total: usize) { self.session.apply(RunEvent::Begin { total }); }
    fn log(&mut self, msg: &str) { self.session.apply(RunEvent::Status(s!(msg))); }
    fn warn(&mut self, msg: &str) { self.session.apply(RunEvent::Warning(s!(msg))); }
    fn error(&mut self, msg: &str) { self.session.apply(RunEvent::Error(s!(msg))); }
    fn advance(&mut self, done: usize, total: usize) {
        self.session.apply(RunEvent::Advance { done, total });
    }
}
