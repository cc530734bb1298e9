// tests/common/mod.rs
//
// Offline stand-ins for the remote.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use lc_stats::data::StatTally;
use lc_stats::fetcher::{Lookup, StatsSource};
use lc_stats::specs::stats::parse_response;

/// Answers from a fixed table and records every username it was asked for.
#[derive(Default)]
pub struct FixtureSource {
    answers: HashMap<String, Lookup>,
    pub calls: RefCell<Vec<String>>,
}

impl FixtureSource {
    pub fn new() -> Self { Self::default() }

    pub fn with(mut self, username: &str, lookup: Lookup) -> Self {
        self.answers.insert(username.to_string(), lookup);
        self
    }

    /// Answer `username` by parsing a captured response body.
    pub fn with_body(self, username: &str, body: &str) -> Self {
        let lookup = match parse_response(body) {
            Ok(Some(t)) => Lookup::Found(t),
            Ok(None) => Lookup::NotFound,
            Err(e) => Lookup::Failed(e.to_string()),
        };
        self.with(username, lookup)
    }

    pub fn call_count(&self) -> usize { self.calls.borrow().len() }
}

impl StatsSource for FixtureSource {
    fn lookup(&self, username: &str) -> Lookup {
        self.calls.borrow_mut().push(username.to_string());
        self.answers.get(username).cloned().unwrap_or(Lookup::NotFound)
    }
}

pub const BODY_5_3_1: &str = r#"{"data":{"matchedUser":{"username":"ada_l","submitStats":{"acSubmissionNum":[
    {"difficulty":"All","count":9,"submissions":20},
    {"difficulty":"Easy","count":5,"submissions":8},
    {"difficulty":"Medium","count":3,"submissions":9},
    {"difficulty":"Hard","count":1,"submissions":3}
]}}}}"#;

pub const BODY_NO_HARD: &str = r#"{"data":{"matchedUser":{"username":"bo","submitStats":{"acSubmissionNum":[
    {"difficulty":"Easy","count":12,"submissions":20},
    {"difficulty":"Medium","count":4,"submissions":9}
]}}}}"#;

pub const BODY_NO_USER: &str = r#"{"data":{"matchedUser":null}}"#;

pub fn tally(e: u32, m: u32, h: u32) -> StatTally { StatTally::new(e, m, h) }
