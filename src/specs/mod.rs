// src/specs/mod.rs
//! # Remote "specs"
//!
//! Each spec encodes *what we ask the remote for* and *where the answer lives
//! in the response*. Specs are pure: they build request bodies and parse
//! response bodies, nothing else.
//!
//! ## What does **not** live here
//! - Transport (`core::net`), pacing and progress (`runner`).
//! - What to do when a lookup fails; specs only report "no user" vs "bad shape".
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → runner::run_batch → fetcher::fetch → LeetCode::lookup
//!                                                  ↘ specs::stats::{request, parse_response}
//! ```
//!
//! Specs are testable offline against captured response bodies.
pub mod stats;
