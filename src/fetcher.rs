// src/fetcher.rs
//
// Stats Fetcher: one username in, one lookup outcome out. Stateless apart
// from the reusable HTTP client; exactly one remote call per lookup, none for
// blank usernames.

use reqwest::blocking::Client;

use crate::config::options::FetchOptions;
use crate::core::net::{self, NetError};
use crate::core::sanitize::is_missing;
use crate::data::StatTally;
use crate::specs::stats;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error(transparent)]
    Net(#[from] NetError),

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Outcome of one lookup. Only `Found` carries numbers; callers that just
/// want the tally use `tally()`, which folds the rest into `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lookup {
    Found(StatTally),
    /// Blank or missing username; nothing was sent.
    Skipped,
    /// The provider has no such user.
    NotFound,
    /// Transport failure, non-success status or unreadable payload.
    Failed(String),
}

impl Lookup {
    pub fn tally(&self) -> Option<StatTally> {
        match self {
            Lookup::Found(t) => Some(*t),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

/// Anything that can answer "how many problems has this user solved".
pub trait StatsSource {
    /// `username` is already trimmed and non-blank.
    fn lookup(&self, username: &str) -> Lookup;
}

/// Blank/missing usernames short-circuit to `Skipped` without touching `source`.
pub fn fetch(source: &dyn StatsSource, username: Option<&str>) -> Lookup {
    match username {
        Some(u) if !is_missing(u) => source.lookup(u.trim()),
        _ => Lookup::Skipped,
    }
}

/// The public LeetCode GraphQL endpoint.
pub struct LeetCode {
    client: Client,
    endpoint: String,
}

impl LeetCode {
    pub fn new(opts: &FetchOptions) -> Result<Self, FetchError> {
        Ok(Self {
            client: net::client(opts.timeout)?,
            endpoint: opts.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One POST, parsed. `Ok(None)` = no matched user.
    pub fn query(&self, username: &str) -> Result<Option<StatTally>, FetchError> {
        let body = net::post_json(&self.client, &self.endpoint, &stats::request(username))?;
        Ok(stats::parse_response(&body)?)
    }
}

impl StatsSource for LeetCode {
    fn lookup(&self, username: &str) -> Lookup {
        match self.query(username) {
            Ok(Some(t)) => {
                logd!("Fetch: {username} → easy={} medium={} hard={}", t.easy(), t.medium(), t.hard());
                Lookup::Found(t)
            }
            Ok(None) => {
                logd!("Fetch: {username} → no matched user");
                Lookup::NotFound
            }
            Err(e) => {
                loge!("Fetch: {username} → {e}");
                Lookup::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counting {
        calls: Cell<usize>,
    }

    impl StatsSource for Counting {
        fn lookup(&self, username: &str) -> Lookup {
            self.calls.set(self.calls.get() + 1);
            assert_eq!(username, username.trim());
            Lookup::NotFound
        }
    }

    #[test]
    fn blank_and_missing_never_call_source() {
        let src = Counting { calls: Cell::new(0) };
        assert_eq!(fetch(&src, None), Lookup::Skipped);
        assert_eq!(fetch(&src, Some("")), Lookup::Skipped);
        assert_eq!(fetch(&src, Some("   ")), Lookup::Skipped);
        assert_eq!(fetch(&src, Some("NaN")), Lookup::Skipped);
        assert_eq!(src.calls.get(), 0);
    }

    #[test]
    fn present_username_calls_once_trimmed() {
        let src = Counting { calls: Cell::new(0) };
        assert_eq!(fetch(&src, Some(" ada ")), Lookup::NotFound);
        assert_eq!(src.calls.get(), 1);
    }

    #[test]
    fn tally_folds_non_found() {
        assert_eq!(Lookup::Failed(s!("x")).tally(), None);
        assert_eq!(Lookup::NotFound.tally(), None);
        assert_eq!(Lookup::Skipped.tally(), None);
        let t = StatTally::new(1, 2, 3);
        assert_eq!(Lookup::Found(t).tally(), Some(t));
    }
}
