//! Remote *spec* for per-user solve counts.
//!
//! Purpose:
//! - Shape the GraphQL request for `matchedUser(username)` and its
//!   `submitStatsGlobal.acSubmissionNum` breakdown.
//! - Read the response body into a `StatTally`.
//!
//! Response shape (only the parts we read):
//! ```text
//! { "data": { "matchedUser": { "submitStats": { "acSubmissionNum": [
//!     { "difficulty": "All",  "count": 9, "submissions": 14 },
//!     { "difficulty": "Easy", "count": 5, "submissions": 7 }, ...
//! ] } } } }
//! ```
//! `matchedUser: null` (or no `data` at all) means the provider doesn't know
//! the user. The `All` entry is ignored; the total is always recomputed.

use serde::{Deserialize, Serialize};

use crate::data::StatTally;

pub const QUERY: &str = "\
query userSolveCounts($username: String!) {
  matchedUser(username: $username) {
    username
    submitStats: submitStatsGlobal {
      acSubmissionNum {
        difficulty
        count
        submissions
      }
    }
  }
}";

#[derive(Debug, Serialize)]
pub struct Request<'a> {
    pub query: &'static str,
    pub variables: Variables<'a>,
}

#[derive(Debug, Serialize)]
pub struct Variables<'a> {
    pub username: &'a str,
}

pub fn request(username: &str) -> Request<'_> {
    Request { query: QUERY, variables: Variables { username } }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Data>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Data {
    #[serde(default)]
    matched_user: Option<MatchedUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchedUser {
    submit_stats: SubmitStats,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitStats {
    ac_submission_num: Vec<DifficultyCount>,
}

#[derive(Debug, Deserialize)]
struct DifficultyCount {
    difficulty: String,
    count: u32,
}

/// `Ok(None)` when there is no matched user; `Err` when the body doesn't
/// have the expected shape.
pub fn parse_response(body: &str) -> Result<Option<StatTally>, serde_json::Error> {
    let env: Envelope = serde_json::from_str(body)?;
    let Some(user) = env.data.and_then(|d| d.matched_user) else {
        return Ok(None);
    };

    let counts = &user.submit_stats.ac_submission_num;
    let tier = |label: &str| {
        counts
            .iter()
            .find(|c| c.difficulty == label)
            .map(|c| c.count)
            .unwrap_or(0)
    };

    Ok(Some(StatTally::new(tier("Easy"), tier("Medium"), tier("Hard"))))
}
