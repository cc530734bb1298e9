// src/config/consts.rs

// Net config
pub const ENDPOINT: &str = "https://leetcode.com/graphql";
pub const REFERER: &str = "https://leetcode.com";
pub const USER_AGENT: &str = concat!("lc_stats/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Pacing between rows. Not adaptive.
pub const REQUEST_PAUSE_MS: u64 = 500;

// Debug log
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Roster columns (exact labels)
pub const COL_ROLL: &str = "ROLL NUM";
pub const COL_NAME: &str = "NAME";
pub const COL_USERNAME: &str = "LEETCODE USERNAME";
pub const REQUIRED_COLUMNS: [&str; 3] = [COL_ROLL, COL_NAME, COL_USERNAME];

// Export
pub const OUTPUT_HEADERS: [&str; 7] = [
    COL_ROLL,
    COL_NAME,
    COL_USERNAME,
    "EASY SOLVED",
    "MEDIUM SOLVED",
    "HARD SOLVED",
    "TOTAL SOLVED",
];
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_PREFIX: &str = "leetcode_stats_";
pub const EXPORT_STAMP_FMT: &str = "%Y%m%d_%H%M";
pub const EXPORT_EXT: &str = "csv";

// Cell values that count as "no username"
pub const MISSING_MARKERS: &[&str] = &[
    "nan", "NaN", "-nan", "-NaN", "NA", "N/A", "n/a", "<NA>", "#N/A",
    "null", "NULL", "None",
];
