// src/cli.rs
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};

use crate::{
    config::options::FetchOptions,
    fetcher::LeetCode,
    file,
    progress::{Progress, RecordingProgress},
    runner,
};

/// Collect LeetCode solve counts for every student in a roster CSV.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Roster CSV with ROLL NUM, NAME and LEETCODE USERNAME columns
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file, or directory for the timestamped default name
    #[arg(short, long, default_value = "")]
    pub out: String,

    /// GraphQL endpoint
    #[arg(long, default_value = crate::config::consts::ENDPOINT)]
    pub endpoint: String,

    /// Only print the written path
    #[arg(short, long)]
    pub quiet: bool,
}

/// Prints status lines and notices to stderr as they happen.
struct ConsoleProgress {
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Fetching statistics for {total} student(s)");
    }
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
    fn warn(&mut self, msg: &str) { eprintln!("warning: {msg}"); }
    fn error(&mut self, msg: &str) { eprintln!("error: {msg}"); }
    fn finish(&mut self) {
        eprintln!("Statistics collection completed ({} row(s))", self.total);
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    crate::log::init();
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<()> {
    let opts = FetchOptions { endpoint: args.endpoint.clone(), ..FetchOptions::default() };
    let source = LeetCode::new(&opts).wrap_err("building HTTP client")?;

    let mut console = ConsoleProgress { total: 0 };
    let mut quiet = RecordingProgress::default();
    let progress: &mut dyn Progress = if args.quiet { &mut quiet } else { &mut console };

    let table = runner::run_file(&args.input, &source, &opts, Some(progress))
        .map_err(|e| eyre!("{e}"))?;

    let default_name = file::export_file_name(Local::now());
    let path = file::resolve_out_path(&args.out, &default_name)
        .map_err(|e| eyre!("{e}"))?;
    let written = file::write_results(&path, &table)
        .map_err(|e| eyre!("Export error: {e}"))?;

    println!("{}", written.display());
    Ok(())
}
